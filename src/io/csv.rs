use std::io::{self, Write};
use std::path::Path;

use crate::physics::aerodynamics::ForceProfilePoint;
use crate::sim::Trajectory;

/// Write the sampled ground roll as CSV.
///
/// Columns: time, velocity, distance
pub fn write_trajectory<W: Write>(writer: &mut W, trajectory: &Trajectory) -> io::Result<()> {
    writeln!(writer, "time,velocity,distance")?;

    for p in trajectory {
        writeln!(
            writer,
            "{:.4},{:.4},{:.4}",
            p.time, p.state.velocity, p.state.distance,
        )?;
    }

    Ok(())
}

/// Write the force breakdown along a roll as CSV.
///
/// Columns: time, velocity, distance, lift, drag, rolling_resistance,
///          thrust, net_force
pub fn write_force_profile<W: Write>(
    writer: &mut W,
    profile: &[ForceProfilePoint],
) -> io::Result<()> {
    writeln!(
        writer,
        "time,velocity,distance,lift,drag,rolling_resistance,thrust,net_force"
    )?;

    for p in profile {
        writeln!(
            writer,
            "{:.4},{:.4},{:.4},{:.1},{:.1},{:.1},{:.1},{:.1}",
            p.time,
            p.velocity,
            p.distance,
            p.forces.lift,
            p.forces.drag,
            p.forces.rolling_resistance,
            p.thrust,
            p.forces.net_force,
        )?;
    }

    Ok(())
}

pub fn write_trajectory_file<P: AsRef<Path>>(path: P, trajectory: &Trajectory) -> io::Result<()> {
    let mut file = std::fs::File::create(path)?;
    write_trajectory(&mut file, trajectory)
}

pub fn write_force_profile_file<P: AsRef<Path>>(
    path: P,
    profile: &[ForceProfilePoint],
) -> io::Result<()> {
    let mut file = std::fs::File::create(path)?;
    write_force_profile(&mut file, profile)
}
