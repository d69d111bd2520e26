use serde::Serialize;

use crate::aircraft::AircraftConfiguration;
use crate::sim::state::Trajectory;

// ---------------------------------------------------------------------------
// Ground-roll force model
// ---------------------------------------------------------------------------

/// Forces acting along the runway at one speed, N.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ForceSample {
    pub lift: f64,
    pub drag: f64,
    pub rolling_resistance: f64,
    /// Thrust minus drag minus rolling resistance.
    pub net_force: f64,
}

/// Dynamic pressure, Pa.
pub fn dynamic_pressure(velocity: f64, air_density: f64) -> f64 {
    0.5 * air_density * velocity * velocity
}

/// Lift, drag and rolling resistance at `velocity`.
///
/// Lift uses the fixed ground-roll lift coefficient and is clamped to the
/// aircraft weight, so the wheel load `W - L` (and therefore rolling
/// resistance) never goes negative while the aircraft is still on the runway.
pub fn forces(velocity: f64, config: &AircraftConfiguration) -> ForceSample {
    let q_s = dynamic_pressure(velocity, config.air_density) * config.wing_area;

    let lift = (q_s * config.cl_ground_roll).min(config.weight);
    let drag = q_s * config.drag_coefficient();
    let rolling_resistance = config.friction_coefficient * (config.weight - lift);

    ForceSample {
        lift,
        drag,
        rolling_resistance,
        net_force: config.thrust - drag - rolling_resistance,
    }
}

// ---------------------------------------------------------------------------
// Force profile along a trajectory
// ---------------------------------------------------------------------------

/// Forces recomputed at one trajectory sample.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct ForceProfilePoint {
    pub time: f64,
    pub velocity: f64,
    pub distance: f64,
    pub thrust: f64,
    pub forces: ForceSample,
}

/// Evaluate the force model at every sample of `trajectory`.
pub fn force_profile(trajectory: &Trajectory, config: &AircraftConfiguration) -> Vec<ForceProfilePoint> {
    trajectory
        .iter()
        .map(|p| ForceProfilePoint {
            time: p.time,
            velocity: p.state.velocity,
            distance: p.state.distance,
            thrust: config.thrust,
            forces: forces(p.state.velocity, config),
        })
        .collect()
}
