use takeoff_sim::physics::aerodynamics::force_profile;
use takeoff_sim::{analyze, presets, GroundRollMethod, TakeoffAnalysis};

fn main() -> Result<(), takeoff_sim::TakeoffError> {
    println!("=== C-17 takeoff field length ===\n");

    for name in presets::NAMES {
        let Some(ac) = presets::by_name(name) else { continue };

        let closed = analyze(&ac, &TakeoffAnalysis::default())?;
        let simple = analyze(
            &ac,
            &TakeoffAnalysis::default().with_method(GroundRollMethod::SimplifiedClosedForm),
        )?;
        let checked = analyze(&ac, &TakeoffAnalysis::cross_validated())?;

        println!("{name}");
        println!("  mass {:.0} kg, T/W {:.3}, V_stall {:.1} m/s", ac.mass(), ac.thrust_to_weight(), ac.stall_speed());
        println!("  thrust-only roll:  {:>7.1} m (lower bound)", simple.ground_roll_distance);
        println!("  closed-form roll:  {:>7.1} m", closed.ground_roll_distance);
        println!(
            "  integrated roll:   {:>7.1} m  ({:.1}% off, {:?})",
            checked.ground_roll_distance,
            100.0 * checked.relative_discrepancy.unwrap_or(f64::NAN),
            checked.status
        );
        println!("  obstacle (50 ft):  {:>7.1} m", checked.obstacle_clearance_distance);
        println!("  total:             {:>7.1} m", checked.total_distance);

        if let Some(trajectory) = &checked.trajectory {
            let profile = force_profile(trajectory, &ac);
            if let Some(last) = profile.last() {
                println!(
                    "  at liftoff: lift {:.0} kN, drag {:.0} kN, friction {:.0} kN",
                    last.forces.lift / 1e3,
                    last.forces.drag / 1e3,
                    last.forces.rolling_resistance / 1e3
                );
            }
        }
        println!();
    }

    Ok(())
}
