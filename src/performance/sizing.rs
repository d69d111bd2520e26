use crate::aircraft::AircraftConfiguration;
use crate::error::TakeoffError;
use crate::physics::aerodynamics::forces;

/// Total thrust needed to reach `liftoff_velocity` within `runway_length`.
///
/// Assumes constant acceleration `a = V^2 / (2 s)` and adds drag at liftoff
/// speed plus rolling friction on the full weight, which over-sizes slightly
/// compared with the integrated roll. The configured thrust is ignored.
pub fn required_thrust(
    config: &AircraftConfiguration,
    runway_length: f64,
    liftoff_velocity: f64,
) -> Result<f64, TakeoffError> {
    if !(runway_length.is_finite() && runway_length > 0.0) {
        return Err(TakeoffError::InvalidConfiguration(format!(
            "runway length must be positive, got {runway_length}"
        )));
    }
    if !(liftoff_velocity.is_finite() && liftoff_velocity > 0.0) {
        return Err(TakeoffError::InvalidConfiguration(format!(
            "liftoff velocity must be positive, got {liftoff_velocity}"
        )));
    }

    let acceleration = liftoff_velocity.powi(2) / (2.0 * runway_length);
    let drag = forces(liftoff_velocity, config).drag;
    let friction = config.friction_coefficient * config.weight;

    Ok(config.mass() * acceleration + drag + friction)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::aircraft::{presets, AircraftBuilder};
    use crate::performance::closed_form_distance;
    use approx::assert_relative_eq;

    #[test]
    fn hand_calculation() {
        let cfg = AircraftBuilder::new()
            .mass_kg(353_000.0)
            .wing_area(200.0)
            .cd0(0.03)
            .mccormick_factor(0.0)
            .friction_coefficient(0.03)
            .build();
        let t = required_thrust(&cfg, 450.0, 61.8).unwrap();

        let accel = 61.8_f64.powi(2) / 900.0;
        let drag = 0.5 * 1.225 * 61.8_f64.powi(2) * 0.03 * 200.0;
        let friction = 0.03 * 353_000.0 * 9.81;
        assert_relative_eq!(t, 353_000.0 * accel + drag + friction, max_relative = 1e-12);
    }

    #[test]
    fn shorter_runway_needs_more_thrust() {
        let cfg = presets::c17_stol();
        let v = 1.2 * cfg.stall_speed();
        let long = required_thrust(&cfg, 1_500.0, v).unwrap();
        let short = required_thrust(&cfg, 500.0, v).unwrap();
        assert!(short > long);
    }

    #[test]
    fn sized_thrust_fits_the_runway() {
        let cfg = presets::c17_stol();
        let v = 1.2 * cfg.stall_speed();
        let thrust = required_thrust(&cfg, 600.0, v).unwrap();
        let s = closed_form_distance(&cfg.with_thrust(thrust), v).unwrap();
        assert!(s <= 600.0, "sized aircraft needs {s} m");
    }

    #[test]
    fn rejects_zero_runway() {
        let cfg = presets::c17_stol();
        assert!(required_thrust(&cfg, 0.0, 60.0).is_err());
        assert!(required_thrust(&cfg, 500.0, -1.0).is_err());
    }
}
