use crate::aircraft::AircraftConfiguration;
use crate::error::TakeoffError;
use crate::physics::aerodynamics::{forces, ForceSample};

/// Fraction of liftoff speed at which forces are taken as representative of
/// the whole roll.
pub const REFERENCE_SPEED_FRACTION: f64 = 0.7;

/// `(V_LO / V_stall)^2` for liftoff at 1.2 V_stall.
const LIFTOFF_FACTOR: f64 = 1.44;

/// Net accelerating force at 0.7 V_LO, or `InfeasibleTakeoff` if thrust
/// cannot overcome drag plus rolling resistance there.
fn reference_net_force(
    config: &AircraftConfiguration,
    liftoff_velocity: f64,
) -> Result<f64, TakeoffError> {
    let ForceSample { drag, rolling_resistance, .. } =
        forces(REFERENCE_SPEED_FRACTION * liftoff_velocity, config);
    let denominator = config.thrust - (drag + rolling_resistance);

    if denominator <= 0.0 {
        return Err(TakeoffError::InfeasibleTakeoff {
            thrust: config.thrust,
            drag,
            rolling_resistance,
        });
    }
    Ok(denominator)
}

fn distance_for(config: &AircraftConfiguration, accelerating_force: f64) -> f64 {
    LIFTOFF_FACTOR * config.weight.powi(2)
        / (config.gravity * config.air_density * config.wing_area * config.cl_max * accelerating_force)
}

/// Closed-form ground-roll distance, m.
///
/// `s = 1.44 W^2 / (g rho S CL_max [T - (D + R)])` with drag and rolling
/// resistance evaluated at 0.7 V_LO.
pub fn closed_form_distance(
    config: &AircraftConfiguration,
    liftoff_velocity: f64,
) -> Result<f64, TakeoffError> {
    let net = reference_net_force(config, liftoff_velocity)?;
    Ok(distance_for(config, net))
}

/// Closed-form distance with thrust alone in the denominator.
///
/// Ignores drag and rolling resistance, so it underestimates the roll and is
/// only useful as a lower bound. The feasibility check is still applied.
pub fn simplified_distance(
    config: &AircraftConfiguration,
    liftoff_velocity: f64,
) -> Result<f64, TakeoffError> {
    reference_net_force(config, liftoff_velocity)?;
    Ok(distance_for(config, config.thrust))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::aircraft::AircraftBuilder;
    use approx::assert_relative_eq;

    fn reference_aircraft() -> AircraftConfiguration {
        AircraftBuilder::new()
            .weight(1_512_450.0)
            .air_density(1.225)
            .wing_area(261.0)
            .cl_max(3.156)
            .cl_ground_roll(3.156)
            .thrust(925_000.0)
            .friction_coefficient(0.02)
            .build()
    }

    #[test]
    fn reference_scenario_is_finite_and_positive() {
        let cfg = reference_aircraft();
        let s = closed_form_distance(&cfg, 70.0).unwrap();
        assert!(s.is_finite() && s > 0.0);

        // hand evaluation of the same formula
        let f = forces(49.0, &cfg);
        let expected = 1.44 * cfg.weight.powi(2)
            / (cfg.gravity * 1.225 * 261.0 * 3.156 * (925_000.0 - f.drag - f.rolling_resistance));
        assert_relative_eq!(s, expected, max_relative = 1e-12);
        assert!((s - 429.26).abs() < 1.0, "got {s}");
    }

    #[test]
    fn halving_thrust_lengthens_roll_substantially() {
        let cfg = reference_aircraft();
        let full = closed_form_distance(&cfg, 70.0).unwrap();
        match closed_form_distance(&cfg.with_thrust(462_500.0), 70.0) {
            Ok(half) => assert!(half > 2.0 * full, "{half} vs {full}"),
            Err(TakeoffError::InfeasibleTakeoff { .. }) => {}
            Err(e) => panic!("unexpected error {e}"),
        }
    }

    #[test]
    fn more_thrust_means_shorter_roll() {
        let cfg = reference_aircraft();
        let mut prev = f64::INFINITY;
        for thrust in [300_000.0, 400_000.0, 600_000.0, 925_000.0, 1_500_000.0] {
            let s = closed_form_distance(&cfg.with_thrust(thrust), 70.0).unwrap();
            assert!(s < prev, "not decreasing at T={thrust}");
            prev = s;
        }
    }

    #[test]
    fn diverges_then_fails_at_feasibility_boundary() {
        let cfg = reference_aircraft();
        let f = forces(0.7 * 70.0, &cfg);
        let boundary = f.drag + f.rolling_resistance;

        let near = closed_form_distance(&cfg.with_thrust(boundary * 1.001), 70.0).unwrap();
        let far = closed_form_distance(&cfg.with_thrust(boundary * 2.0), 70.0).unwrap();
        assert!(near > 100.0 * far);

        for thrust in [boundary, boundary * 0.5, 0.0] {
            match closed_form_distance(&cfg.with_thrust(thrust), 70.0) {
                Err(TakeoffError::InfeasibleTakeoff { drag, rolling_resistance, .. }) => {
                    assert_relative_eq!(drag, f.drag);
                    assert_relative_eq!(rolling_resistance, f.rolling_resistance);
                }
                other => panic!("expected InfeasibleTakeoff, got {other:?}"),
            }
        }
    }

    #[test]
    fn simplified_is_a_lower_bound() {
        let cfg = reference_aircraft();
        let full = closed_form_distance(&cfg, 70.0).unwrap();
        let simple = simplified_distance(&cfg, 70.0).unwrap();
        assert!(simple < full);
        assert_relative_eq!(
            simple,
            1.44 * cfg.weight.powi(2) / (cfg.gravity * 1.225 * 261.0 * 3.156 * 925_000.0),
            max_relative = 1e-12
        );
    }

    #[test]
    fn simplified_keeps_feasibility_check() {
        let cfg = reference_aircraft().with_thrust(1_000.0);
        assert!(matches!(
            simplified_distance(&cfg, 70.0),
            Err(TakeoffError::InfeasibleTakeoff { .. })
        ));
    }
}
