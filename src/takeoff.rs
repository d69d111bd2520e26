use serde::Serialize;

use crate::aircraft::AircraftConfiguration;
use crate::error::TakeoffError;
use crate::performance::{closed_form_distance, obstacle_clearance_distance, simplified_distance};
use crate::sim::{integrate, truncate_at_liftoff, IntegratorConfig, KinematicState, Trajectory};

/// Default allowed relative gap between integrated and closed-form rolls.
pub const DEFAULT_CROSS_CHECK_TOLERANCE: f64 = 0.15;

// ---------------------------------------------------------------------------
// Analysis settings
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum LiftoffSpeed {
    /// Multiple of the configuration's stall speed.
    StallMultiple(f64),
    /// Absolute speed, m/s.
    Fixed(f64),
}

impl Default for LiftoffSpeed {
    fn default() -> Self {
        LiftoffSpeed::StallMultiple(1.2)
    }
}

impl LiftoffSpeed {
    pub fn resolve(&self, config: &AircraftConfiguration) -> Result<f64, TakeoffError> {
        let v = match *self {
            LiftoffSpeed::StallMultiple(k) => k * config.stall_speed(),
            LiftoffSpeed::Fixed(v) => v,
        };
        if !(v.is_finite() && v > 0.0) {
            return Err(TakeoffError::InvalidConfiguration(format!(
                "liftoff speed must be positive, got {v}"
            )));
        }
        Ok(v)
    }
}

/// How the ground roll is computed.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum GroundRollMethod {
    #[default]
    ClosedForm,
    /// Thrust-only closed form; a lower bound on the roll.
    SimplifiedClosedForm,
    Integrated,
    /// Run both. The integrated roll is authoritative when liftoff was
    /// reached; the result is flagged when the two disagree by more than
    /// `tolerance` (relative to the closed form).
    CrossValidated { tolerance: f64 },
}

#[derive(Debug, Clone, Copy, Default)]
pub struct TakeoffAnalysis {
    pub liftoff_speed: LiftoffSpeed,
    pub method: GroundRollMethod,
    pub integrator: IntegratorConfig,
}

impl TakeoffAnalysis {
    pub fn cross_validated() -> Self {
        Self {
            method: GroundRollMethod::CrossValidated { tolerance: DEFAULT_CROSS_CHECK_TOLERANCE },
            ..Default::default()
        }
    }

    pub fn with_method(self, method: GroundRollMethod) -> Self {
        Self { method, ..self }
    }

    pub fn with_liftoff_speed(self, liftoff_speed: LiftoffSpeed) -> Self {
        Self { liftoff_speed, ..self }
    }
}

// ---------------------------------------------------------------------------
// Result
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum GroundRollSource {
    ClosedForm,
    SimplifiedClosedForm,
    Integrated,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ResultStatus {
    /// Full model, liftoff reached (and cross-check within tolerance).
    Validated,
    /// Thrust-only closed form; real roll is longer.
    LowerBound,
    /// Integration horizon ended before liftoff speed; the ground roll is
    /// only the distance covered inside the horizon.
    LiftoffNotReached,
    /// Integrated and closed-form rolls disagree beyond tolerance.
    Discrepant,
}

#[derive(Debug, Clone, Serialize)]
pub struct TakeoffResult {
    pub ground_roll_distance: f64,        // m
    pub obstacle_clearance_distance: f64, // m
    pub total_distance: f64,              // m
    pub liftoff_velocity: f64,            // m/s
    pub stall_velocity: f64,              // m/s
    pub source: GroundRollSource,
    pub reached: bool,
    pub status: ResultStatus,
    pub liftoff_time: Option<f64>,
    pub closed_form_distance: Option<f64>,
    pub integrated_distance: Option<f64>,
    pub relative_discrepancy: Option<f64>,
    /// Integrated roll up to liftoff (integrator paths only).
    #[serde(skip)]
    pub trajectory: Option<Trajectory>,
}

impl TakeoffResult {
    pub fn is_validated(&self) -> bool {
        self.status == ResultStatus::Validated
    }
}

// ---------------------------------------------------------------------------
// Aggregation
// ---------------------------------------------------------------------------

/// Total field length: ground roll plus obstacle clearance.
pub fn total_distance(ground_roll_distance: f64, obstacle_clearance_distance: f64) -> f64 {
    ground_roll_distance + obstacle_clearance_distance
}

/// Ground-roll figures gathered before choosing the authoritative one.
struct GroundRoll {
    distance: f64,
    source: GroundRollSource,
    status: ResultStatus,
    reached: bool,
    liftoff_time: Option<f64>,
    closed_form: Option<f64>,
    integrated: Option<f64>,
    discrepancy: Option<f64>,
    trajectory: Option<Trajectory>,
}

fn closed_form_roll(distance: f64, source: GroundRollSource, status: ResultStatus) -> GroundRoll {
    GroundRoll {
        distance,
        source,
        status,
        reached: true,
        liftoff_time: None,
        closed_form: (source == GroundRollSource::ClosedForm).then_some(distance),
        integrated: None,
        discrepancy: None,
        trajectory: None,
    }
}

fn integrated_roll(
    config: &AircraftConfiguration,
    liftoff_velocity: f64,
    settings: &IntegratorConfig,
) -> Result<GroundRoll, TakeoffError> {
    let trajectory = integrate(config, KinematicState::at_rest(), settings)?;
    let outcome = truncate_at_liftoff(trajectory, liftoff_velocity);

    Ok(GroundRoll {
        distance: outcome.ground_roll_distance,
        source: GroundRollSource::Integrated,
        status: if outcome.reached {
            ResultStatus::Validated
        } else {
            ResultStatus::LiftoffNotReached
        },
        reached: outcome.reached,
        liftoff_time: outcome.liftoff_time,
        closed_form: None,
        integrated: Some(outcome.ground_roll_distance),
        discrepancy: None,
        trajectory: Some(outcome.trajectory),
    })
}

fn cross_validated_roll(
    config: &AircraftConfiguration,
    liftoff_velocity: f64,
    settings: &IntegratorConfig,
    tolerance: f64,
) -> Result<GroundRoll, TakeoffError> {
    let closed = closed_form_distance(config, liftoff_velocity)?;
    let mut roll = integrated_roll(config, liftoff_velocity, settings)?;
    roll.closed_form = Some(closed);

    if roll.reached {
        let discrepancy = (roll.distance - closed).abs() / closed;
        roll.discrepancy = Some(discrepancy);
        if discrepancy > tolerance {
            roll.status = ResultStatus::Discrepant;
        }
    } else {
        // integrated figure is only a partial roll; fall back to the closed form
        roll.distance = closed;
        roll.source = GroundRollSource::ClosedForm;
    }
    Ok(roll)
}

/// Run the full takeoff pipeline for one configuration.
pub fn analyze(
    config: &AircraftConfiguration,
    analysis: &TakeoffAnalysis,
) -> Result<TakeoffResult, TakeoffError> {
    config.validate()?;
    let liftoff_velocity = analysis.liftoff_speed.resolve(config)?;
    let stall_velocity = config.stall_speed();

    let roll = match analysis.method {
        GroundRollMethod::ClosedForm => closed_form_roll(
            closed_form_distance(config, liftoff_velocity)?,
            GroundRollSource::ClosedForm,
            ResultStatus::Validated,
        ),
        GroundRollMethod::SimplifiedClosedForm => closed_form_roll(
            simplified_distance(config, liftoff_velocity)?,
            GroundRollSource::SimplifiedClosedForm,
            ResultStatus::LowerBound,
        ),
        GroundRollMethod::Integrated => {
            integrated_roll(config, liftoff_velocity, &analysis.integrator)?
        }
        GroundRollMethod::CrossValidated { tolerance } => {
            cross_validated_roll(config, liftoff_velocity, &analysis.integrator, tolerance)?
        }
    };

    let obstacle =
        obstacle_clearance_distance(stall_velocity, config.obstacle_height, config.gravity)?;

    Ok(TakeoffResult {
        ground_roll_distance: roll.distance,
        obstacle_clearance_distance: obstacle,
        total_distance: total_distance(roll.distance, obstacle),
        liftoff_velocity,
        stall_velocity,
        source: roll.source,
        reached: roll.reached,
        status: roll.status,
        liftoff_time: roll.liftoff_time,
        closed_form_distance: roll.closed_form,
        integrated_distance: roll.integrated,
        relative_discrepancy: roll.discrepancy,
        trajectory: roll.trajectory,
    })
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::aircraft::presets;
    use approx::assert_relative_eq;

    fn fast_integrator() -> IntegratorConfig {
        IntegratorConfig { time_horizon: 100.0, sample_count: 20_001, ..Default::default() }
    }

    #[test]
    fn total_is_a_plain_sum() {
        assert_eq!(total_distance(1_000.0, 250.0), 1_250.0);
        assert_eq!(total_distance(0.0, 0.0), 0.0);
    }

    #[test]
    fn closed_form_default() {
        let cfg = presets::c17_stol_scaled();
        let r = analyze(&cfg, &TakeoffAnalysis::default()).unwrap();
        assert_eq!(r.source, GroundRollSource::ClosedForm);
        assert_eq!(r.status, ResultStatus::Validated);
        assert!(r.reached);
        assert!(r.trajectory.is_none());
        assert_relative_eq!(r.liftoff_velocity, 1.2 * cfg.stall_speed());
        assert_relative_eq!(
            r.total_distance,
            r.ground_roll_distance + r.obstacle_clearance_distance
        );
        assert!((r.ground_roll_distance - 220.3).abs() < 1.0, "got {}", r.ground_roll_distance);
    }

    #[test]
    fn simplified_is_labelled_lower_bound() {
        let cfg = presets::c17_stol_scaled();
        let analysis = TakeoffAnalysis::default().with_method(GroundRollMethod::SimplifiedClosedForm);
        let r = analyze(&cfg, &analysis).unwrap();
        assert_eq!(r.source, GroundRollSource::SimplifiedClosedForm);
        assert_eq!(r.status, ResultStatus::LowerBound);
        assert!(!r.is_validated());
    }

    #[test]
    fn integrated_agrees_with_closed_form() {
        for cfg in [presets::c17_stol(), presets::c17_stol_scaled(), presets::c17_mtow()] {
            let analysis = TakeoffAnalysis {
                integrator: fast_integrator(),
                ..TakeoffAnalysis::cross_validated()
            };
            let r = analyze(&cfg, &analysis).unwrap();
            assert!(r.reached);
            assert_eq!(r.source, GroundRollSource::Integrated);
            let gap = r.relative_discrepancy.unwrap();
            assert!(gap < DEFAULT_CROSS_CHECK_TOLERANCE, "gap {gap:.3} for {cfg:?}");
            assert_eq!(r.status, ResultStatus::Validated);
        }
    }

    #[test]
    fn integrated_trajectory_ends_at_liftoff() {
        let cfg = presets::c17_stol_scaled();
        let analysis = TakeoffAnalysis {
            integrator: fast_integrator(),
            ..TakeoffAnalysis::default().with_method(GroundRollMethod::Integrated)
        };
        let r = analyze(&cfg, &analysis).unwrap();
        let traj = r.trajectory.as_ref().unwrap();
        let last = traj.last().unwrap();
        assert!(last.state.velocity >= r.liftoff_velocity);
        assert_eq!(last.state.distance, r.ground_roll_distance);
        assert_eq!(r.liftoff_time, Some(last.time));
        // the sample before liftoff is still below V_LO
        let before = traj.points()[traj.len() - 2];
        assert!(before.state.velocity < r.liftoff_velocity);
    }

    #[test]
    fn short_horizon_is_flagged_not_failed() {
        let cfg = presets::c17_stol();
        let analysis = TakeoffAnalysis {
            integrator: IntegratorConfig { time_horizon: 2.0, sample_count: 201, ..Default::default() },
            ..TakeoffAnalysis::default().with_method(GroundRollMethod::Integrated)
        };
        let r = analyze(&cfg, &analysis).unwrap();
        assert!(!r.reached);
        assert_eq!(r.status, ResultStatus::LiftoffNotReached);
        assert!(r.ground_roll_distance > 0.0);
        // full window kept: the last sample sits at the end of the horizon
        let traj = r.trajectory.as_ref().unwrap();
        assert_eq!(traj.len(), 201);
        assert_relative_eq!(traj.last().unwrap().time, 2.0, epsilon = 1e-9);
        assert_eq!(r.ground_roll_distance, traj.last().unwrap().state.distance);
    }

    #[test]
    fn cross_validation_falls_back_to_closed_form_when_unreached() {
        let cfg = presets::c17_stol();
        let analysis = TakeoffAnalysis {
            integrator: IntegratorConfig { time_horizon: 2.0, sample_count: 201, ..Default::default() },
            ..TakeoffAnalysis::cross_validated()
        };
        let r = analyze(&cfg, &analysis).unwrap();
        assert_eq!(r.source, GroundRollSource::ClosedForm);
        assert_eq!(r.status, ResultStatus::LiftoffNotReached);
        assert_eq!(Some(r.ground_roll_distance), r.closed_form_distance);
        assert!(r.integrated_distance.unwrap() < r.ground_roll_distance);
    }

    #[test]
    fn tight_tolerance_flags_discrepancy() {
        let cfg = presets::c17_stol();
        let analysis = TakeoffAnalysis {
            integrator: fast_integrator(),
            ..TakeoffAnalysis::default().with_method(GroundRollMethod::CrossValidated { tolerance: 0.0 })
        };
        let r = analyze(&cfg, &analysis).unwrap();
        assert_eq!(r.status, ResultStatus::Discrepant);
    }

    #[test]
    fn infeasible_thrust_is_an_error() {
        let cfg = presets::c17_stol().with_thrust(10_000.0);
        for method in [
            GroundRollMethod::ClosedForm,
            GroundRollMethod::SimplifiedClosedForm,
            GroundRollMethod::CrossValidated { tolerance: 0.15 },
        ] {
            let analysis = TakeoffAnalysis::default().with_method(method);
            assert!(matches!(
                analyze(&cfg, &analysis),
                Err(TakeoffError::InfeasibleTakeoff { .. })
            ));
        }
    }

    #[test]
    fn fixed_liftoff_speed() {
        let cfg = presets::c17_stol();
        let analysis = TakeoffAnalysis::default().with_liftoff_speed(LiftoffSpeed::Fixed(55.0));
        let r = analyze(&cfg, &analysis).unwrap();
        assert_eq!(r.liftoff_velocity, 55.0);
        assert!(analyze(&cfg, &analysis.with_liftoff_speed(LiftoffSpeed::Fixed(0.0))).is_err());
    }

    #[test]
    fn obstacle_uses_config_stall_speed() {
        let cfg = presets::c17_stol();
        let r = analyze(&cfg, &TakeoffAnalysis::default()).unwrap();
        let expected =
            obstacle_clearance_distance(cfg.stall_speed(), cfg.obstacle_height, cfg.gravity).unwrap();
        assert_eq!(r.obstacle_clearance_distance, expected);
    }

    #[test]
    fn invalid_config_rejected_before_any_work() {
        let cfg = presets::c17_stol().with_obstacle_height(-5.0);
        assert!(matches!(
            analyze(&cfg, &TakeoffAnalysis::default()),
            Err(TakeoffError::InvalidConfiguration(_))
        ));
    }
}
