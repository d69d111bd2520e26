use ode_solvers::{Dopri5, SVector, System};

use crate::aircraft::AircraftConfiguration;
use crate::error::TakeoffError;
use crate::physics::aerodynamics::forces;

use super::state::{KinematicState, Trajectory, TrajectoryPoint};

/// `[velocity, distance]`
type RollState = SVector<f64, 2>;

// ---------------------------------------------------------------------------
// Integrator settings
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct IntegratorConfig {
    pub time_horizon: f64,   // s, integration window starting at t = 0
    pub sample_count: usize, // evenly spaced output samples over the window
    pub rel_tol: f64,
    pub abs_tol: f64,
}

impl Default for IntegratorConfig {
    fn default() -> Self {
        Self {
            time_horizon: 100.0, // generous for large transports
            sample_count: 10_000,
            rel_tol: 1e-6,
            abs_tol: 1e-8,
        }
    }
}

impl IntegratorConfig {
    /// Spacing between output samples, s.
    pub fn sample_interval(&self) -> f64 {
        self.time_horizon / (self.sample_count - 1) as f64
    }

    fn validate(&self) -> Result<(), TakeoffError> {
        if !self.time_horizon.is_finite() || self.time_horizon <= 0.0 {
            return Err(TakeoffError::InvalidConfiguration(format!(
                "time_horizon must be positive, got {}",
                self.time_horizon
            )));
        }
        if self.sample_count < 2 {
            return Err(TakeoffError::InvalidConfiguration(format!(
                "sample_count must be at least 2, got {}",
                self.sample_count
            )));
        }
        if !(self.rel_tol > 0.0 && self.abs_tol > 0.0) {
            return Err(TakeoffError::InvalidConfiguration(
                "integration tolerances must be positive".into(),
            ));
        }
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// Equations of motion
// ---------------------------------------------------------------------------

/// Longitudinal acceleration on the runway, m/s^2.
///
/// From rest, a non-positive net force leaves the aircraft standing: rolling
/// friction can hold it against the brakes-off thrust but cannot push it
/// backwards.
pub fn acceleration(velocity: f64, config: &AircraftConfiguration) -> f64 {
    let net_force = forces(velocity, config).net_force;
    if velocity <= 0.0 && net_force <= 0.0 {
        return 0.0;
    }
    net_force / config.mass()
}

struct GroundRoll<'a> {
    config: &'a AircraftConfiguration,
}

impl System<f64, RollState> for GroundRoll<'_> {
    fn system(&self, _t: f64, y: &RollState, dy: &mut RollState) {
        // a step can overshoot a coasting stop; below zero is treated as rest
        let velocity = y[0].max(0.0);
        dy[0] = acceleration(velocity, self.config);
        dy[1] = velocity;
    }
}

// ---------------------------------------------------------------------------
// Integration
// ---------------------------------------------------------------------------

/// Integrate the ground roll from `initial` over `[0, time_horizon]`.
///
/// Uses the adaptive Dormand-Prince 5(4) pair with dense output at
/// `sample_count` evenly spaced times. Reaching liftoff speed is not checked
/// here; see [`super::event::truncate_at_liftoff`].
pub fn integrate(
    config: &AircraftConfiguration,
    initial: KinematicState,
    settings: &IntegratorConfig,
) -> Result<Trajectory, TakeoffError> {
    settings.validate()?;
    if initial.velocity < 0.0 || initial.distance < 0.0 {
        return Err(TakeoffError::InvalidConfiguration(format!(
            "initial state must be non-negative, got {initial:?}"
        )));
    }

    let system = GroundRoll { config };
    let y0 = RollState::new(initial.velocity, initial.distance);

    // Dense output stops at the last grid time that does not round past
    // x_end, so run half an interval beyond the horizon and cut back to
    // `sample_count` samples.
    let dt = settings.sample_interval();
    let mut stepper = Dopri5::new(
        system,
        0.0,
        settings.time_horizon + 0.5 * dt,
        dt,
        y0,
        settings.rel_tol,
        settings.abs_tol,
    );
    stepper.integrate()?;

    let mut max_distance = initial.distance;
    let points: Vec<TrajectoryPoint> = stepper
        .x_out()
        .iter()
        .zip(stepper.y_out())
        .take(settings.sample_count)
        .map(|(&time, y)| {
            // interpolation noise near a stop must not run the roll backwards
            max_distance = max_distance.max(y[1]);
            TrajectoryPoint {
                time,
                state: KinematicState::new(y[0].max(0.0), max_distance),
            }
        })
        .collect();

    if points.len() != settings.sample_count {
        return Err(TakeoffError::InvalidConfiguration(format!(
            "integrator produced {} of {} samples",
            points.len(),
            settings.sample_count
        )));
    }

    Ok(Trajectory::from_points(points))
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
