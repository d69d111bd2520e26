use ode_solvers::dop_shared::IntegrationError;
use thiserror::Error;

/// Errors surfaced by the takeoff-performance core.
///
/// Failing to reach liftoff speed inside the integration horizon is not an
/// error: it is reported through `reached = false` on the result.
#[derive(Debug, Error)]
pub enum TakeoffError {
    /// Thrust does not overcome drag plus rolling resistance at the
    /// closed-form reference speed.
    #[error(
        "takeoff infeasible: thrust {thrust:.1} N does not exceed drag {drag:.1} N \
         plus rolling resistance {rolling_resistance:.1} N"
    )]
    InfeasibleTakeoff {
        thrust: f64,
        drag: f64,
        rolling_resistance: f64,
    },

    /// Obstacle cannot be cleared by the climb-arc model.
    #[error(
        "obstacle height {obstacle_height:.2} m is outside the climb arc \
         (radius {arc_radius:.2} m)"
    )]
    Geometry { obstacle_height: f64, arc_radius: f64 },

    #[error("invalid configuration: {0}")]
    InvalidConfiguration(String),

    #[error(transparent)]
    Integration(#[from] IntegrationError),
}
