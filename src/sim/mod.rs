pub mod state;
pub mod integrator;
pub mod event;

pub use state::{KinematicState, Trajectory, TrajectoryPoint};
pub use integrator::{integrate, IntegratorConfig};
pub use event::{truncate_at_liftoff, LiftoffOutcome};
