pub mod error;
pub mod aircraft;
pub mod physics;
pub mod performance;
pub mod sim;
pub mod takeoff;
pub mod sweep;
pub mod config;
pub mod io;

pub use aircraft::{presets, AircraftBuilder, AircraftConfiguration};
pub use error::TakeoffError;
pub use physics::aerodynamics::{forces, ForceSample};
pub use sim::{IntegratorConfig, KinematicState, Trajectory, TrajectoryPoint};
pub use takeoff::{
    analyze, total_distance, GroundRollMethod, GroundRollSource, LiftoffSpeed, ResultStatus,
    TakeoffAnalysis, TakeoffResult,
};
