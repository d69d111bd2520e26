pub mod config;
pub mod presets;

pub use config::{AircraftBuilder, AircraftConfiguration, STANDARD_GRAVITY};
