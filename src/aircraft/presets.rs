//! Reference aircraft used by the demos, the CLI and the tests.

use super::config::{AircraftBuilder, AircraftConfiguration, LBF_TO_N, STANDARD_GRAVITY};

/// C-17 class transport at maximum takeoff weight, four engines at full
/// rated thrust.
pub fn c17_mtow() -> AircraftConfiguration {
    AircraftBuilder::new()
        .mass_kg(265_352.0)
        .wing_area(353.0)
        .cl_max(2.938)
        .cl_ground_roll(2.938)
        .thrust(4.0 * 179_886.082)
        .build()
}

/// C-17 class transport at short-field weight, four engines at 40 400 lbf.
pub fn c17_stol() -> AircraftConfiguration {
    AircraftBuilder::new()
        .mass_kg(179_169.0)
        .thrust(4.0 * 40_400.0 * LBF_TO_N)
        .build()
}

/// Short-field airframe scaled to 86 % of the baseline length with
/// 52 000 lbf engines.
pub fn c17_stol_scaled() -> AircraftConfiguration {
    c17_stol()
        .scaled(0.86)
        .with_thrust(4.0 * 52_000.0 * LBF_TO_N)
}

/// Look a preset up by its CLI name.
pub fn by_name(name: &str) -> Option<AircraftConfiguration> {
    match name.to_ascii_lowercase().replace('-', "_").as_str() {
        "c17_mtow" => Some(c17_mtow()),
        "c17_stol" => Some(c17_stol()),
        "c17_stol_scaled" => Some(c17_stol_scaled()),
        _ => None,
    }
}

pub const NAMES: &[&str] = &["c17_mtow", "c17_stol", "c17_stol_scaled"];
