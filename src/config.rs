//! Scenario files.
//!
//! A scenario is a TOML document describing one aircraft, its engines, the
//! airfield and the analysis to run. Quantities may be given in the units
//! engine and airframe data usually come in (kg, lbf, ft); they are converted
//! to SI here so the core never sees anything else.

use std::path::Path;

use serde::Deserialize;
use thiserror::Error;

use crate::aircraft::config::{
    DEFAULT_FRICTION_COEFFICIENT, DEFAULT_MCCORMICK_FACTOR, FT_TO_M, LBF_TO_N,
    SCREEN_HEIGHT_50FT, SEA_LEVEL_DENSITY, STANDARD_GRAVITY,
};
use crate::aircraft::AircraftConfiguration;
use crate::physics::atmosphere;
use crate::sim::IntegratorConfig;
use crate::takeoff::{GroundRollMethod, LiftoffSpeed, TakeoffAnalysis, DEFAULT_CROSS_CHECK_TOLERANCE};

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read scenario: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse TOML: {0}")]
    Toml(#[from] toml::de::Error),
    #[error("invalid scenario: {0}")]
    Invalid(String),
}

// ---------------------------------------------------------------------------
// File layout
// ---------------------------------------------------------------------------

#[derive(Debug, Deserialize, Clone)]
pub struct ScenarioFile {
    #[serde(default)]
    pub name: Option<String>,
    pub aircraft: AircraftSection,
    pub propulsion: PropulsionSection,
    #[serde(default)]
    pub field: FieldSection,
    #[serde(default)]
    pub analysis: AnalysisSection,
}

#[derive(Debug, Deserialize, Clone)]
pub struct AircraftSection {
    #[serde(default)]
    pub mass_kg: Option<f64>,
    #[serde(default)]
    pub weight_n: Option<f64>,
    pub wing_area_m2: f64,
    pub cl_max: f64,
    /// Defaults to `cl_max`.
    #[serde(default)]
    pub cl_ground_roll: Option<f64>,
    pub cd0: f64,
    pub oswald_efficiency: f64,
    pub aspect_ratio: f64,
    #[serde(default = "default_mccormick")]
    pub mccormick_factor: f64,
    #[serde(default = "default_friction")]
    pub friction_coefficient: f64,
    /// Geometric length scale applied to the airframe (weight ~ f^3,
    /// wing area ~ f^2).
    #[serde(default)]
    pub scale_factor: Option<f64>,
}

#[derive(Debug, Deserialize, Clone)]
pub struct PropulsionSection {
    #[serde(default = "default_engines")]
    pub engines: u32,
    #[serde(default)]
    pub thrust_per_engine_n: Option<f64>,
    #[serde(default)]
    pub thrust_per_engine_lbf: Option<f64>,
}

#[derive(Debug, Deserialize, Clone, Default)]
pub struct FieldSection {
    #[serde(default)]
    pub air_density_kg_m3: Option<f64>,
    #[serde(default)]
    pub elevation_m: Option<f64>,
    #[serde(default)]
    pub isa_deviation_k: Option<f64>,
    #[serde(default)]
    pub gravity_m_s2: Option<f64>,
    #[serde(default)]
    pub obstacle_height_m: Option<f64>,
    #[serde(default)]
    pub obstacle_height_ft: Option<f64>,
}

#[derive(Debug, Deserialize, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "kebab-case")]
pub enum MethodName {
    #[default]
    ClosedForm,
    Simplified,
    Integrated,
    CrossValidated,
}

#[derive(Debug, Deserialize, Clone, Default)]
pub struct AnalysisSection {
    #[serde(default)]
    pub liftoff_speed_ratio: Option<f64>,
    #[serde(default)]
    pub liftoff_speed_m_s: Option<f64>,
    #[serde(default)]
    pub method: MethodName,
    #[serde(default)]
    pub tolerance: Option<f64>,
    #[serde(default)]
    pub time_horizon_s: Option<f64>,
    #[serde(default)]
    pub sample_count: Option<usize>,
}

fn default_mccormick() -> f64 {
    DEFAULT_MCCORMICK_FACTOR
}

fn default_friction() -> f64 {
    DEFAULT_FRICTION_COEFFICIENT
}

fn default_engines() -> u32 {
    1
}

// ---------------------------------------------------------------------------
// Resolution into core types
// ---------------------------------------------------------------------------

/// A scenario converted to SI and ready to analyze.
#[derive(Debug, Clone)]
pub struct Scenario {
    pub name: String,
    pub aircraft: AircraftConfiguration,
    pub analysis: TakeoffAnalysis,
}

/// Exactly one of two alternative keys must be present.
fn one_of(
    a: Option<f64>,
    b: Option<f64>,
    keys: (&str, &str),
) -> Result<Either, ConfigError> {
    match (a, b) {
        (Some(v), None) => Ok(Either::First(v)),
        (None, Some(v)) => Ok(Either::Second(v)),
        (Some(_), Some(_)) => Err(ConfigError::Invalid(format!(
            "give either {} or {}, not both",
            keys.0, keys.1
        ))),
        (None, None) => Err(ConfigError::Invalid(format!("missing {} or {}", keys.0, keys.1))),
    }
}

enum Either {
    First(f64),
    Second(f64),
}

impl Either {
    fn value(self, convert_second: impl Fn(f64) -> f64) -> f64 {
        match self {
            Either::First(v) => v,
            Either::Second(v) => convert_second(v),
        }
    }
}

impl ScenarioFile {
    pub fn resolve(&self) -> Result<Scenario, ConfigError> {
        let gravity = self.field.gravity_m_s2.unwrap_or(STANDARD_GRAVITY);

        let weight = one_of(
            self.aircraft.weight_n,
            self.aircraft.mass_kg,
            ("aircraft.weight_n", "aircraft.mass_kg"),
        )?
        .value(|kg| kg * gravity);

        let thrust_per_engine = one_of(
            self.propulsion.thrust_per_engine_n,
            self.propulsion.thrust_per_engine_lbf,
            ("propulsion.thrust_per_engine_n", "propulsion.thrust_per_engine_lbf"),
        )?
        .value(|lbf| lbf * LBF_TO_N);

        let air_density = match (self.field.air_density_kg_m3, self.field.elevation_m) {
            (Some(_), Some(_)) => {
                return Err(ConfigError::Invalid(
                    "give either field.air_density_kg_m3 or field.elevation_m, not both".into(),
                ))
            }
            (Some(rho), None) => rho,
            (None, Some(h)) => {
                atmosphere::isa_with_deviation(h, self.field.isa_deviation_k.unwrap_or(0.0)).density
            }
            (None, None) => match self.field.isa_deviation_k {
                Some(dt) => atmosphere::isa_with_deviation(0.0, dt).density,
                None => SEA_LEVEL_DENSITY,
            },
        };

        let obstacle_height = match (self.field.obstacle_height_m, self.field.obstacle_height_ft) {
            (None, None) => SCREEN_HEIGHT_50FT,
            (m, ft) => one_of(m, ft, ("field.obstacle_height_m", "field.obstacle_height_ft"))?
                .value(|ft| ft * FT_TO_M),
        };

        let mut aircraft = AircraftConfiguration {
            weight,
            gravity,
            air_density,
            wing_area: self.aircraft.wing_area_m2,
            cl_max: self.aircraft.cl_max,
            cl_ground_roll: self.aircraft.cl_ground_roll.unwrap_or(self.aircraft.cl_max),
            cd0: self.aircraft.cd0,
            oswald_efficiency: self.aircraft.oswald_efficiency,
            aspect_ratio: self.aircraft.aspect_ratio,
            mccormick_factor: self.aircraft.mccormick_factor,
            friction_coefficient: self.aircraft.friction_coefficient,
            thrust: f64::from(self.propulsion.engines) * thrust_per_engine,
            obstacle_height,
        };
        if let Some(f) = self.aircraft.scale_factor {
            aircraft = aircraft.scaled(f);
        }
        aircraft
            .validate()
            .map_err(|e| ConfigError::Invalid(e.to_string()))?;

        Ok(Scenario {
            name: self.name.clone().unwrap_or_else(|| "unnamed".into()),
            aircraft,
            analysis: self.analysis.resolve()?,
        })
    }
}

impl AnalysisSection {
    fn resolve(&self) -> Result<TakeoffAnalysis, ConfigError> {
        let liftoff_speed = match (self.liftoff_speed_ratio, self.liftoff_speed_m_s) {
            (None, None) => LiftoffSpeed::default(),
            (ratio, speed) => match one_of(
                ratio,
                speed,
                ("analysis.liftoff_speed_ratio", "analysis.liftoff_speed_m_s"),
            )? {
                Either::First(k) => LiftoffSpeed::StallMultiple(k),
                Either::Second(v) => LiftoffSpeed::Fixed(v),
            },
        };

        let method = match self.method {
            MethodName::ClosedForm => GroundRollMethod::ClosedForm,
            MethodName::Simplified => GroundRollMethod::SimplifiedClosedForm,
            MethodName::Integrated => GroundRollMethod::Integrated,
            MethodName::CrossValidated => GroundRollMethod::CrossValidated {
                tolerance: self.tolerance.unwrap_or(DEFAULT_CROSS_CHECK_TOLERANCE),
            },
        };

        let defaults = IntegratorConfig::default();
        let integrator = IntegratorConfig {
            time_horizon: self.time_horizon_s.unwrap_or(defaults.time_horizon),
            sample_count: self.sample_count.unwrap_or(defaults.sample_count),
            ..defaults
        };

        Ok(TakeoffAnalysis { liftoff_speed, method, integrator })
    }
}

/// Parse and resolve a scenario from TOML text.
pub fn parse_scenario(contents: &str) -> Result<Scenario, ConfigError> {
    let file: ScenarioFile = toml::from_str(contents)?;
    file.resolve()
}

/// Load and resolve a scenario file.
pub fn load_scenario<P: AsRef<Path>>(path: P) -> Result<Scenario, ConfigError> {
    let contents = std::fs::read_to_string(path)?;
    parse_scenario(&contents)
}
