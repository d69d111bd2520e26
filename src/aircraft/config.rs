use serde::{Deserialize, Serialize};

use crate::error::TakeoffError;

// ---------------------------------------------------------------------------
// Physical constants
// ---------------------------------------------------------------------------

pub const STANDARD_GRAVITY: f64 = 9.81; // m/s^2
pub const SEA_LEVEL_DENSITY: f64 = 1.225; // kg/m^3

pub const LBF_TO_N: f64 = 4.448_22;
pub const FT_TO_M: f64 = 0.3048;

/// 50 ft certification screen height, m.
pub const SCREEN_HEIGHT_50FT: f64 = 15.24;

/// Ground-effect factor and rolling friction used when none is given.
pub const DEFAULT_MCCORMICK_FACTOR: f64 = 0.837;
pub const DEFAULT_FRICTION_COEFFICIENT: f64 = 0.02; // dry concrete

// ---------------------------------------------------------------------------
// Aircraft configuration
// ---------------------------------------------------------------------------

/// Everything the takeoff model needs to know about one aircraft on one
/// runway. Values must already be in a consistent (SI) unit system.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AircraftConfiguration {
    pub weight: f64,               // N
    pub gravity: f64,              // m/s^2
    pub air_density: f64,          // kg/m^3
    pub wing_area: f64,            // m^2
    pub cl_max: f64,               // maximum lift coefficient (takeoff flaps)
    pub cl_ground_roll: f64,       // lift coefficient held during the roll
    pub cd0: f64,                  // zero-lift drag coefficient
    pub oswald_efficiency: f64,    // e
    pub aspect_ratio: f64,         // AR
    pub mccormick_factor: f64,     // ground-effect induced-drag correction
    pub friction_coefficient: f64, // rolling friction, mu_r
    pub thrust: f64,               // N, total, constant with speed
    pub obstacle_height: f64,      // m
}

impl AircraftConfiguration {
    /// Aircraft mass, kg.
    pub fn mass(&self) -> f64 {
        self.weight / self.gravity
    }

    /// Drag polar evaluated at the ground-roll lift coefficient:
    /// `CD0 + phi * CL^2 / (pi * e * AR)`.
    pub fn drag_coefficient(&self) -> f64 {
        self.cd0
            + self.mccormick_factor * self.cl_ground_roll.powi(2)
                / (std::f64::consts::PI * self.oswald_efficiency * self.aspect_ratio)
    }

    /// Speed at which lift at `cl_max` equals weight, m/s.
    pub fn stall_speed(&self) -> f64 {
        (2.0 * self.weight / (self.air_density * self.wing_area * self.cl_max)).sqrt()
    }

    /// Thrust-to-weight ratio.
    pub fn thrust_to_weight(&self) -> f64 {
        self.thrust / self.weight
    }

    /// Wing loading, N/m^2.
    pub fn wing_loading(&self) -> f64 {
        self.weight / self.wing_area
    }

    /// Geometrically scaled copy of this airframe. Weight grows with the
    /// cube of the length factor, wing area with its square; thrust and
    /// coefficients are unchanged.
    pub fn scaled(&self, length_factor: f64) -> Self {
        Self {
            weight: self.weight * length_factor.powi(3),
            wing_area: self.wing_area * length_factor.powi(2),
            ..*self
        }
    }

    pub fn with_thrust(self, thrust: f64) -> Self {
        Self { thrust, ..self }
    }

    pub fn with_obstacle_height(self, obstacle_height: f64) -> Self {
        Self { obstacle_height, ..self }
    }

    /// Check the physical invariants of the record.
    pub fn validate(&self) -> Result<(), TakeoffError> {
        let non_negative = [
            ("cl_ground_roll", self.cl_ground_roll),
            ("cd0", self.cd0),
            ("mccormick_factor", self.mccormick_factor),
            ("friction_coefficient", self.friction_coefficient),
            ("thrust", self.thrust),
            ("obstacle_height", self.obstacle_height),
        ];
        let positive = [
            ("weight", self.weight),
            ("gravity", self.gravity),
            ("air_density", self.air_density),
            ("wing_area", self.wing_area),
            ("cl_max", self.cl_max),
            ("oswald_efficiency", self.oswald_efficiency),
            ("aspect_ratio", self.aspect_ratio),
        ];

        for (name, value) in non_negative {
            if !value.is_finite() || value < 0.0 {
                return Err(TakeoffError::InvalidConfiguration(format!(
                    "{name} must be finite and non-negative, got {value}"
                )));
            }
        }
        for (name, value) in positive {
            if !value.is_finite() || value <= 0.0 {
                return Err(TakeoffError::InvalidConfiguration(format!(
                    "{name} must be finite and positive, got {value}"
                )));
            }
        }
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// Builder
// ---------------------------------------------------------------------------

/// Builder for [`AircraftConfiguration`]. Defaults describe a C-17 class
/// transport in short-field configuration at sea level.
pub struct AircraftBuilder {
    weight: f64,
    gravity: f64,
    air_density: f64,
    wing_area: f64,
    cl_max: f64,
    cl_ground_roll: f64,
    cd0: f64,
    oswald_efficiency: f64,
    aspect_ratio: f64,
    mccormick_factor: f64,
    friction_coefficient: f64,
    thrust: f64,
    obstacle_height: f64,
}

impl Default for AircraftBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl AircraftBuilder {
    pub fn new() -> Self {
        Self {
            weight: 179_169.0 * STANDARD_GRAVITY,
            gravity: STANDARD_GRAVITY,
            air_density: SEA_LEVEL_DENSITY,
            wing_area: 353.0,
            cl_max: 3.156,
            cl_ground_roll: 3.156,
            cd0: 0.007_85,
            oswald_efficiency: 1.01,
            aspect_ratio: 7.165,
            mccormick_factor: DEFAULT_MCCORMICK_FACTOR,
            friction_coefficient: DEFAULT_FRICTION_COEFFICIENT,
            thrust: 718_832.0,
            obstacle_height: SCREEN_HEIGHT_50FT,
        }
    }

    pub fn weight(mut self, v: f64) -> Self { self.weight = v; self }
    pub fn gravity(mut self, v: f64) -> Self { self.gravity = v; self }
    pub fn air_density(mut self, v: f64) -> Self { self.air_density = v; self }
    pub fn wing_area(mut self, v: f64) -> Self { self.wing_area = v; self }
    pub fn cl_max(mut self, v: f64) -> Self { self.cl_max = v; self }
    pub fn cl_ground_roll(mut self, v: f64) -> Self { self.cl_ground_roll = v; self }
    pub fn cd0(mut self, v: f64) -> Self { self.cd0 = v; self }
    pub fn oswald_efficiency(mut self, v: f64) -> Self { self.oswald_efficiency = v; self }
    pub fn aspect_ratio(mut self, v: f64) -> Self { self.aspect_ratio = v; self }
    pub fn mccormick_factor(mut self, v: f64) -> Self { self.mccormick_factor = v; self }
    pub fn friction_coefficient(mut self, v: f64) -> Self { self.friction_coefficient = v; self }
    pub fn thrust(mut self, v: f64) -> Self { self.thrust = v; self }
    pub fn obstacle_height(mut self, v: f64) -> Self { self.obstacle_height = v; self }

    /// Set weight from a mass in kg using the builder's current gravity.
    pub fn mass_kg(mut self, kg: f64) -> Self {
        self.weight = kg * self.gravity;
        self
    }

    pub fn build(self) -> AircraftConfiguration {
        AircraftConfiguration {
            weight: self.weight,
            gravity: self.gravity,
            air_density: self.air_density,
            wing_area: self.wing_area,
            cl_max: self.cl_max,
            cl_ground_roll: self.cl_ground_roll,
            cd0: self.cd0,
            oswald_efficiency: self.oswald_efficiency,
            aspect_ratio: self.aspect_ratio,
            mccormick_factor: self.mccormick_factor,
            friction_coefficient: self.friction_coefficient,
            thrust: self.thrust,
            obstacle_height: self.obstacle_height,
        }
    }
}
