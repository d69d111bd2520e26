// ---------------------------------------------------------------------------
// ISA 1976 lower atmosphere (airfield elevations)
// ---------------------------------------------------------------------------

const R_AIR: f64 = 287.052_87; // specific gas constant for dry air, J/(kg·K)
const G0: f64 = 9.806_65;

const T0: f64 = 288.15; // sea-level temperature, K
const P0: f64 = 101_325.0; // sea-level pressure, Pa

const TROPOPAUSE: f64 = 11_000.0; // m
const MODEL_CEILING: f64 = 20_000.0; // m

/// Atmospheric properties at a given geometric altitude.
#[derive(Debug, Clone, Copy)]
pub struct Atmo {
    pub density: f64,     // kg/m^3
    pub pressure: f64,    // Pa
    pub temperature: f64, // K
}

/// ISA standard atmosphere up to 20 km.
///
/// Negative altitudes clamp to sea level and altitudes above the model
/// ceiling clamp to it.
pub fn isa(altitude_m: f64) -> Atmo {
    isa_with_deviation(altitude_m, 0.0)
}

/// ISA pressure profile with the temperature shifted by `delta_t` kelvin
/// (hot/cold day). Pressure follows the standard day; density follows the
/// shifted temperature.
pub fn isa_with_deviation(altitude_m: f64, delta_t: f64) -> Atmo {
    let h = altitude_m.clamp(0.0, MODEL_CEILING);

    let (t_std, pressure) = if h < TROPOPAUSE {
        gradient_layer(h, 0.0, T0, -0.0065, P0)
    } else {
        isothermal_layer(h, TROPOPAUSE, 216.65, 22_632.1)
    };

    let temperature = t_std + delta_t;
    let density = if temperature > 0.0 {
        pressure / (R_AIR * temperature)
    } else {
        0.0
    };

    Atmo { density, pressure, temperature }
}

/// Gradient layer: T = T_base + lapse * (h - h_base)
fn gradient_layer(h: f64, h_base: f64, t_base: f64, lapse: f64, p_base: f64) -> (f64, f64) {
    let t = t_base + lapse * (h - h_base);
    let p = p_base * (t / t_base).powf(-G0 / (lapse * R_AIR));
    (t, p)
}

/// Isothermal layer: T = const, pressure decays exponentially
fn isothermal_layer(h: f64, h_base: f64, t: f64, p_base: f64) -> (f64, f64) {
    let p = p_base * ((-G0 / (R_AIR * t)) * (h - h_base)).exp();
    (t, p)
}
