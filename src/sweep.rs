//! Batch evaluation of one parameter over many values.
//!
//! Every point is an independent call to [`analyze`] on a modified copy of
//! the base configuration, so the batch runs on the rayon pool without any
//! shared state.

use rayon::prelude::*;
use serde::Serialize;

use crate::aircraft::AircraftConfiguration;
use crate::error::TakeoffError;
use crate::takeoff::{analyze, TakeoffAnalysis, TakeoffResult};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SweepParameter {
    Thrust,
    WingArea,
    Weight,
    ClMax,
    ObstacleHeight,
}

impl SweepParameter {
    /// Copy of `base` with this parameter set to `value`.
    pub fn apply(&self, base: &AircraftConfiguration, value: f64) -> AircraftConfiguration {
        let mut cfg = *base;
        match self {
            SweepParameter::Thrust => cfg.thrust = value,
            SweepParameter::WingArea => cfg.wing_area = value,
            SweepParameter::Weight => cfg.weight = value,
            SweepParameter::ClMax => cfg.cl_max = value,
            SweepParameter::ObstacleHeight => cfg.obstacle_height = value,
        }
        cfg
    }

    pub fn label(&self) -> &'static str {
        match self {
            SweepParameter::Thrust => "thrust (N)",
            SweepParameter::WingArea => "wing area (m^2)",
            SweepParameter::Weight => "weight (N)",
            SweepParameter::ClMax => "CL_max",
            SweepParameter::ObstacleHeight => "obstacle (m)",
        }
    }
}

#[derive(Debug)]
pub struct SweepPoint {
    pub value: f64,
    pub result: Result<TakeoffResult, TakeoffError>,
}

/// Evaluate `analysis` for each value of `parameter`.
///
/// Output order matches `values`. Failures stay attached to their point.
pub fn sweep(
    base: &AircraftConfiguration,
    analysis: &TakeoffAnalysis,
    parameter: SweepParameter,
    values: &[f64],
) -> Vec<SweepPoint> {
    values
        .par_iter()
        .map(|&value| SweepPoint {
            value,
            result: analyze(&parameter.apply(base, value), analysis),
        })
        .collect()
}

/// `count` evenly spaced values from `start` to `end` inclusive.
pub fn linspace(start: f64, end: f64, count: usize) -> Vec<f64> {
    match count {
        0 => vec![],
        1 => vec![start],
        _ => {
            let step = (end - start) / (count - 1) as f64;
            (0..count).map(|i| start + step * i as f64).collect()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::aircraft::presets;

    #[test]
    fn preserves_input_order() {
        let base = presets::c17_stol();
        let values = linspace(500_000.0, 1_500_000.0, 16);
        let points = sweep(&base, &TakeoffAnalysis::default(), SweepParameter::Thrust, &values);
        assert_eq!(points.len(), values.len());
        for (p, v) in points.iter().zip(&values) {
            assert_eq!(p.value, *v);
        }
    }

    #[test]
    fn thrust_sweep_is_monotone() {
        let base = presets::c17_stol();
        let values = linspace(500_000.0, 1_500_000.0, 11);
        let points = sweep(&base, &TakeoffAnalysis::default(), SweepParameter::Thrust, &values);
        let rolls: Vec<f64> = points
            .iter()
            .map(|p| p.result.as_ref().unwrap().ground_roll_distance)
            .collect();
        assert!(rolls.windows(2).all(|w| w[1] < w[0]));
    }

    #[test]
    fn failing_points_do_not_abort_the_batch() {
        let base = presets::c17_stol();
        let values = [0.0, 800_000.0];
        let points = sweep(&base, &TakeoffAnalysis::default(), SweepParameter::Thrust, &values);
        assert!(matches!(points[0].result, Err(TakeoffError::InfeasibleTakeoff { .. })));
        assert!(points[1].result.is_ok());
    }

    #[test]
    fn parallel_matches_sequential() {
        let base = presets::c17_mtow();
        let values = linspace(300.0, 450.0, 8);
        let analysis = TakeoffAnalysis::default();
        let points = sweep(&base, &analysis, SweepParameter::WingArea, &values);
        for p in points {
            let direct = analyze(&SweepParameter::WingArea.apply(&base, p.value), &analysis).unwrap();
            assert_eq!(p.result.unwrap().total_distance, direct.total_distance);
        }
    }

    #[test]
    fn apply_touches_one_field() {
        let base = presets::c17_stol();
        let cfg = SweepParameter::ClMax.apply(&base, 2.5);
        assert_eq!(cfg.cl_max, 2.5);
        assert_eq!(cfg.cl_ground_roll, base.cl_ground_roll);
        assert_eq!(cfg.thrust, base.thrust);
    }

    #[test]
    fn linspace_endpoints() {
        assert_eq!(linspace(1.0, 2.0, 3), vec![1.0, 1.5, 2.0]);
        assert_eq!(linspace(1.0, 2.0, 1), vec![1.0]);
        assert!(linspace(1.0, 2.0, 0).is_empty());
    }
}
