use std::io::{self, Write};
use std::path::Path;

use serde::Serialize;

use crate::aircraft::AircraftConfiguration;
use crate::takeoff::TakeoffResult;

/// Everything needed to reproduce and read one takeoff analysis.
#[derive(Debug, Clone, Serialize)]
pub struct TakeoffSummary<'a> {
    pub name: &'a str,
    pub aircraft: &'a AircraftConfiguration,
    pub performance: &'a TakeoffResult,
}

impl<'a> TakeoffSummary<'a> {
    pub fn new(name: &'a str, aircraft: &'a AircraftConfiguration, performance: &'a TakeoffResult) -> Self {
        Self { name, aircraft, performance }
    }
}

/// Write the summary as pretty-printed JSON followed by a newline.
pub fn write_summary<W: Write>(writer: &mut W, summary: &TakeoffSummary<'_>) -> io::Result<()> {
    serde_json::to_writer_pretty(&mut *writer, summary)?;
    writeln!(writer)
}

pub fn write_summary_file<P: AsRef<Path>>(path: P, summary: &TakeoffSummary<'_>) -> io::Result<()> {
    let mut file = std::fs::File::create(path)?;
    write_summary(&mut file, summary)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::aircraft::presets;
    use crate::takeoff::{analyze, TakeoffAnalysis};
    use approx::assert_relative_eq;

    #[test]
    fn json_output_is_valid() {
        let cfg = presets::c17_stol();
        let result = analyze(&cfg, &TakeoffAnalysis::cross_validated()).unwrap();

        let mut buf = Vec::new();
        write_summary(&mut buf, &TakeoffSummary::new("Test", &cfg, &result)).unwrap();
        let value: serde_json::Value = serde_json::from_slice(&buf).unwrap();

        assert_eq!(value["name"], "Test");
        assert_eq!(value["performance"]["source"], "integrated");
        assert_eq!(value["performance"]["status"], "validated");
        assert_relative_eq!(
            value["performance"]["total_distance"].as_f64().unwrap(),
            result.total_distance
        );
        assert_relative_eq!(value["aircraft"]["thrust"].as_f64().unwrap(), cfg.thrust);
        // the sampled roll goes to CSV, never into the summary
        assert!(value["performance"].get("trajectory").is_none());
    }

    #[test]
    fn missing_figures_serialize_as_null() {
        let cfg = presets::c17_stol();
        let result = analyze(&cfg, &TakeoffAnalysis::default()).unwrap();

        let mut buf = Vec::new();
        write_summary(&mut buf, &TakeoffSummary::new("closed", &cfg, &result)).unwrap();
        let value: serde_json::Value = serde_json::from_slice(&buf).unwrap();
        assert!(value["performance"]["integrated_distance"].is_null());
        assert!(value["performance"]["liftoff_time"].is_null());
    }
}
