//! JSON output format for reports
//!
//! The document carries the report rows and summary plus the chart series,
//! so an external plotting tool can render every dashboard from one file.

use serde::{Deserialize, Serialize};

use crate::chart::ChartData;
use crate::report::{Report, Scenario};

/// Root JSON output structure
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JsonOutput {
    /// Output format version
    pub version: String,
    /// Report mode that produced this document
    pub mode: String,
    pub report: Report,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub chart: Option<ChartData>,
}

impl JsonOutput {
    /// Build the document for a scenario's report
    pub fn new(report: Report, scenario: &Scenario, mode: &str, include_chart: bool) -> Self {
        let chart = include_chart.then(|| ChartData::from_report(&report, scenario.curve_points));
        Self {
            version: env!("CARGO_PKG_VERSION").to_string(),
            mode: mode.to_string(),
            report,
            chart,
        }
    }

    /// Serialize to pretty-printed JSON
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}
