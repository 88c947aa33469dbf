//! CSV output format for reports and benchmark runs
//!
//! One row per sample size, numbers unformatted so spreadsheets can parse them.

use crate::bench::BenchmarkRecord;
use crate::report::ComparisonRow;

/// CSV formatter for report rows
#[derive(Debug)]
pub struct CsvReportOutput {
    rows: Vec<ComparisonRow>,
}

impl CsvReportOutput {
    pub fn from_rows(rows: &[ComparisonRow]) -> Self {
        Self {
            rows: rows.to_vec(),
        }
    }

    fn header() -> &'static str {
        "n,for_measured_ms,for_predicted_ms,for_error_pct,lambda_measured_ms,lambda_predicted_ms,lambda_error_pct,diff_measured_ms,diff_predicted_ms,ratio"
    }

    fn format_row(row: &ComparisonRow) -> String {
        [
            row.n.to_string(),
            format!("{:.4}", row.imperative.measured_ms),
            format!("{:.4}", row.imperative.predicted_ms),
            format!("{:.4}", row.imperative.relative_error_pct),
            format!("{:.4}", row.higher_order.measured_ms),
            format!("{:.4}", row.higher_order.predicted_ms),
            format!("{:.4}", row.higher_order.relative_error_pct),
            format!("{:.4}", row.diff_measured_ms),
            format!("{:.4}", row.diff_predicted_ms),
            format!("{:.4}", row.ratio),
        ]
        .join(",")
    }

    /// Generate CSV output as string
    pub fn to_csv(&self) -> String {
        let mut output = String::new();
        output.push_str(Self::header());
        output.push('\n');

        for row in &self.rows {
            output.push_str(&Self::format_row(row));
            output.push('\n');
        }

        output
    }
}

/// CSV formatter for benchmark records
#[derive(Debug, Default)]
pub struct CsvBenchOutput {
    records: Vec<BenchmarkRecord>,
}

impl CsvBenchOutput {
    pub fn from_records(records: &[BenchmarkRecord]) -> Self {
        Self {
            records: records.to_vec(),
        }
    }

    /// Generate CSV output for benchmark records
    pub fn to_csv(&self) -> String {
        let mut output = String::from("n,for_ms,lambda_ms,for_evens,lambda_evens,agree\n");

        for record in &self.records {
            output.push_str(&format!(
                "{},{:.3},{:.3},{},{},{}\n",
                record.n,
                record.imperative_ms,
                record.higher_order_ms,
                record.imperative_evens,
                record.higher_order_evens,
                record.agree()
            ));
        }

        output
    }
}
