use crate::types::report::GpaReport;
use chrono::Utc;
use serde::Serialize;

#[derive(Serialize)]
struct JsonReport<'a> {
    version: &'static str,
    generated_at: String,
    #[serde(flatten)]
    report: &'a GpaReport,
}

pub fn to_json(report: &GpaReport) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(&JsonReport {
        version: env!("CARGO_PKG_VERSION"),
        generated_at: Utc::now().to_rfc3339(),
        report,
    })
}
