pub mod json;
pub mod md;

use crate::error::CgpaError;
use crate::types::report::GpaReport;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum OutputFormat {
    Json,
    Md,
}

pub fn render(report: &GpaReport, format: OutputFormat) -> Result<String, CgpaError> {
    match format {
        OutputFormat::Json => json::to_json(report).map_err(CgpaError::Json),
        OutputFormat::Md => Ok(md::to_markdown(report)),
    }
}
