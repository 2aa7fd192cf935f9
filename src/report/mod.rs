pub mod json;
pub mod md;

use crate::error::CropwiseError;
use crate::types::report::{AdvisoryReport, FertilizerReport};

#[derive(Debug, Clone, Copy)]
pub enum OutputFormat {
    Json,
    Md,
}

pub fn render_advisory(
    report: &AdvisoryReport,
    format: OutputFormat,
) -> Result<String, CropwiseError> {
    match format {
        OutputFormat::Json => json::to_json(report).map_err(CropwiseError::Json),
        OutputFormat::Md => Ok(md::advisory_to_markdown(report)),
    }
}

pub fn render_fertilizer(
    report: &FertilizerReport,
    format: OutputFormat,
) -> Result<String, CropwiseError> {
    match format {
        OutputFormat::Json => json::to_json(report).map_err(CropwiseError::Json),
        OutputFormat::Md => Ok(md::fertilizer_to_markdown(report)),
    }
}
