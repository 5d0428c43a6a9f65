use std::path::Path;

use crate::analysis::AdvisoryReport;
use crate::error::AdvisoryError;
use crate::models::AdvisoryRequest;

/// Read an advisory request from a JSON file.
pub fn read_request(path: impl AsRef<Path>) -> Result<AdvisoryRequest, AdvisoryError> {
    let content = std::fs::read_to_string(path.as_ref())?;
    Ok(serde_json::from_str(&content)?)
}

/// Read an advisory request from JSON bytes.
pub fn read_request_from_bytes(data: &[u8]) -> Result<AdvisoryRequest, AdvisoryError> {
    let content = std::str::from_utf8(data)
        .map_err(|e| AdvisoryError::ParseError(format!("Invalid UTF-8: {e}")))?;
    Ok(serde_json::from_str(content)?)
}

/// Render a report as JSON.
pub fn report_to_json(report: &AdvisoryReport, pretty: bool) -> Result<String, AdvisoryError> {
    let content = if pretty {
        serde_json::to_string_pretty(report)?
    } else {
        serde_json::to_string(report)?
    };
    Ok(content)
}

/// Write a report to a JSON file.
pub fn write_report_json(
    report: &AdvisoryReport,
    path: impl AsRef<Path>,
    pretty: bool,
) -> Result<(), AdvisoryError> {
    std::fs::write(path.as_ref(), report_to_json(report, pretty)?)?;
    Ok(())
}

/// Read a previously written JSON report.
pub fn read_report_json(path: impl AsRef<Path>) -> Result<AdvisoryReport, AdvisoryError> {
    let content = std::fs::read_to_string(path.as_ref())?;
    Ok(serde_json::from_str(&content)?)
}
