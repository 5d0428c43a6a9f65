mod csv_io;
mod json_io;

use std::path::Path;

use crate::analysis::AdvisoryReport;
use crate::error::AdvisoryError;

pub use csv_io::{fertilizer_plan_rows, read_fertilizer_csv, write_fertilizer_csv, FertilizerPlanRow};
pub use json_io::{
    read_report_json, read_request, read_request_from_bytes, report_to_json, write_report_json,
};

/// Trait for writing an advisory report to a file.
pub trait ReportWriter {
    fn write(&self, report: &AdvisoryReport, path: &Path) -> Result<(), AdvisoryError>;
}

/// Full report as JSON.
#[derive(Default)]
pub struct JsonFormat {
    pub pretty: bool,
}

impl ReportWriter for JsonFormat {
    fn write(&self, report: &AdvisoryReport, path: &Path) -> Result<(), AdvisoryError> {
        write_report_json(report, path, self.pretty)
    }
}

/// Fertilizer plan only, as CSV.
pub struct CsvFormat;

impl ReportWriter for CsvFormat {
    fn write(&self, report: &AdvisoryReport, path: &Path) -> Result<(), AdvisoryError> {
        write_fertilizer_csv(report, path)
    }
}

/// Pick a writer from the output file extension (`.json` or `.csv`).
pub fn writer_for_path(path: &Path, pretty: bool) -> Result<Box<dyn ReportWriter>, AdvisoryError> {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .unwrap_or("")
        .to_lowercase();
    match ext.as_str() {
        "json" => Ok(Box::new(JsonFormat { pretty })),
        "csv" => Ok(Box::new(CsvFormat)),
        _ => Err(AdvisoryError::ParseError(format!(
            "Unsupported output format: .{ext}. Use .json or .csv"
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::Advisor;
    use crate::models::{AdvisoryRequest, SoilDataSource, SoilInput};
    use crate::reference::ReferenceData;

    fn sample_request() -> AdvisoryRequest {
        AdvisoryRequest {
            crop: "Maize".to_string(),
            variety: "DHM-117".to_string(),
            district: "Bargarh".to_string(),
            farm_size_acres: 3.0,
            sowing_date: "2024-07-05".to_string(),
            irrigation_type: "Tube Well".to_string(),
            previous_crop: "Groundnut".to_string(),
            soil: SoilInput {
                n: Some(90.0),
                p: Some(20.0),
                k: Some(40.0),
                source: SoilDataSource::SoilReport,
                soil_type: None,
            },
        }
    }

    fn sample_report() -> AdvisoryReport {
        let data = ReferenceData::builtin();
        Advisor::new(&data).report(&sample_request()).unwrap()
    }

    #[test]
    fn test_json_report_roundtrip() {
        let report = sample_report();
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("report.json");

        let writer: &dyn ReportWriter = &JsonFormat { pretty: true };
        writer.write(&report, &path).unwrap();

        let loaded = read_report_json(&path).unwrap();
        assert_eq!(loaded.crop, "Maize");
        assert_eq!(loaded.fertilizer, report.fertilizer);
        assert_eq!(loaded.yield_prediction, report.yield_prediction);
    }

    #[test]
    fn test_csv_plan_has_three_products() {
        let report = sample_report();
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("plan.csv");

        let writer: &dyn ReportWriter = &CsvFormat;
        writer.write(&report, &path).unwrap();

        let rows = read_fertilizer_csv(&path).unwrap();
        assert_eq!(rows.len(), 3);
        assert_eq!(rows[0].product, "Urea");
        assert_eq!(rows[1].product, "DAP");
        assert_eq!(rows[2].product, "MOP");
        assert_eq!(rows[1].kg_per_acre, report.fertilizer.dap.kg_per_acre);
        assert_eq!(rows[2].farm_total_kg, report.farm_totals.mop_kg);
        assert!(rows.iter().all(|r| r.farm_size_acres == 3.0));
    }

    #[test]
    fn test_read_request_file_and_bytes() {
        let json = serde_json::to_string(&sample_request()).unwrap();
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("request.json");
        std::fs::write(&path, &json).unwrap();

        let from_file = read_request(&path).unwrap();
        let from_bytes = read_request_from_bytes(json.as_bytes()).unwrap();
        assert_eq!(from_file.crop, "Maize");
        assert_eq!(from_bytes.previous_crop, "Groundnut");
        assert_eq!(from_bytes.soil.source, SoilDataSource::SoilReport);
    }

    #[test]
    fn test_read_request_rejects_bad_input() {
        assert!(matches!(
            read_request_from_bytes(&[0xff, 0xfe]),
            Err(AdvisoryError::ParseError(_))
        ));
        assert!(matches!(
            read_request_from_bytes(b"{\"crop\": 1}"),
            Err(AdvisoryError::Json(_))
        ));
    }

    #[test]
    fn test_writer_for_path() {
        assert!(writer_for_path(Path::new("out.json"), false).is_ok());
        assert!(writer_for_path(Path::new("OUT.CSV"), false).is_ok());
        let err = writer_for_path(Path::new("out.xlsx"), false).err().unwrap();
        assert!(err.to_string().contains("Unsupported output format: .xlsx"));
    }
}
