use std::path::Path;

use crate::analysis::{AdvisoryReport, Product};
use crate::error::AdvisoryError;

/// One fertilizer product line of an exported plan.
#[derive(Debug, Clone, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct FertilizerPlanRow {
    pub crop: String,
    pub product: String,
    pub grade: String,
    pub kg_per_hectare: f64,
    pub kg_per_acre: f64,
    pub farm_size_acres: f64,
    pub farm_total_kg: f64,
}

/// Flatten a report's fertilizer plan into one row per product.
pub fn fertilizer_plan_rows(report: &AdvisoryReport) -> Vec<FertilizerPlanRow> {
    Product::ALL
        .iter()
        .map(|product| {
            let dosage = report.fertilizer.dosage(*product);
            let farm_total_kg = match product {
                Product::Urea => report.farm_totals.urea_kg,
                Product::Dap => report.farm_totals.dap_kg,
                Product::Mop => report.farm_totals.mop_kg,
            };
            FertilizerPlanRow {
                crop: report.crop.clone(),
                product: product.label().to_string(),
                grade: product.grade().to_string(),
                kg_per_hectare: dosage.kg_per_hectare,
                kg_per_acre: dosage.kg_per_acre,
                farm_size_acres: report.farm_size_acres,
                farm_total_kg,
            }
        })
        .collect()
}

/// Write the fertilizer plan of a report as CSV.
pub fn write_fertilizer_csv(
    report: &AdvisoryReport,
    path: impl AsRef<Path>,
) -> Result<(), AdvisoryError> {
    let mut wtr = csv::Writer::from_path(path.as_ref())?;
    for row in fertilizer_plan_rows(report) {
        wtr.serialize(&row)?;
    }
    wtr.flush()?;
    Ok(())
}

/// Read a fertilizer plan CSV back into rows.
pub fn read_fertilizer_csv(path: impl AsRef<Path>) -> Result<Vec<FertilizerPlanRow>, AdvisoryError> {
    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(true)
        .trim(csv::Trim::All)
        .from_path(path.as_ref())?;
    let mut rows = Vec::new();
    for result in rdr.deserialize() {
        rows.push(result?);
    }
    Ok(rows)
}
