use colored::Colorize;
use comfy_table::{modifiers::UTF8_ROUND_CORNERS, presets::UTF8_FULL, Cell, Color, ContentArrangement, Table};

use crate::analysis::{
    AdvisoryReport, FarmTotals, FertilizerRecommendation, NutrientStatus, Product, YieldPrediction,
};
use crate::models::{Nutrient, SoilNutrientReading};
use crate::reference::ReferenceData;

fn new_table() -> Table {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic);
    table
}

fn status_cell(status: NutrientStatus) -> Cell {
    let color = match status {
        NutrientStatus::Deficient => Color::Red,
        NutrientStatus::Adequate => Color::Green,
        NutrientStatus::Excess => Color::Yellow,
    };
    Cell::new(status.to_string()).fg(color)
}

fn heading(title: &str) -> String {
    format!("\n{}\n{}\n", title.bold().green(), "=".repeat(50))
}

/// Format soil readings against crop needs as a string.
pub fn format_nutrient_status(soil: &SoilNutrientReading, rec: &FertilizerRecommendation) -> String {
    let mut output = heading("Nutrient Status");
    output.push_str(&format!(
        "{}\n",
        format!("Soil data source: {}", soil.source).dimmed()
    ));

    let mut table = new_table();
    table.set_header(vec!["Nutrient", "Soil (kg/ha)", "Deficit (kg/ha)", "Status"]);
    for nutrient in Nutrient::ALL {
        table.add_row(vec![
            Cell::new(format!("{} ({})", nutrient, nutrient.symbol())),
            Cell::new(format!("{:.1}", soil.npk.get(nutrient))),
            Cell::new(format!("{:.1}", rec.nutrient_deficit.get(nutrient))),
            status_cell(rec.nutrient_status.get(nutrient)),
        ]);
    }

    output.push_str(&format!("{table}\n"));
    output
}

/// Print nutrient status table.
pub fn print_nutrient_status(soil: &SoilNutrientReading, rec: &FertilizerRecommendation) {
    print!("{}", format_nutrient_status(soil, rec));
}

/// Format the fertilizer plan as a string. Farm totals are shown when given.
pub fn format_fertilizer_table(
    rec: &FertilizerRecommendation,
    totals: Option<(&FarmTotals, f64)>,
) -> String {
    let mut output = heading("Fertilizer Recommendation");

    let mut table = new_table();
    let mut header = vec!["Product", "Grade", "kg/ha", "kg/acre"];
    if totals.is_some() {
        header.push("Farm total (kg)");
    }
    table.set_header(header);

    for product in Product::ALL {
        let dosage = rec.dosage(product);
        let mut row = vec![
            Cell::new(product.label()),
            Cell::new(product.grade()),
            Cell::new(format!("{:.1}", dosage.kg_per_hectare)),
            Cell::new(format!("{:.1}", dosage.kg_per_acre)),
        ];
        if let Some((t, _)) = totals {
            let total = match product {
                Product::Urea => t.urea_kg,
                Product::Dap => t.dap_kg,
                Product::Mop => t.mop_kg,
            };
            row.push(Cell::new(format!("{total:.1}")));
        }
        table.add_row(row);
    }

    output.push_str(&format!("{table}\n"));
    if let Some((_, acres)) = totals {
        output.push_str(&format!("{}\n", format!("Farm size: {acres} acres").dimmed()));
    }

    if !rec.warnings.is_empty() {
        output.push_str(&format!("\n{}\n", "Warnings".bold().yellow()));
        // Excess warnings carry their own marker.
        for w in &rec.warnings {
            output.push_str(&format!("  {w}\n"));
        }
    }
    output
}

/// Print the fertilizer plan.
pub fn print_fertilizer_table(rec: &FertilizerRecommendation, totals: Option<(&FarmTotals, f64)>) {
    print!("{}", format_fertilizer_table(rec, totals));
}

/// Format the yield prediction summary as a string.
pub fn format_yield_summary(pred: &YieldPrediction, farm_size_acres: Option<f64>) -> String {
    let mut output = heading("Yield Prediction");

    let mut table = new_table();
    table.set_header(vec!["Metric", "Value", "Unit"]);
    table.add_row(vec![
        Cell::new("Predicted Yield"),
        Cell::new(format!("{:.1}", pred.predicted_yield_quintal_per_acre)),
        Cell::new("q/acre"),
    ]);
    table.add_row(vec![
        Cell::new("Expected Range"),
        Cell::new(format!("{:.1} - {:.1}", pred.yield_range.min, pred.yield_range.max)),
        Cell::new("q/acre"),
    ]);
    table.add_row(vec![
        Cell::new("Confidence"),
        Cell::new(format!("{}", pred.confidence_percent)),
        Cell::new("%"),
    ]);
    if let Some(acres) = farm_size_acres {
        table.add_row(vec![
            Cell::new("Total Yield"),
            Cell::new(format!("{:.1}", pred.predicted_yield_quintal_per_acre * acres)),
            Cell::new(format!("q ({acres} acres)")),
        ]);
    }
    table.add_row(vec![
        Cell::new("Gain with balanced NPK"),
        Cell::new(format!("{}", pred.economic_analysis.estimated_gain)),
        Cell::new("INR/acre"),
    ]);
    table.add_row(vec![
        Cell::new("Additional cost"),
        Cell::new(format!("{}", pred.economic_analysis.additional_cost)),
        Cell::new("INR/acre"),
    ]);
    table.add_row(vec![
        Cell::new("Net profit difference"),
        Cell::new(format!("{}", pred.economic_analysis.profit_difference)),
        Cell::new("INR/acre"),
    ]);

    output.push_str(&format!("{table}\n"));

    for w in &pred.warnings {
        output.push_str(&format!("  {} {w}\n", "!".yellow().bold()));
    }
    output
}

/// Print the yield prediction summary.
pub fn print_yield_summary(pred: &YieldPrediction, farm_size_acres: Option<f64>) {
    print!("{}", format_yield_summary(pred, farm_size_acres));
}

/// Format the crop reference table as a string.
pub fn format_crop_table(reference: &ReferenceData) -> String {
    let mut output = heading("Crops");

    let mut table = new_table();
    table.set_header(vec![
        "Crop",
        "Ideal N",
        "Ideal P",
        "Ideal K",
        "Yield (q/acre)",
        "Days",
        "Water",
        "Varieties",
    ]);
    for crop in reference.crops() {
        table.add_row(vec![
            Cell::new(&crop.name),
            Cell::new(format!("{:.0}", crop.ideal_npk.n())),
            Cell::new(format!("{:.0}", crop.ideal_npk.p())),
            Cell::new(format!("{:.0}", crop.ideal_npk.k())),
            Cell::new(format!("{:.0}-{:.0}", crop.yield_range.min, crop.yield_range.max)),
            Cell::new(crop.growing_days),
            Cell::new(crop.water_requirement),
            Cell::new(crop.varieties.join(", ")),
        ]);
    }

    output.push_str(&format!("{table}\n"));
    output
}

/// Print the crop reference table.
pub fn print_crop_table(reference: &ReferenceData) {
    print!("{}", format_crop_table(reference));
}

/// Format district NPK averages as a string.
pub fn format_district_table(reference: &ReferenceData) -> String {
    let mut output = heading("District Soil NPK Averages (kg/ha)");

    let mut table = new_table();
    table.set_header(vec!["District", "N", "P", "K"]);
    for (name, npk) in reference.districts() {
        table.add_row(vec![
            Cell::new(name),
            Cell::new(format!("{:.0}", npk.n)),
            Cell::new(format!("{:.0}", npk.p)),
            Cell::new(format!("{:.0}", npk.k)),
        ]);
    }

    output.push_str(&format!("{table}\n"));
    output
}

/// Print district NPK averages.
pub fn print_district_table(reference: &ReferenceData) {
    print!("{}", format_district_table(reference));
}

/// Format a complete report (everything except the advisory text).
pub fn format_report(report: &AdvisoryReport) -> String {
    let mut output = format!(
        "\n{}\n",
        format!(
            "Crop Advisory: {} ({}) - {}",
            report.crop, report.variety, report.district
        )
        .bold()
        .cyan()
    );
    output.push_str(&format_nutrient_status(&report.soil, &report.fertilizer));
    output.push_str(&format_fertilizer_table(
        &report.fertilizer,
        Some((&report.farm_totals, report.farm_size_acres)),
    ));
    output.push_str(&format_yield_summary(
        &report.yield_prediction,
        Some(report.farm_size_acres),
    ));
    output
}
