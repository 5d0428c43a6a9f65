//! Basic advisory example: build a request, run the engine, and display results.
//!
//! Run from the project root:
//!   cargo run --example basic_advisory

use crop_advisor::analysis::Advisor;
use crop_advisor::models::{AdvisoryRequest, SoilDataSource, SoilInput};
use crop_advisor::reference::ReferenceData;
use crop_advisor::visualization::{
    print_advisory_sections, print_fertilizer_table, print_nutrient_status, print_scenario_chart,
    print_yield_summary,
};

fn main() {
    let reference = ReferenceData::builtin();
    let advisor = Advisor::new(&reference);

    let request = AdvisoryRequest {
        crop: "Rice".to_string(),
        variety: "Swarna".to_string(),
        district: "Cuttack".to_string(),
        farm_size_acres: 2.5,
        sowing_date: "2024-06-15".to_string(),
        irrigation_type: "Canal Irrigation".to_string(),
        previous_crop: "Green Gram (Moong)".to_string(),
        soil: SoilInput {
            n: Some(240.0),
            p: Some(18.0),
            k: Some(175.0),
            source: SoilDataSource::SoilReport,
            soil_type: None,
        },
    };

    let report = advisor.report(&request).expect("Request should be valid");
    println!(
        "Advisory for {} ({}) in {}, {} acres",
        report.crop, report.variety, report.district, report.farm_size_acres
    );

    // Fertilizer plan
    print_nutrient_status(&report.soil, &report.fertilizer);
    print_fertilizer_table(&report.fertilizer, Some((&report.farm_totals, report.farm_size_acres)));

    // Yield
    print_yield_summary(&report.yield_prediction, Some(report.farm_size_acres));
    print_scenario_chart(&report.yield_prediction);

    // Advisory text
    print_advisory_sections(&report.advisory);

    // District averages when no soil test is available
    let mut fallback = request.clone();
    fallback.soil = SoilInput {
        source: SoilDataSource::DistrictAverage,
        ..SoilInput::default()
    };
    match advisor.report(&fallback) {
        Ok(r) => println!(
            "\nWith {} district averages: {:.1} q/acre ({}% confidence)",
            r.district,
            r.yield_prediction.predicted_yield_quintal_per_acre,
            r.yield_prediction.confidence_percent
        ),
        Err(e) => eprintln!("Could not build fallback report: {e}"),
    }
}
