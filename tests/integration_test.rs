use assert_approx_eq::assert_approx_eq;
use proptest::prelude::*;

use crop_advisor::{
    advisory::{parse_sections, SectionKind},
    analysis::{
        calculate_fertilizer_recommendation, predict_yield, Advisor, NutrientStatus,
        ACRES_PER_HECTARE, MAX_CONFIDENCE, MIN_CONFIDENCE,
    },
    error::AdvisoryError,
    io,
    models::{
        AdvisoryRequest, CropRequirement, IrrigationType, NpkValues, SoilDataSource, SoilInput,
        SoilNutrientReading, YieldPredictionInput, YieldRange,
    },
    reference::ReferenceData,
};

fn rice_requirement() -> CropRequirement {
    CropRequirement::new(120.0, 60.0, 60.0).unwrap()
}

fn rice_input(soil: SoilNutrientReading) -> YieldPredictionInput {
    YieldPredictionInput {
        crop: "Rice".to_string(),
        variety: "Swarna".to_string(),
        soil,
        farm_size_acres: 1.0,
        irrigation_type: IrrigationType::from("Canal Irrigation"),
        sowing_date: "2024-06-15".to_string(),
        district: "Cuttack".to_string(),
        previous_crop: "none".to_string(),
    }
}

fn rice_request() -> AdvisoryRequest {
    AdvisoryRequest {
        crop: "Rice".to_string(),
        variety: "Swarna".to_string(),
        district: "Cuttack".to_string(),
        farm_size_acres: 2.5,
        sowing_date: "2024-06-15".to_string(),
        irrigation_type: "Canal Irrigation".to_string(),
        previous_crop: "none".to_string(),
        soil: SoilInput {
            n: Some(240.0),
            p: Some(18.0),
            k: Some(175.0),
            source: SoilDataSource::Manual,
            soil_type: None,
        },
    }
}

// ============================================================================
// Fertilizer calculator
// ============================================================================

#[test]
fn test_dap_nitrogen_is_subtracted_from_urea() {
    let soil = SoilNutrientReading::new(0.0, 0.0, 0.0, SoilDataSource::SoilReport);
    let rec = calculate_fertilizer_recommendation(&soil, &rice_requirement(), 1.0);

    assert_eq!(rec.dap.kg_per_hectare, 298.7);
    assert_eq!(rec.urea.kg_per_hectare, 144.0);
    assert_eq!(rec.mop.kg_per_hectare, 121.0);
    assert!(rec.urea.kg_per_hectare < 120.0 / 0.46);
    assert_eq!(rec.nutrient_deficit, NpkValues::new(120.0, 60.0, 60.0));
    assert!(rec.warnings.is_empty());
}

#[test]
fn test_per_acre_conversion() {
    let soil = SoilNutrientReading::new(10.0, 5.0, 12.0, SoilDataSource::Manual);
    let rec = calculate_fertilizer_recommendation(&soil, &rice_requirement(), 1.0);
    for dosage in [rec.urea, rec.dap, rec.mop] {
        assert_approx_eq!(dosage.kg_per_acre, dosage.kg_per_hectare / ACRES_PER_HECTARE, 0.1);
    }
}

#[test]
fn test_status_boundaries() {
    let cases = [
        (79.0, NutrientStatus::Deficient),
        (80.0, NutrientStatus::Adequate),
        (120.0, NutrientStatus::Adequate),
        (121.0, NutrientStatus::Excess),
    ];
    for (available, expected) in cases {
        let soil = SoilNutrientReading::new(available, 0.0, 0.0, SoilDataSource::Manual);
        let req = CropRequirement::new(100.0, 40.0, 40.0).unwrap();
        let rec = calculate_fertilizer_recommendation(&soil, &req, 1.0);
        assert_eq!(rec.nutrient_status.n, expected, "available {available}");
    }
}

#[test]
fn test_zero_requirement_is_rejected() {
    assert!(matches!(
        CropRequirement::new(120.0, 0.0, 60.0),
        Err(AdvisoryError::InvalidReference(_))
    ));
}

// ============================================================================
// Yield estimator
// ============================================================================

#[test]
fn test_end_to_end_rice() {
    let soil = SoilNutrientReading::new(240.0, 18.0, 175.0, SoilDataSource::Manual);
    let rec = calculate_fertilizer_recommendation(&soil, &rice_requirement(), 1.0);
    assert_eq!(rec.nutrient_status.n, NutrientStatus::Excess);
    assert!(rec.warnings.iter().any(|w| w.starts_with("⚠️ Nitrogen level is high")));

    let pred = predict_yield(&rice_input(soil), &YieldRange::new(15.0, 25.0));
    assert_approx_eq!(pred.factors.irrigation, 1.10);
    assert_approx_eq!(pred.factors.sowing, 1.05);
    assert_approx_eq!(pred.factors.rotation, 1.0);
    assert_approx_eq!(pred.factors.multiplier, 1.10 * 1.05 * pred.factors.nutrient);
    assert_eq!(pred.predicted_yield_quintal_per_acre, 24.0);
    assert_eq!(pred.confidence_percent, 80);
}

#[test]
fn test_rotation_bonus() {
    let soil = SoilNutrientReading::new(200.0, 20.0, 150.0, SoilDataSource::Manual);
    let range = YieldRange::new(15.0, 25.0);
    let plain = predict_yield(&rice_input(soil), &range);

    let mut input = rice_input(soil);
    input.previous_crop = "Groundnut".to_string();
    let rotated = predict_yield(&input, &range);

    assert_approx_eq!(rotated.factors.multiplier, plain.factors.multiplier * 1.08);
    assert_approx_eq!(
        rotated.predicted_yield_quintal_per_acre,
        plain.predicted_yield_quintal_per_acre * 1.08,
        0.2
    );
    assert_eq!(rotated.confidence_percent, plain.confidence_percent + 3);
}

#[test]
fn test_unreadable_sowing_date_warns() {
    let soil = SoilNutrientReading::new(200.0, 20.0, 150.0, SoilDataSource::Manual);
    let mut input = rice_input(soil);
    input.sowing_date = "sometime in June".to_string();
    let pred = predict_yield(&input, &YieldRange::new(15.0, 25.0));
    assert_approx_eq!(pred.factors.sowing, 0.95);
    assert_eq!(pred.warnings.len(), 1);
}

// ============================================================================
// Advisor and reports
// ============================================================================

#[test]
fn test_report_farm_totals() {
    let data = ReferenceData::builtin();
    let report = Advisor::new(&data).report(&rice_request()).unwrap();

    assert_eq!(report.farm_totals.total_yield_quintal, 60.0);
    assert_eq!(report.farm_totals.dap_kg, 211.5);
    assert_eq!(report.farm_totals.urea_kg, 0.0);
    assert_eq!(report.yield_prediction.economic_analysis.estimated_gain, 5769);
    assert_eq!(report.yield_prediction.economic_analysis.profit_difference, 4969);
}

#[test]
fn test_report_advisory_sections() {
    let data = ReferenceData::builtin();
    let report = Advisor::new(&data).report(&rice_request()).unwrap();
    let sections = parse_sections(&report.advisory);

    let warnings: Vec<_> = sections.iter().filter(|s| s.is_warning()).collect();
    assert_eq!(warnings.len(), 1);
    assert_eq!(warnings[0].content, vec!["Sowing time is optimal for Kharif season"]);
    assert!(sections.iter().any(|s| s.kind == SectionKind::Water));
}

#[test]
fn test_report_with_custom_reference_data() {
    let toml = r#"
irrigation_types = ["Canal Irrigation"]
soil_types = ["Loam"]

[[crops]]
name = "Wheat"
varieties = ["HD-2967"]
ideal_npk = { N = 120, P = 60, K = 40 }
yield_range = { min = 16, max = 24 }
growing_days = 130
water_requirement = "Medium"

[districts]
Ludhiana = { N = 260, P = 25, K = 180 }
"#;
    let data = ReferenceData::from_toml_str(toml).unwrap();
    let mut request = rice_request();
    request.crop = "Wheat".to_string();
    request.variety = "HD-2967".to_string();
    request.district = "Ludhiana".to_string();
    request.soil = SoilInput {
        source: SoilDataSource::DistrictAverage,
        ..SoilInput::default()
    };

    let report = Advisor::new(&data).report(&request).unwrap();
    assert_eq!(report.soil.npk, NpkValues::new(260.0, 25.0, 180.0));
    assert_eq!(report.fertilizer.nutrient_status.k, NutrientStatus::Excess);

    // Rice is not in this table.
    assert!(matches!(
        Advisor::new(&data).report(&rice_request()),
        Err(AdvisoryError::ValidationError(_) | AdvisoryError::UnknownCrop(_))
    ));
}

#[test]
fn test_json_roundtrip_through_files() {
    let data = ReferenceData::builtin();
    let report = Advisor::new(&data).report(&rice_request()).unwrap();
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("report.json");

    io::write_report_json(&report, &path, false).unwrap();
    let loaded = io::read_report_json(&path).unwrap();
    assert_eq!(loaded.farm_totals, report.farm_totals);
    assert_eq!(loaded.advisory, report.advisory);
}

// ============================================================================
// Properties
// ============================================================================

fn soil_source() -> impl Strategy<Value = SoilDataSource> {
    prop_oneof![
        Just(SoilDataSource::SoilReport),
        Just(SoilDataSource::SoilImage),
        Just(SoilDataSource::Manual),
        Just(SoilDataSource::DistrictAverage),
    ]
}

fn irrigation() -> impl Strategy<Value = IrrigationType> {
    prop_oneof![
        Just(IrrigationType::Drip),
        Just(IrrigationType::Canal),
        Just(IrrigationType::Rainfed),
        Just(IrrigationType::Other("Lift".to_string())),
    ]
}

proptest! {
    #[test]
    fn prop_deficit_non_negative(
        n in 0.0f64..600.0, p in 0.0f64..100.0, k in 0.0f64..500.0,
        rn in 1.0f64..200.0, rp in 1.0f64..100.0, rk in 1.0f64..200.0,
    ) {
        let soil = SoilNutrientReading::new(n, p, k, SoilDataSource::Manual);
        let req = CropRequirement::new(rn, rp, rk).unwrap();
        let rec = calculate_fertilizer_recommendation(&soil, &req, 1.0);

        prop_assert!(rec.nutrient_deficit.n >= 0.0);
        prop_assert!(rec.nutrient_deficit.p >= 0.0);
        prop_assert!(rec.nutrient_deficit.k >= 0.0);
        if n >= rn { prop_assert_eq!(rec.nutrient_deficit.n, 0.0); }
        if p >= rp { prop_assert_eq!(rec.nutrient_deficit.p, 0.0); }
        if k >= rk { prop_assert_eq!(rec.nutrient_deficit.k, 0.0); }
        prop_assert!(rec.urea.kg_per_hectare >= 0.0);
    }

    #[test]
    fn prop_status_thresholds(avail in 0.0f64..500.0, req in 1.0f64..250.0) {
        let status = NutrientStatus::classify(avail, req);
        let ratio = avail / req;
        let expected = if ratio < 0.8 {
            NutrientStatus::Deficient
        } else if ratio > 1.2 {
            NutrientStatus::Excess
        } else {
            NutrientStatus::Adequate
        };
        prop_assert_eq!(status, expected);
    }

    #[test]
    fn prop_yield_bounds_and_confidence(
        n in 0.0f64..600.0, p in 0.0f64..100.0, k in 0.0f64..500.0,
        source in soil_source(),
        irrigation in irrigation(),
        month in 1u32..=12,
        legume in any::<bool>(),
        min in 1.0f64..30.0, span in 0.0f64..20.0,
    ) {
        let mut input = rice_input(SoilNutrientReading::new(n, p, k, source));
        input.irrigation_type = irrigation;
        input.sowing_date = format!("2024-{month:02}-10");
        input.previous_crop = if legume { "Black Gram".to_string() } else { "none".to_string() };

        let pred = predict_yield(&input, &YieldRange::new(min, min + span));
        prop_assert!(pred.yield_range.min <= pred.predicted_yield_quintal_per_acre);
        prop_assert!(pred.predicted_yield_quintal_per_acre <= pred.yield_range.max);
        prop_assert!(i32::from(pred.confidence_percent) >= MIN_CONFIDENCE);
        prop_assert!(i32::from(pred.confidence_percent) <= MAX_CONFIDENCE);
        prop_assert!(pred.warnings.is_empty());
    }

    #[test]
    fn prop_idempotent(
        n in 0.0f64..600.0, p in 0.0f64..100.0, k in 0.0f64..500.0,
        date in "[0-9]{4}-[0-9]{2}-[0-9]{2}|[a-z ]{0,12}",
    ) {
        let soil = SoilNutrientReading::new(n, p, k, SoilDataSource::SoilImage);
        let mut input = rice_input(soil);
        input.sowing_date = date;
        let range = YieldRange::new(15.0, 25.0);

        prop_assert_eq!(
            calculate_fertilizer_recommendation(&soil, &rice_requirement(), 1.0),
            calculate_fertilizer_recommendation(&soil, &rice_requirement(), 1.0)
        );
        prop_assert_eq!(predict_yield(&input, &range), predict_yield(&input, &range));
    }
}
