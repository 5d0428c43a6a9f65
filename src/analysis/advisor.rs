use serde::{Deserialize, Serialize};

use crate::advisory::generate_advisory;
use crate::analysis::{
    calculate_fertilizer_recommendation, predict_yield, round1, FertilizerRecommendation,
    YieldPrediction,
};
use crate::error::AdvisoryError;
use crate::models::{
    AdvisoryRequest, SoilDataSource, SoilInput, SoilNutrientReading, YieldPredictionInput,
};
use crate::reference::ReferenceData;

/// Whole-farm quantities: per-acre figures multiplied by farm size.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FarmTotals {
    pub total_yield_quintal: f64,
    pub urea_kg: f64,
    pub dap_kg: f64,
    pub mop_kg: f64,
}

impl FarmTotals {
    pub fn compute(
        fertilizer: &FertilizerRecommendation,
        prediction: &YieldPrediction,
        farm_size_acres: f64,
    ) -> Self {
        Self {
            total_yield_quintal: round1(prediction.predicted_yield_quintal_per_acre * farm_size_acres),
            urea_kg: round1(fertilizer.urea.kg_per_acre * farm_size_acres),
            dap_kg: round1(fertilizer.dap.kg_per_acre * farm_size_acres),
            mop_kg: round1(fertilizer.mop.kg_per_acre * farm_size_acres),
        }
    }
}

/// Everything produced for one advisory request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AdvisoryReport {
    pub crop: String,
    pub variety: String,
    pub district: String,
    pub farm_size_acres: f64,
    pub soil: SoilNutrientReading,
    pub fertilizer: FertilizerRecommendation,
    pub yield_prediction: YieldPrediction,
    pub farm_totals: FarmTotals,
    pub advisory: String,
}

/// Assembles engine inputs from reference data and user entries.
pub struct Advisor<'a> {
    reference: &'a ReferenceData,
}

impl<'a> Advisor<'a> {
    pub fn new(reference: &'a ReferenceData) -> Self {
        Self { reference }
    }

    pub fn reference(&self) -> &ReferenceData {
        self.reference
    }

    /// Turn the soil form into a concrete reading.
    ///
    /// District averages are used when asked for, when every supplied value
    /// is zero, or when nothing usable was supplied. Explicit values win over
    /// soil-type defaults, which fill any missing component.
    pub fn resolve_soil(&self, soil: &SoilInput, district: &str) -> SoilNutrientReading {
        let district_reading = || {
            let npk = self.reference.district_average_npk(district);
            SoilNutrientReading {
                npk,
                source: SoilDataSource::DistrictAverage,
            }
        };

        if soil.source == SoilDataSource::DistrictAverage || soil.all_supplied_zero() {
            return district_reading();
        }

        let type_defaults = soil
            .soil_type
            .as_deref()
            .map(|t| self.reference.soil_type_default_npk(t))
            .unwrap_or_default();

        if soil.has_explicit_values() {
            return SoilNutrientReading::new(
                soil.n.unwrap_or(type_defaults.n),
                soil.p.unwrap_or(type_defaults.p),
                soil.k.unwrap_or(type_defaults.k),
                soil.source,
            );
        }

        if !type_defaults.is_zero() {
            return SoilNutrientReading {
                npk: type_defaults,
                source: SoilDataSource::Manual,
            };
        }

        district_reading()
    }

    /// Fertilizer plan for a crop; unknown crops use the default ideal NPK.
    pub fn fertilizer(
        &self,
        crop: &str,
        soil: &SoilNutrientReading,
        farm_size_acres: f64,
    ) -> FertilizerRecommendation {
        let requirement = self.reference.ideal_npk(crop);
        calculate_fertilizer_recommendation(soil, &requirement, farm_size_acres)
    }

    /// Yield prediction against the crop's base yield range.
    pub fn predict(&self, input: &YieldPredictionInput) -> YieldPrediction {
        let range = self.reference.yield_range(&input.crop);
        predict_yield(input, &range)
    }

    /// Build the estimator input for a request and an already resolved soil reading.
    pub fn prediction_input(
        &self,
        request: &AdvisoryRequest,
        soil: SoilNutrientReading,
    ) -> YieldPredictionInput {
        YieldPredictionInput {
            crop: request.crop.clone(),
            variety: request.variety.clone(),
            soil,
            farm_size_acres: request.farm_size_acres,
            irrigation_type: request.irrigation(),
            sowing_date: request.sowing_date.clone(),
            district: request.district.clone(),
            previous_crop: request.previous_crop.clone(),
        }
    }

    /// Validate a request and produce the full report.
    pub fn report(&self, request: &AdvisoryRequest) -> Result<AdvisoryReport, AdvisoryError> {
        request.validate(self.reference)?;

        let crop = self
            .reference
            .crop(&request.crop)
            .ok_or_else(|| AdvisoryError::UnknownCrop(request.crop.clone()))?;

        if !crop.has_variety(&request.variety) {
            tracing::warn!(
                crop = %crop.name,
                variety = %request.variety,
                "Variety not in reference table"
            );
        }

        let soil = self.resolve_soil(&request.soil, &request.district);
        let fertilizer = calculate_fertilizer_recommendation(&soil, &crop.ideal_npk, request.farm_size_acres);
        let input = self.prediction_input(request, soil);
        let yield_prediction = predict_yield(&input, &crop.yield_range);
        let farm_totals = FarmTotals::compute(&fertilizer, &yield_prediction, request.farm_size_acres);
        let advisory = generate_advisory(request, Some(crop));

        tracing::info!(
            crop = %crop.name,
            district = %request.district,
            source = %soil.source,
            predicted = yield_prediction.predicted_yield_quintal_per_acre,
            "Advisory report ready"
        );

        Ok(AdvisoryReport {
            crop: crop.name.clone(),
            variety: request.variety.clone(),
            district: request.district.clone(),
            farm_size_acres: request.farm_size_acres,
            soil,
            fertilizer,
            yield_prediction,
            farm_totals,
            advisory,
        })
    }
}
