mod fertilizer;
mod yield_prediction;
mod advisor;

pub use fertilizer::{
    calculate_fertilizer_recommendation, Dosage, FertilizerRecommendation, NutrientStatus,
    NutrientStatusSet, Product, ACRES_PER_HECTARE, DAP_N_CONTENT, DAP_P2O5_CONTENT, K_TO_K2O,
    MOP_K2O_CONTENT, P_TO_P2O5, UREA_N_CONTENT,
};
pub use yield_prediction::{
    is_legume, nutrient_factor, predict_yield, sowing_month0, EconomicAnalysis, YieldFactors,
    YieldPrediction, YieldScenarios, MAX_CONFIDENCE, MIN_CONFIDENCE,
};
pub use advisor::{Advisor, AdvisoryReport, FarmTotals};

/// Round to one decimal place, halves away from zero.
pub fn round1(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}
