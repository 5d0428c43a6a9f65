use chrono::{DateTime, Datelike, NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

use crate::models::{NpkValues, YieldPredictionInput, YieldRange};

use super::round1;

/// Starting confidence before adjustments.
pub const BASE_CONFIDENCE: i32 = 75;
pub const MIN_CONFIDENCE: i32 = 50;
pub const MAX_CONFIDENCE: i32 = 95;

/// Market price used for the economic estimate (INR per quintal).
pub const PRICE_PER_QUINTAL: f64 = 2000.0;
/// Extra cost per acre of balanced fertilization (INR).
pub const ADDITIONAL_FERTILIZER_COST: i64 = 800;

/// Sowing months (0-based: Jun, Jul, Nov, Dec) that earn the timing bonus.
pub const OPTIMAL_SOWING_MONTHS: [u32; 4] = [5, 6, 10, 11];
pub const OPTIMAL_SOWING_FACTOR: f64 = 1.05;
pub const SUBOPTIMAL_SOWING_FACTOR: f64 = 0.95;

pub const ROTATION_FACTOR: f64 = 1.08;
pub const ROTATION_CONFIDENCE_BONUS: i32 = 3;

/// Legume crops whose residue fixes nitrogen for the next season.
pub const LEGUME_CROPS: [&str; 4] = ["green gram", "black gram", "pigeon pea", "groundnut"];

/// True if `crop` is a nitrogen-fixing legume. Local names in parentheses
/// are ignored, so "Green Gram (Moong)" and "green gram" both match.
pub fn is_legume(crop: &str) -> bool {
    let base = crop.split('(').next().unwrap_or("").trim().to_lowercase();
    LEGUME_CROPS.contains(&base.as_str())
}

/// Parse a sowing date and return its 0-based month.
///
/// Accepts `YYYY-MM-DD`, `YYYY-MM-DDTHH:MM:SS`, and RFC 3339 timestamps.
pub fn sowing_month0(sowing_date: &str) -> Option<u32> {
    let s = sowing_date.trim();
    if let Ok(date) = NaiveDate::parse_from_str(s, "%Y-%m-%d") {
        return Some(date.month0());
    }
    if let Ok(dt) = NaiveDateTime::parse_from_str(s, "%Y-%m-%dT%H:%M:%S") {
        return Some(dt.month0());
    }
    DateTime::parse_from_rfc3339(s).ok().map(|dt| dt.month0())
}

/// Nutrient sufficiency multiplier: `0.7 + 0.4 * score`.
///
/// The score is not clamped, so very rich soils push the factor above 1.1.
pub fn nutrient_factor(npk: &NpkValues) -> f64 {
    let score = (npk.n / 250.0 + npk.p / 25.0 + npk.k / 200.0) / 3.0;
    0.7 + score * 0.4
}

/// The individual multipliers that made up a prediction (unrounded).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct YieldFactors {
    pub irrigation: f64,
    pub nutrient: f64,
    pub sowing: f64,
    pub rotation: f64,
    pub multiplier: f64,
}

/// What-if yields relative to the point estimate (quintal/acre).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct YieldScenarios {
    pub n_plus_10: f64,
    pub p_plus_10: f64,
    pub balanced_npk: f64,
}

/// Money figures per acre, whole rupees.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct EconomicAnalysis {
    pub estimated_gain: i64,
    pub additional_cost: i64,
    pub profit_difference: i64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct YieldPrediction {
    pub predicted_yield_quintal_per_acre: f64,
    pub confidence_percent: u8,
    pub yield_range: YieldRange,
    pub scenarios: YieldScenarios,
    pub economic_analysis: EconomicAnalysis,
    pub factors: YieldFactors,
    /// Non-fatal input-quality warnings (e.g. an unreadable sowing date).
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub warnings: Vec<String>,
}

/// Estimate yield with a multiplicative factor model over the crop's base range.
pub fn predict_yield(input: &YieldPredictionInput, base_yield_range: &YieldRange) -> YieldPrediction {
    let mut warnings = Vec::new();
    let mut multiplier = 1.0;
    let mut confidence = BASE_CONFIDENCE;

    let irrigation = input.irrigation_type.yield_factor();
    multiplier *= irrigation;

    let nutrient = nutrient_factor(&input.soil.npk);
    multiplier *= nutrient;

    let sowing = match sowing_month0(&input.sowing_date) {
        Some(month) if OPTIMAL_SOWING_MONTHS.contains(&month) => OPTIMAL_SOWING_FACTOR,
        Some(_) => SUBOPTIMAL_SOWING_FACTOR,
        None => {
            tracing::warn!(
                sowing_date = %input.sowing_date,
                "Unparseable sowing date; treating as non-optimal"
            );
            warnings.push(format!(
                "Sowing date '{}' could not be read; timing treated as non-optimal.",
                input.sowing_date
            ));
            SUBOPTIMAL_SOWING_FACTOR
        }
    };
    multiplier *= sowing;

    let rotation = if is_legume(&input.previous_crop) {
        confidence += ROTATION_CONFIDENCE_BONUS;
        ROTATION_FACTOR
    } else {
        1.0
    };
    multiplier *= rotation;

    let predicted = base_yield_range.midpoint() * multiplier;

    confidence += input.soil.source.confidence_adjustment();
    let confidence = confidence.clamp(MIN_CONFIDENCE, MAX_CONFIDENCE);

    let n_plus_10 = predicted * 1.08;
    let p_plus_10 = predicted * 1.05;
    let balanced = predicted * 1.12;

    let estimated_gain = (balanced - predicted) * PRICE_PER_QUINTAL;

    tracing::debug!(
        crop = %input.crop,
        irrigation,
        nutrient,
        sowing,
        rotation,
        multiplier,
        predicted,
        confidence,
        "Computed yield prediction"
    );

    YieldPrediction {
        predicted_yield_quintal_per_acre: round1(predicted),
        confidence_percent: confidence as u8,
        yield_range: YieldRange::new(round1(predicted * 0.85), round1(predicted * 1.15)),
        scenarios: YieldScenarios {
            n_plus_10: round1(n_plus_10),
            p_plus_10: round1(p_plus_10),
            balanced_npk: round1(balanced),
        },
        economic_analysis: EconomicAnalysis {
            estimated_gain: estimated_gain.round() as i64,
            additional_cost: ADDITIONAL_FERTILIZER_COST,
            profit_difference: (estimated_gain - ADDITIONAL_FERTILIZER_COST as f64).round() as i64,
        },
        factors: YieldFactors {
            irrigation,
            nutrient,
            sowing,
            rotation,
            multiplier,
        },
        warnings,
    }
}
