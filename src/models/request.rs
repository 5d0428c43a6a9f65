use serde::{Deserialize, Serialize};

use super::crop::IrrigationType;
use super::nutrients::{SoilDataSource, SoilNutrientReading};
use crate::error::AdvisoryError;
use crate::reference::ReferenceData;

/// Fully assembled input to the yield estimator.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct YieldPredictionInput {
    pub crop: String,
    pub variety: String,
    pub soil: SoilNutrientReading,
    pub farm_size_acres: f64,
    pub irrigation_type: IrrigationType,
    /// Sowing date as entered (`YYYY-MM-DD` or RFC 3339).
    pub sowing_date: String,
    pub district: String,
    pub previous_crop: String,
}

/// Soil section of an advisory request, before defaults are applied.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SoilInput {
    #[serde(default, rename = "N")]
    pub n: Option<f64>,
    #[serde(default, rename = "P")]
    pub p: Option<f64>,
    #[serde(default, rename = "K")]
    pub k: Option<f64>,
    #[serde(default)]
    pub source: SoilDataSource,
    #[serde(default)]
    pub soil_type: Option<String>,
}

impl SoilInput {
    pub fn has_explicit_values(&self) -> bool {
        self.n.is_some() || self.p.is_some() || self.k.is_some()
    }

    /// Reject negative or non-finite readings.
    pub fn validate(&self) -> Result<(), AdvisoryError> {
        for (symbol, value) in [("N", self.n), ("P", self.p), ("K", self.k)] {
            if let Some(v) = value {
                if !v.is_finite() || v < 0.0 {
                    return Err(AdvisoryError::ValidationError(format!(
                        "Soil {symbol} must be non-negative, got {v}"
                    )));
                }
            }
        }
        Ok(())
    }

    /// True when every supplied value is zero (and at least one was supplied).
    pub fn all_supplied_zero(&self) -> bool {
        self.has_explicit_values()
            && [self.n, self.p, self.k]
                .iter()
                .flatten()
                .all(|v| *v == 0.0)
    }
}

fn default_farm_size() -> f64 {
    1.0
}

fn default_previous_crop() -> String {
    "none".to_string()
}

/// Everything the farmer enters in the crop and soil forms.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AdvisoryRequest {
    pub crop: String,
    pub variety: String,
    pub district: String,
    #[serde(default = "default_farm_size")]
    pub farm_size_acres: f64,
    pub sowing_date: String,
    pub irrigation_type: String,
    #[serde(default = "default_previous_crop")]
    pub previous_crop: String,
    #[serde(default)]
    pub soil: SoilInput,
}

impl AdvisoryRequest {
    /// Check the request against the reference tables. Returns the first problem found.
    pub fn validate(&self, reference: &ReferenceData) -> Result<(), AdvisoryError> {
        if self.crop.trim().is_empty() {
            return Err(AdvisoryError::ValidationError(
                "Please select a crop".to_string(),
            ));
        }
        if reference.crop(&self.crop).is_none() {
            return Err(AdvisoryError::UnknownCrop(self.crop.clone()));
        }
        if self.variety.trim().is_empty() {
            return Err(AdvisoryError::ValidationError(
                "Please select a variety".to_string(),
            ));
        }
        if self.district.trim().is_empty() {
            return Err(AdvisoryError::ValidationError(
                "Please select a district".to_string(),
            ));
        }
        if !self.farm_size_acres.is_finite() || self.farm_size_acres <= 0.0 {
            return Err(AdvisoryError::ValidationError(format!(
                "Farm size must be positive, got {}",
                self.farm_size_acres
            )));
        }
        if self.sowing_date.trim().is_empty() {
            return Err(AdvisoryError::ValidationError(
                "Please enter sowing date".to_string(),
            ));
        }
        if self.irrigation_type.trim().is_empty() {
            return Err(AdvisoryError::ValidationError(
                "Please select irrigation type".to_string(),
            ));
        }
        self.soil.validate()
    }

    pub fn irrigation(&self) -> IrrigationType {
        IrrigationType::from(self.irrigation_type.as_str())
    }
}
