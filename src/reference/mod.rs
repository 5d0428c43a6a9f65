mod builtin;
mod soil_types;

use std::collections::{BTreeMap, HashSet};
use std::path::Path;

use serde::Deserialize;

use crate::error::AdvisoryError;
use crate::models::{CropProfile, CropRequirement, NpkValues, YieldRange};

pub use soil_types::SoilTypeTable;

/// Ideal NPK used when a crop is not in the table.
pub const DEFAULT_IDEAL_NPK: CropRequirement = CropRequirement::from_static(100.0, 50.0, 50.0);
/// Yield range used when a crop is not in the table.
pub const DEFAULT_YIELD_RANGE: YieldRange = YieldRange::new(10.0, 20.0);
/// District NPK used when a district is not in the table.
pub const DEFAULT_DISTRICT_NPK: NpkValues = NpkValues::new(240.0, 18.0, 175.0);

/// Read-only lookup tables: crops, district averages, irrigation and soil types.
///
/// Built once at startup and passed by reference to whatever needs it.
#[derive(Debug, Clone)]
pub struct ReferenceData {
    crops: Vec<CropProfile>,
    districts: Vec<(String, NpkValues)>,
    irrigation_types: Vec<String>,
    soil_types: Vec<String>,
    soil_npk: SoilTypeTable,
}

/// On-disk TOML layout for a full reference table set.
#[derive(Debug, Deserialize)]
struct ReferenceFile {
    crops: Vec<CropProfile>,
    #[serde(default)]
    districts: BTreeMap<String, NpkValues>,
    #[serde(default)]
    irrigation_types: Vec<String>,
    #[serde(default)]
    soil_types: Vec<String>,
    #[serde(default)]
    soil_npk: Option<SoilTypeTable>,
}

impl Default for ReferenceData {
    fn default() -> Self {
        Self::builtin()
    }
}

impl ReferenceData {
    /// The compiled-in Odisha tables, with the fallback soil-type map.
    pub fn builtin() -> Self {
        Self {
            crops: builtin::crops(),
            districts: builtin::districts(),
            irrigation_types: builtin::irrigation_types(),
            soil_types: builtin::soil_types(),
            soil_npk: SoilTypeTable::fallback(),
        }
    }

    /// Parse a complete table set from TOML. Crop requirements are validated.
    pub fn from_toml_str(content: &str) -> Result<Self, AdvisoryError> {
        let file: ReferenceFile = toml::from_str(content)?;
        if file.crops.is_empty() {
            return Err(AdvisoryError::InvalidReference(
                "reference data must define at least one crop".to_string(),
            ));
        }
        let mut seen = HashSet::new();
        for crop in &file.crops {
            if !seen.insert(crop.name.to_lowercase()) {
                return Err(AdvisoryError::InvalidReference(format!(
                    "duplicate crop '{}'",
                    crop.name
                )));
            }
            if crop.yield_range.min > crop.yield_range.max {
                return Err(AdvisoryError::InvalidReference(format!(
                    "crop '{}': yield range min {} exceeds max {}",
                    crop.name, crop.yield_range.min, crop.yield_range.max
                )));
            }
        }
        Ok(Self {
            crops: file.crops,
            districts: file.districts.into_iter().collect(),
            irrigation_types: file.irrigation_types,
            soil_types: file.soil_types,
            soil_npk: file.soil_npk.unwrap_or_else(SoilTypeTable::fallback),
        })
    }

    /// Load a complete table set from a TOML file.
    pub fn from_toml_file(path: impl AsRef<Path>) -> Result<Self, AdvisoryError> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)?;
        let data = Self::from_toml_str(&content)?;
        tracing::info!(
            path = %path.display(),
            crops = data.crops.len(),
            districts = data.districts.len(),
            "Loaded reference data"
        );
        Ok(data)
    }

    /// Replace the soil-type default table.
    pub fn with_soil_npk(mut self, soil_npk: SoilTypeTable) -> Self {
        self.soil_npk = soil_npk;
        self
    }

    /// Look up a crop by name (case-insensitive).
    pub fn crop(&self, name: &str) -> Option<&CropProfile> {
        let name = name.trim();
        self.crops.iter().find(|c| c.name.eq_ignore_ascii_case(name))
    }

    pub fn crops(&self) -> &[CropProfile] {
        &self.crops
    }

    /// Varieties of a crop; empty when the crop is unknown.
    pub fn varieties(&self, crop: &str) -> &[String] {
        self.crop(crop).map(|c| c.varieties.as_slice()).unwrap_or(&[])
    }

    /// Ideal NPK for a crop, or [`DEFAULT_IDEAL_NPK`] when unknown.
    pub fn ideal_npk(&self, crop: &str) -> CropRequirement {
        match self.crop(crop) {
            Some(c) => c.ideal_npk,
            None => {
                tracing::warn!(crop, "Unknown crop; using default ideal NPK");
                DEFAULT_IDEAL_NPK
            }
        }
    }

    /// Yield range for a crop, or [`DEFAULT_YIELD_RANGE`] when unknown.
    pub fn yield_range(&self, crop: &str) -> YieldRange {
        match self.crop(crop) {
            Some(c) => c.yield_range,
            None => {
                tracing::warn!(crop, "Unknown crop; using default yield range");
                DEFAULT_YIELD_RANGE
            }
        }
    }

    /// Average soil NPK for a district, or [`DEFAULT_DISTRICT_NPK`] when unknown.
    ///
    /// ```
    /// use crop_advisor::reference::{ReferenceData, DEFAULT_DISTRICT_NPK};
    ///
    /// let data = ReferenceData::builtin();
    /// assert_eq!(data.district_average_npk("Cuttack").n, 280.0);
    /// assert_eq!(data.district_average_npk("Atlantis"), DEFAULT_DISTRICT_NPK);
    /// ```
    pub fn district_average_npk(&self, district: &str) -> NpkValues {
        let district = district.trim();
        match self
            .districts
            .iter()
            .find(|(name, _)| name.eq_ignore_ascii_case(district))
        {
            Some((_, npk)) => *npk,
            None => {
                tracing::warn!(district, "Unknown district; using default NPK");
                DEFAULT_DISTRICT_NPK
            }
        }
    }

    pub fn districts(&self) -> &[(String, NpkValues)] {
        &self.districts
    }

    pub fn irrigation_types(&self) -> &[String] {
        &self.irrigation_types
    }

    pub fn soil_types(&self) -> &[String] {
        &self.soil_types
    }

    /// Default NPK for a soil type (zeros when unknown).
    pub fn soil_type_default_npk(&self, soil_type: &str) -> NpkValues {
        self.soil_npk.get(soil_type)
    }

    pub fn soil_npk(&self) -> &SoilTypeTable {
        &self.soil_npk
    }
}
