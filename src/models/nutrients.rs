use serde::{Deserialize, Serialize};

use crate::error::AdvisoryError;

/// One of the three primary macronutrients.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Nutrient {
    #[serde(rename = "N")]
    Nitrogen,
    #[serde(rename = "P")]
    Phosphorus,
    #[serde(rename = "K")]
    Potassium,
}

impl Nutrient {
    pub const ALL: [Nutrient; 3] = [Nutrient::Nitrogen, Nutrient::Phosphorus, Nutrient::Potassium];

    /// Element symbol ("N", "P", "K").
    pub fn symbol(&self) -> &'static str {
        match self {
            Nutrient::Nitrogen => "N",
            Nutrient::Phosphorus => "P",
            Nutrient::Potassium => "K",
        }
    }
}

impl std::fmt::Display for Nutrient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Nutrient::Nitrogen => write!(f, "Nitrogen"),
            Nutrient::Phosphorus => write!(f, "Phosphorus"),
            Nutrient::Potassium => write!(f, "Potassium"),
        }
    }
}

/// A triple of N, P, K amounts in kg/ha.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct NpkValues {
    #[serde(rename = "N")]
    pub n: f64,
    #[serde(rename = "P")]
    pub p: f64,
    #[serde(rename = "K")]
    pub k: f64,
}

impl NpkValues {
    pub const fn new(n: f64, p: f64, k: f64) -> Self {
        Self { n, p, k }
    }

    pub fn get(&self, nutrient: Nutrient) -> f64 {
        match nutrient {
            Nutrient::Nitrogen => self.n,
            Nutrient::Phosphorus => self.p,
            Nutrient::Potassium => self.k,
        }
    }

    pub fn is_zero(&self) -> bool {
        self.n == 0.0 && self.p == 0.0 && self.k == 0.0
    }
}

/// Where a soil nutrient reading came from. Drives prediction confidence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SoilDataSource {
    SoilReport,
    SoilImage,
    #[default]
    Manual,
    DistrictAverage,
}

impl SoilDataSource {
    /// Confidence points added to (or removed from) a yield prediction.
    pub fn confidence_adjustment(&self) -> i32 {
        match self {
            SoilDataSource::SoilReport => 10,
            SoilDataSource::Manual => 5,
            SoilDataSource::SoilImage => 0,
            SoilDataSource::DistrictAverage => -5,
        }
    }
}

impl std::fmt::Display for SoilDataSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SoilDataSource::SoilReport => write!(f, "soil_report"),
            SoilDataSource::SoilImage => write!(f, "soil_image"),
            SoilDataSource::Manual => write!(f, "manual"),
            SoilDataSource::DistrictAverage => write!(f, "district_average"),
        }
    }
}

impl std::str::FromStr for SoilDataSource {
    type Err = AdvisoryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().replace(['-', ' '], "_").as_str() {
            "soil_report" | "report" => Ok(SoilDataSource::SoilReport),
            "soil_image" | "image" => Ok(SoilDataSource::SoilImage),
            "manual" => Ok(SoilDataSource::Manual),
            "district_average" | "district" => Ok(SoilDataSource::DistrictAverage),
            _ => Err(AdvisoryError::ParseError(format!(
                "Unknown soil data source: '{s}'"
            ))),
        }
    }
}

/// Available soil nutrients at the time of calculation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SoilNutrientReading {
    #[serde(flatten)]
    pub npk: NpkValues,
    pub source: SoilDataSource,
}

impl SoilNutrientReading {
    pub fn new(n: f64, p: f64, k: f64, source: SoilDataSource) -> Self {
        Self {
            npk: NpkValues::new(n, p, k),
            source,
        }
    }
}

/// Agronomic ideal nutrient level for a crop (kg/ha).
///
/// Every component is guaranteed finite and strictly positive, so status
/// ratios computed against it never divide by zero.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "NpkValues", into = "NpkValues")]
pub struct CropRequirement {
    npk: NpkValues,
}

impl CropRequirement {
    /// Build a requirement, rejecting zero, negative, or non-finite values.
    pub fn new(n: f64, p: f64, k: f64) -> Result<Self, AdvisoryError> {
        let npk = NpkValues::new(n, p, k);
        for nutrient in Nutrient::ALL {
            let value = npk.get(nutrient);
            if !value.is_finite() || value <= 0.0 {
                return Err(AdvisoryError::InvalidReference(format!(
                    "{} requirement must be positive, got {value}",
                    nutrient.symbol()
                )));
            }
        }
        Ok(Self { npk })
    }

    /// Const constructor for compiled-in tables. Values must be positive.
    pub(crate) const fn from_static(n: f64, p: f64, k: f64) -> Self {
        Self {
            npk: NpkValues::new(n, p, k),
        }
    }

    pub fn n(&self) -> f64 {
        self.npk.n
    }

    pub fn p(&self) -> f64 {
        self.npk.p
    }

    pub fn k(&self) -> f64 {
        self.npk.k
    }

    pub fn get(&self, nutrient: Nutrient) -> f64 {
        self.npk.get(nutrient)
    }

    pub fn as_npk(&self) -> NpkValues {
        self.npk
    }
}

impl TryFrom<NpkValues> for CropRequirement {
    type Error = AdvisoryError;

    fn try_from(npk: NpkValues) -> Result<Self, Self::Error> {
        CropRequirement::new(npk.n, npk.p, npk.k)
    }
}

impl From<CropRequirement> for NpkValues {
    fn from(req: CropRequirement) -> Self {
        req.npk
    }
}
