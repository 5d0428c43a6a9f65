use serde::{Deserialize, Serialize};

use crate::error::AdvisoryError;
use crate::models::{CropRequirement, Nutrient, NpkValues, SoilNutrientReading};

use super::round1;

/// Nitrogen fraction of urea.
pub const UREA_N_CONTENT: f64 = 0.46;
/// P2O5 fraction of DAP.
pub const DAP_P2O5_CONTENT: f64 = 0.46;
/// Nitrogen fraction of DAP.
pub const DAP_N_CONTENT: f64 = 0.18;
/// K2O fraction of MOP.
pub const MOP_K2O_CONTENT: f64 = 0.60;
/// Elemental P to P2O5.
pub const P_TO_P2O5: f64 = 2.29;
/// Elemental K to K2O.
pub const K_TO_K2O: f64 = 1.21;
/// Acres per hectare.
pub const ACRES_PER_HECTARE: f64 = 2.471;

/// Below this available/required ratio a nutrient is deficient.
pub const DEFICIENT_RATIO: f64 = 0.8;
/// Above this available/required ratio a nutrient is in excess.
pub const EXCESS_RATIO: f64 = 1.2;

/// Soil sufficiency of one nutrient relative to the crop's requirement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum NutrientStatus {
    Deficient,
    Adequate,
    Excess,
}

impl NutrientStatus {
    /// Classify `available` against `required`. `required` must be positive.
    pub fn classify(available: f64, required: f64) -> Self {
        debug_assert!(required > 0.0, "nutrient requirement must be positive");
        let ratio = available / required;
        if ratio < DEFICIENT_RATIO {
            NutrientStatus::Deficient
        } else if ratio > EXCESS_RATIO {
            NutrientStatus::Excess
        } else {
            NutrientStatus::Adequate
        }
    }
}

impl std::fmt::Display for NutrientStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            NutrientStatus::Deficient => write!(f, "Deficient"),
            NutrientStatus::Adequate => write!(f, "Adequate"),
            NutrientStatus::Excess => write!(f, "Excess"),
        }
    }
}

impl std::str::FromStr for NutrientStatus {
    type Err = AdvisoryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "deficient" => Ok(NutrientStatus::Deficient),
            "adequate" => Ok(NutrientStatus::Adequate),
            "excess" => Ok(NutrientStatus::Excess),
            _ => Err(AdvisoryError::ParseError(format!(
                "Unknown nutrient status: '{s}'"
            ))),
        }
    }
}

/// Per-nutrient status flags.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct NutrientStatusSet {
    #[serde(rename = "N")]
    pub n: NutrientStatus,
    #[serde(rename = "P")]
    pub p: NutrientStatus,
    #[serde(rename = "K")]
    pub k: NutrientStatus,
}

impl NutrientStatusSet {
    pub fn get(&self, nutrient: Nutrient) -> NutrientStatus {
        match nutrient {
            Nutrient::Nitrogen => self.n,
            Nutrient::Phosphorus => self.p,
            Nutrient::Potassium => self.k,
        }
    }
}

/// Product dosage in both area units.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Dosage {
    pub kg_per_acre: f64,
    pub kg_per_hectare: f64,
}

impl Dosage {
    fn from_hectare(kg_per_hectare: f64) -> Self {
        Self {
            kg_per_acre: round1(kg_per_hectare / ACRES_PER_HECTARE),
            kg_per_hectare: round1(kg_per_hectare),
        }
    }
}

/// Fertilizer products the calculator prescribes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Product {
    Urea,
    Dap,
    Mop,
}

impl Product {
    pub const ALL: [Product; 3] = [Product::Urea, Product::Dap, Product::Mop];

    pub fn label(&self) -> &'static str {
        match self {
            Product::Urea => "Urea",
            Product::Dap => "DAP",
            Product::Mop => "MOP",
        }
    }

    /// Nutrient grade printed on the bag.
    pub fn grade(&self) -> &'static str {
        match self {
            Product::Urea => "46% N",
            Product::Dap => "18% N, 46% P2O5",
            Product::Mop => "60% K2O",
        }
    }
}

impl std::fmt::Display for Product {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Result of the fertilizer calculation. All numbers are rounded to one decimal.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FertilizerRecommendation {
    pub urea: Dosage,
    pub dap: Dosage,
    pub mop: Dosage,
    pub nutrient_deficit: NpkValues,
    pub nutrient_status: NutrientStatusSet,
    pub warnings: Vec<String>,
}

impl FertilizerRecommendation {
    pub fn dosage(&self, product: Product) -> Dosage {
        match product {
            Product::Urea => self.urea,
            Product::Dap => self.dap,
            Product::Mop => self.mop,
        }
    }
}

fn excess_warning(nutrient: Nutrient, soil_value: f64) -> String {
    match nutrient {
        Nutrient::Nitrogen => format!(
            "⚠️ Nitrogen level is high ({soil_value} kg/ha). Reduce N fertilizer to prevent environmental damage."
        ),
        Nutrient::Phosphorus => format!(
            "⚠️ Phosphorus level is high ({soil_value} kg/ha). Excess P can lead to water pollution."
        ),
        Nutrient::Potassium => format!(
            "⚠️ Potassium level is high ({soil_value} kg/ha). Consider reducing K application."
        ),
    }
}

/// Convert soil nutrient deficits into urea, DAP and MOP dosages.
///
/// DAP is sized first from the phosphorus deficit; the nitrogen it carries
/// is subtracted before sizing urea. `farm_size_acres` does not enter the
/// per-area math; farm totals are computed by the caller.
///
/// ```
/// use crop_advisor::analysis::calculate_fertilizer_recommendation;
/// use crop_advisor::models::{CropRequirement, SoilDataSource, SoilNutrientReading};
///
/// let soil = SoilNutrientReading::new(0.0, 0.0, 0.0, SoilDataSource::SoilReport);
/// let rice = CropRequirement::new(120.0, 60.0, 60.0).unwrap();
/// let rec = calculate_fertilizer_recommendation(&soil, &rice, 1.0);
/// assert_eq!(rec.dap.kg_per_hectare, 298.7);
/// assert_eq!(rec.urea.kg_per_hectare, 144.0);
/// assert_eq!(rec.mop.kg_per_hectare, 121.0);
/// ```
pub fn calculate_fertilizer_recommendation(
    soil: &SoilNutrientReading,
    requirement: &CropRequirement,
    farm_size_acres: f64,
) -> FertilizerRecommendation {
    let available = soil.npk;

    let n_deficit = (requirement.n() - available.n).max(0.0);
    let p_deficit = (requirement.p() - available.p).max(0.0);
    let k_deficit = (requirement.k() - available.k).max(0.0);

    let nutrient_status = NutrientStatusSet {
        n: NutrientStatus::classify(available.n, requirement.n()),
        p: NutrientStatus::classify(available.p, requirement.p()),
        k: NutrientStatus::classify(available.k, requirement.k()),
    };

    let warnings: Vec<String> = Nutrient::ALL
        .iter()
        .filter(|n| nutrient_status.get(**n) == NutrientStatus::Excess)
        .map(|n| excess_warning(*n, available.get(*n)))
        .collect();

    let p2o5_required = p_deficit * P_TO_P2O5;
    let k2o_required = k_deficit * K_TO_K2O;

    // DAP first: it is the only P source and also carries N.
    let dap_kg_ha = p2o5_required / DAP_P2O5_CONTENT;
    let n_from_dap = dap_kg_ha * DAP_N_CONTENT;

    let remaining_n = (n_deficit - n_from_dap).max(0.0);
    let urea_kg_ha = remaining_n / UREA_N_CONTENT;

    let mop_kg_ha = k2o_required / MOP_K2O_CONTENT;

    tracing::debug!(
        n_deficit,
        p_deficit,
        k_deficit,
        n_from_dap,
        urea_kg_ha,
        dap_kg_ha,
        mop_kg_ha,
        farm_size_acres,
        "Computed fertilizer dosages"
    );

    FertilizerRecommendation {
        urea: Dosage::from_hectare(urea_kg_ha),
        dap: Dosage::from_hectare(dap_kg_ha),
        mop: Dosage::from_hectare(mop_kg_ha),
        nutrient_deficit: NpkValues::new(round1(n_deficit), round1(p_deficit), round1(k_deficit)),
        nutrient_status,
        warnings,
    }
}
