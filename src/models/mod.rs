mod nutrients;
mod crop;
mod request;

pub use nutrients::{CropRequirement, Nutrient, NpkValues, SoilDataSource, SoilNutrientReading};
pub use crop::{CropProfile, IrrigationType, WaterRequirement, YieldRange};
pub use request::{AdvisoryRequest, SoilInput, YieldPredictionInput};
