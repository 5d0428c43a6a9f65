pub mod advisory;
pub mod analysis;
pub mod config;
pub mod error;
pub mod io;
pub mod models;
pub mod reference;
pub mod visualization;

pub use analysis::{
    calculate_fertilizer_recommendation, predict_yield, Advisor, AdvisoryReport,
    FertilizerRecommendation, YieldPrediction,
};
pub use config::AppConfig;
pub use error::AdvisoryError;
pub use io::ReportWriter;
pub use models::{
    AdvisoryRequest, CropRequirement, IrrigationType, NpkValues, SoilDataSource,
    SoilNutrientReading, YieldPredictionInput,
};
pub use reference::ReferenceData;
