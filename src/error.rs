use thiserror::Error;

/// Errors that can occur while building crop advisories.
#[derive(Error, Debug)]
pub enum AdvisoryError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("Parse error: {0}")]
    ParseError(String),

    #[error("Validation error: {0}")]
    ValidationError(String),

    /// Reference tables contain a value the engine cannot work with
    /// (e.g. a zero nutrient requirement).
    #[error("Invalid reference data: {0}")]
    InvalidReference(String),

    #[error("Unknown crop: '{0}'")]
    UnknownCrop(String),
}
