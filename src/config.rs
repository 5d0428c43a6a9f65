use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::AdvisoryError;
use crate::reference::{ReferenceData, SoilTypeTable};

fn default_log_level() -> String {
    "warn".to_string()
}

/// Application settings, read from a TOML file.
///
/// ```toml
/// reference_data = "data/reference.toml"
/// soil_npk = "data/soil_npk.json"
/// log_level = "info"
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// TOML file replacing the built-in reference tables.
    pub reference_data: Option<PathBuf>,
    /// JSON soil-type NPK map loaded at startup.
    pub soil_npk: Option<PathBuf>,
    /// Default tracing filter when `RUST_LOG` is not set.
    pub log_level: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            reference_data: None,
            soil_npk: None,
            log_level: default_log_level(),
        }
    }
}

impl AppConfig {
    pub fn from_toml_str(content: &str) -> Result<Self, AdvisoryError> {
        Ok(toml::from_str(content)?)
    }

    /// Read a config file. Relative data paths are resolved against the
    /// file's directory.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, AdvisoryError> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)?;
        let mut config = Self::from_toml_str(&content)?;
        if let Some(base) = path.parent() {
            config.reference_data = config.reference_data.map(|p| base.join(p));
            config.soil_npk = config.soil_npk.map(|p| base.join(p));
        }
        Ok(config)
    }

    /// Load the reference tables this config points at.
    ///
    /// A broken reference file is an error; a broken soil NPK file only
    /// falls back to the built-in soil map.
    pub fn load_reference_data(&self) -> Result<ReferenceData, AdvisoryError> {
        let data = match &self.reference_data {
            Some(path) => ReferenceData::from_toml_file(path)?,
            None => ReferenceData::builtin(),
        };
        Ok(match &self.soil_npk {
            Some(path) => data.with_soil_npk(SoilTypeTable::load(path)),
            None => data,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::NpkValues;

    #[test]
    fn test_defaults() {
        let config = AppConfig::default();
        assert!(config.reference_data.is_none());
        assert!(config.soil_npk.is_none());
        assert_eq!(config.log_level, "warn");
        assert_eq!(AppConfig::from_toml_str("").unwrap(), config);
    }

    #[test]
    fn test_parse_partial() {
        let config = AppConfig::from_toml_str("log_level = \"debug\"").unwrap();
        assert_eq!(config.log_level, "debug");
        assert!(config.soil_npk.is_none());
    }

    #[test]
    fn test_parse_error() {
        assert!(matches!(
            AppConfig::from_toml_str("log_level = 3"),
            Err(AdvisoryError::Toml(_))
        ));
    }

    #[test]
    fn test_from_file_resolves_relative_paths() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(
            dir.path().join("soil.json"),
            r#"{"Laterite": {"N": 180, "P": 9, "K": 120}}"#,
        )
        .unwrap();
        let config_path = dir.path().join("advisor.toml");
        std::fs::write(&config_path, "soil_npk = \"soil.json\"\n").unwrap();

        let config = AppConfig::from_file(&config_path).unwrap();
        assert_eq!(config.soil_npk, Some(dir.path().join("soil.json")));

        let data = config.load_reference_data().unwrap();
        assert_eq!(
            data.soil_type_default_npk("Laterite"),
            NpkValues::new(180.0, 9.0, 120.0)
        );
        assert_eq!(data.crops().len(), 8);
    }

    #[test]
    fn test_missing_soil_file_falls_back() {
        let config = AppConfig {
            soil_npk: Some(PathBuf::from("/nonexistent/soil.json")),
            ..AppConfig::default()
        };
        let data = config.load_reference_data().unwrap();
        assert_eq!(data.soil_npk(), &SoilTypeTable::fallback());
    }

    #[test]
    fn test_missing_reference_file_is_error() {
        let config = AppConfig {
            reference_data: Some(PathBuf::from("/nonexistent/reference.toml")),
            ..AppConfig::default()
        };
        assert!(matches!(
            config.load_reference_data(),
            Err(AdvisoryError::Io(_))
        ));
    }
}
