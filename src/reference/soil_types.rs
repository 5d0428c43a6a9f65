use std::collections::BTreeMap;
use std::path::Path;

use serde::{Deserialize, Serialize};

use super::builtin::FALLBACK_SOIL_NPK;
use crate::error::AdvisoryError;
use crate::models::NpkValues;

/// Default NPK per soil type, normally loaded from a JSON map at startup.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SoilTypeTable {
    entries: BTreeMap<String, NpkValues>,
}

impl SoilTypeTable {
    /// The small in-memory table used when nothing else is available.
    pub fn fallback() -> Self {
        FALLBACK_SOIL_NPK
            .iter()
            .map(|(name, npk)| (name.to_string(), *npk))
            .collect()
    }

    /// Parse a JSON object of `soil type -> {N, P, K}`.
    pub fn from_json_str(content: &str) -> Result<Self, AdvisoryError> {
        Ok(serde_json::from_str(content)?)
    }

    /// Read the table from a JSON file.
    pub fn try_load(path: impl AsRef<Path>) -> Result<Self, AdvisoryError> {
        let content = std::fs::read_to_string(path.as_ref())?;
        Self::from_json_str(&content)
    }

    /// Read the table from a JSON file, falling back to [`SoilTypeTable::fallback`]
    /// on any failure.
    pub fn load(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref();
        match Self::try_load(path) {
            Ok(table) => {
                tracing::info!(
                    path = %path.display(),
                    soil_types = ?table.names().collect::<Vec<_>>(),
                    "Loaded soil NPK mapping"
                );
                table
            }
            Err(e) => {
                tracing::warn!(
                    path = %path.display(),
                    error = %e,
                    "Could not load soil NPK mapping; using fallback table"
                );
                Self::fallback()
            }
        }
    }

    /// Default NPK for a soil type; all zeros when the type is empty or unknown.
    pub fn get(&self, soil_type: &str) -> NpkValues {
        if soil_type.trim().is_empty() {
            return NpkValues::default();
        }
        match self.entries.get(soil_type) {
            Some(npk) => *npk,
            None => {
                tracing::warn!(soil_type, "Unknown soil type; using zero NPK");
                NpkValues::default()
            }
        }
    }

    pub fn contains(&self, soil_type: &str) -> bool {
        self.entries.contains_key(soil_type)
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl FromIterator<(String, NpkValues)> for SoilTypeTable {
    fn from_iter<I: IntoIterator<Item = (String, NpkValues)>>(iter: I) -> Self {
        Self {
            entries: iter.into_iter().collect(),
        }
    }
}
