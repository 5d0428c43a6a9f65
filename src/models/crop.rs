use serde::{Deserialize, Serialize};

use super::nutrients::CropRequirement;
use crate::error::AdvisoryError;

/// Relative water demand of a crop.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum WaterRequirement {
    Low,
    Medium,
    High,
}

impl std::fmt::Display for WaterRequirement {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            WaterRequirement::Low => write!(f, "Low"),
            WaterRequirement::Medium => write!(f, "Medium"),
            WaterRequirement::High => write!(f, "High"),
        }
    }
}

impl std::str::FromStr for WaterRequirement {
    type Err = AdvisoryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "low" => Ok(WaterRequirement::Low),
            "medium" => Ok(WaterRequirement::Medium),
            "high" => Ok(WaterRequirement::High),
            _ => Err(AdvisoryError::ParseError(format!(
                "Unknown water requirement: '{s}'"
            ))),
        }
    }
}

/// Yield band in quintal per acre.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct YieldRange {
    pub min: f64,
    pub max: f64,
}

impl YieldRange {
    pub const fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    pub fn midpoint(&self) -> f64 {
        (self.min + self.max) / 2.0
    }
}

/// Static agronomic metadata for one crop.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CropProfile {
    pub name: String,
    pub varieties: Vec<String>,
    pub ideal_npk: CropRequirement,
    pub yield_range: YieldRange,
    pub growing_days: u32,
    pub water_requirement: WaterRequirement,
}

impl CropProfile {
    pub fn has_variety(&self, variety: &str) -> bool {
        self.varieties.iter().any(|v| v.eq_ignore_ascii_case(variety))
    }
}

/// Irrigation method. Unrecognised names are kept verbatim as `Other`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum IrrigationType {
    Drip,
    Sprinkler,
    Canal,
    TubeWell,
    BoreWell,
    PondTank,
    Rainfed,
    Other(String),
}

impl IrrigationType {
    /// Known irrigation methods in form display order.
    pub const KNOWN: [IrrigationType; 7] = [
        IrrigationType::Rainfed,
        IrrigationType::Canal,
        IrrigationType::TubeWell,
        IrrigationType::BoreWell,
        IrrigationType::Drip,
        IrrigationType::Sprinkler,
        IrrigationType::PondTank,
    ];

    /// Multiplicative yield factor for this method; 1.0 when unknown.
    pub fn yield_factor(&self) -> f64 {
        match self {
            IrrigationType::Drip => 1.15,
            IrrigationType::Sprinkler => 1.12,
            IrrigationType::Canal => 1.10,
            IrrigationType::TubeWell => 1.08,
            IrrigationType::BoreWell => 1.05,
            IrrigationType::PondTank => 1.03,
            IrrigationType::Rainfed => 0.85,
            IrrigationType::Other(_) => 1.0,
        }
    }

    pub fn is_rainfed(&self) -> bool {
        *self == IrrigationType::Rainfed
    }
}

impl std::fmt::Display for IrrigationType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            IrrigationType::Drip => write!(f, "Drip Irrigation"),
            IrrigationType::Sprinkler => write!(f, "Sprinkler"),
            IrrigationType::Canal => write!(f, "Canal Irrigation"),
            IrrigationType::TubeWell => write!(f, "Tube Well"),
            IrrigationType::BoreWell => write!(f, "Bore Well"),
            IrrigationType::PondTank => write!(f, "Pond/Tank"),
            IrrigationType::Rainfed => write!(f, "Rainfed"),
            IrrigationType::Other(name) => write!(f, "{name}"),
        }
    }
}

impl std::str::FromStr for IrrigationType {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key = s.trim().to_lowercase();
        Ok(match key.as_str() {
            "drip irrigation" | "drip" => IrrigationType::Drip,
            "sprinkler" => IrrigationType::Sprinkler,
            "canal irrigation" | "canal" => IrrigationType::Canal,
            "tube well" | "tubewell" => IrrigationType::TubeWell,
            "bore well" | "borewell" => IrrigationType::BoreWell,
            "pond/tank" | "pond" | "tank" => IrrigationType::PondTank,
            "rainfed" => IrrigationType::Rainfed,
            _ => IrrigationType::Other(s.trim().to_string()),
        })
    }
}

impl From<&str> for IrrigationType {
    fn from(s: &str) -> Self {
        match s.parse() {
            Ok(t) => t,
            Err(never) => match never {},
        }
    }
}

impl Serialize for IrrigationType {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for IrrigationType {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Ok(IrrigationType::from(s.as_str()))
    }
}
