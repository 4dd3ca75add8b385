//! Hazard type enumeration.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// The category of hazard an event belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DisasterType {
    Flood,
    Earthquake,
    Typhoon,
    Volcano,
    Disease,
    Wildfire,
    Drought,
    Landslide,
    Tsunami,
    #[serde(rename = "Severe Storm")]
    SevereStorm,
}

impl DisasterType {
    /// Return the type as its wire string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Flood => "Flood",
            Self::Earthquake => "Earthquake",
            Self::Typhoon => "Typhoon",
            Self::Volcano => "Volcano",
            Self::Disease => "Disease",
            Self::Wildfire => "Wildfire",
            Self::Drought => "Drought",
            Self::Landslide => "Landslide",
            Self::Tsunami => "Tsunami",
            Self::SevereStorm => "Severe Storm",
        }
    }

    /// All known hazard types, in wire order.
    pub fn all() -> &'static [DisasterType] {
        &[
            Self::Flood,
            Self::Earthquake,
            Self::Typhoon,
            Self::Volcano,
            Self::Disease,
            Self::Wildfire,
            Self::Drought,
            Self::Landslide,
            Self::Tsunami,
            Self::SevereStorm,
        ]
    }
}

impl fmt::Display for DisasterType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for DisasterType {
    type Err = alerthub_core::AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "flood" => Ok(Self::Flood),
            "earthquake" => Ok(Self::Earthquake),
            "typhoon" => Ok(Self::Typhoon),
            "volcano" => Ok(Self::Volcano),
            "disease" => Ok(Self::Disease),
            "wildfire" => Ok(Self::Wildfire),
            "drought" => Ok(Self::Drought),
            "landslide" => Ok(Self::Landslide),
            "tsunami" => Ok(Self::Tsunami),
            "severe storm" => Ok(Self::SevereStorm),
            _ => Err(alerthub_core::AppError::validation(format!(
                "Invalid disaster type: '{s}'"
            ))),
        }
    }
}
