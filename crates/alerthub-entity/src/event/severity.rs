//! Event severity enumeration.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Severity of a disaster event.
///
/// Variants are declared in ascending order so the derived `Ord` gives
/// `Low < Moderate < High < Critical`; alert threshold checks rely on
/// that ordering.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub enum SeverityLevel {
    /// Minimal expected impact.
    Low,
    /// Localized impact, monitoring advised.
    Moderate,
    /// Significant impact expected.
    High,
    /// Life-threatening, immediate action required.
    Critical,
}

impl SeverityLevel {
    /// Return the severity as its wire string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Low => "Low",
            Self::Moderate => "Moderate",
            Self::High => "High",
            Self::Critical => "Critical",
        }
    }
}

impl fmt::Display for SeverityLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for SeverityLevel {
    type Err = alerthub_core::AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "low" => Ok(Self::Low),
            "moderate" => Ok(Self::Moderate),
            "high" => Ok(Self::High),
            "critical" => Ok(Self::Critical),
            _ => Err(alerthub_core::AppError::validation(format!(
                "Invalid severity level: '{s}'. Expected one of: Low, Moderate, High, Critical"
            ))),
        }
    }
}
