// ABOUTME: Elevation levels and their shadow geometry for neumorphic surfaces
// ABOUTME: Fixed lookup table consumed by the shadow composition helpers

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Shadow geometry for a given elevation, in pixels
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShadowConfig {
    pub distance: u32,
    pub blur: u32,
}

/// Elevation levels for neumorphic components
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Elevation {
    Flat,
    Low,
    #[default]
    Medium,
    High,
}

impl Elevation {
    pub const ALL: [Elevation; 4] = [
        Elevation::Flat,
        Elevation::Low,
        Elevation::Medium,
        Elevation::High,
    ];

    /// Shadow distance and blur for this elevation
    pub const fn shadow_config(self) -> ShadowConfig {
        match self {
            Elevation::Flat => ShadowConfig {
                distance: 0,
                blur: 0,
            },
            Elevation::Low => ShadowConfig {
                distance: 3,
                blur: 6,
            },
            Elevation::Medium => ShadowConfig {
                distance: 6,
                blur: 12,
            },
            Elevation::High => ShadowConfig {
                distance: 10,
                blur: 20,
            },
        }
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Elevation::Flat => "flat",
            Elevation::Low => "low",
            Elevation::Medium => "medium",
            Elevation::High => "high",
        }
    }
}

impl fmt::Display for Elevation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Elevation {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "flat" => Ok(Elevation::Flat),
            "low" => Ok(Elevation::Low),
            "medium" => Ok(Elevation::Medium),
            "high" => Ok(Elevation::High),
            _ => Err(format!(
                "Invalid elevation: {s}. Must be one of: flat, low, medium, high"
            )),
        }
    }
}
