//! Crop Requirements - per-crop soil requirement ranges
//!
//! Each crop carries [min, max] ranges for pH, N-P-K, moisture and
//! temperature. A small built-in reference table stands in for the crop
//! library; missing ranges fall back to the permissive 0-1000 default so a
//! sparse crop entry never disqualifies itself.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Permissive fallback range for crops that omit a requirement
pub const DEFAULT_RANGE: NutrientRange = NutrientRange {
    min: 0.0,
    max: 1000.0,
};

/// Errors from the suitability engine
#[derive(Debug, Error)]
pub enum SuitabilityError {
    #[error("unknown crop: {0}")]
    UnknownCrop(String),
}

/// Inclusive [min, max] requirement range
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct NutrientRange {
    pub min: f64,
    pub max: f64,
}

impl NutrientRange {
    pub fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    /// Check whether a value falls inside the range (inclusive)
    pub fn contains(&self, value: f64) -> bool {
        value >= self.min && value <= self.max
    }

    pub fn width(&self) -> f64 {
        self.max - self.min
    }
}

impl Default for NutrientRange {
    fn default() -> Self {
        DEFAULT_RANGE
    }
}

/// Soil requirement profile for one crop
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CropRequirements {
    /// Crop display name (e.g., "Tomato")
    pub name: String,

    /// Short growing note for display
    pub description: String,

    // ========================================================================
    // Requirement ranges
    // ========================================================================
    #[serde(default)]
    pub ph: NutrientRange,

    #[serde(default)]
    pub nitrogen: NutrientRange,

    #[serde(default)]
    pub phosphorus: NutrientRange,

    #[serde(default)]
    pub potassium: NutrientRange,

    /// Soil moisture (%)
    #[serde(default)]
    pub moisture: NutrientRange,

    /// Soil temperature (°C)
    #[serde(default)]
    pub temperature: NutrientRange,
}

// ============================================================================
// Built-in Crop Table
// ============================================================================

/// Built-in reference crops.
///
/// In-memory stand-in for the crop library; ranges are typical field values
/// for each crop, not calibrated agronomic data.
pub fn builtin_crops() -> Vec<CropRequirements> {
    vec![
        CropRequirements {
            name: "Tomato".to_string(),
            description: "Warm-season fruiting crop, heavy feeder".to_string(),
            ph: NutrientRange::new(6.0, 6.8),
            nitrogen: NutrientRange::new(40.0, 80.0),
            phosphorus: NutrientRange::new(25.0, 60.0),
            potassium: NutrientRange::new(30.0, 70.0),
            moisture: NutrientRange::new(40.0, 70.0),
            temperature: NutrientRange::new(18.0, 29.0),
        },
        CropRequirements {
            name: "Maize".to_string(),
            description: "Warm-season cereal, tolerant of a wide pH band".to_string(),
            ph: NutrientRange::new(5.8, 7.0),
            nitrogen: NutrientRange::new(50.0, 100.0),
            phosphorus: NutrientRange::new(20.0, 50.0),
            potassium: NutrientRange::new(25.0, 60.0),
            moisture: NutrientRange::new(35.0, 65.0),
            temperature: NutrientRange::new(16.0, 32.0),
        },
        CropRequirements {
            name: "Potato".to_string(),
            description: "Cool-season tuber, prefers slightly acid soil".to_string(),
            ph: NutrientRange::new(5.0, 6.5),
            nitrogen: NutrientRange::new(30.0, 70.0),
            phosphorus: NutrientRange::new(25.0, 55.0),
            potassium: NutrientRange::new(40.0, 90.0),
            moisture: NutrientRange::new(45.0, 75.0),
            temperature: NutrientRange::new(10.0, 24.0),
        },
        CropRequirements {
            name: "Lettuce".to_string(),
            description: "Cool-season leaf crop, shallow rooted".to_string(),
            ph: NutrientRange::new(6.0, 7.0),
            nitrogen: NutrientRange::new(35.0, 70.0),
            phosphorus: NutrientRange::new(15.0, 40.0),
            potassium: NutrientRange::new(20.0, 50.0),
            moisture: NutrientRange::new(50.0, 80.0),
            temperature: NutrientRange::new(7.0, 21.0),
        },
        CropRequirements {
            name: "Chickpea".to_string(),
            description: "Dryland legume, fixes its own nitrogen".to_string(),
            ph: NutrientRange::new(6.0, 8.0),
            nitrogen: NutrientRange::new(10.0, 40.0),
            phosphorus: NutrientRange::new(20.0, 45.0),
            potassium: NutrientRange::new(20.0, 50.0),
            moisture: NutrientRange::new(20.0, 45.0),
            temperature: NutrientRange::new(15.0, 30.0),
        },
    ]
}

/// Look up a built-in crop by name (case-insensitive)
pub fn find_crop(name: &str) -> Result<CropRequirements, SuitabilityError> {
    builtin_crops()
        .into_iter()
        .find(|c| c.name.eq_ignore_ascii_case(name))
        .ok_or_else(|| SuitabilityError::UnknownCrop(name.to_string()))
}
