//! NutriRoot Soil Analysis
//!
//! Rust implementation of the NutriRoot soil analysis logic:
//! - `advisor`: fixed-threshold N-P-K fertilizer recommendations
//! - `suitability`: crop suitability scoring against requirement ranges
//!
//! The advisor is a pure function over three readings; the suitability
//! engine extends it with pH, moisture and temperature factors and a
//! built-in crop table.

pub mod advisor;
pub mod suitability;

// Re-export commonly used types
pub use advisor::{analyze, evaluate, NutrientAdvisory, SoilSample};
pub use suitability::{CropMatch, CropRequirements, MatchLevel, SoilReadings};
