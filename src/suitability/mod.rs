//! Crop Suitability Engine
//!
//! Compares a full set of soil readings (pH, N-P-K, moisture, temperature)
//! against per-crop requirement ranges and scores each crop 0-100, with
//! human-readable reasons and a ranked suggestion list.
//!
//! ## Architecture
//! - `readings.rs` - SoilReadings struct + hardcoded sample readings
//! - `requirements.rs` - CropRequirements ranges + built-in crop table
//! - `comparator.rs` - Core range comparison and penalty curves
//! - `scorer.rs` - Per-crop scoring and ranking
//! - `advice.rs` - Markdown suitability report

pub mod readings;
pub mod requirements;
pub mod comparator;
pub mod scorer;
pub mod advice;

// Re-export public API
pub use readings::SoilReadings;
pub use requirements::{CropRequirements, NutrientRange, SuitabilityError, builtin_crops, find_crop};
pub use comparator::{RangeFit, RangeComparison, compare_to_range};
pub use scorer::{CropMatch, MatchLevel, score_crop, rank_crops};
pub use advice::generate_suitability_report;
