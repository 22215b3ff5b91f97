//! Soil Advisor - Fixed-threshold N-P-K fertilizer recommendations
//!
//! The original NutriRoot analysis logic: three independent threshold checks
//! over a soil sample's nitrogen, phosphorus and potassium readings, each
//! triggering a canned advisory line when the reading falls below its
//! threshold.
//!
//! The thresholds (30 for N, 20 for P and K) are deliberate literals carried
//! over from the reference implementation; they are not calibrated values.

use serde::{Deserialize, Serialize};
use std::fmt;

// ============================================================================
// Thresholds
// ============================================================================

/// Nitrogen advisory threshold - readings below this trigger the urea advice
pub const NITROGEN_THRESHOLD: f64 = 30.0;

/// Phosphorus advisory threshold
pub const PHOSPHORUS_THRESHOLD: f64 = 20.0;

/// Potassium advisory threshold
pub const POTASSIUM_THRESHOLD: f64 = 20.0;

/// Message returned when no nutrient falls below its threshold
pub const OPTIMAL_MESSAGE: &str = "Soil health is optimal. No fertilizer needed.";

/// A single N-P-K soil sample.
///
/// Values are caller-supplied and unvalidated: negative, zero, or
/// arbitrarily large readings are all accepted.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SoilSample {
    /// Nitrogen reading (N)
    pub nitrogen: f64,

    /// Phosphorus reading (P)
    pub phosphorus: f64,

    /// Potassium reading (K)
    pub potassium: f64,
}

impl SoilSample {
    pub fn new(nitrogen: f64, phosphorus: f64, potassium: f64) -> Self {
        Self {
            nitrogen,
            phosphorus,
            potassium,
        }
    }
}

/// One advisory triggered by a low nutrient reading
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NutrientAdvisory {
    /// Nitrogen below threshold
    LowNitrogen,
    /// Phosphorus below threshold
    LowPhosphorus,
    /// Potassium below threshold
    LowPotassium,
}

impl NutrientAdvisory {
    /// The canned advice line for this advisory
    pub fn advice_text(&self) -> &'static str {
        match self {
            NutrientAdvisory::LowNitrogen => "Low Nitrogen: Apply Urea or Ammonium Nitrate.",
            NutrientAdvisory::LowPhosphorus => "Low Phosphorus: Apply Bone Meal or Superphosphate.",
            NutrientAdvisory::LowPotassium => "Low Potassium: Apply Potash.",
        }
    }
}

impl fmt::Display for NutrientAdvisory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.advice_text())
    }
}

/// Evaluate the three threshold checks in fixed order (N, then P, then K).
///
/// Returns the triggered advisories in evaluation order; empty when the soil
/// is optimal.
pub fn evaluate(sample: &SoilSample) -> Vec<NutrientAdvisory> {
    let mut advisories = Vec::new();

    if sample.nitrogen < NITROGEN_THRESHOLD {
        advisories.push(NutrientAdvisory::LowNitrogen);
    }
    if sample.phosphorus < PHOSPHORUS_THRESHOLD {
        advisories.push(NutrientAdvisory::LowPhosphorus);
    }
    if sample.potassium < POTASSIUM_THRESHOLD {
        advisories.push(NutrientAdvisory::LowPotassium);
    }

    advisories
}

/// Analyze a soil sample and return the recommendation text.
///
/// Pure function: no validation, no error states, no side effects. Zero
/// triggered checks yield the optimal message; otherwise the triggered
/// advice lines joined with a newline, in N/P/K evaluation order.
pub fn analyze(sample: &SoilSample) -> String {
    let advisories = evaluate(sample);

    if advisories.is_empty() {
        OPTIMAL_MESSAGE.to_string()
    } else {
        advisories
            .iter()
            .map(|a| a.advice_text())
            .collect::<Vec<_>>()
            .join("\n")
    }
}

/// Format the analysis header the reference script printed before the
/// recommendation. Kept separate from [`analyze`] so the computation stays
/// pure.
pub fn format_header(sample: &SoilSample) -> String {
    format!(
        "--- NutriRoot Analysis ---\n\
         Nitrogen (N): {}\n\
         Phosphorus (P): {}\n\
         Potassium (K): {}",
        sample.nitrogen, sample.phosphorus, sample.potassium
    )
}
