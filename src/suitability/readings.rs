//! Soil Readings definition and sample readings
//!
//! Defines the SoilReadings struct representing a full set of measured soil
//! conditions, plus hardcoded sample readings for prototype validation.

use crate::advisor::SoilSample;
use serde::{Deserialize, Serialize};

/// A full set of soil readings for crop suitability comparison.
///
/// Extends the three-value N-P-K sample with the pH, moisture and
/// temperature measurements the suitability scorer weighs.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SoilReadings {
    /// Soil pH
    pub ph: f64,

    /// Nitrogen reading (N)
    pub nitrogen: f64,

    /// Phosphorus reading (P)
    pub phosphorus: f64,

    /// Potassium reading (K)
    pub potassium: f64,

    /// Soil moisture (%)
    pub moisture: f64,

    /// Soil temperature (°C)
    pub temperature: f64,
}

impl SoilReadings {
    /// The N-P-K subset used by the fixed-threshold advisor
    pub fn npk_sample(&self) -> SoilSample {
        SoilSample::new(self.nitrogen, self.phosphorus, self.potassium)
    }
}

// ============================================================================
// Hardcoded Sample Readings
// ============================================================================

/// Depleted plot - low N and K, matching the reference script's sample run
pub fn depleted_plot() -> SoilReadings {
    SoilReadings {
        ph: 6.2,
        nitrogen: 25.0,
        phosphorus: 40.0,
        potassium: 15.0,
        moisture: 45.0,
        temperature: 22.0,
    }
}

/// Balanced loam - everything in a comfortable range
pub fn balanced_loam() -> SoilReadings {
    SoilReadings {
        ph: 6.5,
        nitrogen: 60.0,
        phosphorus: 35.0,
        potassium: 40.0,
        moisture: 55.0,
        temperature: 24.0,
    }
}

/// Dry alkaline plot - high pH, low moisture
pub fn dry_alkaline_plot() -> SoilReadings {
    SoilReadings {
        ph: 8.1,
        nitrogen: 45.0,
        phosphorus: 25.0,
        potassium: 30.0,
        moisture: 20.0,
        temperature: 31.0,
    }
}

/// Get all sample readings
pub fn sample_readings() -> Vec<SoilReadings> {
    vec![depleted_plot(), balanced_loam(), dry_alkaline_plot()]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::advisor;

    #[test]
    fn test_npk_subset() {
        let readings = depleted_plot();
        let sample = readings.npk_sample();
        assert_eq!(sample.nitrogen, 25.0);
        assert_eq!(sample.phosphorus, 40.0);
        assert_eq!(sample.potassium, 15.0);
    }

    #[test]
    fn test_depleted_plot_matches_reference_run() {
        // The depleted plot reproduces the reference script's advisory output
        let result = advisor::analyze(&depleted_plot().npk_sample());
        assert_eq!(
            result,
            "Low Nitrogen: Apply Urea or Ammonium Nitrate.\nLow Potassium: Apply Potash."
        );
    }

    #[test]
    fn test_balanced_loam_is_optimal() {
        let result = advisor::analyze(&balanced_loam().npk_sample());
        assert_eq!(result, advisor::OPTIMAL_MESSAGE);
    }
}
