//! Range Comparator
//!
//! Core logic for comparing measured soil values against a crop's
//! requirement ranges, plus the penalty curves the scorer subtracts from a
//! perfect score. Penalty weights and caps are carried over literally from
//! the original suggestion engine.

use super::requirements::NutrientRange;

/// Result of comparing a soil value to a crop's requirement range
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RangeFit {
    /// Measured value is below the crop's requirement (value < min)
    BelowRange,

    /// Measured value satisfies the requirement (min <= value <= max)
    WithinRange,

    /// Measured value exceeds the requirement (value > max)
    AboveRange,
}

impl RangeFit {
    /// Simple display text
    pub fn display_text(&self) -> &'static str {
        match self {
            RangeFit::BelowRange => "Below required range",
            RangeFit::WithinRange => "Within required range",
            RangeFit::AboveRange => "Above required range",
        }
    }
}

/// Result of a range comparison with distance context
#[derive(Debug, Clone, Copy)]
pub struct RangeComparison {
    /// Whether the value is below, within, or above the crop's range
    pub fit: RangeFit,

    /// Measured value being compared
    pub local_value: f64,

    /// Crop's lower requirement boundary
    pub min: f64,

    /// Crop's upper requirement boundary
    pub max: f64,

    /// Distance from the violated boundary (0 if within range)
    pub distance_from_range: f64,

    /// Distance as a fraction of the violated boundary (not the range
    /// width); 0 when within range or when the boundary is non-positive
    pub relative_distance: f64,
}

impl RangeComparison {
    /// Check if the measured value satisfies the requirement
    pub fn is_within_range(&self) -> bool {
        self.fit == RangeFit::WithinRange
    }
}

/// Compare a measured soil value against a crop requirement range
pub fn compare_to_range(local: f64, range: &NutrientRange) -> RangeComparison {
    let (fit, distance, relative) = if local < range.min {
        let distance = range.min - local;
        let relative = if range.min > 0.0 {
            distance / range.min
        } else {
            0.0
        };
        (RangeFit::BelowRange, distance, relative)
    } else if local > range.max {
        let distance = local - range.max;
        let relative = if range.max > 0.0 {
            distance / range.max
        } else {
            0.0
        };
        (RangeFit::AboveRange, distance, relative)
    } else {
        (RangeFit::WithinRange, 0.0, 0.0)
    };

    RangeComparison {
        fit,
        local_value: local,
        min: range.min,
        max: range.max,
        distance_from_range: distance,
        relative_distance: relative,
    }
}

// ============================================================================
// Penalty Curves (25% pH, 15% per nutrient, 15% moisture, 15% temperature)
// ============================================================================

/// pH penalty: 15 points per pH unit outside the range, capped at 25
pub fn ph_penalty(comp: &RangeComparison) -> f64 {
    (comp.distance_from_range * 15.0).min(25.0)
}

/// N-P-K penalty: relative deficit scaled to the 15-point nutrient weight.
/// Excess is penalized more gently (10-point cap) than deficit.
pub fn nutrient_penalty(comp: &RangeComparison) -> f64 {
    match comp.fit {
        RangeFit::WithinRange => 0.0,
        RangeFit::BelowRange => (comp.relative_distance * 15.0).min(15.0),
        RangeFit::AboveRange => (comp.relative_distance * 10.0).min(10.0),
    }
}

/// Moisture penalty: relative distance scaled to the 15-point weight
pub fn moisture_penalty(comp: &RangeComparison) -> f64 {
    (comp.relative_distance * 15.0).min(15.0)
}

/// Temperature penalty: 2 points per °C outside the range, capped at 15
pub fn temperature_penalty(comp: &RangeComparison) -> f64 {
    (comp.distance_from_range * 2.0).min(15.0)
}
