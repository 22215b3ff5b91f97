//! Crop Scorer - suitability scoring of soil readings against crop requirements
//!
//! Scores a crop 0-100 for a set of soil readings by subtracting weighted
//! penalties from a perfect score: pH carries a 25-point weight, each of
//! N-P-K 15 points, moisture 15, temperature 15. Collects at most the first
//! three human-readable reasons behind the score.

use serde::{Deserialize, Serialize};

use super::comparator::{
    compare_to_range, moisture_penalty, nutrient_penalty, ph_penalty, temperature_penalty,
    RangeFit,
};
use super::readings::SoilReadings;
use super::requirements::CropRequirements;

/// Reason threshold for the pH factor: smaller penalties stay silent
const PH_REASON_THRESHOLD: f64 = 5.0;

/// Reason threshold for the remaining factors
const FACTOR_REASON_THRESHOLD: f64 = 3.0;

/// Maximum number of reasons attached to a match
const MAX_REASONS: usize = 3;

/// Qualitative match level derived from the numeric score
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MatchLevel {
    /// Score >= 85
    Excellent,
    /// Score >= 70
    Good,
    /// Score >= 50
    Fair,
    /// Score < 50
    Low,
}

impl MatchLevel {
    pub fn from_score(score: u8) -> Self {
        match score {
            85..=u8::MAX => MatchLevel::Excellent,
            70..=84 => MatchLevel::Good,
            50..=69 => MatchLevel::Fair,
            _ => MatchLevel::Low,
        }
    }

    pub fn display_text(&self) -> &'static str {
        match self {
            MatchLevel::Excellent => "Excellent",
            MatchLevel::Good => "Good",
            MatchLevel::Fair => "Fair",
            MatchLevel::Low => "Low",
        }
    }
}

/// Scored suitability of one crop for a set of soil readings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CropMatch {
    /// Crop display name
    pub crop_name: String,

    /// Suitability score, 0-100
    pub score: u8,

    /// Up to three reasons behind the score, in factor evaluation order
    pub reasons: Vec<String>,

    /// Qualitative level derived from the score
    pub level: MatchLevel,
}

/// Score one crop against the soil readings.
///
/// Factors are evaluated in fixed order (pH, N, P, K, moisture,
/// temperature); only the first three reasons survive, so early factors win
/// the explanation slots.
pub fn score_crop(crop: &CropRequirements, readings: &SoilReadings) -> CropMatch {
    let mut score = 100.0;
    let mut reasons = Vec::new();

    // pH (25-point weight)
    let ph = compare_to_range(readings.ph, &crop.ph);
    match ph.fit {
        RangeFit::WithinRange => reasons.push("Perfect pH match".to_string()),
        RangeFit::BelowRange => {
            let penalty = ph_penalty(&ph);
            score -= penalty;
            if penalty > PH_REASON_THRESHOLD {
                reasons.push("pH is slightly low".to_string());
            }
        }
        RangeFit::AboveRange => {
            let penalty = ph_penalty(&ph);
            score -= penalty;
            if penalty > PH_REASON_THRESHOLD {
                reasons.push("pH is slightly high".to_string());
            }
        }
    }

    // N-P-K (15-point weight each)
    let nutrients = [
        ("Nitrogen", readings.nitrogen, &crop.nitrogen),
        ("Phosphorus", readings.phosphorus, &crop.phosphorus),
        ("Potassium", readings.potassium, &crop.potassium),
    ];

    for (label, value, range) in nutrients {
        let comp = compare_to_range(value, range);
        match comp.fit {
            RangeFit::WithinRange => reasons.push(format!("{} is optimal", label)),
            RangeFit::BelowRange => {
                let penalty = nutrient_penalty(&comp);
                score -= penalty;
                if penalty > FACTOR_REASON_THRESHOLD {
                    reasons.push(format!("{} is too low", label));
                }
            }
            RangeFit::AboveRange => {
                let penalty = nutrient_penalty(&comp);
                score -= penalty;
                if penalty > FACTOR_REASON_THRESHOLD {
                    reasons.push(format!("{} is higher than needed", label));
                }
            }
        }
    }

    // Moisture (15-point weight)
    let moisture = compare_to_range(readings.moisture, &crop.moisture);
    match moisture.fit {
        RangeFit::WithinRange => reasons.push("Moisture level is ideal".to_string()),
        RangeFit::BelowRange => {
            let penalty = moisture_penalty(&moisture);
            score -= penalty;
            if penalty > FACTOR_REASON_THRESHOLD {
                reasons.push("Soil is too dry".to_string());
            }
        }
        RangeFit::AboveRange => {
            let penalty = moisture_penalty(&moisture);
            score -= penalty;
            if penalty > FACTOR_REASON_THRESHOLD {
                reasons.push("Soil is too wet".to_string());
            }
        }
    }

    // Temperature (15-point weight)
    let temperature = compare_to_range(readings.temperature, &crop.temperature);
    match temperature.fit {
        RangeFit::WithinRange => reasons.push("Temperature is optimal".to_string()),
        RangeFit::BelowRange => {
            let penalty = temperature_penalty(&temperature);
            score -= penalty;
            if penalty > FACTOR_REASON_THRESHOLD {
                reasons.push("Temperature is too low".to_string());
            }
        }
        RangeFit::AboveRange => {
            let penalty = temperature_penalty(&temperature);
            score -= penalty;
            if penalty > FACTOR_REASON_THRESHOLD {
                reasons.push("Temperature is too high".to_string());
            }
        }
    }

    let score = score.max(0.0).round() as u8;
    reasons.truncate(MAX_REASONS);

    CropMatch {
        crop_name: crop.name.clone(),
        score,
        reasons,
        level: MatchLevel::from_score(score),
    }
}

/// Score every crop and return the matches sorted by score descending.
///
/// The sort is stable, so ties keep the crop table's order.
pub fn rank_crops(crops: &[CropRequirements], readings: &SoilReadings) -> Vec<CropMatch> {
    let mut matches: Vec<CropMatch> = crops.iter().map(|c| score_crop(c, readings)).collect();
    matches.sort_by(|a, b| b.score.cmp(&a.score));
    matches
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::suitability::readings::{balanced_loam, depleted_plot, dry_alkaline_plot};
    use crate::suitability::requirements::{builtin_crops, find_crop, NutrientRange};

    fn perfect_fit_crop() -> CropRequirements {
        CropRequirements {
            name: "Testcrop".to_string(),
            description: String::new(),
            ph: NutrientRange::new(6.0, 7.0),
            nitrogen: NutrientRange::new(50.0, 70.0),
            phosphorus: NutrientRange::new(30.0, 40.0),
            potassium: NutrientRange::new(30.0, 50.0),
            moisture: NutrientRange::new(50.0, 60.0),
            temperature: NutrientRange::new(20.0, 28.0),
        }
    }

    #[test]
    fn test_perfect_match_scores_100() {
        let m = score_crop(&perfect_fit_crop(), &balanced_loam());
        assert_eq!(m.score, 100);
        assert_eq!(m.level, MatchLevel::Excellent);
        // All factors in range, but only the first three reasons survive
        assert_eq!(
            m.reasons,
            vec!["Perfect pH match", "Nitrogen is optimal", "Phosphorus is optimal"]
        );
    }

    #[test]
    fn test_score_never_exceeds_bounds() {
        let hostile = SoilReadings {
            ph: 1.0,
            nitrogen: 0.0,
            phosphorus: 0.0,
            potassium: 0.0,
            moisture: 0.0,
            temperature: -40.0,
        };
        for crop in builtin_crops() {
            let m = score_crop(&crop, &hostile);
            assert!(m.score <= 100);
        }
    }

    #[test]
    fn test_hostile_readings_rank_low() {
        let hostile = SoilReadings {
            ph: 1.0,
            nitrogen: 0.0,
            phosphorus: 0.0,
            potassium: 0.0,
            moisture: 0.0,
            temperature: -40.0,
        };
        let m = score_crop(&find_crop("Tomato").unwrap(), &hostile);
        // Full penalties: 25 (pH) + 45 (N-P-K) + 15 (moisture) + 15 (temp)
        assert_eq!(m.score, 0);
        assert_eq!(m.level, MatchLevel::Low);
        assert_eq!(m.reasons.len(), 3);
        assert_eq!(m.reasons[0], "pH is slightly low");
    }

    #[test]
    fn test_match_level_boundaries() {
        assert_eq!(MatchLevel::from_score(100), MatchLevel::Excellent);
        assert_eq!(MatchLevel::from_score(85), MatchLevel::Excellent);
        assert_eq!(MatchLevel::from_score(84), MatchLevel::Good);
        assert_eq!(MatchLevel::from_score(70), MatchLevel::Good);
        assert_eq!(MatchLevel::from_score(69), MatchLevel::Fair);
        assert_eq!(MatchLevel::from_score(50), MatchLevel::Fair);
        assert_eq!(MatchLevel::from_score(49), MatchLevel::Low);
        assert_eq!(MatchLevel::from_score(0), MatchLevel::Low);
    }

    #[test]
    fn test_dry_plot_flags_dryness() {
        // Early factors only slightly off (below their reason thresholds),
        // so the moisture reason claims an explanation slot
        let readings = SoilReadings {
            ph: 5.8,
            nitrogen: 30.0,
            phosphorus: 12.0,
            potassium: 18.0,
            moisture: 20.0,
            temperature: 25.0,
        };
        let m = score_crop(&find_crop("Lettuce").unwrap(), &readings);
        assert_eq!(m.reasons[0], "Soil is too dry");
        assert!(m.reasons.contains(&"Temperature is too high".to_string()));
        assert!(m.score < 100);
    }

    #[test]
    fn test_chickpea_tolerates_dry_alkaline_plot() {
        // The dryland legume should beat the thirsty leaf crop on this plot
        let readings = dry_alkaline_plot();
        let chickpea = score_crop(&find_crop("Chickpea").unwrap(), &readings);
        let lettuce = score_crop(&find_crop("Lettuce").unwrap(), &readings);
        assert!(chickpea.score > lettuce.score);
    }

    #[test]
    fn test_rank_crops_sorted_descending() {
        let ranked = rank_crops(&builtin_crops(), &depleted_plot());
        assert_eq!(ranked.len(), builtin_crops().len());
        for pair in ranked.windows(2) {
            assert!(pair[0].score >= pair[1].score);
        }
    }

    #[test]
    fn test_scoring_is_deterministic() {
        let readings = depleted_plot();
        let crops = builtin_crops();
        let a = rank_crops(&crops, &readings);
        let b = rank_crops(&crops, &readings);
        let names_a: Vec<_> = a.iter().map(|m| &m.crop_name).collect();
        let names_b: Vec<_> = b.iter().map(|m| &m.crop_name).collect();
        assert_eq!(names_a, names_b);
    }
}
