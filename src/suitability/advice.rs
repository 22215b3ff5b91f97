//! Advice Generation
//!
//! Generates a markdown suitability report from soil readings and scored
//! crop matches, folding in the fixed-threshold fertilizer advisory.

use crate::advisor;
use super::readings::SoilReadings;
use super::scorer::CropMatch;

/// Generate the complete suitability report for a set of readings
pub fn generate_suitability_report(readings: &SoilReadings, matches: &[CropMatch]) -> String {
    let mut lines = Vec::new();

    lines.push("# Soil Suitability Report".to_string());
    lines.push(String::new());

    lines.push(generate_readings_section(readings));
    lines.push(String::new());

    lines.push(generate_fertilizer_section(readings));
    lines.push(String::new());

    lines.push(generate_crop_section(matches));

    lines.join("\n")
}

/// Readings table section
fn generate_readings_section(readings: &SoilReadings) -> String {
    let mut lines = Vec::new();

    lines.push("## Measured Conditions".to_string());
    lines.push(String::new());
    lines.push(format!("- pH: {:.1}", readings.ph));
    lines.push(format!("- Nitrogen (N): {}", readings.nitrogen));
    lines.push(format!("- Phosphorus (P): {}", readings.phosphorus));
    lines.push(format!("- Potassium (K): {}", readings.potassium));
    lines.push(format!("- Moisture: {}%", readings.moisture));
    lines.push(format!("- Temperature: {}°C", readings.temperature));

    lines.join("\n")
}

/// Fertilizer section: the N-P-K advisory lines, one bullet each
fn generate_fertilizer_section(readings: &SoilReadings) -> String {
    let mut lines = Vec::new();

    lines.push("## Fertilizer Recommendation".to_string());
    lines.push(String::new());

    let advisories = advisor::evaluate(&readings.npk_sample());
    if advisories.is_empty() {
        lines.push(advisor::OPTIMAL_MESSAGE.to_string());
    } else {
        for advisory in advisories {
            lines.push(format!("- {}", advisory.advice_text()));
        }
    }

    lines.join("\n")
}

/// Ranked crop section
fn generate_crop_section(matches: &[CropMatch]) -> String {
    let mut lines = Vec::new();

    lines.push("## Crop Suggestions".to_string());
    lines.push(String::new());

    if matches.is_empty() {
        lines.push("No crops available to score.".to_string());
        return lines.join("\n");
    }

    for (rank, m) in matches.iter().enumerate() {
        lines.push(format!(
            "{}. **{}** - {}% match ({})",
            rank + 1,
            m.crop_name,
            m.score,
            m.level.display_text()
        ));
        for reason in &m.reasons {
            lines.push(format!("   - {}", reason));
        }
    }

    lines.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::suitability::readings::{balanced_loam, depleted_plot};
    use crate::suitability::requirements::builtin_crops;
    use crate::suitability::scorer::rank_crops;

    #[test]
    fn test_report_structure() {
        let readings = depleted_plot();
        let matches = rank_crops(&builtin_crops(), &readings);
        let report = generate_suitability_report(&readings, &matches);

        assert!(report.starts_with("# Soil Suitability Report"));
        assert!(report.contains("## Measured Conditions"));
        assert!(report.contains("## Fertilizer Recommendation"));
        assert!(report.contains("## Crop Suggestions"));
    }

    #[test]
    fn test_depleted_plot_report_carries_advisories() {
        let readings = depleted_plot();
        let report = generate_suitability_report(&readings, &[]);
        assert!(report.contains("- Low Nitrogen: Apply Urea or Ammonium Nitrate."));
        assert!(report.contains("- Low Potassium: Apply Potash."));
        assert!(!report.contains("Low Phosphorus"));
    }

    #[test]
    fn test_optimal_plot_report() {
        let readings = balanced_loam();
        let report = generate_suitability_report(&readings, &[]);
        assert!(report.contains(crate::advisor::OPTIMAL_MESSAGE));
        assert!(report.contains("No crops available to score."));
    }

    #[test]
    fn test_crops_listed_in_rank_order() {
        let readings = depleted_plot();
        let matches = rank_crops(&builtin_crops(), &readings);
        let report = generate_suitability_report(&readings, &matches);

        let first = format!("1. **{}**", matches[0].crop_name);
        let second = format!("2. **{}**", matches[1].crop_name);
        let pos_first = report.find(&first).unwrap();
        let pos_second = report.find(&second).unwrap();
        assert!(pos_first < pos_second);
    }
}
