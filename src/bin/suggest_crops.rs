//! Suggest Crops - crop suitability demo
//!
//! Scores the built-in crop table against the hardcoded sample readings,
//! prints a ranked summary per plot, and emits the depleted plot's matches
//! as JSON plus the full markdown report.
//!
//! Run with: cargo run --bin suggest_crops

use nutriroot::suitability::{
    advice::generate_suitability_report,
    builtin_crops, rank_crops,
    readings::{depleted_plot, sample_readings},
};

fn main() -> anyhow::Result<()> {
    println!("NutriRoot Crop Suggestions\n");
    println!("==========================\n");

    let crops = builtin_crops();
    let plots = sample_readings();

    for readings in &plots {
        println!(
            "Plot: pH {:.1}, N {}, P {}, K {}, moisture {}%, {}°C",
            readings.ph,
            readings.nitrogen,
            readings.phosphorus,
            readings.potassium,
            readings.moisture,
            readings.temperature
        );

        let ranked = rank_crops(&crops, readings);
        for m in &ranked {
            println!(
                "  {:<10} {:>3}% ({}) - {}",
                m.crop_name,
                m.score,
                m.level.display_text(),
                m.reasons.join("; ")
            );
        }
        println!();
    }

    // Full output for the depleted plot
    let readings = depleted_plot();
    let ranked = rank_crops(&crops, &readings);

    println!("--- JSON (depleted plot) ---");
    println!("{}", serde_json::to_string_pretty(&ranked)?);

    println!("\n--- Report (depleted plot) ---\n");
    println!("{}", generate_suitability_report(&readings, &ranked));

    println!("\n==========================");
    println!(
        "Done! Scored {} crops x {} plots = {} assessments",
        crops.len(),
        plots.len(),
        crops.len() * plots.len()
    );

    Ok(())
}
