//! Check Soil - N-P-K advisory for a sample reading
//!
//! Mirrors the original analysis script: analyzes one hardcoded sample
//! (as if read from a sensor or user input) and prints the recommendation.
//!
//! Run with: cargo run --bin check_soil

use nutriroot::advisor::{analyze, format_header, SoilSample};

fn main() {
    // Simulating a reading from a sensor or user input
    let sample = SoilSample::new(25.0, 40.0, 15.0);

    println!("{}", format_header(&sample));

    let result = analyze(&sample);

    println!("\n--- SYSTEM RECOMMENDATION ---");
    println!("{}", result);
    println!("----------------------------");
}
