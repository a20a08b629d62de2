use std::fs::File;
use std::io::Write;
use std::path::Path;

use crate::error::Result;
use crate::sweep::search::SweepSample;

/// Round a float to n decimal places.
fn round_to(value: f64, decimals: u32) -> f64 {
    let factor = 10_f64.powi(decimals as i32);
    (value * factor).round() / factor
}

/// Write all samples to a CSV file.
pub fn write_csv(samples: &[SweepSample], path: &Path) -> Result<()> {
    let mut wtr = csv::Writer::from_path(path)?;

    wtr.write_record([
        "rank",
        "min_total_servings",
        "max_distinct_dishes",
        "total_waste_score",
        "efficiency",
        "servings",
        "dishes",
        "moves",
        "meets_floor",
    ])?;

    for (i, sample) in samples.iter().enumerate() {
        wtr.write_record([
            (i + 1).to_string(),
            sample.constraints.min_total_servings.to_string(),
            sample.constraints.max_distinct_dishes.to_string(),
            format!("{:.3}", sample.total_waste_score),
            sample.efficiency.to_string(),
            sample.servings.to_string(),
            sample.dishes.to_string(),
            sample.moves.to_string(),
            sample.meets_floor.to_string(),
        ])?;
    }

    wtr.flush()?;
    Ok(())
}

/// Write the best sample to a JSON file.
pub fn write_best_json(best: &SweepSample, path: &Path) -> Result<()> {
    let json = serde_json::json!({
        "constraints": best.constraints,
        "metrics": {
            "total_waste_score": round_to(best.total_waste_score, 3),
            "efficiency": best.efficiency,
            "servings": best.servings,
            "dishes": best.dishes,
            "moves": best.moves,
            "meets_floor": best.meets_floor,
        },
    });

    let mut file = File::create(path)?;
    file.write_all(serde_json::to_string_pretty(&json)?.as_bytes())?;
    Ok(())
}

/// Print the top-k samples to stdout.
pub fn print_topk(samples: &[SweepSample], k: usize) {
    println!("\n=== Top {} Constraint Settings (by waste) ===\n", k.min(samples.len()));

    for (i, sample) in samples.iter().take(k).enumerate() {
        println!(
            "#{}: servings>={} dishes<={}  waste={:.2} efficiency={}% plan={}x{}{}",
            i + 1,
            sample.constraints.min_total_servings,
            sample.constraints.max_distinct_dishes,
            sample.total_waste_score,
            sample.efficiency,
            sample.dishes,
            sample.servings,
            if sample.meets_floor { "" } else { " (below floor)" }
        );
    }
    println!();
}
