use std::path::PathBuf;

use clap::Parser;

use waste_planner_rs::logging::init_logging;
use waste_planner_rs::models::Constraints;
use waste_planner_rs::optimizer::OptimizerConfig;
use waste_planner_rs::store::{
    load_config, load_constraints, load_recipes, load_stock, warn_unmatched_names,
};
use waste_planner_rs::sweep::{
    print_topk, run_sweep, write_best_json, write_csv, SweepConfig, SweepRanges,
};

#[derive(Parser, Debug)]
#[command(name = "sweep")]
#[command(about = "Search constraint settings for the least wasteful plan")]
struct Args {
    /// Number of random samples
    #[arg(long, default_value = "200")]
    iters: usize,

    /// Random seed for reproducibility
    #[arg(long, default_value = "123")]
    seed: u64,

    /// Minimum-servings range to sample, as LO,HI
    #[arg(long, default_value = "1,12")]
    servings: String,

    /// Maximum-dishes range to sample, as LO,HI
    #[arg(long, default_value = "1,5")]
    dishes: String,

    /// Path to the stock JSON file
    #[arg(long, default_value = "stock.json")]
    stock: PathBuf,

    /// Path to the recipe catalog JSON file
    #[arg(long, default_value = "recipes.json")]
    recipes: PathBuf,

    /// Baseline constraints JSON file
    #[arg(long)]
    constraints: Option<PathBuf>,

    /// Optimizer settings JSON file
    #[arg(long)]
    config: Option<PathBuf>,

    /// Output CSV file for all samples
    #[arg(long, default_value = "sweep_results.csv")]
    csv: PathBuf,

    /// Output JSON file for the best sample
    #[arg(long, default_value = "sweep_best.json")]
    json: PathBuf,

    /// Number of top samples to display
    #[arg(long, default_value = "10")]
    topk: usize,

    /// Increase log verbosity
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn parse_range(s: &str) -> Option<(i32, i32)> {
    let (lo, hi) = s.split_once(',')?;
    Some((lo.trim().parse().ok()?, hi.trim().parse().ok()?))
}

fn main() {
    let args = Args::parse();
    init_logging(args.verbose);

    let stock = match load_stock(&args.stock) {
        Ok(s) => s,
        Err(e) => {
            eprintln!("Error reading stock file {:?}: {}", args.stock, e);
            std::process::exit(1);
        }
    };

    let recipes = match load_recipes(&args.recipes) {
        Ok(r) => r,
        Err(e) => {
            eprintln!("Error reading recipe file {:?}: {}", args.recipes, e);
            std::process::exit(1);
        }
    };

    let base = match &args.constraints {
        Some(path) => match load_constraints(path) {
            Ok(c) => c,
            Err(e) => {
                eprintln!("Error reading constraints {:?}: {}", path, e);
                std::process::exit(1);
            }
        },
        None => Constraints::default(),
    };

    let optimizer = match &args.config {
        Some(path) => match load_config(path) {
            Ok(c) => c,
            Err(e) => {
                eprintln!("Error reading config {:?}: {}", path, e);
                std::process::exit(1);
            }
        },
        None => OptimizerConfig::default(),
    };

    let (Some(min_servings), Some(max_dishes)) =
        (parse_range(&args.servings), parse_range(&args.dishes))
    else {
        eprintln!("Error: ranges must look like LO,HI");
        std::process::exit(1);
    };

    println!(
        "Loaded {} stock items and {} recipes",
        stock.len(),
        recipes.len()
    );
    warn_unmatched_names(&stock, &recipes);

    let config = SweepConfig {
        iterations: args.iters,
        seed: args.seed,
        ranges: SweepRanges {
            min_servings,
            max_dishes,
        },
        base,
        optimizer,
    };

    let results = run_sweep(&config, &stock, &recipes);

    print_topk(&results.samples, args.topk);

    let Some(best) = results.samples.first() else {
        println!("No samples evaluated.");
        return;
    };
    let baseline = &results.baseline;

    println!("=== Comparison: Best vs Baseline ===");
    println!(
        "Baseline: servings>={} dishes<={} waste={:.2} efficiency={}%",
        baseline.constraints.min_total_servings,
        baseline.constraints.max_distinct_dishes,
        baseline.total_waste_score,
        baseline.efficiency
    );
    println!(
        "Best:     servings>={} dishes<={} waste={:.2} efficiency={}%",
        best.constraints.min_total_servings,
        best.constraints.max_distinct_dishes,
        best.total_waste_score,
        best.efficiency
    );
    println!(
        "Change:   waste {:+.2}  efficiency {:+}",
        best.total_waste_score - baseline.total_waste_score,
        best.efficiency as i32 - baseline.efficiency as i32
    );
    println!();

    if let Err(e) = write_csv(&results.samples, &args.csv) {
        eprintln!("Error writing CSV: {}", e);
    } else {
        println!("Wrote all samples to {:?}", args.csv);
    }

    if let Err(e) = write_best_json(best, &args.json) {
        eprintln!("Error writing JSON: {}", e);
    } else {
        println!("Wrote best sample to {:?}", args.json);
    }
}
