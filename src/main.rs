use clap::Parser;
use std::path::Path;

use waste_planner_rs::cli::{Cli, Command, OptimizeArgs};
use waste_planner_rs::error::{Result, WasteError};
use waste_planner_rs::interface::{
    collect_constraints, display_inventory, display_meal_plan, display_model_description,
    display_recipe_diagnoses, prompt_yes_no,
};
use waste_planner_rs::logging::init_logging;
use waste_planner_rs::models::Constraints;
use waste_planner_rs::optimizer::{diagnose_recipes, optimize_with, OptimizerConfig};
use waste_planner_rs::store::{
    load_config, load_constraints, load_recipes, load_stock, save_result, warn_unmatched_names,
    write_waste_csv,
};

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    if let Err(e) = run(cli) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    let command = cli.command.unwrap_or_default();

    match command {
        Command::Optimize(args) => {
            cmd_optimize(&cli.stock, &cli.recipes, cli.config.as_deref(), &args)
        }
        Command::Inventory => cmd_inventory(&cli.stock),
        Command::Recipes => cmd_recipes(&cli.stock, &cli.recipes),
        Command::Model => {
            display_model_description();
            Ok(())
        }
    }
}

fn require_file(path: &str, what: &str) -> Result<()> {
    if Path::new(path).exists() {
        Ok(())
    } else {
        Err(WasteError::InvalidInput(format!(
            "{} file not found: {}",
            what, path
        )))
    }
}

/// Constraints from file, then flags, then prompts when interactive.
fn resolve_constraints(args: &OptimizeArgs) -> Result<Constraints> {
    let mut constraints = match &args.constraints {
        Some(path) => load_constraints(path)?,
        None => Constraints::default(),
    };

    if let Some(v) = args.min_servings {
        constraints.min_total_servings = v;
    }
    if let Some(v) = args.max_dishes {
        constraints.max_distinct_dishes = v;
    }
    if let Some(v) = args.target_calories {
        constraints.target_calories = v;
    }
    if let Some(v) = args.min_protein {
        constraints.min_protein = v;
    }

    if args.interactive {
        constraints = collect_constraints(&constraints)?;
    }

    Ok(constraints)
}

/// Optimize the plan and report it.
fn cmd_optimize(
    stock_path: &str,
    recipes_path: &str,
    config_path: Option<&str>,
    args: &OptimizeArgs,
) -> Result<()> {
    require_file(stock_path, "Stock")?;
    require_file(recipes_path, "Recipe")?;

    let stock = load_stock(stock_path)?;
    let recipes = load_recipes(recipes_path)?;
    let mut config = match config_path {
        Some(path) => load_config(path)?,
        None => OptimizerConfig::default(),
    };
    if args.fill_shortfall {
        config.fill_shortfall = true;
    }

    println!("Loaded {} stock items and {} recipes", stock.len(), recipes.len());
    warn_unmatched_names(&stock, &recipes);

    let constraints = resolve_constraints(args)?;
    println!(
        "Planning for at least {} servings across at most {} dishes...",
        constraints.min_total_servings, constraints.max_distinct_dishes
    );

    let result = optimize_with(&stock, &recipes, constraints, &config);

    display_meal_plan(&result);

    let json_path = match &args.json {
        Some(path) => Some(path.clone()),
        None if args.interactive && prompt_yes_no("Save result to result.json?", false)? => {
            Some("result.json".to_string())
        }
        None => None,
    };
    if let Some(path) = json_path {
        save_result(&path, &result)?;
        println!("Wrote result to {}", path);
    }
    if let Some(path) = &args.waste_csv {
        write_waste_csv(path, &result)?;
        println!("Wrote leftovers to {}", path);
    }

    Ok(())
}

/// List stock by urgency.
fn cmd_inventory(stock_path: &str) -> Result<()> {
    require_file(stock_path, "Stock")?;
    let stock = load_stock(stock_path)?;
    display_inventory(&stock);
    Ok(())
}

/// Show makeable recipes and what blocks the others.
fn cmd_recipes(stock_path: &str, recipes_path: &str) -> Result<()> {
    require_file(stock_path, "Stock")?;
    require_file(recipes_path, "Recipe")?;

    let stock = load_stock(stock_path)?;
    let recipes = load_recipes(recipes_path)?;
    display_recipe_diagnoses(&diagnose_recipes(&stock, &recipes));
    Ok(())
}
