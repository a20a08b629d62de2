use clap::{Args, Parser, Subcommand};

/// WastePlanner: allocates perishable stock to recipes so little goes to waste.
#[derive(Parser, Debug)]
#[command(name = "waste_planner")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Path to the stock JSON file.
    #[arg(short, long, default_value = "stock.json")]
    pub stock: String,

    /// Path to the recipe catalog JSON file.
    #[arg(short, long, default_value = "recipes.json")]
    pub recipes: String,

    /// Optional optimizer settings JSON file.
    #[arg(long)]
    pub config: Option<String>,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Build a meal plan that minimizes expiry-weighted waste.
    Optimize(OptimizeArgs),

    /// List stock by urgency.
    Inventory,

    /// Show which recipes can be made from current stock.
    Recipes,

    /// Describe the optimization model.
    Model,
}

impl Default for Command {
    fn default() -> Self {
        Command::Optimize(OptimizeArgs::default())
    }
}

#[derive(Args, Debug, Default, Clone)]
pub struct OptimizeArgs {
    /// Constraints JSON file. Individual flags override its values.
    #[arg(short, long)]
    pub constraints: Option<String>,

    /// Minimum total servings across all dishes.
    #[arg(long)]
    pub min_servings: Option<i32>,

    /// Maximum number of distinct dishes.
    #[arg(long)]
    pub max_dishes: Option<i32>,

    /// Target calories (advisory).
    #[arg(long)]
    pub target_calories: Option<f64>,

    /// Minimum protein in grams (advisory).
    #[arg(long)]
    pub min_protein: Option<f64>,

    /// Top up chosen dishes when the greedy pass ends below the serving minimum.
    #[arg(long)]
    pub fill_shortfall: bool,

    /// Prompt for each constraint.
    #[arg(short, long)]
    pub interactive: bool,

    /// Write the result as JSON to this path.
    #[arg(long)]
    pub json: Option<String>,

    /// Write per-item leftovers as CSV to this path.
    #[arg(long)]
    pub waste_csv: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_to_optimize() {
        let cli = Cli::parse_from(["waste-planner"]);
        assert!(cli.command.is_none());
        assert_eq!(cli.stock, "stock.json");
        assert!(matches!(Command::default(), Command::Optimize(_)));
    }

    #[test]
    fn test_optimize_flags() {
        let cli = Cli::parse_from([
            "waste-planner",
            "-vv",
            "--stock",
            "data/stock.json",
            "optimize",
            "--min-servings",
            "4",
            "--max-dishes",
            "2",
            "--json",
            "plan.json",
            "--fill-shortfall",
        ]);
        assert_eq!(cli.verbose, 2);
        let Some(Command::Optimize(args)) = cli.command else {
            panic!("expected optimize");
        };
        assert_eq!(args.min_servings, Some(4));
        assert_eq!(args.max_dishes, Some(2));
        assert_eq!(args.json.as_deref(), Some("plan.json"));
        assert!(args.fill_shortfall);
        assert!(!OptimizeArgs::default().fill_shortfall);
    }
}
