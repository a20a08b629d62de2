pub mod allocation;
pub mod constants;
pub mod diagnosis;
pub mod feasibility;
pub mod greedy;
pub mod index;
pub mod local_search;
pub mod objective;
pub mod problem;
pub mod report;
pub mod weights;

pub use allocation::{Allocation, Violation};
pub use constants::*;
pub use diagnosis::{diagnose_recipes, IngredientStatus, RecipeDiagnosis};
pub use feasibility::feasible_recipes;
pub use index::StockIndex;
pub use objective::objective;
pub use problem::Problem;
pub use report::{build_result, efficiency_score};
pub use weights::waste_weight;

use tracing::info;

use crate::models::{Constraints, OptimizationResult, Recipe, SearchStats, StockItem};

/// Allocate stock to recipes with the default configuration.
///
/// Never fails: empty inputs or impossible constraints yield an empty or partial plan.
pub fn optimize(
    stock: &[StockItem],
    recipes: &[Recipe],
    constraints: Constraints,
) -> OptimizationResult {
    optimize_with(stock, recipes, constraints, &OptimizerConfig::default())
}

/// Feasibility filter, greedy construction, local search, then the report.
pub fn optimize_with(
    stock: &[StockItem],
    recipes: &[Recipe],
    constraints: Constraints,
    config: &OptimizerConfig,
) -> OptimizationResult {
    let problem = Problem::new(stock, recipes, constraints).with_epsilon(config.epsilon);

    let greedy = greedy::construct(&problem, config.fill_shortfall);
    let greedy_objective = objective(&problem, &greedy);

    let outcome = local_search::improve(&problem, greedy.clone(), config.max_moves);
    let (best, final_objective) = if outcome.objective < greedy_objective {
        (outcome.allocation, outcome.objective)
    } else {
        (greedy, greedy_objective)
    };

    let stats = SearchStats {
        feasible_recipes: problem.recipe_count(),
        greedy_objective,
        final_objective,
        moves: outcome.moves,
        capped: outcome.capped,
    };
    let result = build_result(&problem, &best, stats);

    info!(
        stock = stock.len(),
        recipes = recipes.len(),
        feasible = stats.feasible_recipes,
        dishes = result.meal_plan.len(),
        servings = result.total_servings(),
        moves = stats.moves,
        waste = result.total_waste_score,
        efficiency = result.efficiency,
        "optimization finished"
    );

    result
}
