use crate::models::{
    Nutrition, NutritionAdvisory, OptimizationResult, PlannedMeal, SearchStats, WasteEntry,
};
use crate::optimizer::allocation::Allocation;
use crate::optimizer::constants::EFFICIENCY_SCALE;
use crate::optimizer::problem::Problem;

/// Efficiency score: `round(100 - total_waste_score / stock_count * 10)`, kept in 0..=100.
///
/// With no stock there is nothing to waste and the score is 100.
pub fn efficiency_score(total_waste_score: f64, stock_count: usize) -> u8 {
    if stock_count == 0 {
        return 100;
    }
    let raw = 100.0 - total_waste_score / stock_count as f64 * EFFICIENCY_SCALE;
    if raw.is_nan() {
        return 0;
    }
    raw.round().clamp(0.0, 100.0) as u8
}

/// Turn the final allocation into the caller-facing report.
pub fn build_result(
    problem: &Problem,
    allocation: &Allocation,
    stats: SearchStats,
) -> OptimizationResult {
    let meal_plan: Vec<PlannedMeal> = problem
        .recipes()
        .iter()
        .zip(allocation.servings())
        .filter(|(_, servings)| **servings > 0)
        .map(|(recipe, &servings)| PlannedMeal {
            recipe_id: recipe.id.clone(),
            recipe_name: recipe.name.clone(),
            servings,
        })
        .collect();

    let waste_estimate: Vec<WasteEntry> = problem
        .stock()
        .iter()
        .zip(allocation.leftover())
        .zip(problem.weights())
        .map(|((item, &leftover), &waste_weight)| WasteEntry {
            item_id: item.id.clone(),
            item_name: item.name.clone(),
            unit: item.unit.clone(),
            days_left: item.days_left,
            urgency: item.urgency(),
            leftover,
            waste_weight,
        })
        .collect();

    let total_waste_score: f64 = waste_estimate.iter().map(WasteEntry::weighted).sum();

    let mut nutrition_summary = Nutrition::default();
    for (recipe, &servings) in problem.recipes().iter().zip(allocation.servings()) {
        if servings > 0 {
            nutrition_summary.add(&recipe.nutrition.scaled(servings));
        }
    }

    let constraints = problem.constraints();
    let advisory = NutritionAdvisory {
        target_calories: constraints.target_calories,
        calorie_gap: nutrition_summary.calories - constraints.target_calories,
        min_protein: constraints.min_protein,
        protein_met: nutrition_summary.protein >= constraints.min_protein,
    };

    OptimizationResult {
        meal_plan,
        waste_estimate,
        total_waste_score,
        nutrition_summary,
        efficiency: efficiency_score(total_waste_score, problem.stock_count()),
        advisory,
        stats,
    }
}
