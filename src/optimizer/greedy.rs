use tracing::debug;

use crate::optimizer::allocation::Allocation;
use crate::optimizer::problem::Problem;

/// Feasible recipe positions by descending priority. Ties keep catalog order.
pub fn ranked_recipes(problem: &Problem) -> Vec<usize> {
    let priorities: Vec<f64> = (0..problem.recipe_count())
        .map(|recipe| problem.priority(recipe))
        .collect();

    let mut order: Vec<usize> = (0..problem.recipe_count()).collect();
    order.sort_by(|&a, &b| priorities[b].total_cmp(&priorities[a]));
    order
}

/// Servings to take in one greedy step: half the remaining shortfall, at least one.
pub fn damped_step(min_total_servings: i32, servings_so_far: u32) -> u32 {
    let shortfall = min_total_servings as i64 - servings_so_far as i64;
    // ceil(shortfall / 2) for positive shortfall; non-positive falls through to 1
    let half = (shortfall + 1).div_euclid(2);
    half.clamp(1, u32::MAX as i64) as u32
}

/// Build the initial allocation.
///
/// Walks recipes by priority, taking a damped number of servings from what is still
/// on hand, until the dish cap is reached. A recipe that cannot produce a serving
/// from what is left is skipped without using a dish slot. With `fill_shortfall`,
/// selected recipes are then topped up in the same order while the total is below
/// the serving floor.
pub fn construct(problem: &Problem, fill_shortfall: bool) -> Allocation {
    let constraints = problem.constraints();
    let dish_cap = constraints.dish_cap();
    let order = ranked_recipes(problem);

    let mut remaining = problem.capacity().to_vec();
    let mut servings = vec![0u32; problem.recipe_count()];
    let mut total: u32 = 0;
    let mut dishes = 0usize;

    for &recipe in &order {
        if dishes >= dish_cap {
            break;
        }

        let max_servings = problem.max_servings(recipe, &remaining);
        if max_servings == 0 {
            continue;
        }

        let target = max_servings.min(damped_step(constraints.min_total_servings, total));
        take(problem, recipe, target, &mut remaining);
        servings[recipe] = target;
        total = total.saturating_add(target);
        dishes += 1;

        debug!(
            recipe = %problem.recipes()[recipe].name,
            priority = problem.priority(recipe),
            servings = target,
            max_servings,
            "greedy pick"
        );
    }

    if fill_shortfall {
        let floor = constraints.serving_floor();
        for &recipe in &order {
            if total >= floor {
                break;
            }
            if servings[recipe] == 0 {
                continue;
            }
            let extra = problem.max_servings(recipe, &remaining).min(floor - total);
            if extra == 0 {
                continue;
            }
            take(problem, recipe, extra, &mut remaining);
            servings[recipe] += extra;
            total += extra;

            debug!(
                recipe = %problem.recipes()[recipe].name,
                extra,
                "topped up toward serving floor"
            );
        }
    }

    Allocation::from_servings(problem, servings)
}

fn take(problem: &Problem, recipe: usize, servings: u32, remaining: &mut [f64]) {
    for req in problem.requirements(recipe) {
        let slot = &mut remaining[req.slot];
        *slot = (*slot - req.per_serving * servings as f64).max(0.0);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Constraints, Ingredient, Recipe, StockItem};

    fn sample_stock() -> Vec<StockItem> {
        vec![
            StockItem::new("1", "Eggs", 10.0, "pieces", 1),
            StockItem::new("2", "Chicken Breast", 600.0, "g", 2),
            StockItem::new("3", "Carrots", 4.0, "pieces", 5),
            StockItem::new("4", "Milk", 800.0, "ml", 1),
            StockItem::new("5", "Rice", 1000.0, "g", 30),
        ]
    }

    fn sample_recipes() -> Vec<Recipe> {
        vec![
            Recipe::new(
                "1",
                "Classic Omelette",
                10.0,
                vec![
                    Ingredient::new("Eggs", 2.0, "pieces"),
                    Ingredient::new("Milk", 100.0, "ml"),
                ],
            ),
            Recipe::new(
                "2",
                "Chicken Saute",
                20.0,
                vec![
                    Ingredient::new("Chicken Breast", 200.0, "g"),
                    Ingredient::new("Carrots", 1.0, "pieces"),
                ],
            ),
            Recipe::new(
                "3",
                "Carrot Soup",
                30.0,
                vec![
                    Ingredient::new("Carrots", 2.0, "pieces"),
                    Ingredient::new("Milk", 200.0, "ml"),
                ],
            ),
            Recipe::new(
                "4",
                "Chicken Rice Bowl",
                25.0,
                vec![
                    Ingredient::new("Chicken Breast", 150.0, "g"),
                    Ingredient::new("Rice", 100.0, "g"),
                    Ingredient::new("Carrots", 1.0, "pieces"),
                ],
            ),
        ]
    }

    #[test]
    fn test_damped_step() {
        assert_eq!(damped_step(6, 0), 3);
        assert_eq!(damped_step(6, 3), 2);
        assert_eq!(damped_step(6, 5), 1);
        assert_eq!(damped_step(6, 6), 1);
        assert_eq!(damped_step(1, 0), 1);
        assert_eq!(damped_step(0, 0), 1);
        assert_eq!(damped_step(-4, 0), 1);
    }

    #[test]
    fn test_ranked_by_priority() {
        let stock = sample_stock();
        let recipes = sample_recipes();
        let problem = Problem::new(&stock, &recipes, Constraints::default());

        // omelette 51.0, soup ~33.5, saute ~30.1, bowl ~22.6
        assert_eq!(ranked_recipes(&problem), vec![0, 2, 1, 3]);
    }

    #[test]
    fn test_ties_keep_catalog_order() {
        let stock = vec![StockItem::new("1", "Rice", 1000.0, "g", 30)];
        let recipes = vec![
            Recipe::new("a", "A", 10.0, vec![Ingredient::new("Rice", 100.0, "g")]),
            Recipe::new("b", "B", 10.0, vec![Ingredient::new("Rice", 100.0, "g")]),
        ];
        let problem = Problem::new(&stock, &recipes, Constraints::new(1, 2));
        assert_eq!(ranked_recipes(&problem), vec![0, 1]);
    }

    #[test]
    fn test_construct_without_fill() {
        let stock = sample_stock();
        let recipes = sample_recipes();
        let problem = Problem::new(&stock, &recipes, Constraints::default());

        let alloc = construct(&problem, false);
        // omelette takes ceil(6/2) = 3, soup ceil(3/2) = 2 and uses the last carrots,
        // so neither chicken dish can produce a serving
        assert_eq!(alloc.servings(), &[3, 0, 2, 0]);
        assert_eq!(alloc.total_servings(), 5);
        assert_eq!(alloc.distinct_dishes(), 2);
        assert!(!alloc.is_feasible(&problem));
    }

    #[test]
    fn test_construct_with_fill() {
        let stock = sample_stock();
        let recipes = sample_recipes();
        let problem = Problem::new(&stock, &recipes, Constraints::default());

        let alloc = construct(&problem, true);
        // one more omelette fits in the remaining 100 ml of milk
        assert_eq!(alloc.servings(), &[4, 0, 2, 0]);
        assert!(alloc.is_feasible(&problem));
    }

    #[test]
    fn test_dish_cap_zero_gives_empty_plan() {
        let stock = sample_stock();
        let recipes = sample_recipes();
        let problem = Problem::new(&stock, &recipes, Constraints::new(6, 0));

        let alloc = construct(&problem, true);
        assert_eq!(alloc.total_servings(), 0);
        assert_eq!(alloc.leftover(), problem.capacity());
    }

    #[test]
    fn test_fill_reaches_floor_within_dish_cap() {
        let stock = sample_stock();
        let recipes = sample_recipes();
        let problem = Problem::new(&stock, &recipes, Constraints::new(6, 1));

        let plain = construct(&problem, false);
        assert_eq!(plain.servings(), &[3, 0, 0, 0]);

        let filled = construct(&problem, true);
        assert_eq!(filled.servings(), &[5, 0, 0, 0]);
        assert_eq!(filled.distinct_dishes(), 1);
    }

    #[test]
    fn test_stock_never_overdrawn() {
        let stock = sample_stock();
        let recipes = sample_recipes();
        let problem = Problem::new(&stock, &recipes, Constraints::new(100, 4));

        let alloc = construct(&problem, true);
        for (used, on_hand) in alloc.used().iter().zip(problem.capacity()) {
            assert!(*used <= *on_hand + 1e-9);
        }
    }
}
