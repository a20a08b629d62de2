use crate::optimizer::constants::QUANTITY_TOLERANCE;
use crate::optimizer::problem::Problem;

/// Decision state: servings per feasible recipe and the leftover they imply.
///
/// Values are snapshots. Moves build a new allocation rather than editing one in
/// place, so a rejected candidate leaves the current solution untouched.
#[derive(Debug, Clone, PartialEq)]
pub struct Allocation {
    servings: Vec<u32>,
    selected: Vec<bool>,
    used: Vec<f64>,
    leftover: Vec<f64>,
}

/// A hard constraint an allocation breaks.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Violation {
    OverConsumed { slot: usize, used: f64, on_hand: f64 },
    TooFewServings { total: u32, min: u32 },
    TooManyDishes { dishes: usize, max: usize },
}

impl Allocation {
    /// Nothing cooked; every stock item is left over in full.
    pub fn empty(problem: &Problem) -> Self {
        Self::from_servings(problem, vec![0; problem.recipe_count()])
    }

    /// Build an allocation from servings, recomputing usage and leftover.
    pub fn from_servings(problem: &Problem, servings: Vec<u32>) -> Self {
        let mut used = vec![0.0; problem.stock_count()];
        for (recipe, &count) in servings.iter().enumerate() {
            if count == 0 {
                continue;
            }
            for req in problem.requirements(recipe) {
                used[req.slot] += req.per_serving * count as f64;
            }
        }

        let leftover = problem
            .capacity()
            .iter()
            .zip(&used)
            .map(|(&on_hand, &used)| (on_hand - used).max(0.0))
            .collect();
        let selected = servings.iter().map(|&s| s > 0).collect();

        Self {
            servings,
            selected,
            used,
            leftover,
        }
    }

    /// Candidate with one serving moved from `from` to `to`.
    ///
    /// Returns `None` when `from` has nothing to give.
    pub fn transfer(&self, problem: &Problem, from: usize, to: usize) -> Option<Self> {
        if self.servings[from] == 0 {
            return None;
        }
        let mut servings = self.servings.clone();
        servings[from] -= 1;
        servings[to] = servings[to].saturating_add(1);
        Some(Self::from_servings(problem, servings))
    }

    /// Check the allocation against stock, the serving floor and the dish cap.
    pub fn check(&self, problem: &Problem) -> Result<(), Violation> {
        for (slot, (&used, &on_hand)) in self.used.iter().zip(problem.capacity()).enumerate() {
            if used > on_hand + QUANTITY_TOLERANCE {
                return Err(Violation::OverConsumed {
                    slot,
                    used,
                    on_hand,
                });
            }
        }

        let constraints = problem.constraints();
        let total = self.total_servings();
        let min = constraints.serving_floor();
        if total < min {
            return Err(Violation::TooFewServings { total, min });
        }

        let dishes = self.distinct_dishes();
        let max = constraints.dish_cap();
        if dishes > max {
            return Err(Violation::TooManyDishes { dishes, max });
        }

        Ok(())
    }

    pub fn is_feasible(&self, problem: &Problem) -> bool {
        self.check(problem).is_ok()
    }

    pub fn servings(&self) -> &[u32] {
        &self.servings
    }

    pub fn servings_of(&self, recipe: usize) -> u32 {
        self.servings[recipe]
    }

    pub fn is_selected(&self, recipe: usize) -> bool {
        self.selected[recipe]
    }

    /// Quantity drawn from each stock slot.
    pub fn used(&self) -> &[f64] {
        &self.used
    }

    /// Quantity of each stock slot left uncooked.
    pub fn leftover(&self) -> &[f64] {
        &self.leftover
    }

    pub fn total_servings(&self) -> u32 {
        self.servings.iter().fold(0u32, |acc, &s| acc.saturating_add(s))
    }

    pub fn distinct_dishes(&self) -> usize {
        self.selected.iter().filter(|&&s| s).count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Constraints, Ingredient, Recipe, StockItem};

    fn sample_stock() -> Vec<StockItem> {
        vec![
            StockItem::new("1", "Eggs", 10.0, "pieces", 1),
            StockItem::new("2", "Milk", 800.0, "ml", 1),
            StockItem::new("3", "Carrots", 4.0, "pieces", 5),
        ]
    }

    fn sample_recipes() -> Vec<Recipe> {
        vec![
            Recipe::new(
                "omelette",
                "Omelette",
                10.0,
                vec![
                    Ingredient::new("Eggs", 2.0, "pieces"),
                    Ingredient::new("Milk", 100.0, "ml"),
                ],
            ),
            Recipe::new(
                "soup",
                "Carrot Soup",
                30.0,
                vec![
                    Ingredient::new("Carrots", 2.0, "pieces"),
                    Ingredient::new("Milk", 200.0, "ml"),
                ],
            ),
        ]
    }

    #[test]
    fn test_usage_and_leftover() {
        let stock = sample_stock();
        let recipes = sample_recipes();
        let problem = Problem::new(&stock, &recipes, Constraints::new(1, 2));

        let alloc = Allocation::from_servings(&problem, vec![3, 1]);
        assert_eq!(alloc.used(), &[6.0, 500.0, 2.0]);
        assert_eq!(alloc.leftover(), &[4.0, 300.0, 2.0]);
        assert_eq!(alloc.total_servings(), 4);
        assert_eq!(alloc.distinct_dishes(), 2);
        assert!(alloc.is_feasible(&problem));
    }

    #[test]
    fn test_over_consumption_is_infeasible() {
        let stock = sample_stock();
        let recipes = sample_recipes();
        let problem = Problem::new(&stock, &recipes, Constraints::new(1, 2));

        let alloc = Allocation::from_servings(&problem, vec![6, 0]);
        assert_eq!(alloc.leftover()[0], 0.0);
        assert!(matches!(
            alloc.check(&problem),
            Err(Violation::OverConsumed { slot: 0, .. })
        ));
    }

    #[test]
    fn test_serving_floor_and_dish_cap() {
        let stock = sample_stock();
        let recipes = sample_recipes();

        let floor = Problem::new(&stock, &recipes, Constraints::new(5, 2));
        let alloc = Allocation::from_servings(&floor, vec![2, 1]);
        assert_eq!(
            alloc.check(&floor),
            Err(Violation::TooFewServings { total: 3, min: 5 })
        );

        let cap = Problem::new(&stock, &recipes, Constraints::new(1, 1));
        let alloc = Allocation::from_servings(&cap, vec![1, 1]);
        assert_eq!(
            alloc.check(&cap),
            Err(Violation::TooManyDishes { dishes: 2, max: 1 })
        );
    }

    #[test]
    fn test_transfer_builds_new_snapshot() {
        let stock = sample_stock();
        let recipes = sample_recipes();
        let problem = Problem::new(&stock, &recipes, Constraints::new(1, 2));

        let current = Allocation::from_servings(&problem, vec![2, 0]);
        let candidate = current.transfer(&problem, 0, 1).unwrap();

        assert_eq!(current.servings(), &[2, 0]);
        assert_eq!(candidate.servings(), &[1, 1]);
        assert!(candidate.is_selected(1));
        assert!(current.transfer(&problem, 1, 0).is_none());
    }

    #[test]
    fn test_empty_leaves_everything() {
        let stock = sample_stock();
        let recipes = sample_recipes();
        let problem = Problem::new(&stock, &recipes, Constraints::new(0, 2));

        let alloc = Allocation::empty(&problem);
        assert_eq!(alloc.leftover(), &[10.0, 800.0, 4.0]);
        assert!(alloc.is_feasible(&problem));
    }
}
