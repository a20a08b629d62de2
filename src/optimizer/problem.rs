use tracing::debug;

use crate::models::{Constraints, Recipe, StockItem};
use crate::optimizer::constants::{MIN_PREP_TIME, SERVINGS_EPSILON};
use crate::optimizer::feasibility::filter_feasible;
use crate::optimizer::index::StockIndex;
use crate::optimizer::weights::waste_weight;

/// Per-serving draw of one recipe on one stock slot.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Requirement {
    pub slot: usize,
    pub per_serving: f64,
}

/// Everything one optimization run reads, resolved to positions.
///
/// Recipes are addressed by their position among the feasible recipes, stock by its
/// position in the input list. Built once per run and never mutated.
#[derive(Debug)]
pub struct Problem<'a> {
    stock: &'a [StockItem],
    recipes: Vec<&'a Recipe>,
    requirements: Vec<Vec<Requirement>>,
    capacity: Vec<f64>,
    weights: Vec<f64>,
    constraints: Constraints,
    epsilon: f64,
}

impl<'a> Problem<'a> {
    pub fn new(stock: &'a [StockItem], recipes: &'a [Recipe], constraints: Constraints) -> Self {
        let index = StockIndex::new(stock);
        for recipe in recipes {
            for ingredient in &recipe.ingredients {
                if index.slot(&ingredient.name).is_none() {
                    debug!(
                        recipe = %recipe.name,
                        ingredient = %ingredient.name,
                        "ingredient matches no stock item"
                    );
                }
            }
        }

        let feasible = filter_feasible(stock, &index, recipes);
        let requirements = feasible
            .iter()
            .map(|recipe| merged_requirements(&index, recipe))
            .collect();

        Self {
            stock,
            recipes: feasible,
            requirements,
            capacity: stock.iter().map(|item| item.quantity.max(0.0)).collect(),
            weights: stock.iter().map(|item| waste_weight(item.days_left)).collect(),
            constraints,
            epsilon: SERVINGS_EPSILON,
        }
    }

    pub fn with_epsilon(mut self, epsilon: f64) -> Self {
        self.epsilon = epsilon;
        self
    }

    pub fn stock(&self) -> &'a [StockItem] {
        self.stock
    }

    /// Feasible recipes, in catalog order.
    pub fn recipes(&self) -> &[&'a Recipe] {
        &self.recipes
    }

    pub fn recipe_count(&self) -> usize {
        self.recipes.len()
    }

    pub fn stock_count(&self) -> usize {
        self.stock.len()
    }

    pub fn requirements(&self, recipe: usize) -> &[Requirement] {
        &self.requirements[recipe]
    }

    /// Usable quantity of each stock slot.
    pub fn capacity(&self) -> &[f64] {
        &self.capacity
    }

    /// Waste weight of each stock slot.
    pub fn weights(&self) -> &[f64] {
        &self.weights
    }

    pub fn constraints(&self) -> &Constraints {
        &self.constraints
    }

    pub fn epsilon(&self) -> f64 {
        self.epsilon
    }

    /// Greedy priority: urgency-weighted quantity drawn per serving, per minute of prep.
    pub fn priority(&self, recipe: usize) -> f64 {
        let urgency: f64 = self.requirements[recipe]
            .iter()
            .map(|req| self.weights[req.slot] * req.per_serving)
            .sum();
        let prep_time = self.recipes[recipe].prep_time;
        let divisor = if prep_time > 0.0 { prep_time } else { MIN_PREP_TIME };
        urgency / divisor
    }

    /// Whole servings of `recipe` that fit in `remaining`.
    ///
    /// Recipes that draw on no stock are unbounded and report `u32::MAX`.
    pub fn max_servings(&self, recipe: usize, remaining: &[f64]) -> u32 {
        let limit = self.requirements[recipe]
            .iter()
            .map(|req| remaining[req.slot] / req.per_serving)
            .fold(f64::INFINITY, f64::min);

        if limit.is_infinite() {
            u32::MAX
        } else {
            // `as` saturates, so negative or NaN limits become 0.
            limit.floor() as u32
        }
    }
}

/// Resolve a recipe's lines to stock slots, summing lines that name the same item.
///
/// Lines with no matching stock or a non-positive quantity draw nothing.
fn merged_requirements(index: &StockIndex, recipe: &Recipe) -> Vec<Requirement> {
    let mut merged: Vec<Requirement> = Vec::with_capacity(recipe.ingredients.len());
    for ingredient in &recipe.ingredients {
        if ingredient.quantity <= 0.0 {
            continue;
        }
        let Some(slot) = index.slot(&ingredient.name) else {
            continue;
        };
        match merged.iter_mut().find(|req| req.slot == slot) {
            Some(req) => req.per_serving += ingredient.quantity,
            None => merged.push(Requirement {
                slot,
                per_serving: ingredient.quantity,
            }),
        }
    }
    merged
}
