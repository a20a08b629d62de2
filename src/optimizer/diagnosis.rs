use serde::Serialize;
use strsim::jaro_winkler;

use crate::models::{Recipe, StockItem};
use crate::optimizer::constants::SUGGESTION_THRESHOLD;
use crate::optimizer::index::StockIndex;

/// Whether stock covers one serving of an ingredient line.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase", tag = "status")]
pub enum IngredientStatus {
    Available,
    Insufficient { needed: f64, on_hand: f64 },
    /// No stock item has this name. `suggestion` is the closest stock name, if any.
    Missing { suggestion: Option<String> },
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct IngredientCheck {
    pub name: String,
    pub status: IngredientStatus,
}

/// Per-recipe availability, as shown in the recipe listing.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RecipeDiagnosis {
    pub recipe_id: String,
    pub recipe_name: String,
    pub ingredients: Vec<IngredientCheck>,
}

impl RecipeDiagnosis {
    pub fn available(&self) -> usize {
        self.ingredients
            .iter()
            .filter(|c| c.status == IngredientStatus::Available)
            .count()
    }

    pub fn total(&self) -> usize {
        self.ingredients.len()
    }

    pub fn can_make(&self) -> bool {
        self.available() == self.total()
    }
}

/// Check every recipe line against stock.
///
/// Missing names get a fuzzy suggestion so a typo doesn't silently rule a recipe out.
pub fn diagnose_recipes(stock: &[StockItem], recipes: &[Recipe]) -> Vec<RecipeDiagnosis> {
    let index = StockIndex::new(stock);

    recipes
        .iter()
        .map(|recipe| RecipeDiagnosis {
            recipe_id: recipe.id.clone(),
            recipe_name: recipe.name.clone(),
            ingredients: recipe
                .ingredients
                .iter()
                .map(|ingredient| {
                    let status = match index.lookup(stock, &ingredient.name) {
                        Some(item) if item.quantity >= ingredient.quantity => {
                            IngredientStatus::Available
                        }
                        Some(item) => IngredientStatus::Insufficient {
                            needed: ingredient.quantity,
                            on_hand: item.quantity,
                        },
                        None => IngredientStatus::Missing {
                            suggestion: closest_stock_name(stock, &ingredient.name),
                        },
                    };
                    IngredientCheck {
                        name: ingredient.name.clone(),
                        status,
                    }
                })
                .collect(),
        })
        .collect()
}

/// Stock name most similar to `name`, if any clears the suggestion threshold.
pub fn closest_stock_name(stock: &[StockItem], name: &str) -> Option<String> {
    let needle = name.to_lowercase();
    stock
        .iter()
        .map(|item| (item, jaro_winkler(&item.key(), &needle)))
        .filter(|(_, score)| *score > SUGGESTION_THRESHOLD)
        .max_by(|a, b| a.1.total_cmp(&b.1))
        .map(|(item, _)| item.name.clone())
}
