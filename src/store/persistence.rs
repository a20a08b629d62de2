use std::collections::HashSet;
use std::fs;
use std::path::Path;

use serde::de::DeserializeOwned;
use tracing::warn;

use crate::error::{Result, WasteError};
use crate::models::{Constraints, OptimizationResult, Recipe, StockItem};
use crate::optimizer::OptimizerConfig;

fn read_json<T: DeserializeOwned, P: AsRef<Path>>(path: P) -> Result<T> {
    let content = fs::read_to_string(path)?;
    Ok(serde_json::from_str(&content)?)
}

/// Load stock from a JSON array.
pub fn load_stock<P: AsRef<Path>>(path: P) -> Result<Vec<StockItem>> {
    let stock: Vec<StockItem> = read_json(path)?;
    validate_stock(&stock)?;
    Ok(stock)
}

/// Load the recipe catalog from a JSON array.
pub fn load_recipes<P: AsRef<Path>>(path: P) -> Result<Vec<Recipe>> {
    let recipes: Vec<Recipe> = read_json(path)?;
    validate_recipes(&recipes)?;
    Ok(recipes)
}

pub fn load_constraints<P: AsRef<Path>>(path: P) -> Result<Constraints> {
    read_json(path)
}

/// Load optimizer settings. Missing fields take their defaults.
pub fn load_config<P: AsRef<Path>>(path: P) -> Result<OptimizerConfig> {
    read_json(path)
}

/// Write the result as pretty JSON.
pub fn save_result<P: AsRef<Path>>(path: P, result: &OptimizationResult) -> Result<()> {
    let json = serde_json::to_string_pretty(result)?;
    fs::write(path, json)?;
    Ok(())
}

/// Ids are unique and quantities are finite and non-negative.
pub fn validate_stock(stock: &[StockItem]) -> Result<()> {
    let mut seen = HashSet::new();
    for item in stock {
        if !seen.insert(item.id.as_str()) {
            return Err(WasteError::DuplicateId {
                kind: "stock",
                id: item.id.clone(),
            });
        }
        if !item.quantity.is_finite() || item.quantity < 0.0 {
            return Err(WasteError::InvalidInput(format!(
                "{} has invalid quantity {}",
                item.name, item.quantity
            )));
        }
    }
    Ok(())
}

/// Ids are unique, ingredient quantities are positive and prep times are finite.
pub fn validate_recipes(recipes: &[Recipe]) -> Result<()> {
    let mut seen = HashSet::new();
    for recipe in recipes {
        if !seen.insert(recipe.id.as_str()) {
            return Err(WasteError::DuplicateId {
                kind: "recipe",
                id: recipe.id.clone(),
            });
        }
        if !recipe.prep_time.is_finite() {
            return Err(WasteError::InvalidInput(format!(
                "{} has invalid prep time",
                recipe.name
            )));
        }
        for ingredient in &recipe.ingredients {
            if !ingredient.quantity.is_finite() || ingredient.quantity <= 0.0 {
                return Err(WasteError::InvalidInput(format!(
                    "{}: ingredient {} needs a positive quantity",
                    recipe.name, ingredient.name
                )));
            }
        }
    }
    Ok(())
}

/// Warn once about names recipes can't resolve: repeated stock names (only the first
/// is drawn from) and ingredients with no stock item. Returns the number of warnings.
pub fn warn_unmatched_names(stock: &[StockItem], recipes: &[Recipe]) -> usize {
    let mut warnings = 0;
    let mut names = HashSet::new();
    for item in stock {
        if !names.insert(item.key()) {
            warn!(name = %item.name, id = %item.id, "duplicate stock name; only the first is used");
            warnings += 1;
        }
    }

    for recipe in recipes {
        for ingredient in &recipe.ingredients {
            if !names.contains(&ingredient.key()) {
                warn!(
                    recipe = %recipe.name,
                    ingredient = %ingredient.name,
                    "ingredient matches no stock item"
                );
                warnings += 1;
            }
        }
    }
    warnings
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn temp_json(json: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(json.as_bytes()).unwrap();
        file
    }

    #[test]
    fn test_load_stock() {
        let file = temp_json(
            r#"[
            {"id": "1", "name": "Eggs", "quantity": 10, "unit": "pieces", "daysLeft": 1, "category": "dairy"},
            {"id": "2", "name": "Rice", "quantity": 1000, "unit": "g", "daysLeft": 30}
        ]"#,
        );

        let stock = load_stock(file.path()).unwrap();
        assert_eq!(stock.len(), 2);
        assert_eq!(stock[0].name, "Eggs");
        assert_eq!(stock[1].days_left, 30);
    }

    #[test]
    fn test_duplicate_stock_id_rejected() {
        let file = temp_json(
            r#"[
            {"id": "1", "name": "Eggs", "quantity": 10, "daysLeft": 1},
            {"id": "1", "name": "Milk", "quantity": 800, "daysLeft": 1}
        ]"#,
        );

        let err = load_stock(file.path()).unwrap_err();
        assert!(matches!(err, WasteError::DuplicateId { kind: "stock", .. }));
    }

    #[test]
    fn test_negative_quantity_rejected() {
        let file = temp_json(r#"[{"id": "1", "name": "Eggs", "quantity": -1, "daysLeft": 1}]"#);
        assert!(matches!(
            load_stock(file.path()),
            Err(WasteError::InvalidInput(_))
        ));
    }

    #[test]
    fn test_load_recipes_rejects_zero_quantity() {
        let file = temp_json(
            r#"[{"id": "1", "name": "Toast", "prepTime": 5,
                 "ingredients": [{"name": "Bread", "quantity": 0, "unit": "slices"}]}]"#,
        );
        assert!(matches!(
            load_recipes(file.path()),
            Err(WasteError::InvalidInput(_))
        ));
    }

    #[test]
    fn test_load_constraints_and_config() {
        let file = temp_json(
            r#"{"minTotalServings": 4, "maxDistinctDishes": 2, "targetCalories": 1800, "minProtein": 50}"#,
        );
        let constraints = load_constraints(file.path()).unwrap();
        assert_eq!(constraints.min_total_servings, 4);
        assert_eq!(constraints.max_distinct_dishes, 2);

        let file = temp_json(r#"{"maxMoves": null, "fillShortfall": true}"#);
        let config = load_config(file.path()).unwrap();
        assert_eq!(config.max_moves, None);
        assert!(config.fill_shortfall);
        assert_eq!(config.epsilon, OptimizerConfig::default().epsilon);
    }

    #[test]
    fn test_warn_unmatched_names() {
        use crate::models::Ingredient;

        let stock = vec![
            StockItem::new("1", "Milk", 800.0, "ml", 1),
            StockItem::new("2", "MILK", 500.0, "ml", 4),
            StockItem::new("3", "Eggs", 10.0, "pieces", 1),
        ];
        let recipes = vec![Recipe::new(
            "custard",
            "Custard",
            20.0,
            vec![
                Ingredient::new("milk", 200.0, "ml"),
                Ingredient::new("Eggs", 2.0, "pieces"),
                Ingredient::new("Vanilla", 1.0, "tsp"),
            ],
        )];

        assert_eq!(warn_unmatched_names(&stock, &recipes), 2);
        assert_eq!(warn_unmatched_names(&stock[..1], &[]), 0);
    }

    #[test]
    fn test_save_result() {
        let stock = vec![StockItem::new("1", "Eggs", 10.0, "pieces", 1)];
        let result = crate::optimizer::optimize(&stock, &[], Constraints::default());

        let file = NamedTempFile::new().unwrap();
        save_result(file.path(), &result).unwrap();

        let json: serde_json::Value =
            serde_json::from_str(&fs::read_to_string(file.path()).unwrap()).unwrap();
        assert_eq!(json["mealPlan"].as_array().unwrap().len(), 0);
        assert_eq!(json["wasteEstimate"][0]["leftover"], 10.0);
        assert_eq!(json["efficiency"], 0);
    }
}
