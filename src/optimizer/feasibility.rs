use crate::models::{Ingredient, Recipe, StockItem};
use crate::optimizer::index::StockIndex;

/// Recipes that can be cooked at least once from current stock.
///
/// Every ingredient needs a stock item of the same name (case-insensitive) holding at
/// least one serving's worth. Order of `recipes` is preserved.
pub fn feasible_recipes<'a>(stock: &[StockItem], recipes: &'a [Recipe]) -> Vec<&'a Recipe> {
    let index = StockIndex::new(stock);
    filter_feasible(stock, &index, recipes)
}

/// Same as [`feasible_recipes`] with a prebuilt index.
pub fn filter_feasible<'a>(
    stock: &[StockItem],
    index: &StockIndex,
    recipes: &'a [Recipe],
) -> Vec<&'a Recipe> {
    recipes
        .iter()
        .filter(|recipe| is_makeable(stock, index, recipe))
        .collect()
}

pub fn is_makeable(stock: &[StockItem], index: &StockIndex, recipe: &Recipe) -> bool {
    recipe
        .ingredients
        .iter()
        .all(|ingredient| has_enough(stock, index, ingredient))
}

/// Whether the matching stock item covers one serving of this line.
pub fn has_enough(stock: &[StockItem], index: &StockIndex, ingredient: &Ingredient) -> bool {
    index
        .lookup(stock, &ingredient.name)
        .map(|item| item.quantity >= ingredient.quantity)
        .unwrap_or(false)
}
