pub mod constraints;
pub mod recipe;
pub mod result;
pub mod stock;

pub use constraints::Constraints;
pub use recipe::{Ingredient, Nutrition, Recipe, RecipeCategory};
pub use result::{
    EfficiencyGrade, NutritionAdvisory, OptimizationResult, PlannedMeal, SearchStats, WasteEntry,
};
pub use stock::{StockCategory, StockItem, UrgencyLevel};
