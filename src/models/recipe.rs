use serde::{Deserialize, Serialize};

/// One recipe line: how much of a stock item one serving needs.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Ingredient {
    /// Matched against `StockItem::name`, case-insensitively.
    pub name: String,

    pub quantity: f64,

    #[serde(default)]
    pub unit: String,
}

impl Ingredient {
    pub fn new(name: &str, quantity: f64, unit: &str) -> Self {
        Self {
            name: name.to_string(),
            quantity,
            unit: unit.to_string(),
        }
    }

    pub fn key(&self) -> String {
        self.name.to_lowercase()
    }
}

/// Nutrition per serving, or totals across a plan.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Nutrition {
    pub calories: f64,
    pub protein: f64,
    pub carbs: f64,
    pub fat: f64,
}

impl Nutrition {
    /// This nutrition multiplied by a serving count.
    pub fn scaled(&self, servings: u32) -> Nutrition {
        let n = servings as f64;
        Nutrition {
            calories: self.calories * n,
            protein: self.protein * n,
            carbs: self.carbs * n,
            fat: self.fat * n,
        }
    }

    pub fn add(&mut self, other: &Nutrition) {
        self.calories += other.calories;
        self.protein += other.protein;
        self.carbs += other.carbs;
        self.fat += other.fat;
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RecipeCategory {
    Breakfast,
    Lunch,
    Dinner,
    #[default]
    Main,
    Soup,
    Snack,
    Dessert,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Recipe {
    pub id: String,

    pub name: String,

    /// Servings one batch yields. Informational only.
    #[serde(default = "default_yield")]
    pub servings: u32,

    /// Preparation time in minutes. Divides the greedy priority.
    pub prep_time: f64,

    pub ingredients: Vec<Ingredient>,

    #[serde(default)]
    pub category: RecipeCategory,

    #[serde(default)]
    pub nutrition: Nutrition,
}

fn default_yield() -> u32 {
    1
}

impl Recipe {
    pub fn new(id: &str, name: &str, prep_time: f64, ingredients: Vec<Ingredient>) -> Self {
        Self {
            id: id.to_string(),
            name: name.to_string(),
            servings: 1,
            prep_time,
            ingredients,
            category: RecipeCategory::Main,
            nutrition: Nutrition::default(),
        }
    }

    pub fn with_nutrition(mut self, calories: f64, protein: f64, carbs: f64, fat: f64) -> Self {
        self.nutrition = Nutrition {
            calories,
            protein,
            carbs,
            fat,
        };
        self
    }
}
