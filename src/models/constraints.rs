use serde::{Deserialize, Serialize};

/// Limits the optimizer works within.
///
/// Only `min_total_servings` and `max_distinct_dishes` are enforced. The calorie and
/// protein targets are carried through to the report as advice.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Constraints {
    pub min_total_servings: i32,
    pub max_distinct_dishes: i32,
    #[serde(default)]
    pub target_calories: f64,
    #[serde(default)]
    pub min_protein: f64,
}

impl Default for Constraints {
    fn default() -> Self {
        Self {
            min_total_servings: 6,
            max_distinct_dishes: 3,
            target_calories: 2000.0,
            min_protein: 60.0,
        }
    }
}

impl Constraints {
    pub fn new(min_total_servings: i32, max_distinct_dishes: i32) -> Self {
        Self {
            min_total_servings,
            max_distinct_dishes,
            ..Default::default()
        }
    }

    /// Dish cap as a count. Zero or negative caps allow no dishes.
    pub fn dish_cap(&self) -> usize {
        self.max_distinct_dishes.max(0) as usize
    }

    /// Serving floor as a count. Negative floors are treated as zero.
    pub fn serving_floor(&self) -> u32 {
        self.min_total_servings.max(0) as u32
    }
}
