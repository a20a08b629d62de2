use serde::{Deserialize, Serialize};

use crate::models::recipe::Nutrition;
use crate::models::stock::UrgencyLevel;

/// A recipe chosen for the plan, with how many servings to cook.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlannedMeal {
    pub recipe_id: String,
    pub recipe_name: String,
    pub servings: u32,
}

/// Leftover of one stock item after the plan is cooked.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WasteEntry {
    pub item_id: String,
    pub item_name: String,
    pub unit: String,
    pub days_left: i32,
    pub urgency: UrgencyLevel,
    pub leftover: f64,
    pub waste_weight: f64,
}

impl WasteEntry {
    /// Leftover scaled by its expiry weight.
    pub fn weighted(&self) -> f64 {
        self.leftover * self.waste_weight
    }
}

/// How the plan's nutrition compares with the (unenforced) targets.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NutritionAdvisory {
    pub target_calories: f64,
    /// Plan calories minus target. Negative when under target.
    pub calorie_gap: f64,
    pub min_protein: f64,
    pub protein_met: bool,
}

/// Coarse bucket for the efficiency score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EfficiencyGrade {
    Good,
    Fair,
    Poor,
}

impl EfficiencyGrade {
    pub fn from_score(efficiency: u8) -> Self {
        if efficiency >= 80 {
            EfficiencyGrade::Good
        } else if efficiency >= 60 {
            EfficiencyGrade::Fair
        } else {
            EfficiencyGrade::Poor
        }
    }
}

/// Bookkeeping from one optimization run.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchStats {
    pub feasible_recipes: usize,
    pub greedy_objective: f64,
    pub final_objective: f64,
    /// Improving moves accepted by local search.
    pub moves: usize,
    /// Local search stopped at the move cap rather than a fixed point.
    pub capped: bool,
}

/// The report handed back to the caller.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OptimizationResult {
    pub meal_plan: Vec<PlannedMeal>,
    pub waste_estimate: Vec<WasteEntry>,
    pub total_waste_score: f64,
    pub nutrition_summary: Nutrition,
    /// 0 to 100.
    pub efficiency: u8,
    pub advisory: NutritionAdvisory,
    pub stats: SearchStats,
}

impl OptimizationResult {
    pub fn total_servings(&self) -> u32 {
        self.meal_plan.iter().map(|m| m.servings).sum()
    }

    pub fn servings_of(&self, recipe_id: &str) -> u32 {
        self.meal_plan
            .iter()
            .find(|m| m.recipe_id == recipe_id)
            .map(|m| m.servings)
            .unwrap_or(0)
    }

    pub fn leftover_of(&self, item_id: &str) -> Option<f64> {
        self.waste_estimate
            .iter()
            .find(|w| w.item_id == item_id)
            .map(|w| w.leftover)
    }

    pub fn grade(&self) -> EfficiencyGrade {
        EfficiencyGrade::from_score(self.efficiency)
    }

    pub fn urgent_leftovers(&self) -> usize {
        self.waste_estimate
            .iter()
            .filter(|w| w.leftover > 0.0 && w.urgency.is_urgent())
            .count()
    }
}
