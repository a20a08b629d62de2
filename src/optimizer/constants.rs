use serde::{Deserialize, Serialize};

/// Extra weight on top of the 1.0 floor for stock expiring today or earlier.
/// Waste weight is `1 + MAX_WASTE_WEIGHT_BONUS / max(days_left, 1)`.
pub const MAX_WASTE_WEIGHT_BONUS: f64 = 4.0;

/// Tie-break cost per serving in the objective.
pub const SERVINGS_EPSILON: f64 = 1e-3;

/// Slack allowed when comparing used quantity with stock on hand.
pub const QUANTITY_TOLERANCE: f64 = 1e-9;

/// Divisor applied to `total_waste_score / stock_count` in the efficiency score.
pub const EFFICIENCY_SCALE: f64 = 10.0;

/// Prep time used when a recipe reports zero or negative minutes.
pub const MIN_PREP_TIME: f64 = 1.0;

/// Default cap on accepted local-search moves.
pub const MAX_LOCAL_SEARCH_MOVES: usize = 10_000;

/// Jaro-Winkler score above which a stock name is offered as a suggestion.
pub const SUGGESTION_THRESHOLD: f64 = 0.8;

// ─────────────────────────────────────────────────────────────────────────────
// Urgency thresholds (days left)
// ─────────────────────────────────────────────────────────────────────────────

pub const CRITICAL_DAYS: i32 = 1;

pub const SOON_DAYS: i32 = 3;

/// Runtime-configurable optimizer settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct OptimizerConfig {
    /// Tie-break cost per serving.
    pub epsilon: f64,

    /// Stop local search after this many accepted moves. `None` runs to a fixed point.
    pub max_moves: Option<usize>,

    /// Top up selected recipes when the greedy pass ends below the serving floor.
    /// Off by default.
    pub fill_shortfall: bool,
}

impl Default for OptimizerConfig {
    fn default() -> Self {
        Self {
            epsilon: SERVINGS_EPSILON,
            max_moves: Some(MAX_LOCAL_SEARCH_MOVES),
            fill_shortfall: false,
        }
    }
}

impl OptimizerConfig {
    /// Defaults plus the shortfall top-up after the greedy pass.
    pub fn with_fill() -> Self {
        Self {
            fill_shortfall: true,
            ..Default::default()
        }
    }
}
