use serde::{Deserialize, Serialize};

use crate::optimizer::constants::{CRITICAL_DAYS, SOON_DAYS};

/// Storage category of a stock item. Not used by the optimizer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StockCategory {
    Vegetables,
    Meat,
    Dairy,
    Grains,
    Fruits,
    #[default]
    Other,
}

/// A perishable item on hand.
///
/// `name` is the only key recipes reference, compared case-insensitively.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StockItem {
    pub id: String,

    pub name: String,

    pub quantity: f64,

    #[serde(default)]
    pub unit: String,

    /// Whole days of shelf life left. Zero or negative means expired.
    pub days_left: i32,

    #[serde(default)]
    pub category: StockCategory,
}

impl StockItem {
    pub fn new(id: &str, name: &str, quantity: f64, unit: &str, days_left: i32) -> Self {
        Self {
            id: id.to_string(),
            name: name.to_string(),
            quantity,
            unit: unit.to_string(),
            days_left,
            category: StockCategory::Other,
        }
    }

    /// Canonical key for lookups (lowercase name).
    pub fn key(&self) -> String {
        self.name.to_lowercase()
    }

    pub fn urgency(&self) -> UrgencyLevel {
        UrgencyLevel::from_days_left(self.days_left)
    }
}

/// How soon a stock item needs to be used.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UrgencyLevel {
    Critical,
    Soon,
    Fresh,
}

impl UrgencyLevel {
    pub fn from_days_left(days_left: i32) -> Self {
        if days_left <= CRITICAL_DAYS {
            UrgencyLevel::Critical
        } else if days_left <= SOON_DAYS {
            UrgencyLevel::Soon
        } else {
            UrgencyLevel::Fresh
        }
    }

    /// Critical and soon items both count as urgent.
    pub fn is_urgent(self) -> bool {
        self != UrgencyLevel::Fresh
    }

    pub fn label(self) -> &'static str {
        match self {
            UrgencyLevel::Critical => "critical",
            UrgencyLevel::Soon => "soon",
            UrgencyLevel::Fresh => "fresh",
        }
    }
}
