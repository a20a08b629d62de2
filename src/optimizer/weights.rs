use crate::optimizer::constants::MAX_WASTE_WEIGHT_BONUS;

/// Urgency multiplier for leftover stock.
///
/// 5.0 for anything expiring within a day (including overdue stock), decaying toward
/// 1.0 as shelf life grows.
#[inline]
pub fn waste_weight(days_left: i32) -> f64 {
    1.0 + MAX_WASTE_WEIGHT_BONUS / days_left.max(1) as f64
}
