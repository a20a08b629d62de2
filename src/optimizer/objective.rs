use crate::optimizer::allocation::Allocation;
use crate::optimizer::problem::Problem;

/// Expiry-weighted leftover across all stock.
pub fn weighted_waste(problem: &Problem, allocation: &Allocation) -> f64 {
    problem
        .weights()
        .iter()
        .zip(allocation.leftover())
        .map(|(weight, leftover)| weight * leftover)
        .sum()
}

/// Score to minimize: weighted waste plus a small per-serving tie-break.
pub fn objective(problem: &Problem, allocation: &Allocation) -> f64 {
    weighted_waste(problem, allocation) + problem.epsilon() * allocation.total_servings() as f64
}
