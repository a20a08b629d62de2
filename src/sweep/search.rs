use std::cmp::Ordering;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::models::{Constraints, Recipe, StockItem};
use crate::optimizer::{optimize_with, OptimizerConfig};

/// Inclusive ranges the sweep samples constraints from.
#[derive(Debug, Clone)]
pub struct SweepRanges {
    pub min_servings: (i32, i32),
    pub max_dishes: (i32, i32),
}

impl Default for SweepRanges {
    fn default() -> Self {
        Self {
            min_servings: (1, 12),
            max_dishes: (1, 5),
        }
    }
}

impl SweepRanges {
    /// Draw one constraint set. Advisory targets are copied from `base`.
    pub fn sample(&self, rng: &mut impl Rng, base: &Constraints) -> Constraints {
        let (lo, hi) = ordered(self.min_servings);
        let min_total_servings = rng.gen_range(lo..=hi);
        let (lo, hi) = ordered(self.max_dishes);
        let max_distinct_dishes = rng.gen_range(lo..=hi);
        Constraints {
            min_total_servings,
            max_distinct_dishes,
            ..*base
        }
    }
}

fn ordered((a, b): (i32, i32)) -> (i32, i32) {
    if a <= b { (a, b) } else { (b, a) }
}

/// Configuration for the sweep.
pub struct SweepConfig {
    pub iterations: usize,
    pub seed: u64,
    pub ranges: SweepRanges,
    pub base: Constraints,
    pub optimizer: OptimizerConfig,
}

impl Default for SweepConfig {
    fn default() -> Self {
        Self {
            iterations: 200,
            seed: 123,
            ranges: SweepRanges::default(),
            base: Constraints::default(),
            optimizer: OptimizerConfig::default(),
        }
    }
}

/// Outcome of optimizing under one constraint set.
#[derive(Debug, Clone)]
pub struct SweepSample {
    pub constraints: Constraints,
    pub total_waste_score: f64,
    pub efficiency: u8,
    pub servings: u32,
    pub dishes: usize,
    pub moves: usize,
    /// Plan reached the serving floor.
    pub meets_floor: bool,
}

impl SweepSample {
    /// Lexicographic comparison: less waste, then higher efficiency, then fewer servings.
    /// `Less` means `self` is better.
    pub fn cmp_score(&self, other: &Self) -> Ordering {
        self.total_waste_score
            .total_cmp(&other.total_waste_score)
            .then_with(|| other.efficiency.cmp(&self.efficiency))
            .then_with(|| self.servings.cmp(&other.servings))
    }
}

/// Results from a sweep run.
pub struct SweepResults {
    /// All samples, best first.
    pub samples: Vec<SweepSample>,
    /// The sample for the base constraints.
    pub baseline: SweepSample,
}

/// Optimize once and summarize.
pub fn evaluate(
    stock: &[StockItem],
    recipes: &[Recipe],
    constraints: Constraints,
    config: &OptimizerConfig,
) -> SweepSample {
    let result = optimize_with(stock, recipes, constraints, config);
    let servings = result.total_servings();
    SweepSample {
        constraints,
        total_waste_score: result.total_waste_score,
        efficiency: result.efficiency,
        servings,
        dishes: result.meal_plan.len(),
        moves: result.stats.moves,
        meets_floor: servings >= constraints.serving_floor(),
    }
}

/// Run a seeded random search over constraint settings.
pub fn run_sweep(config: &SweepConfig, stock: &[StockItem], recipes: &[Recipe]) -> SweepResults {
    let mut rng = StdRng::seed_from_u64(config.seed);
    let mut samples = Vec::with_capacity(config.iterations);

    let baseline = evaluate(stock, recipes, config.base, &config.optimizer);
    println!(
        "Baseline: servings>={} dishes<={} waste={:.2} efficiency={}%",
        baseline.constraints.min_total_servings,
        baseline.constraints.max_distinct_dishes,
        baseline.total_waste_score,
        baseline.efficiency
    );

    println!("Running {} iterations...", config.iterations);

    let mut best_waste = baseline.total_waste_score;

    for i in 0..config.iterations {
        let constraints = config.ranges.sample(&mut rng, &config.base);
        let sample = evaluate(stock, recipes, constraints, &config.optimizer);

        if sample.total_waste_score < best_waste {
            best_waste = sample.total_waste_score;
            println!(
                "[{}/{}] New best: servings>={} dishes<={} waste={:.2} efficiency={}%",
                i + 1,
                config.iterations,
                constraints.min_total_servings,
                constraints.max_distinct_dishes,
                sample.total_waste_score,
                sample.efficiency
            );
        }

        samples.push(sample);

        // Progress indicator every 10%
        if (i + 1) % (config.iterations / 10).max(1) == 0 {
            let pct = ((i + 1) as f64 / config.iterations as f64) * 100.0;
            eprint!("\r{:.0}% complete", pct);
        }
    }
    eprintln!();

    samples.sort_by(|a, b| a.cmp_score(b));

    SweepResults { samples, baseline }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Ingredient;

    fn sample_stock() -> Vec<StockItem> {
        vec![
            StockItem::new("1", "Eggs", 10.0, "pieces", 1),
            StockItem::new("2", "Milk", 800.0, "ml", 1),
            StockItem::new("3", "Rice", 1000.0, "g", 30),
        ]
    }

    fn sample_recipes() -> Vec<Recipe> {
        vec![
            Recipe::new(
                "omelette",
                "Omelette",
                10.0,
                vec![
                    Ingredient::new("Eggs", 2.0, "pieces"),
                    Ingredient::new("Milk", 100.0, "ml"),
                ],
            ),
            Recipe::new("rice", "Rice Bowl", 15.0, vec![Ingredient::new("Rice", 100.0, "g")]),
        ]
    }

    #[test]
    fn test_sample_within_ranges() {
        let ranges = SweepRanges {
            min_servings: (2, 4),
            max_dishes: (3, 1),
        };
        let mut rng = StdRng::seed_from_u64(7);
        let base = Constraints::default();
        for _ in 0..50 {
            let c = ranges.sample(&mut rng, &base);
            assert!((2..=4).contains(&c.min_total_servings));
            assert!((1..=3).contains(&c.max_distinct_dishes));
            assert_eq!(c.target_calories, base.target_calories);
        }
    }

    #[test]
    fn test_cmp_score() {
        let base = SweepSample {
            constraints: Constraints::default(),
            total_waste_score: 10.0,
            efficiency: 50,
            servings: 4,
            dishes: 2,
            moves: 0,
            meets_floor: true,
        };
        let less_waste = SweepSample {
            total_waste_score: 5.0,
            ..base.clone()
        };
        let fewer_servings = SweepSample {
            servings: 3,
            ..base.clone()
        };

        assert_eq!(less_waste.cmp_score(&base), Ordering::Less);
        assert_eq!(fewer_servings.cmp_score(&base), Ordering::Less);
        assert_eq!(base.cmp_score(&base), Ordering::Equal);
    }

    #[test]
    fn test_run_sweep_sorted_and_reproducible() {
        let stock = sample_stock();
        let recipes = sample_recipes();
        let config = SweepConfig {
            iterations: 20,
            ..Default::default()
        };

        let first = run_sweep(&config, &stock, &recipes);
        let second = run_sweep(&config, &stock, &recipes);

        assert_eq!(first.samples.len(), 20);
        for pair in first.samples.windows(2) {
            assert_ne!(pair[0].cmp_score(&pair[1]), Ordering::Greater);
        }
        let a: Vec<_> = first.samples.iter().map(|s| s.constraints).collect();
        let b: Vec<_> = second.samples.iter().map(|s| s.constraints).collect();
        assert_eq!(a, b);
    }
}
