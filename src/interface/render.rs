use crate::models::{EfficiencyGrade, OptimizationResult, StockItem};
use crate::optimizer::{waste_weight, IngredientStatus, RecipeDiagnosis};

fn grade_label(grade: EfficiencyGrade) -> &'static str {
    match grade {
        EfficiencyGrade::Good => "good",
        EfficiencyGrade::Fair => "fair",
        EfficiencyGrade::Poor => "poor",
    }
}

fn day_word(days: i32) -> &'static str {
    if days == 1 { "day" } else { "days" }
}

/// Display the meal plan, leftovers and nutrition totals.
pub fn display_meal_plan(result: &OptimizationResult) {
    println!();
    println!("=== Meal Plan ===");
    println!();

    if result.meal_plan.is_empty() {
        println!("No meal plan generated (no makeable recipes or a dish cap of 0).");
    } else {
        let width = result
            .meal_plan
            .iter()
            .map(|m| m.recipe_name.len())
            .max()
            .unwrap_or(10);

        for (i, meal) in result.meal_plan.iter().enumerate() {
            println!(
                "{:>3}. {:<width$} x {}",
                i + 1,
                meal.recipe_name,
                meal.servings,
                width = width
            );
        }
    }

    println!();
    println!("--- Leftovers ---");
    let wasted: Vec<_> = result
        .waste_estimate
        .iter()
        .filter(|w| w.leftover > 0.0)
        .collect();
    if wasted.is_empty() {
        println!("Everything is used up.");
    } else {
        for entry in wasted {
            println!(
                "  {} - {:.1} {} left, {} {} to expiry [{}] (weight {:.2})",
                entry.item_name,
                entry.leftover,
                entry.unit,
                entry.days_left,
                day_word(entry.days_left),
                entry.urgency.label(),
                entry.waste_weight
            );
        }
    }

    let n = &result.nutrition_summary;
    let advisory = &result.advisory;
    println!();
    println!("--- Nutrition ---");
    println!(
        "Calories: {:.0} (target {:.0}, {:+.0})",
        n.calories, advisory.target_calories, advisory.calorie_gap
    );
    println!(
        "Protein:  {:.1} g (min {:.0} g{})",
        n.protein,
        advisory.min_protein,
        if advisory.protein_met { "" } else { ", not met" }
    );
    println!("Carbs:    {:.1} g", n.carbs);
    println!("Fat:      {:.1} g", n.fat);

    println!();
    println!("--- Summary ---");
    println!("Dishes: {}", result.meal_plan.len());
    println!("Total servings: {}", result.total_servings());
    println!("Weighted waste: {:.2}", result.total_waste_score);
    println!("Urgent items left over: {}", result.urgent_leftovers());
    println!(
        "Efficiency: {}% ({})",
        result.efficiency,
        grade_label(result.grade())
    );
    println!(
        "Search: {} feasible recipes, objective {:.3} -> {:.3} in {} moves{}",
        result.stats.feasible_recipes,
        result.stats.greedy_objective,
        result.stats.final_objective,
        result.stats.moves,
        if result.stats.capped { " (capped)" } else { "" }
    );
    println!();
}

/// Display stock sorted by urgency, soonest first.
pub fn display_inventory(stock: &[StockItem]) {
    if stock.is_empty() {
        println!("Inventory: (none)");
        return;
    }

    let mut items: Vec<&StockItem> = stock.iter().collect();
    items.sort_by_key(|item| item.days_left);

    let urgent = items.iter().filter(|i| i.urgency().is_urgent()).count();

    println!();
    println!("=== Inventory ({} items, {} urgent) ===", items.len(), urgent);
    println!();

    for item in items {
        println!(
            "  {:<8} {} - {} {}, {} {} left (weight {:.2})",
            format!("[{}]", item.urgency().label()),
            item.name,
            item.quantity,
            item.unit,
            item.days_left,
            day_word(item.days_left),
            waste_weight(item.days_left)
        );
    }

    println!();
}

/// Display which recipes can be made and why the others can't.
pub fn display_recipe_diagnoses(diagnoses: &[RecipeDiagnosis]) {
    if diagnoses.is_empty() {
        println!("Recipes: (none)");
        return;
    }

    let makeable = diagnoses.iter().filter(|d| d.can_make()).count();

    println!();
    println!(
        "=== Recipes ({} of {} makeable) ===",
        makeable,
        diagnoses.len()
    );
    println!();

    for diagnosis in diagnoses {
        let mark = if diagnosis.can_make() { "ok" } else { "--" };
        println!(
            "  [{}] {} ({}/{} ingredients available)",
            mark,
            diagnosis.recipe_name,
            diagnosis.available(),
            diagnosis.total()
        );

        for check in &diagnosis.ingredients {
            match &check.status {
                IngredientStatus::Available => {}
                IngredientStatus::Insufficient { needed, on_hand } => {
                    println!(
                        "       {}: need {} per serving, have {}",
                        check.name, needed, on_hand
                    );
                }
                IngredientStatus::Missing {
                    suggestion: Some(name),
                } => {
                    println!("       {}: not in stock (did you mean '{}'?)", check.name, name);
                }
                IngredientStatus::Missing { suggestion: None } => {
                    println!("       {}: not in stock", check.name);
                }
            }
        }
    }

    println!();
}

/// Describe the optimization model in plain text.
pub fn display_model_description() {
    println!(
        r#"
Objective
  minimize  sum_i weight_i * w_i  +  eps * sum_r x_r

  weight_i = 1 + 4 / max(days_left_i, 1)   expiry weight of stock item i
  w_i >= 0                                 leftover of stock item i
  x_r >= 0, integer                        servings of recipe r
  eps = 1e-3                               tie-break per serving

Constraints
  1. stock balance   sum_r a_ir * x_r + w_i = stock_i   for every item i
  2. min servings    sum_r x_r >= min_servings
  3. max dishes      sum_r y_r <= max_dishes
  4. linking         x_r > 0 only if y_r = 1            (y_r in {{0, 1}})

Calorie and protein targets are reported but not enforced.

Solution steps
  1. Keep recipes whose every ingredient is in stock for one serving
  2. Rank them by urgency-weighted quantity per minute of prep time
  3. Greedily take servings in rank order until the dish cap is reached
  4. Hill-climb by moving single servings between recipes
  5. Accept only feasible moves that lower the objective
  6. Report the plan, leftovers, nutrition and efficiency
"#
    );
}
