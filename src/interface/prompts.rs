use dialoguer::{Confirm, Input};

use crate::error::{Result, WasteError};
use crate::models::Constraints;

/// Parse a non-negative whole number.
pub fn parse_count(input: &str) -> Result<i32> {
    let value: i32 = input
        .trim()
        .parse()
        .map_err(|_| WasteError::InvalidInput(format!("Invalid number: {}", input.trim())))?;
    if value < 0 {
        return Err(WasteError::InvalidInput("Value must be >= 0".to_string()));
    }
    Ok(value)
}

/// Parse a non-negative amount.
pub fn parse_amount(input: &str) -> Result<f64> {
    let value: f64 = input
        .trim()
        .parse()
        .map_err(|_| WasteError::InvalidInput(format!("Invalid number: {}", input.trim())))?;
    if !value.is_finite() || value < 0.0 {
        return Err(WasteError::InvalidInput("Value must be >= 0".to_string()));
    }
    Ok(value)
}

fn prompt_text(prompt: &str, default: String) -> Result<String> {
    Ok(Input::new()
        .with_prompt(prompt)
        .default(default)
        .interact_text()?)
}

/// Prompt for the minimum number of servings across all dishes.
pub fn prompt_min_servings(default: i32) -> Result<i32> {
    let input = prompt_text("Minimum total servings", default.to_string())?;
    parse_count(&input)
}

/// Prompt for the maximum number of distinct dishes.
pub fn prompt_max_dishes(default: i32) -> Result<i32> {
    let input = prompt_text("Maximum distinct dishes", default.to_string())?;
    let value = parse_count(&input)?;
    if value == 0 {
        println!("A dish cap of 0 always produces an empty plan.");
    }
    Ok(value)
}

pub fn prompt_target_calories(default: f64) -> Result<f64> {
    let input = prompt_text("Target calories (advisory)", format!("{:.0}", default))?;
    parse_amount(&input)
}

pub fn prompt_min_protein(default: f64) -> Result<f64> {
    let input = prompt_text("Minimum protein in g (advisory)", format!("{:.0}", default))?;
    parse_amount(&input)
}

/// Prompt for yes/no confirmation.
pub fn prompt_yes_no(prompt: &str, default: bool) -> Result<bool> {
    Ok(Confirm::new()
        .with_prompt(prompt)
        .default(default)
        .interact()?)
}

/// Collect all constraints, offering `defaults` for each answer.
pub fn collect_constraints(defaults: &Constraints) -> Result<Constraints> {
    let min_total_servings = prompt_min_servings(defaults.min_total_servings)?;
    let max_distinct_dishes = prompt_max_dishes(defaults.max_distinct_dishes)?;
    let target_calories = prompt_target_calories(defaults.target_calories)?;
    let min_protein = prompt_min_protein(defaults.min_protein)?;

    Ok(Constraints {
        min_total_servings,
        max_distinct_dishes,
        target_calories,
        min_protein,
    })
}
