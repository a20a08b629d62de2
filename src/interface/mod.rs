pub mod prompts;
pub mod render;

pub use prompts::{collect_constraints, parse_count, parse_amount, prompt_yes_no};
pub use render::{
    display_inventory, display_meal_plan, display_model_description, display_recipe_diagnoses,
};
