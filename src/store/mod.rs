mod export;
mod persistence;

pub use export::write_waste_csv;
pub use persistence::{
    load_config, load_constraints, load_recipes, load_stock, save_result, validate_recipes,
    validate_stock, warn_unmatched_names,
};
