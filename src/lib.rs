pub mod cli;
pub mod error;
pub mod interface;
pub mod logging;
pub mod models;
pub mod optimizer;
pub mod store;
pub mod sweep;

pub use error::{Result, WasteError};
pub use models::{Constraints, OptimizationResult, Recipe, StockItem};
pub use optimizer::{optimize, optimize_with, OptimizerConfig};
