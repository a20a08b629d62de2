pub mod output;
pub mod search;

pub use output::{print_topk, write_best_json, write_csv};
pub use search::{evaluate, run_sweep, SweepConfig, SweepRanges, SweepResults, SweepSample};
