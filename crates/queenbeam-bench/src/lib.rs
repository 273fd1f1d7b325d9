//! Queenbeam Bench - beam-width sweep driver for the N-queens search.
//!
//! The sweep repeats the beam search many times per configured beam width
//! and aggregates the binary outcomes into success rates. The engine is
//! consumed strictly as a black box; the runner only counts `true`/`false`
//! results, so any function with the `run_search` shape can be swept.
//!
//! # Example
//!
//! ```
//! use queenbeam_bench::{MarkdownReport, SweepConfig, Sweep};
//!
//! let config = SweepConfig::new()
//!     .with_board_size(4)
//!     .with_beam_widths(vec![1, 4])
//!     .with_run_count(1)
//!     .with_problems_per_run(5)
//!     .with_random_seed(42);
//!
//! let result = Sweep::with_search(config, |_, width, _| Ok(width >= 4))
//!     .run()
//!     .unwrap();
//!
//! let report = MarkdownReport::to_string(&result);
//! assert!(report.contains("# Beam Width Sweep"));
//! ```

mod config;
mod report;
mod result;
mod runner;

pub use config::{ConfigError, SweepConfig};
pub use report::{CsvExporter, MarkdownReport};
pub use result::{SweepResult, WidthResult};
pub use runner::{run_sweep, Sweep, SweepError};
