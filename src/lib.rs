pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

pub use config::cli::{LocalStorage, StdoutSink, WriterSink};
#[cfg(feature = "cli")]
pub use config::CliConfig;

pub use core::{engine::PacerEngine, pacer::LinePacer};
pub use domain::model::{EmitReport, FeedPlan, RunSummary};
pub use utils::error::{PacerError, Result};
