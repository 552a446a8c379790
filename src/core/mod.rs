pub mod engine;
pub mod feed;
pub mod pacer;

pub use crate::domain::model::{EmitReport, FeedPlan, RunSummary};
pub use crate::domain::ports::{ConfigProvider, LineSink, Pipeline, Storage};
pub use crate::utils::error::Result;
