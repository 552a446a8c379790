use crate::domain::model::{EmitReport, FeedPlan};
use crate::utils::error::Result;
use async_trait::async_trait;
use std::time::Duration;

pub trait Storage: Send + Sync {
    fn read_file(&self, path: &str) -> impl std::future::Future<Output = Result<Vec<u8>>> + Send;
}

/// Destination of the feed. Each call is one emission and must be visible
/// to the consumer (flushed) before it returns.
pub trait LineSink: Send {
    fn emit(&mut self, chunk: &[u8]) -> impl std::future::Future<Output = Result<()>> + Send;
}

pub trait ConfigProvider: Send + Sync {
    fn file(&self) -> &str;
    fn num_headers(&self) -> usize;
    fn sleep_interval(&self) -> Duration;
}

#[async_trait]
pub trait Pipeline: Send + Sync {
    async fn extract(&self) -> Result<Vec<u8>>;
    async fn transform(&self, content: Vec<u8>) -> Result<FeedPlan>;
    async fn load(&self, plan: FeedPlan) -> Result<EmitReport>;
}
