use crate::core::feed::plan_feed;
use crate::core::{ConfigProvider, EmitReport, FeedPlan, LineSink, Pipeline, Storage};
use crate::utils::error::Result;
use tokio::sync::Mutex;

/// Reads a file, writes its header block at once and paces the rest.
pub struct LinePacer<S: Storage, K: LineSink, C: ConfigProvider> {
    storage: S,
    sink: Mutex<K>,
    config: C,
}

impl<S: Storage, K: LineSink, C: ConfigProvider> LinePacer<S, K, C> {
    pub fn new(storage: S, sink: K, config: C) -> Self {
        Self {
            storage,
            sink: Mutex::new(sink),
            config,
        }
    }

    pub fn config(&self) -> &C {
        &self.config
    }

    pub fn into_sink(self) -> K {
        self.sink.into_inner()
    }
}

#[async_trait::async_trait]
impl<S: Storage, K: LineSink, C: ConfigProvider> Pipeline for LinePacer<S, K, C> {
    async fn extract(&self) -> Result<Vec<u8>> {
        tracing::debug!("Reading feed from: {}", self.config.file());
        self.storage.read_file(self.config.file()).await
    }

    async fn transform(&self, content: Vec<u8>) -> Result<FeedPlan> {
        let plan = plan_feed(&content, self.config.num_headers());
        tracing::debug!(
            "Planned {} header lines ({} bytes) and {} paced lines",
            plan.header_lines,
            plan.header.len(),
            plan.body.len()
        );
        Ok(plan)
    }

    async fn load(&self, plan: FeedPlan) -> Result<EmitReport> {
        let interval = self.config.sleep_interval();
        let mut sink = self.sink.lock().await;
        let mut report = EmitReport::default();

        for (index, chunk) in plan.emissions().enumerate() {
            if index > 0 {
                tokio::time::sleep(interval).await;
                report.pauses += 1;
            }

            sink.emit(chunk).await?;
            report.emissions += 1;
            report.bytes_emitted += chunk.len();
            tracing::trace!("Emitted chunk {} ({} bytes)", index, chunk.len());
        }

        Ok(report)
    }
}
