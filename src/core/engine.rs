use crate::core::{FeedPlan, Pipeline, RunSummary};
use crate::utils::error::Result;
use crate::utils::monitor::SystemMonitor;
use chrono::Utc;
use tokio::time::Instant;

pub struct PacerEngine<P: Pipeline> {
    pipeline: P,
    monitor: SystemMonitor,
}

impl<P: Pipeline> PacerEngine<P> {
    pub fn new(pipeline: P) -> Self {
        Self::new_with_monitoring(pipeline, false)
    }

    pub fn new_with_monitoring(pipeline: P, monitor_enabled: bool) -> Self {
        Self {
            pipeline,
            monitor: SystemMonitor::new(monitor_enabled),
        }
    }

    pub fn pipeline(&self) -> &P {
        &self.pipeline
    }

    pub fn into_pipeline(self) -> P {
        self.pipeline
    }

    /// Reads and splits the input without emitting anything.
    pub async fn plan(&self) -> Result<FeedPlan> {
        let content = self.pipeline.extract().await?;
        self.pipeline.transform(content).await
    }

    pub async fn run(&self) -> Result<RunSummary> {
        let started_at = Utc::now();
        let start = Instant::now();
        tracing::info!("Starting line pacer");

        let content = self.pipeline.extract().await?;
        tracing::info!("Read {} bytes", content.len());

        let plan = self.pipeline.transform(content).await?;
        let header_lines = plan.header_lines;
        let body_lines = plan.body.len();
        self.monitor.log_planned(&plan);

        let report = self.pipeline.load(plan).await?;
        tracing::info!(
            "✅ Feed finished: {} emissions, {} bytes, {} pauses",
            report.emissions,
            report.bytes_emitted,
            report.pauses
        );

        let summary = RunSummary {
            started_at,
            header_lines,
            body_lines,
            bytes_emitted: report.bytes_emitted,
            pauses: report.pauses,
            elapsed: start.elapsed(),
        };
        self.monitor.log_summary(&summary);

        Ok(summary)
    }
}
