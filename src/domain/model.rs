use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// A file split into the block written up front and the lines paced after it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FeedPlan {
    /// First `min(N, total)` lines, concatenated with their terminators.
    pub header: Vec<u8>,
    pub header_lines: usize,
    pub body: Vec<Vec<u8>>,
}

impl FeedPlan {
    /// Chunks in emission order. An empty header block is not emitted.
    pub fn emissions(&self) -> impl Iterator<Item = &[u8]> + '_ {
        let header = (!self.header.is_empty()).then_some(self.header.as_slice());
        header
            .into_iter()
            .chain(self.body.iter().map(Vec::as_slice))
    }

    /// One pause between each pair of consecutive emissions, none after the last.
    pub fn pause_count(&self) -> usize {
        self.emissions().count().saturating_sub(1)
    }

    pub fn expected_duration(&self, interval: Duration) -> Duration {
        interval.saturating_mul(u32::try_from(self.pause_count()).unwrap_or(u32::MAX))
    }

    pub fn total_bytes(&self) -> usize {
        self.header.len() + self.body.iter().map(Vec::len).sum::<usize>()
    }

    pub fn is_empty(&self) -> bool {
        self.header.is_empty() && self.body.is_empty()
    }
}

/// What the sink actually received during a run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmitReport {
    pub emissions: usize,
    pub bytes_emitted: usize,
    pub pauses: usize,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RunSummary {
    pub started_at: DateTime<Utc>,
    pub header_lines: usize,
    pub body_lines: usize,
    pub bytes_emitted: usize,
    pub pauses: usize,
    pub elapsed: Duration,
}
