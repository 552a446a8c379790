use crate::domain::model::{FeedPlan, RunSummary};
use crate::utils::logger::MONITOR_TARGET;
#[cfg(feature = "cli")]
use std::sync::Mutex;
#[cfg(feature = "cli")]
use sysinfo::{Pid, ProcessesToUpdate, System};

/// Process usage at one point of a run.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ResourceUsage {
    pub cpu_percent: f32,
    pub memory_mb: u64,
    pub peak_memory_mb: u64,
}

#[cfg(feature = "cli")]
struct Sampler {
    system: System,
    pid: Pid,
    peak_memory_mb: u64,
}

#[cfg(feature = "cli")]
impl Sampler {
    fn sample(&mut self) -> Option<ResourceUsage> {
        self.system
            .refresh_processes(ProcessesToUpdate::Some(&[self.pid]), true);
        let process = self.system.process(self.pid)?;
        let memory_mb = process.memory() / 1024 / 1024;
        self.peak_memory_mb = self.peak_memory_mb.max(memory_mb);

        Some(ResourceUsage {
            cpu_percent: process.cpu_usage(),
            memory_mb,
            peak_memory_mb: self.peak_memory_mb,
        })
    }
}

/// Reports feed progress next to the pacer's own CPU and memory use.
/// Without the `cli` feature (no sysinfo) it stays silent.
#[derive(Default)]
pub struct SystemMonitor {
    #[cfg(feature = "cli")]
    sampler: Option<Mutex<Sampler>>,
}

impl SystemMonitor {
    #[cfg(feature = "cli")]
    pub fn new(enabled: bool) -> Self {
        if !enabled {
            return Self::default();
        }

        let pid = match sysinfo::get_current_pid() {
            Ok(pid) => pid,
            Err(e) => {
                tracing::warn!("Resource monitoring unavailable: {}", e);
                return Self::default();
            }
        };

        let mut sampler = Sampler {
            system: System::new(),
            pid,
            peak_memory_mb: 0,
        };
        // CPU usage is a delta, so take the baseline now.
        sampler.sample();

        Self {
            sampler: Some(Mutex::new(sampler)),
        }
    }

    #[cfg(not(feature = "cli"))]
    pub fn new(_enabled: bool) -> Self {
        Self::default()
    }

    pub fn is_enabled(&self) -> bool {
        #[cfg(feature = "cli")]
        return self.sampler.is_some();
        #[cfg(not(feature = "cli"))]
        return false;
    }

    pub fn sample(&self) -> Option<ResourceUsage> {
        #[cfg(feature = "cli")]
        return self.sampler.as_ref()?.lock().ok()?.sample();
        #[cfg(not(feature = "cli"))]
        return None;
    }

    pub fn log_planned(&self, plan: &FeedPlan) {
        if let Some(usage) = self.sample() {
            tracing::info!(
                target: MONITOR_TARGET,
                "📊 Planned {} header lines and {} paced lines ({} bytes) - CPU: {:.1}%, Memory: {}MB",
                plan.header_lines,
                plan.body.len(),
                plan.total_bytes(),
                usage.cpu_percent,
                usage.memory_mb
            );
        }
    }

    pub fn log_summary(&self, summary: &RunSummary) {
        if let Some(usage) = self.sample() {
            tracing::info!(
                target: MONITOR_TARGET,
                "📊 Fed {} lines ({} bytes, {} pauses) in {:?} - CPU: {:.1}%, Peak memory: {}MB",
                summary.header_lines + summary.body_lines,
                summary.bytes_emitted,
                summary.pauses,
                summary.elapsed,
                usage.cpu_percent,
                usage.peak_memory_mb
            );
        }
    }
}
