use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Where `SystemMonitor` logs; `--monitor` opens this target up to `info`.
pub const MONITOR_TARGET: &str = "line_pacer::monitor";

#[derive(Debug, Clone, Copy, Default)]
pub struct LogOptions {
    pub verbose: bool,
    pub monitor: bool,
    pub json: bool,
}

impl LogOptions {
    pub fn default_directives(&self) -> String {
        let mut directives = if self.verbose {
            "line_pacer=debug,warn".to_string()
        } else {
            "line_pacer=warn".to_string()
        };
        if self.monitor && !self.verbose {
            directives.push_str(&format!(",{}=info", MONITOR_TARGET));
        }
        directives
    }
}

// stdout carries the feed itself, so every log line goes to stderr.
pub fn init_cli_logger(options: LogOptions) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(options.default_directives()));

    let layer = tracing_subscriber::fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_thread_ids(false)
        .with_file(false)
        .with_line_number(false);

    let registry = tracing_subscriber::registry().with(filter);
    if options.json {
        registry.with(layer.json()).init();
    } else {
        registry.with(layer.compact()).init();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_directives() {
        assert_eq!(LogOptions::default().default_directives(), "line_pacer=warn");

        let monitor = LogOptions {
            monitor: true,
            ..Default::default()
        };
        assert_eq!(
            monitor.default_directives(),
            "line_pacer=warn,line_pacer::monitor=info"
        );

        let verbose = LogOptions {
            verbose: true,
            monitor: true,
            json: true,
        };
        assert_eq!(verbose.default_directives(), "line_pacer=debug,warn");
    }
}
