use clap::Parser;
use line_pacer::core::ConfigProvider;
use line_pacer::utils::logger::{self, LogOptions};
use line_pacer::utils::validation::Validate;
use line_pacer::{CliConfig, LinePacer, LocalStorage, PacerEngine, PacerError, StdoutSink};

fn fail(e: &PacerError) -> ! {
    tracing::debug!(
        "❌ Line pacer failed: {} (Category: {:?}, Severity: {:?})",
        e,
        e.category(),
        e.severity()
    );
    tracing::debug!("💡 Recovery suggestion: {}", e.recovery_suggestion());
    eprintln!("line-pacer: {}", e.user_friendly_message());
    std::process::exit(e.exit_code());
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    let config = CliConfig::parse();

    // 初始化日誌
    logger::init_cli_logger(LogOptions {
        verbose: config.verbose,
        monitor: config.monitor,
        json: config.log_json,
    });
    tracing::debug!("CLI config: {:?}", config);

    // 驗證配置
    if let Err(e) = config.validate() {
        fail(&e);
    }

    let monitor_enabled = config.monitor;
    if monitor_enabled {
        tracing::debug!("🔍 System monitoring enabled");
    }
    let dry_run = config.dry_run;
    let interval = config.sleep_interval();

    let pipeline = LinePacer::new(LocalStorage::default(), StdoutSink::stdout(), config);
    let engine = PacerEngine::new_with_monitoring(pipeline, monitor_enabled);

    if dry_run {
        let plan = engine.plan().await.unwrap_or_else(|e| fail(&e));
        eprintln!(
            "🔍 {}: {} header lines ({} bytes), {} paced lines, {} pauses of {:?}, about {:?} in total",
            engine.pipeline().config().file(),
            plan.header_lines,
            plan.header.len(),
            plan.body.len(),
            plan.pause_count(),
            interval,
            plan.expected_duration(interval)
        );
        return Ok(());
    }

    let summary = engine.run().await.unwrap_or_else(|e| fail(&e));
    tracing::debug!("Run summary: {}", serde_json::to_string(&summary)?);

    Ok(())
}
