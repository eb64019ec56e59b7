use crate::config::AppConfig;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

/// Install the global subscriber. Diagnostics go to stderr so stdout only
/// carries report lines. The returned guard must live until exit when file
/// logging is configured.
pub fn init_logging(config: &AppConfig) -> Option<WorkerGuard> {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.log_level));

    let stderr_layer = fmt::layer()
        .with_target(false)
        .with_writer(std::io::stderr);
    let registry = tracing_subscriber::registry()
        .with(filter)
        .with(stderr_layer);

    let Some(log_dir) = config.log_dir.as_deref() else {
        registry.init();
        return None;
    };

    let file_appender = match config.rotation.as_str() {
        "hourly" => tracing_appender::rolling::hourly(log_dir, &config.log_file),
        "daily" => tracing_appender::rolling::daily(log_dir, &config.log_file),
        _ => tracing_appender::rolling::never(log_dir, &config.log_file),
    };

    let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

    if config.use_json {
        let file_layer = fmt::layer()
            .json()
            .with_target(true) // Keep target in JSON for structured queries
            .with_writer(non_blocking)
            .with_ansi(false);
        registry.with(file_layer).init();
    } else {
        let file_layer = fmt::layer()
            .with_target(false)
            .with_writer(non_blocking)
            .with_ansi(false);
        registry.with(file_layer).init();
    }

    Some(guard)
}
