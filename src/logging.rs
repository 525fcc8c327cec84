use std::path::PathBuf;

use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::EnvFilter;

const LOG_FILE_PREFIX: &str = "zpad.log";
const DEFAULT_FILTER: &str = "zpad=info";

/// 持有 non-blocking writer；drop 时刷出缓冲的日志
pub struct LoggingGuard {
    _guard: WorkerGuard,
}

fn log_dir() -> Option<PathBuf> {
    zpad::kernel::services::adapters::ensure_log_dir()
        .or_else(|_| -> std::io::Result<PathBuf> {
            let dir = std::env::temp_dir().join("zpad").join("logs");
            std::fs::create_dir_all(&dir)?;
            Ok(dir)
        })
        .ok()
}

/// 安装文件日志 subscriber
///
/// 日志目录不可写或已有 subscriber 时返回 `None`，编辑器照常运行但不写日志
pub fn init() -> Option<LoggingGuard> {
    let log_dir = log_dir()?;

    let file_appender = tracing_appender::rolling::daily(&log_dir, LOG_FILE_PREFIX);
    let (writer, guard) = tracing_appender::non_blocking(file_appender);

    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    let subscriber = tracing_subscriber::registry().with(env_filter).with(
        tracing_subscriber::fmt::layer()
            .with_writer(writer)
            .with_ansi(false)
            .with_target(true)
            .with_line_number(true),
    );
    if subscriber.try_init().is_err() {
        return None;
    }

    std::panic::set_hook(Box::new(|panic_info| {
        tracing::error!(panic = %panic_info, "panic");
    }));

    tracing::info!(log_dir = %log_dir.display(), version = env!("CARGO_PKG_VERSION"), "logging initialized");

    Some(LoggingGuard { _guard: guard })
}
