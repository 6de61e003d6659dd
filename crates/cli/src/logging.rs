use spingen_core::config::types::{LoggingConfig, ResolvedConfig};
use std::fs::File;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::filter::{EnvFilter, LevelFilter};
use tracing_subscriber::fmt;
use tracing_subscriber::prelude::*;

/// Install the global subscriber: stderr, plus a file when configured.
///
/// Each `-v` raises the stderr level one step above the configured one.
/// With `to_stderr` off only the file layer is installed, which keeps the
/// terminal UI's screen clean.
///
/// The returned guard flushes the log file when dropped; hold it for the
/// lifetime of the process.
#[must_use]
pub fn init(cfg: &ResolvedConfig, verbosity: u8, to_stderr: bool) -> Option<WorkerGuard> {
    let configured = parse_level(&cfg.logging.level).unwrap_or(LevelFilter::WARN);
    let stderr_level = raise_level(configured, verbosity);

    let stderr_filter =
        EnvFilter::builder().with_default_directive(stderr_level.into()).from_env_lossy();

    let stderr_layer = to_stderr.then(|| {
        fmt::layer()
            .with_writer(std::io::stderr)
            .with_ansi(true)
            .with_target(false)
            .with_filter(stderr_filter)
    });

    let registry = tracing_subscriber::registry().with(stderr_layer);

    if let Some(ref path) = cfg.logging.file {
        let file_level = parse_level(file_level_str(&cfg.logging))
            .unwrap_or(LevelFilter::DEBUG);

        let file_filter = EnvFilter::builder()
            .with_default_directive(file_level.into())
            .from_env_lossy();

        let file = File::create(path).unwrap_or_else(|e| {
            eprintln!("Failed to create log file {}: {}", path.display(), e);
            std::process::exit(1);
        });

        let (non_blocking, guard) = tracing_appender::non_blocking(file);

        let file_layer = fmt::layer()
            .with_writer(non_blocking)
            .with_ansi(false)
            .with_file(true)
            .with_line_number(true)
            .with_filter(file_filter);

        registry.with(file_layer).init();
        Some(guard)
    } else {
        registry.init();
        None
    }
}

fn file_level_str(logging: &LoggingConfig) -> &str {
    logging.file_level.as_deref().unwrap_or(&logging.level)
}

fn raise_level(base: LevelFilter, steps: u8) -> LevelFilter {
    const ORDER: [LevelFilter; 6] = [
        LevelFilter::OFF,
        LevelFilter::ERROR,
        LevelFilter::WARN,
        LevelFilter::INFO,
        LevelFilter::DEBUG,
        LevelFilter::TRACE,
    ];
    let start = ORDER.iter().position(|l| *l == base).unwrap_or(2);
    ORDER[(start + usize::from(steps)).min(ORDER.len() - 1)]
}

fn parse_level(s: &str) -> Option<LevelFilter> {
    match s.to_lowercase().as_str() {
        "off" => Some(LevelFilter::OFF),
        "error" => Some(LevelFilter::ERROR),
        "warn" => Some(LevelFilter::WARN),
        "info" => Some(LevelFilter::INFO),
        "debug" => Some(LevelFilter::DEBUG),
        "trace" => Some(LevelFilter::TRACE),
        _ => None,
    }
}
