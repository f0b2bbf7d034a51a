use anyhow::Result;
use show_playlist_config::LoggingConfig;
use std::io;
use std::path::Path;
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::fmt::{self, time::ChronoUtc};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Registry};

/// Filter for the given verbosity. `RUST_LOG` wins unless `--quiet` is set.
fn build_filter(verbose_level: u8, quiet: bool, default_level: &str) -> EnvFilter {
    if quiet {
        return EnvFilter::new("error");
    }

    // 0 = configured level, 1 = debug for our crates, 2+ = trace
    let directives = match verbose_level {
        0 => default_level.to_string(),
        1 => "info,show_playlist_core=debug,streamman=debug".to_string(),
        _ => "trace".to_string(),
    };
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(directives))
}

/// `RUST_LOG_JSON=true|false` overrides the configured setting
fn json_enabled(config: &LoggingConfig) -> bool {
    std::env::var("RUST_LOG_JSON")
        .map(|v| v == "true")
        .unwrap_or(config.json)
}

/// Daily rolling appender; `streamman.log` becomes `streamman.<date>`
fn file_appender(log_path: &Path) -> Result<RollingFileAppender> {
    let log_dir = log_path
        .parent()
        .ok_or_else(|| anyhow::anyhow!("Log file path has no parent directory"))?;
    std::fs::create_dir_all(log_dir)?;

    let log_filename = log_path
        .file_name()
        .and_then(|n| n.to_str())
        .ok_or_else(|| anyhow::anyhow!("Invalid log filename"))?;
    let log_prefix = log_filename
        .rsplit_once('.')
        .map(|(prefix, _)| prefix)
        .unwrap_or(log_filename);

    Ok(RollingFileAppender::new(Rotation::DAILY, log_dir, log_prefix))
}

pub fn init_logging(verbose_level: u8, quiet: bool, config: &LoggingConfig) -> Result<()> {
    let registry = Registry::default().with(build_filter(verbose_level, quiet, &config.level));
    let json = json_enabled(config);

    match &config.file {
        Some(log_path) => {
            let appender = file_appender(log_path)?;
            if json {
                registry
                    .with(fmt::layer().json().with_timer(ChronoUtc::rfc_3339()).with_writer(appender))
                    .init();
            } else {
                registry
                    .with(
                        fmt::layer()
                            .with_timer(ChronoUtc::rfc_3339())
                            .with_ansi(false)
                            .with_writer(appender),
                    )
                    .init();
            }
        }
        None => {
            if json {
                registry
                    .with(fmt::layer().json().with_timer(ChronoUtc::rfc_3339()).with_writer(io::stderr))
                    .init();
            } else {
                registry
                    .with(fmt::layer().with_timer(ChronoUtc::rfc_3339()).with_writer(io::stderr))
                    .init();
            }
        }
    }

    Ok(())
}
