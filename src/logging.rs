// src/logging.rs

//! Logging for the `irrisched` binary.
//!
//! Replay logs each commit at `info` and each rejected plan entry at `warn`.
//! Exclusivity rejections also get a `debug` line naming the busy valve,
//! the duplicate sensor or the conflicting timer.
//!
//! The level comes from `--log-level`, then `IRRISCHED_LOG` (any name
//! accepted by `tracing::Level`, e.g. `debug` or `WARN`), then `info`.
//!
//! Logs go to stderr so the replay report on stdout stays machine-readable.

use anyhow::Result;
use tracing::Level;
use tracing_subscriber::fmt;

use crate::cli::LogLevel;

/// Environment variable consulted when `--log-level` is not given.
pub const LOG_ENV: &str = "IRRISCHED_LOG";

/// Install the global subscriber. Fails if one is already installed.
pub fn init_logging(cli_level: Option<LogLevel>) -> Result<()> {
    let env_level = std::env::var(LOG_ENV).ok();
    let level = resolve_level(cli_level, env_level.as_deref());

    fmt()
        .with_max_level(level)
        .with_target(true)
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|e| anyhow::anyhow!("failed to install log subscriber: {e}"))?;

    Ok(())
}

/// Pick the effective level. An unparsable environment value is ignored.
pub fn resolve_level(cli_level: Option<LogLevel>, env_level: Option<&str>) -> Level {
    if let Some(level) = cli_level {
        return level.into();
    }
    env_level
        .and_then(|raw| raw.trim().parse::<Level>().ok())
        .unwrap_or(Level::INFO)
}

impl From<LogLevel> for Level {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Error => Level::ERROR,
            LogLevel::Warn => Level::WARN,
            LogLevel::Info => Level::INFO,
            LogLevel::Debug => Level::DEBUG,
            LogLevel::Trace => Level::TRACE,
        }
    }
}
