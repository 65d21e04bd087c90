//! Logging goes to a file: the presenter owns stdout while it runs.

use anyhow::{Context, Result};
use std::path::{Path, PathBuf};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

const DEFAULT_LOG_FILE: &str = "slidedeck.log";
const DEBUG_FILTER: &str = "slidedeck=debug,slidedeck_core=debug,slidedeck_tui=debug,slidedeck_cli=debug";

/// Where to log, if anywhere. `--debug` without a configured path logs to
/// `slidedeck.log` in the working directory.
pub fn resolve_log_path(configured: Option<&Path>, debug: bool) -> Option<PathBuf> {
    match configured {
        Some(path) => Some(path.to_path_buf()),
        None if debug => Some(PathBuf::from(DEFAULT_LOG_FILE)),
        None => None,
    }
}

/// Install the global subscriber. Keep the returned guard alive until exit
/// so buffered lines are flushed.
pub fn init_logging(path: &Path, debug: bool) -> Result<WorkerGuard> {
    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
        _ => PathBuf::from("."),
    };
    std::fs::create_dir_all(&dir)
        .with_context(|| format!("creating log directory {}", dir.display()))?;
    let file_name = path
        .file_name()
        .map(|n| n.to_os_string())
        .unwrap_or_else(|| DEFAULT_LOG_FILE.into());

    let appender = tracing_appender::rolling::never(&dir, file_name);
    let (writer, guard) = tracing_appender::non_blocking(appender);

    let default_filter = if debug { DEBUG_FILTER } else { "info" };
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter)))
        .with(
            fmt::layer()
                .with_writer(writer)
                .with_ansi(false)
                .with_target(true),
        )
        .try_init()
        .context("installing tracing subscriber")?;

    tracing::info!("slidedeck v{} started", env!("CARGO_PKG_VERSION"));
    Ok(guard)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn log_path_resolution() {
        assert_eq!(resolve_log_path(None, false), None);
        assert_eq!(
            resolve_log_path(None, true),
            Some(PathBuf::from("slidedeck.log"))
        );
        assert_eq!(
            resolve_log_path(Some(Path::new("/var/log/deck.log")), false),
            Some(PathBuf::from("/var/log/deck.log"))
        );
    }
}
