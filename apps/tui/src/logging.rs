//! Tracing setup shared by the terminal screen and headless mode.

use std::fs::File;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use tracing::Level;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Verbosity {
    /// Warnings and errors only. Used while the terminal screen is up.
    #[default]
    Quiet,
    Normal,
    Debug,
}

impl Verbosity {
    pub const fn level(self) -> Level {
        match self {
            Self::Quiet => Level::WARN,
            Self::Normal => Level::INFO,
            Self::Debug => Level::DEBUG,
        }
    }
}

/// Where log lines go for one run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LogTarget {
    Stderr,
    File(PathBuf),
    /// Nothing is installed; the terminal screen owns the tty.
    Discard,
}

/// Picks the log destination. Without a log file, only headless runs may
/// write to stderr.
pub fn log_target(headless: bool, log_file: Option<&Path>) -> LogTarget {
    match (log_file, headless) {
        (Some(path), _) => LogTarget::File(path.to_path_buf()),
        (None, true) => LogTarget::Stderr,
        (None, false) => LogTarget::Discard,
    }
}

/// Installs the subscriber for `target`.
pub fn init_target(verbosity: Verbosity, target: &LogTarget) -> std::io::Result<()> {
    match target {
        LogTarget::Stderr => init_logging(verbosity),
        LogTarget::File(path) => init_file_logging(verbosity, path)?,
        LogTarget::Discard => {}
    }
    Ok(())
}

fn default_filter(verbosity: Verbosity) -> EnvFilter {
    let directive = format!("zenith_radar={}", verbosity.level());
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(directive))
}

/// Logs to stderr. `RUST_LOG` overrides `verbosity`.
pub fn init_logging(verbosity: Verbosity) {
    let subscriber = tracing_subscriber::registry()
        .with(default_filter(verbosity))
        .with(fmt::layer().with_writer(std::io::stderr).with_target(true));

    // A subscriber may already be installed (tests, repeated init).
    let _ = subscriber.try_init();
}

/// Logs to `path`, truncating it. Keeps the alternate screen clean.
pub fn init_file_logging(verbosity: Verbosity, path: &Path) -> std::io::Result<()> {
    let file = File::create(path)?;
    let subscriber = tracing_subscriber::registry()
        .with(default_filter(verbosity))
        .with(
            fmt::layer()
                .with_writer(Mutex::new(file))
                .with_ansi(false)
                .with_target(true),
        );

    let _ = subscriber.try_init();
    Ok(())
}
