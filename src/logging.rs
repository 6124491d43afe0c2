//! Logging set-up using `tracing` and `tracing-subscriber`
//!
//! The TUI owns the terminal, so log output goes to a file when one is given.
//! Line-based commands may log to stderr instead; the TUI without a log file
//! installs no subscriber at all.
//!
//! The `WADDLE_LOG` environment variable overrides the configured level with
//! any `EnvFilter` directive, e.g. `WADDLE_LOG=waddle::game=debug`.

use std::fs::{File, OpenOptions};
use std::io::{self, Write};
use std::path::PathBuf;
use std::sync::{Arc, Mutex};
use tracing::Level;
use tracing_subscriber::{
    EnvFilter,
    fmt::{self, MakeWriter},
    layer::SubscriberExt,
    util::SubscriberInitExt,
};

/// Environment variable holding filter directives
pub const LOG_ENV: &str = "WADDLE_LOG";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogConfig {
    pub level: Level,
    /// Append logs to this file
    pub log_file: Option<PathBuf>,
    /// Log to stderr when no file is given
    pub to_stderr: bool,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: Level::INFO,
            log_file: None,
            to_stderr: false,
        }
    }
}

impl LogConfig {
    #[must_use]
    pub fn with_level(mut self, level: Level) -> Self {
        self.level = level;
        self
    }

    #[must_use]
    pub fn with_log_file(mut self, path: Option<PathBuf>) -> Self {
        self.log_file = path;
        self
    }

    #[must_use]
    pub fn with_stderr(mut self, enable: bool) -> Self {
        self.to_stderr = enable;
        self
    }

    /// True if `init_logging` would install a subscriber
    #[must_use]
    pub fn is_enabled(&self) -> bool {
        self.log_file.is_some() || self.to_stderr
    }
}

/// Install the global subscriber described by `config`
///
/// Call once at start-up. Does nothing when the config has no sink.
///
/// # Errors
///
/// Returns an error if the log file cannot be opened or a global subscriber
/// is already installed.
pub fn init_logging(config: &LogConfig) -> io::Result<()> {
    if let Some(path) = &config.log_file {
        if let Some(parent) = path.parent()
            && !parent.as_os_str().is_empty()
        {
            std::fs::create_dir_all(parent)?;
        }
        let file = OpenOptions::new().create(true).append(true).open(path)?;
        init_with_writer(config, SharedFileWriter::new(file), false)
    } else if config.to_stderr {
        init_with_writer(config, io::stderr, true)
    } else {
        Ok(())
    }
}

fn init_with_writer<W>(config: &LogConfig, writer: W, ansi: bool) -> io::Result<()>
where
    W: for<'writer> MakeWriter<'writer> + Send + Sync + 'static,
{
    let layer = fmt::layer()
        .compact()
        .with_writer(writer)
        .with_ansi(ansi)
        .with_target(false);

    tracing_subscriber::registry()
        .with(build_env_filter(config.level))
        .with(layer)
        .try_init()
        .map_err(io::Error::other)
}

/// Filter from `WADDLE_LOG`, else the configured level for this crate and
/// `warn` for everything else
fn build_env_filter(level: Level) -> EnvFilter {
    EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| {
        let level = level.as_str().to_lowercase();
        EnvFilter::new(format!("warn,waddle={level}"))
    })
}

#[derive(Clone)]
struct SharedFileWriter {
    file: Arc<Mutex<File>>,
}

impl SharedFileWriter {
    fn new(file: File) -> Self {
        Self {
            file: Arc::new(Mutex::new(file)),
        }
    }
}

struct SharedFileGuard {
    file: Arc<Mutex<File>>,
}

impl Write for SharedFileGuard {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        let mut guard = self
            .file
            .lock()
            .map_err(|_| io::Error::other("log file lock poisoned"))?;
        guard.write(buf)
    }

    fn flush(&mut self) -> io::Result<()> {
        let mut guard = self
            .file
            .lock()
            .map_err(|_| io::Error::other("log file lock poisoned"))?;
        guard.flush()
    }
}

impl<'a> MakeWriter<'a> for SharedFileWriter {
    type Writer = SharedFileGuard;

    fn make_writer(&'a self) -> Self::Writer {
        SharedFileGuard {
            file: Arc::clone(&self.file),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_has_no_sink() {
        let config = LogConfig::default();
        assert_eq!(config.level, Level::INFO);
        assert!(!config.is_enabled());
        assert!(init_logging(&config).is_ok());
    }

    #[test]
    fn builders_set_sinks() {
        let config = LogConfig::default()
            .with_level(Level::DEBUG)
            .with_stderr(true);
        assert!(config.is_enabled());
        assert_eq!(config.level, Level::DEBUG);

        let config = LogConfig::default().with_log_file(Some(PathBuf::from("waddle.log")));
        assert!(config.is_enabled());
    }

    #[test]
    fn file_writer_appends() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("waddle.log");
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&path)
            .unwrap();

        let writer = SharedFileWriter::new(file);
        writer.make_writer().write_all(b"first\n").unwrap();
        writer.make_writer().write_all(b"second\n").unwrap();

        assert_eq!(std::fs::read_to_string(&path).unwrap(), "first\nsecond\n");
    }
}
