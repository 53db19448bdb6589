// ============================================================
// Layer 6 - Logging Context
// ============================================================
// Builds the dual-sink logger explicitly instead of installing
// a process-wide subscriber:
//
//   console sink - human-readable lines on stderr
//   file sink    - append-only <log_dir>/data_ingestion.log
//
// Each line: timestamp, level, logger name (module target), message.
//
// The context owns a tracing Dispatch. Callers run work inside
// `LogContext::scope`, which makes that dispatch the default for
// the current thread only. Dropping the context drops the
// non-blocking writer guard, which flushes the file.
//
// Tests build a context over an in-memory writer with
// `LogContext::capturing` and assert on the captured text.
//
// Reference: tracing-subscriber / tracing-appender documentation

use std::{
    fmt::Display,
    fs,
    io,
    path::{Path, PathBuf},
};

use tracing::Dispatch;
use tracing_appender::{
    non_blocking::WorkerGuard,
    rolling::{RollingFileAppender, Rotation},
};
use tracing_subscriber::{
    fmt,
    layer::SubscriberExt,
    EnvFilter, Layer,
};

use crate::domain::error::{IngestError, IngestResult};

/// File name of the append-only log inside the log directory
pub const LOG_FILE_NAME: &str = "data_ingestion.log";

/// Filter used when RUST_LOG is not set: this crate at debug, dependencies silent
const DEFAULT_DIRECTIVE: &str = "data_ingestion=debug";

/// An initialised logging setup. Keep it alive for the whole run.
pub struct LogContext {
    dispatch: Dispatch,
    log_file: Option<PathBuf>,
    _guard:   Option<WorkerGuard>,
}

impl LogContext {
    /// Console + file logging, creating `log_dir` if needed.
    pub fn init(log_dir: impl AsRef<Path>) -> IngestResult<Self> {
        let log_dir = log_dir.as_ref();
        fs::create_dir_all(log_dir).map_err(|e| IngestError::persistence(log_dir, e))?;

        // Rotation::NEVER appends to the same file on every run
        let appender = RollingFileAppender::builder()
            .rotation(Rotation::NEVER)
            .filename_prefix(LOG_FILE_NAME)
            .build(log_dir)
            .map_err(|e| IngestError::persistence(log_dir.join(LOG_FILE_NAME), io::Error::other(e)))?;
        let (file_writer, guard) = tracing_appender::non_blocking(appender);

        let console = fmt::layer()
            .with_writer(io::stderr)
            .with_filter(env_filter());
        let file = fmt::layer()
            .with_ansi(false)
            .with_writer(file_writer)
            .with_filter(env_filter());

        let subscriber = tracing_subscriber::registry().with(console).with(file);

        Ok(Self {
            dispatch: Dispatch::new(subscriber),
            log_file: Some(log_dir.join(LOG_FILE_NAME)),
            _guard:   Some(guard),
        })
    }

    /// Run `f` with this context as the active logger.
    pub fn scope<T>(&self, f: impl FnOnce() -> T) -> T {
        tracing::dispatcher::with_default(&self.dispatch, f)
    }

    /// Path of the log file, if this context writes one
    pub fn log_file(&self) -> Option<&Path> {
        self.log_file.as_deref()
    }
}

#[cfg(test)]
impl LogContext {
    /// A single plain-text sink writing to `make_writer`, at debug level.
    pub fn capturing<W>(make_writer: W) -> Self
    where
        W: for<'a> fmt::MakeWriter<'a> + Send + Sync + 'static,
    {
        let layer = fmt::layer()
            .with_ansi(false)
            .with_writer(make_writer)
            .with_filter(EnvFilter::new(DEFAULT_DIRECTIVE));

        Self {
            dispatch: Dispatch::new(tracing_subscriber::registry().with(layer)),
            log_file: None,
            _guard:   None,
        }
    }
}

fn env_filter() -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_DIRECTIVE))
}

// ─── LogErr ───────────────────────────────────────────────────────────────────
/// Log a failure with context, then hand the Result back unchanged.
pub trait LogErr {
    fn log_err<C: Display>(self, context: impl FnOnce() -> C) -> Self;
}

impl<T, E: Display> LogErr for Result<T, E> {
    fn log_err<C: Display>(self, context: impl FnOnce() -> C) -> Self {
        if let Err(e) = &self {
            tracing::error!("{}: {}", context(), e);
        }
        self
    }
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use std::{
        io::Write,
        sync::{Arc, Mutex},
    };

    /// In-memory sink shared between the logger and the test
    #[derive(Clone, Default)]
    pub(crate) struct Captured(Arc<Mutex<Vec<u8>>>);

    impl Captured {
        pub(crate) fn text(&self) -> String {
            String::from_utf8_lossy(&self.0.lock().unwrap()).into_owned()
        }

        pub(crate) fn context(&self) -> LogContext {
            let sink = self.clone();
            LogContext::capturing(move || sink.clone())
        }
    }

    impl Write for Captured {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn test_log_err_logs_and_returns_error() {
        let sink = Captured::default();
        let ctx  = sink.context();

        let out: Result<(), String> = ctx.scope(|| {
            Err("disk full".to_string()).log_err(|| "Error saving data to 'data/raw'")
        });

        assert_eq!(out, Err("disk full".to_string()));
        let text = sink.text();
        assert!(text.contains("ERROR"));
        assert!(text.contains("Error saving data to 'data/raw': disk full"));
    }

    #[test]
    fn test_log_err_silent_on_success() {
        let sink = Captured::default();
        let ctx  = sink.context();

        let out: Result<u8, String> = ctx.scope(|| Ok(3).log_err(|| "unused"));
        assert_eq!(out, Ok(3));
        assert!(sink.text().is_empty());
    }

    #[test]
    fn test_dependency_targets_are_filtered_out() {
        let sink = Captured::default();
        let ctx  = sink.context();

        ctx.scope(|| {
            tracing::debug!(target: "hyper::proto", "dependency chatter");
            tracing::debug!("own debug line");
        });

        let text = sink.text();
        assert!(!text.contains("dependency chatter"));
        assert!(text.contains("own debug line"));
    }

    #[test]
    fn test_file_sink_appends_across_contexts() {
        let dir = tempfile::tempdir().unwrap();
        let log_dir = dir.path().join("log");

        for run in ["first run", "second run"] {
            let ctx = LogContext::init(&log_dir).unwrap();
            ctx.scope(|| tracing::info!("{run}"));
            drop(ctx);
        }

        let text = fs::read_to_string(log_dir.join(LOG_FILE_NAME)).unwrap();
        assert!(text.contains("first run"));
        assert!(text.contains("second run"));
        assert!(text.contains("INFO"));
    }
}
