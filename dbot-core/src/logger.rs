//! Logging initialization: human-readable lines (timestamp, level, target, fields) on stdout,
//! optionally teed into an append-only log file, or on stderr for one-shot commands.

use std::fs::{self, OpenOptions};
use std::io;
use std::path::Path;
use std::sync::Arc;

use tracing_subscriber::{
    fmt::format::{FmtSpan, Writer},
    fmt::time::FormatTime,
    fmt::writer::{MakeWriter, MakeWriterExt},
    layer::SubscriberExt,
    util::SubscriberInitExt,
    EnvFilter, Registry,
};

/// Local time in `YYYY-MM-DD HH:MM:SS`.
struct ChronoLocal;

impl FormatTime for ChronoLocal {
    fn format_time(&self, w: &mut Writer<'_>) -> std::fmt::Result {
        let t = chrono::Local::now().format("%Y-%m-%d %H:%M:%S");
        write!(w, "{} ", t)
    }
}

/// Initializes the global tracing subscriber.
///
/// Level comes from `RUST_LOG` (e.g. `info`, `debug`), default `info`; load `.env` before calling.
/// With `Some(path)` the output also goes to that file (parent directory is created). No ANSI
/// codes, so the file stays plain text.
pub fn init_tracing(log_file_path: Option<&str>) -> anyhow::Result<()> {
    match log_file_path {
        Some(path) => {
            if let Some(parent) = Path::new(path).parent() {
                if !parent.as_os_str().is_empty() {
                    fs::create_dir_all(parent)?;
                }
            }
            let file = Arc::new(OpenOptions::new().create(true).append(true).open(path)?);
            install(io::stdout.and(file))
        }
        None => install(io::stdout),
    }
}

/// Same format as [`init_tracing`] but on stderr, for one-shot commands whose stdout is the result.
pub fn init_stderr_tracing() -> anyhow::Result<()> {
    install(io::stderr)
}

fn install<W>(writer: W) -> anyhow::Result<()>
where
    W: for<'a> MakeWriter<'a> + Send + Sync + 'static,
{
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    let event_format = tracing_subscriber::fmt::format()
        .with_timer(ChronoLocal)
        .with_level(true)
        .with_target(true)
        .with_thread_ids(false);

    let fmt_layer = tracing_subscriber::fmt::layer()
        .with_writer(writer)
        .event_format(event_format)
        .with_span_events(FmtSpan::NONE)
        .with_ansi(false);

    Registry::default()
        .with(env_filter)
        .with(fmt_layer)
        .try_init()
        .map_err(|e| anyhow::anyhow!("Failed to set global subscriber: {}", e))
}
