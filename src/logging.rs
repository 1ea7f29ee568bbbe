use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

/// Build the log filter. With `debug` enabled `RUST_LOG` may override the
/// level; otherwise the level is fixed at `info`.
pub fn filter(debug: bool) -> EnvFilter {
    // When debug logging is disabled we force `info` level regardless of the
    // `RUST_LOG` environment variable.
    if debug {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug"))
    } else {
        EnvFilter::new("info")
    }
}

/// Initialise logging, writing to `log_file` when given and to stdout
/// otherwise. Calling this more than once keeps the first subscriber.
pub fn init(debug: bool, log_file: Option<PathBuf>) {
    let filter = filter(debug);

    let Some(path) = log_file else {
        let _ = tracing_subscriber::fmt().with_env_filter(filter).try_init();
        return;
    };

    let dir = path
        .parent()
        .filter(|p| !p.as_os_str().is_empty())
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from("."));
    let Some(file_name) = path.file_name() else {
        let _ = tracing_subscriber::fmt().with_env_filter(filter).try_init();
        tracing::warn!("log file path {} has no file name; logging to stdout", path.display());
        return;
    };
    let appender = tracing_appender::rolling::never(dir, file_name);
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_ansi(false)
        .with_writer(appender)
        .try_init();
}
