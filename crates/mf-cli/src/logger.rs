use mf_config::{ConfigError, ConfigErrorResult, LoggingConfig};

use std::fs::{File, OpenOptions};
use std::path::{Path, PathBuf};
use std::time::SystemTime;

use fern::Dispatch;
use fern::colors::{Color, ColoredLevelConfig};
use log::debug;

/// Initialize logger with fern
///
/// Stdout carries command output, so console logging goes to stderr.
/// File output is plain text and records the call site of each entry.
///
/// # Arguments
/// * `logging` - Level and color settings
/// * `log_file` - Resolved log file path. None = stderr
pub fn initialize(logging: &LoggingConfig, log_file: Option<PathBuf>) -> ConfigErrorResult<()> {
    let level_filter = logging.level.0;

    let sink = match log_file {
        Some(ref path) => file_sink(open_log_file(path)?),
        None => stderr_sink(logging.colored),
    };

    Dispatch::new()
        .level(level_filter)
        .chain(sink)
        .apply()
        .map_err(|e| ConfigError::logging(format!("Failed to initialize logger: {e}")))?;

    match log_file {
        Some(ref path) => debug!(
            "Logger initialized: level={:?}, file={}",
            level_filter,
            path.display()
        ),
        None => debug!("Logger initialized: level={:?}, stderr", level_filter),
    }

    // Bridge tracing events from the HTTP stack to log
    tracing_log::LogTracer::init().ok();

    Ok(())
}

/// Open (or create) the log file for appending, creating its directory first.
fn open_log_file(path: &Path) -> ConfigErrorResult<File> {
    if let Some(dir) = path.parent() {
        std::fs::create_dir_all(dir).map_err(|e| ConfigError::Io {
            path: dir.to_path_buf(),
            source: e,
        })?;
    }

    OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .map_err(|e| ConfigError::Io {
            path: path.to_path_buf(),
            source: e,
        })
}

fn file_sink(file: File) -> Dispatch {
    Dispatch::new()
        .format(|out, message, record| {
            out.finish(format_args!(
                "[{date} - {level}] {message} [{file}:{line}]",
                date = humantime::format_rfc3339(SystemTime::now()),
                level = record.level(),
                message = message,
                file = record.file().unwrap_or("unknown"),
                line = record.line().unwrap_or(0),
            ))
        })
        .chain(file)
}

fn stderr_sink(colored: bool) -> Dispatch {
    let colors = colored.then(|| {
        ColoredLevelConfig::new()
            .trace(Color::Magenta)
            .debug(Color::Blue)
            .info(Color::Green)
            .warn(Color::Yellow)
            .error(Color::Red)
    });

    Dispatch::new()
        .format(move |out, message, record| {
            let date = humantime::format_rfc3339(SystemTime::now());
            match colors {
                Some(colors) => out.finish(format_args!(
                    "[{date} - {level}] {message}",
                    level = colors.color(record.level()),
                )),
                None => out.finish(format_args!(
                    "[{date} - {level}] {message}",
                    level = record.level(),
                )),
            }
        })
        .chain(std::io::stderr())
}
