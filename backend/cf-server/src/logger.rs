//! fern-based logging for the crowdfund server.
//!
//! Every line has the shape `[<rfc3339> - LEVEL] message [file:line]`, on
//! stdout (optionally colored) or appended to a file.

use crate::error::{Result as ServerErrorResult, ServerError};

use std::fmt::Display;
use std::path::{Path, PathBuf};
use std::time::SystemTime;

use fern::Dispatch;
use fern::colors::{Color, ColoredLevelConfig};
use log::{LevelFilter, Record};

/// Targets that are chatty at `info` and only interesting when they fail
const QUIET_TARGETS: &[&str] = &["sqlx", "hyper", "tower_http"];

enum Sink {
    File(PathBuf),
    Colored,
    Plain,
}

impl Sink {
    fn choose(log_file: Option<PathBuf>, colored: bool) -> Self {
        match log_file {
            Some(path) => Sink::File(path),
            None if colored => Sink::Colored,
            None => Sink::Plain,
        }
    }
}

fn write_line(
    out: fern::FormatCallback<'_>,
    level: impl Display,
    message: &std::fmt::Arguments<'_>,
    record: &Record<'_>,
) {
    out.finish(format_args!(
        "[{} - {}] {} [{}:{}]",
        humantime::format_rfc3339(SystemTime::now()),
        level,
        message,
        record.file().unwrap_or("unknown"),
        record.line().unwrap_or(0),
    ))
}

fn open_append(path: &Path) -> ServerErrorResult<std::fs::File> {
    std::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .map_err(|e| ServerError::Logger {
            message: format!("Failed to open log file {}: {}", path.display(), e),
        })
}

/// Install the global logger.
///
/// `log_file` wins over `colored`; file output is never colored.
pub fn initialize(
    log_level: cf_config::LogLevel,
    log_file: Option<PathBuf>,
    colored: bool,
) -> ServerErrorResult<()> {
    let level_filter = *log_level;

    let mut dispatch = Dispatch::new().level(level_filter);
    for target in QUIET_TARGETS {
        dispatch = dispatch.level_for(*target, level_filter.min(LevelFilter::Warn));
    }

    let sink = Sink::choose(log_file, colored);
    let destination = match &sink {
        Sink::File(path) => format!("file {}", path.display()),
        Sink::Colored => "stdout (colored)".to_string(),
        Sink::Plain => "stdout".to_string(),
    };

    let dispatch = match sink {
        Sink::File(path) => dispatch
            .format(|out, message, record| write_line(out, record.level(), message, record))
            .chain(open_append(&path)?),
        Sink::Colored => {
            let colors = ColoredLevelConfig::new()
                .trace(Color::Magenta)
                .debug(Color::Blue)
                .info(Color::Green)
                .warn(Color::Yellow)
                .error(Color::Red);

            dispatch
                .format(move |out, message, record| {
                    write_line(out, colors.color(record.level()), message, record)
                })
                .chain(std::io::stdout())
        }
        // Non-TTY consumers (systemd, docker logs) get no escape codes
        Sink::Plain => dispatch
            .format(|out, message, record| write_line(out, record.level(), message, record))
            .chain(std::io::stdout()),
    };

    dispatch.apply().map_err(|e| ServerError::Logger {
        message: format!("Failed to initialize logger: {e}"),
    })?;

    log::info!("Logger initialized: level={}, {}", level_filter, destination);

    Ok(())
}

#[cfg(test)]
pub(crate) fn sink_name(log_file: Option<PathBuf>, colored: bool) -> &'static str {
    match Sink::choose(log_file, colored) {
        Sink::File(_) => "file",
        Sink::Colored => "colored",
        Sink::Plain => "plain",
    }
}
