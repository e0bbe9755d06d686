//! Diagnostic logging to stderr (or a file).
//!
//! Formatting output goes to stdout; logs never mix with it. `RUST_LOG`, when
//! set, replaces the computed filter entirely.

use std::fs::OpenOptions;
use std::path::PathBuf;
use std::sync::Mutex;

use tracing_subscriber::EnvFilter;
use tracing_subscriber::fmt::writer::BoxMakeWriter;

const LOG_LEVEL_ENV: &str = "DASHFMT_LOG";
const LOG_FORMAT_ENV: &str = "DASHFMT_LOG_FORMAT";
const LOG_FILE_ENV: &str = "DASHFMT_LOG_FILE";

/// Log line format.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum LogFormat {
    #[default]
    Human,
    /// One JSON object per event.
    Json,
}

impl LogFormat {
    /// Parse `human` or `json`, case-insensitively.
    #[must_use]
    pub fn from_arg(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "human" => Some(Self::Human),
            "json" => Some(Self::Json),
            _ => None,
        }
    }
}

/// Minimum level of events that get written.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord)]
pub enum LogLevel {
    Trace,
    Debug,
    Info,
    Warn,
    #[default]
    Error,
}

impl LogLevel {
    /// Parse a level name; `verbose` and `warning` are accepted aliases.
    #[must_use]
    pub fn from_arg(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "trace" => Some(Self::Trace),
            "verbose" | "debug" => Some(Self::Debug),
            "info" => Some(Self::Info),
            "warn" | "warning" => Some(Self::Warn),
            "error" => Some(Self::Error),
            _ => None,
        }
    }

    /// Directive understood by `EnvFilter`.
    #[must_use]
    pub const fn as_filter(self) -> &'static str {
        match self {
            Self::Trace => "trace",
            Self::Debug => "debug",
            Self::Info => "info",
            Self::Warn => "warn",
            Self::Error => "error",
        }
    }
}

/// Where, how and how much to log.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LogSettings {
    pub level: LogLevel,
    pub format: LogFormat,
    pub file: Option<PathBuf>,
}

impl LogSettings {
    /// Combine CLI flags with `DASHFMT_LOG`, `DASHFMT_LOG_FORMAT` and
    /// `DASHFMT_LOG_FILE`. Flags win; `verbose` lifts the default level to
    /// `debug` but never lowers an explicitly chosen one.
    #[must_use]
    pub fn resolve(level_flag: Option<&str>, json_flag: bool, verbose: bool) -> Self {
        let explicit = level_flag
            .and_then(LogLevel::from_arg)
            .or_else(|| non_empty_env(LOG_LEVEL_ENV).as_deref().and_then(LogLevel::from_arg));
        let level = match explicit {
            Some(level) => level,
            None if verbose => LogLevel::Debug,
            None => LogLevel::default(),
        };

        let format = if json_flag {
            LogFormat::Json
        } else {
            non_empty_env(LOG_FORMAT_ENV)
                .as_deref()
                .and_then(LogFormat::from_arg)
                .unwrap_or_default()
        };

        Self {
            level,
            format,
            file: non_empty_env(LOG_FILE_ENV).map(PathBuf::from),
        }
    }

    fn writer(&self) -> BoxMakeWriter {
        let file = self.file.as_ref().and_then(|path| {
            OpenOptions::new()
                .create(true)
                .append(true)
                .open(path)
                .ok()
        });
        match file {
            Some(file) => BoxMakeWriter::new(Mutex::new(file)),
            None => BoxMakeWriter::new(std::io::stderr),
        }
    }
}

fn non_empty_env(key: &str) -> Option<String> {
    std::env::var(key)
        .ok()
        .map(|value| value.trim().to_string())
        .filter(|value| !value.is_empty())
}

/// Install the global subscriber. A second call is a no-op.
pub fn init(settings: &LogSettings) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("dashfmt={}", settings.level.as_filter())));

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(settings.writer())
        .with_target(false);

    let installed = match settings.format {
        LogFormat::Json => builder.json().try_init(),
        LogFormat::Human => builder.without_time().try_init(),
    };
    installed.ok();
}

#[cfg(test)]
mod tests {
    use super::*;

    static ENV_LOCK: std::sync::Mutex<()> = std::sync::Mutex::new(());

    #[allow(unsafe_code)]
    fn with_env(vars: &[(&str, Option<&str>)], f: impl FnOnce()) {
        let _guard = ENV_LOCK.lock().unwrap_or_else(std::sync::PoisonError::into_inner);
        let prior: Vec<_> = vars
            .iter()
            .map(|(k, _)| ((*k).to_string(), std::env::var(k).ok()))
            .collect();
        for (key, value) in vars {
            unsafe {
                match value {
                    Some(v) => std::env::set_var(key, v),
                    None => std::env::remove_var(key),
                }
            }
        }
        f();
        for (key, value) in prior {
            unsafe {
                match value {
                    Some(v) => std::env::set_var(&key, v),
                    None => std::env::remove_var(&key),
                }
            }
        }
    }

    const CLEAN: &[(&str, Option<&str>)] = &[
        (LOG_LEVEL_ENV, None),
        (LOG_FORMAT_ENV, None),
        (LOG_FILE_ENV, None),
    ];

    #[test]
    fn defaults_to_human_errors_on_stderr() {
        with_env(CLEAN, || {
            assert_eq!(LogSettings::resolve(None, false, false), LogSettings::default());
        });
    }

    #[test]
    fn verbose_only_lifts_the_default_level() {
        with_env(CLEAN, || {
            assert_eq!(LogSettings::resolve(None, false, true).level, LogLevel::Debug);
            assert_eq!(
                LogSettings::resolve(Some("warn"), false, true).level,
                LogLevel::Warn
            );
        });
    }

    #[test]
    fn flag_wins_over_env_level() {
        with_env(
            &[(LOG_LEVEL_ENV, Some("trace")), (LOG_FORMAT_ENV, None), (LOG_FILE_ENV, None)],
            || {
                assert_eq!(LogSettings::resolve(None, false, false).level, LogLevel::Trace);
                assert_eq!(
                    LogSettings::resolve(Some("info"), false, false).level,
                    LogLevel::Info
                );
            },
        );
    }

    #[test]
    fn env_format_and_file() {
        with_env(
            &[
                (LOG_LEVEL_ENV, Some("   ")),
                (LOG_FORMAT_ENV, Some("JSON")),
                (LOG_FILE_ENV, Some("/tmp/dashfmt.log")),
            ],
            || {
                let settings = LogSettings::resolve(None, false, false);
                assert_eq!(settings.level, LogLevel::Error);
                assert_eq!(settings.format, LogFormat::Json);
                assert_eq!(settings.file, Some(PathBuf::from("/tmp/dashfmt.log")));
            },
        );
    }

    #[test]
    fn json_flag_forces_json() {
        with_env(
            &[(LOG_LEVEL_ENV, None), (LOG_FORMAT_ENV, Some("human")), (LOG_FILE_ENV, None)],
            || {
                assert_eq!(LogSettings::resolve(None, true, false).format, LogFormat::Json);
            },
        );
    }

    #[test]
    fn level_arg_aliases() {
        assert_eq!(LogLevel::from_arg("verbose"), Some(LogLevel::Debug));
        assert_eq!(LogLevel::from_arg("WARNING"), Some(LogLevel::Warn));
        assert_eq!(LogLevel::from_arg("loud"), None);
        assert_eq!(LogFormat::from_arg("compact"), None);
    }
}
