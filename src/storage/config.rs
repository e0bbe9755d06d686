//! Configuration file loading and management.
//!
//! Loads configuration from `config.toml` in the platform config directory
//! (e.g. `~/.config/dashfmt/config.toml` on Linux).
//!
//! ## Precedence
//!
//! Settings are resolved with the following precedence (highest first):
//! 1. CLI flags
//! 2. Environment variables
//! 3. Config file
//! 4. Built-in defaults
//!
//! ## Environment Variables
//!
//! - `DASHFMT_FORMAT`: Output format (human, json)
//! - `DASHFMT_NO_COLOR` or `NO_COLOR`: Disable colors
//! - `DASHFMT_VERBOSE`: Enable verbose output (1, true, yes)
//! - `DASHFMT_PRETTY`: Pretty-print JSON output (1, true, yes)
//! - `DASHFMT_STATE_FILE`: Override the sidebar state file
//! - `DASHFMT_CONFIG`: Override config file path

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use super::AppPaths;
use crate::cli::args::{Cli, OutputFormat};
use crate::error::{DashError, Result};
use crate::format::fixed::MAX_DECIMAL_PLACES;
use crate::format::{DEFAULT_CHART_KIND, DEFAULT_VARIANCE_KIND, ValueKind};

// =============================================================================
// Environment Variable Names
// =============================================================================

/// Environment variable for output format.
pub const ENV_FORMAT: &str = "DASHFMT_FORMAT";
/// Environment variable to disable colors.
pub const ENV_NO_COLOR: &str = "DASHFMT_NO_COLOR";
/// Standard environment variable to disable colors.
pub const ENV_NO_COLOR_STD: &str = "NO_COLOR";
/// Environment variable for verbose output.
pub const ENV_VERBOSE: &str = "DASHFMT_VERBOSE";
/// Environment variable for pretty JSON output.
pub const ENV_PRETTY: &str = "DASHFMT_PRETTY";
/// Environment variable overriding the sidebar state file.
pub const ENV_STATE_FILE: &str = "DASHFMT_STATE_FILE";
/// Environment variable to override config file path.
pub const ENV_CONFIG: &str = "DASHFMT_CONFIG";

// =============================================================================
// Resolved Configuration
// =============================================================================

/// Fully resolved configuration after merging CLI, env vars, and config file.
#[derive(Debug, Clone)]
pub struct ResolvedConfig {
    /// Output format.
    pub format: OutputFormat,
    /// Whether to disable colored output.
    pub no_color: bool,
    /// Whether verbose logging is enabled.
    pub verbose: bool,
    /// Whether to pretty-print JSON output.
    pub pretty: bool,
    /// Formatter defaults from the config file.
    pub display: DisplayConfig,
    /// Sidebar state file.
    pub state_file: PathBuf,
    /// Config file consulted (it may not exist).
    pub config_path: PathBuf,
    /// Source of each setting for debugging.
    pub sources: ConfigSources,
}

/// Tracks the source of each configuration value.
#[derive(Debug, Clone, Default)]
pub struct ConfigSources {
    pub format: ConfigSource,
    pub no_color: ConfigSource,
    pub verbose: ConfigSource,
    pub pretty: ConfigSource,
    pub state_file: ConfigSource,
}

/// Where a configuration value came from.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ConfigSource {
    /// Value from CLI flag.
    Cli,
    /// Value from environment variable.
    Env,
    /// Value from config file.
    ConfigFile,
    /// Built-in default.
    #[default]
    Default,
}

impl std::fmt::Display for ConfigSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Cli => write!(f, "CLI flag"),
            Self::Env => write!(f, "environment variable"),
            Self::ConfigFile => write!(f, "config file"),
            Self::Default => write!(f, "default"),
        }
    }
}

impl ResolvedConfig {
    /// Resolve final configuration from CLI args, environment variables, and config file.
    ///
    /// # Errors
    ///
    /// Returns an error if the config file exists but is invalid, or a
    /// resolved value is invalid.
    pub fn resolve(cli: &Cli) -> Result<Self> {
        let config_path = Self::config_path();
        let config = Config::load_from(&config_path)?;
        config.validate()?;

        let mut sources = ConfigSources::default();

        let format = Self::resolve_format(cli, &config, &mut sources.format)?;
        let no_color = Self::resolve_no_color(cli, &config, &mut sources.no_color);
        let verbose = Self::resolve_verbose(cli, &mut sources.verbose);
        let pretty = Self::resolve_pretty(cli, &config, &mut sources.pretty);
        let state_file = Self::resolve_state_file(&config, &mut sources.state_file);

        Ok(Self {
            format,
            no_color,
            verbose,
            pretty,
            display: config.display,
            state_file,
            config_path,
            sources,
        })
    }

    /// Config file path, respecting `DASHFMT_CONFIG`.
    #[must_use]
    pub fn config_path() -> PathBuf {
        std::env::var(ENV_CONFIG)
            .ok()
            .filter(|p| !p.trim().is_empty())
            .map_or_else(Config::config_path, PathBuf::from)
    }

    /// Whether verbose logging was requested by `-v` or `DASHFMT_VERBOSE`.
    ///
    /// Logging starts before the config file is read, so this only consults
    /// the flag and the environment.
    #[must_use]
    pub fn verbose_requested(cli: &Cli) -> bool {
        Self::resolve_verbose(cli, &mut ConfigSource::default())
    }

    /// Resolve output format setting.
    fn resolve_format(
        cli: &Cli,
        config: &Config,
        source: &mut ConfigSource,
    ) -> Result<OutputFormat> {
        // 1. CLI --json shorthand, then --format
        if cli.json {
            *source = ConfigSource::Cli;
            return Ok(OutputFormat::Json);
        }

        if let Some(format) = cli.format {
            *source = ConfigSource::Cli;
            return Ok(format);
        }

        // 2. Environment variable
        if let Ok(format_env) = std::env::var(ENV_FORMAT) {
            *source = ConfigSource::Env;
            return Self::parse_format(&format_env);
        }

        // 3. Config file
        if let Some(ref format_str) = config.output.format {
            *source = ConfigSource::ConfigFile;
            return Self::parse_format(format_str);
        }

        // 4. Default
        *source = ConfigSource::Default;
        Ok(OutputFormat::Human)
    }

    /// Parse a format string into `OutputFormat`.
    fn parse_format(s: &str) -> Result<OutputFormat> {
        match s.trim().to_lowercase().as_str() {
            "human" => Ok(OutputFormat::Human),
            "json" => Ok(OutputFormat::Json),
            _ => Err(DashError::Config(format!(
                "Invalid format '{s}'. Valid formats: human, json"
            ))),
        }
    }

    /// Resolve `no_color` setting.
    fn resolve_no_color(cli: &Cli, config: &Config, source: &mut ConfigSource) -> bool {
        if cli.no_color {
            *source = ConfigSource::Cli;
            return true;
        }

        if Self::is_env_truthy(ENV_NO_COLOR) || std::env::var(ENV_NO_COLOR_STD).is_ok() {
            *source = ConfigSource::Env;
            return true;
        }

        // Inverted: output.color = false means no_color = true
        if !config.output.color {
            *source = ConfigSource::ConfigFile;
            return true;
        }

        *source = ConfigSource::Default;
        false
    }

    /// Resolve verbose setting.
    fn resolve_verbose(cli: &Cli, source: &mut ConfigSource) -> bool {
        if cli.verbose {
            *source = ConfigSource::Cli;
            return true;
        }

        if Self::is_env_truthy(ENV_VERBOSE) {
            *source = ConfigSource::Env;
            return true;
        }

        *source = ConfigSource::Default;
        false
    }

    /// Resolve pretty setting.
    fn resolve_pretty(cli: &Cli, config: &Config, source: &mut ConfigSource) -> bool {
        if cli.pretty {
            *source = ConfigSource::Cli;
            return true;
        }

        if Self::is_env_truthy(ENV_PRETTY) {
            *source = ConfigSource::Env;
            return true;
        }

        if config.output.pretty {
            *source = ConfigSource::ConfigFile;
            return true;
        }

        *source = ConfigSource::Default;
        false
    }

    /// Resolve the sidebar state file. The `--state-file` flag is applied by
    /// the sidebar command on top of this.
    fn resolve_state_file(config: &Config, source: &mut ConfigSource) -> PathBuf {
        if let Some(path) = std::env::var(ENV_STATE_FILE)
            .ok()
            .filter(|p| !p.trim().is_empty())
        {
            *source = ConfigSource::Env;
            return PathBuf::from(path);
        }

        if let Some(ref path) = config.sidebar.state_file {
            *source = ConfigSource::ConfigFile;
            return path.clone();
        }

        *source = ConfigSource::Default;
        AppPaths::new().sidebar_state_file()
    }

    /// Check if an environment variable is set to a truthy value.
    fn is_env_truthy(var: &str) -> bool {
        std::env::var(var)
            .map(|v| matches!(v.to_lowercase().as_str(), "1" | "true" | "yes" | "on"))
            .unwrap_or(false)
    }
}

/// Application configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Formatter defaults.
    pub display: DisplayConfig,
    /// Output settings.
    pub output: OutputConfig,
    /// Sidebar state settings.
    pub sidebar: SidebarConfig,
}

/// Formatter defaults used when the command line does not say.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DisplayConfig {
    /// Kind for `chart` (moeda, numero, percentual).
    pub chart_kind: String,
    /// Kind for `variance`.
    pub variance_kind: String,
    /// Show cents on unscaled currency values.
    pub show_cents: bool,
    /// Fixed percentage decimal places; unset uses the automatic rule.
    pub percentage_places: Option<usize>,
}

/// Output formatting configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    /// Default output format (human, json).
    pub format: Option<String>,
    /// Whether to use colors in output.
    pub color: bool,
    /// Whether to pretty-print JSON output.
    pub pretty: bool,
}

/// Sidebar state configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SidebarConfig {
    /// State file; defaults to the platform data directory.
    pub state_file: Option<PathBuf>,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            chart_kind: DEFAULT_CHART_KIND.to_string(),
            variance_kind: DEFAULT_VARIANCE_KIND.to_string(),
            show_cents: false,
            percentage_places: None,
        }
    }
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            format: None,
            color: true,
            pretty: false,
        }
    }
}

impl Config {
    /// Load configuration from a specific path.
    ///
    /// Returns default config if the file doesn't exist.
    ///
    /// # Errors
    /// Returns an error only if the file exists but is unreadable or invalid.
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            tracing::debug!(?path, "Config file not found, using defaults");
            return Ok(Self::default());
        }

        tracing::debug!(?path, "Loading config file");
        let content = fs::read_to_string(path)?;
        toml::from_str(&content).map_err(|e| DashError::ConfigParse {
            path: path.display().to_string(),
            message: e.to_string(),
        })
    }

    /// Default config file path.
    #[must_use]
    pub fn config_path() -> PathBuf {
        AppPaths::new().config_file()
    }

    /// Validate configuration values.
    ///
    /// # Errors
    /// Returns an error for unknown kinds, an unknown output format, or
    /// percentage places above the supported maximum.
    pub fn validate(&self) -> Result<()> {
        for (key, value) in [
            ("display.chart_kind", &self.display.chart_kind),
            ("display.variance_kind", &self.display.variance_kind),
        ] {
            if ValueKind::from_name(value).is_none() {
                return Err(DashError::ConfigInvalid {
                    key: key.to_string(),
                    value: value.clone(),
                    message: "expected moeda, numero or percentual".to_string(),
                });
            }
        }

        if let Some(places) = self.display.percentage_places {
            if places > MAX_DECIMAL_PLACES {
                return Err(DashError::ConfigInvalid {
                    key: "display.percentage_places".to_string(),
                    value: places.to_string(),
                    message: format!("must be at most {MAX_DECIMAL_PLACES}"),
                });
            }
        }

        if let Some(format) = &self.output.format {
            if !["human", "json"].contains(&format.trim().to_lowercase().as_str()) {
                return Err(DashError::ConfigInvalid {
                    key: "output.format".to_string(),
                    value: format.clone(),
                    message: "expected human or json".to_string(),
                });
            }
        }

        Ok(())
    }
}
