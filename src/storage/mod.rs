//! Configuration and application paths.

pub mod config;
pub mod paths;

pub use config::{
    Config, ConfigSource, ConfigSources, DisplayConfig, ENV_CONFIG, ENV_FORMAT, ENV_NO_COLOR,
    ENV_NO_COLOR_STD, ENV_PRETTY, ENV_STATE_FILE, ENV_VERBOSE, ResolvedConfig,
};
pub use paths::AppPaths;
