//! Error types for dashfmt.
//!
//! Uses `thiserror` for structured error types that map to exit codes.
//!
//! The formatters in [`crate::format`] are total and never produce these;
//! errors only come from configuration, input selection (an unknown kind
//! name on the command line) and the persisted sidebar state.
//!
//! Each error has a stable error code (e.g., `DASH-C001`) for programmatic
//! handling.

use thiserror::Error;

// =============================================================================
// Error Categories
// =============================================================================

/// High-level error categories for classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCategory {
    /// Config file parsing or validation.
    Configuration,
    /// Unusable input on the command line.
    Input,
    /// Reading or writing persisted UI state.
    Storage,
    /// Unexpected errors.
    Internal,
}

impl ErrorCategory {
    /// Returns a human-readable description of the category.
    #[must_use]
    pub const fn description(&self) -> &'static str {
        match self {
            Self::Configuration => "Configuration error",
            Self::Input => "Input error",
            Self::Storage => "Storage error",
            Self::Internal => "Internal error",
        }
    }

    /// Returns a short code prefix for this category.
    #[must_use]
    pub const fn code_prefix(&self) -> &'static str {
        match self {
            Self::Configuration => "C",
            Self::Input => "I",
            Self::Storage => "S",
            Self::Internal => "X",
        }
    }
}

impl std::fmt::Display for ErrorCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.description())
    }
}

// =============================================================================
// Exit Codes
// =============================================================================

/// Process exit codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum ExitCode {
    /// Success
    Success = 0,
    /// Unexpected failure
    GeneralError = 1,
    /// Config or input could not be parsed
    ParseError = 3,
}

impl From<ExitCode> for i32 {
    fn from(code: ExitCode) -> Self {
        code as Self
    }
}

/// Main error type for dashfmt operations.
#[derive(Error, Debug)]
pub enum DashError {
    // ==========================================================================
    // Configuration errors (Category: Configuration)
    // ==========================================================================
    /// Error parsing configuration file.
    #[error("config parse error at {path}: {message}")]
    ConfigParse { path: String, message: String },

    /// Invalid value in configuration.
    #[error("invalid config value for '{key}': {message}")]
    ConfigInvalid {
        key: String,
        value: String,
        message: String,
    },

    /// Generic configuration error.
    #[error("configuration error: {0}")]
    Config(String),

    // ==========================================================================
    // Input errors (Category: Input)
    // ==========================================================================
    /// Kind name that is not currency, number or percentage.
    #[error("unknown value kind: {0}")]
    UnknownKind(String),

    // ==========================================================================
    // Storage errors (Category: Storage)
    // ==========================================================================
    /// Persisted state file exists but is unreadable or malformed.
    #[error("state file {path} is invalid: {message}")]
    StateCorrupt { path: String, message: String },

    // ==========================================================================
    // I/O errors (Category: Internal)
    // ==========================================================================
    /// I/O operation failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization/deserialization failed.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl DashError {
    /// Map error to process exit code.
    #[must_use]
    pub const fn exit_code(&self) -> ExitCode {
        match self {
            Self::ConfigParse { .. }
            | Self::ConfigInvalid { .. }
            | Self::Config(_)
            | Self::UnknownKind(_) => ExitCode::ParseError,

            Self::StateCorrupt { .. } | Self::Io(_) | Self::Json(_) => ExitCode::GeneralError,
        }
    }

    /// Returns the error category.
    #[must_use]
    pub const fn category(&self) -> ErrorCategory {
        match self {
            Self::ConfigParse { .. } | Self::ConfigInvalid { .. } | Self::Config(_) => {
                ErrorCategory::Configuration
            }
            Self::UnknownKind(_) => ErrorCategory::Input,
            Self::StateCorrupt { .. } => ErrorCategory::Storage,
            Self::Io(_) | Self::Json(_) => ErrorCategory::Internal,
        }
    }

    /// Returns a stable error code for programmatic handling.
    ///
    /// Format: `DASH-{category}{number}`.
    #[must_use]
    pub const fn error_code(&self) -> &'static str {
        match self {
            Self::ConfigParse { .. } => "DASH-C001",
            Self::ConfigInvalid { .. } => "DASH-C002",
            Self::Config(_) => "DASH-C003",
            Self::UnknownKind(_) => "DASH-I001",
            Self::StateCorrupt { .. } => "DASH-S001",
            Self::Io(_) => "DASH-X001",
            Self::Json(_) => "DASH-X002",
        }
    }

    /// A one-line hint for fixing the error, when there is one.
    #[must_use]
    pub fn hint(&self) -> Option<String> {
        match self {
            Self::ConfigParse { path, .. } => Some(format!(
                "Fix or remove {path}, or point DASHFMT_CONFIG at another file."
            )),
            Self::ConfigInvalid { key, .. } => {
                Some(format!("Check the '{key}' entry with `dashfmt config show`."))
            }
            Self::UnknownKind(_) => Some(
                "Valid kinds: moeda (currency), numero (number), percentual (percentage)."
                    .to_string(),
            ),
            Self::StateCorrupt { .. } => {
                Some("Run `dashfmt sidebar reset` to rewrite the state file.".to_string())
            }
            _ => None,
        }
    }
}

/// Result type alias for dashfmt operations.
pub type Result<T> = std::result::Result<T, DashError>;
