//! dashfmt - dashboard value formatting
//!
//! Brazilian-Portuguese (pt-BR) formatting for dashboard numbers: abbreviated
//! currency and counts, percentages, full values, chart-axis dispatch and
//! signed variances. Also carries the persisted sidebar collapse toggle.

// Note: deny (not forbid) to allow #[allow(unsafe_code)] in test helpers for env var manipulation
#![deny(unsafe_code)]
#![warn(clippy::pedantic, clippy::nursery)]
#![allow(clippy::module_name_repetitions)]

pub mod cli;
pub mod core;
pub mod error;
pub mod format;
pub mod render;
pub mod sidebar;
pub mod storage;
pub mod util;

pub use error::{DashError, ExitCode, Result};
