//! Utility functions.

pub mod env;

pub use env::{Stream, should_use_color};
