//! Logging and output models.

pub mod logging;
pub mod models;

pub use models::{FormattedValue, RobotOutput, SidebarReport, VarianceReport};
