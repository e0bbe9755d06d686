//! `dashfmt sidebar`: drive the persisted sidebar toggle from a terminal.
//!
//! The terminal has no rendered sidebar, so the elements are in-memory
//! stand-ins; the state file is the real persisted preference.

use crate::cli::args::{SidebarArgs, SidebarCommand};
use crate::core::models::SidebarReport;
use crate::error::{DashError, Result};
use crate::render;
use crate::sidebar::{JsonFileStore, MemoryElement, SidebarElements, SidebarToggle};
use crate::storage::ResolvedConfig;

/// Run a sidebar action.
///
/// # Errors
/// Returns an error if the state file is unreadable or cannot be written.
pub fn execute(args: &SidebarArgs, config: &ResolvedConfig) -> Result<String> {
    let path = args
        .state_file
        .clone()
        .unwrap_or_else(|| config.state_file.clone());
    let store = match JsonFileStore::load(&path) {
        Err(DashError::StateCorrupt { message, .. }) if args.action == SidebarCommand::Reset => {
            tracing::warn!(path = %path.display(), %message, "Discarding corrupt sidebar state");
            JsonFileStore::empty(&path)
        }
        other => other?,
    };

    let mut toggle = SidebarToggle::init(store, SidebarElements::<MemoryElement>::complete())
        .ok_or_else(|| DashError::Config("sidebar elements unavailable".to_string()))?;

    match args.action {
        SidebarCommand::Status => {}
        SidebarCommand::Toggle => {
            toggle.click()?;
        }
        SidebarCommand::Reset => toggle.reset()?,
    }

    let report = SidebarReport {
        collapsed: toggle.is_collapsed(),
        state_file: path.display().to_string(),
    };
    render::render_sidebar(&report, config.format, config.pretty, config.no_color)
}
