//! Human-readable output using `colored`.

use colored::Colorize;

use crate::core::models::{FormattedValue, SidebarReport, VarianceReport};
use crate::format::SignClass;
use crate::storage::ResolvedConfig;

/// A formatted value is printed as-is.
#[must_use]
pub fn render_value(value: &FormattedValue) -> String {
    value.text.clone()
}

/// Variance text with its trend glyph, colored by sign class.
#[must_use]
pub fn render_variance(report: &VarianceReport, no_color: bool) -> String {
    let line = format!("{} {}", report.icon.glyph(), report.text);
    if no_color {
        return line;
    }
    match report.sign_class {
        SignClass::Positive => line.green().to_string(),
        SignClass::Negative => line.red().to_string(),
        SignClass::Neutral => line.dimmed().to_string(),
    }
}

/// Sidebar state line.
#[must_use]
pub fn render_sidebar(report: &SidebarReport, no_color: bool) -> String {
    let state = if report.collapsed {
        "collapsed"
    } else {
        "expanded"
    };
    let state = if no_color {
        state.to_string()
    } else {
        state.bold().to_string()
    };
    format!("Sidebar: {state} ({})", report.state_file)
}

/// Resolved configuration with the source of each setting.
#[must_use]
pub fn render_config(config: &ResolvedConfig) -> String {
    let places = config
        .display
        .percentage_places
        .map_or_else(|| "auto".to_string(), |p| p.to_string());

    [
        format!("config file:       {}", config.config_path.display()),
        format!(
            "format:            {:?} ({})",
            config.format, config.sources.format
        ),
        format!(
            "no_color:          {} ({})",
            config.no_color, config.sources.no_color
        ),
        format!("pretty:            {} ({})", config.pretty, config.sources.pretty),
        format!(
            "verbose:           {} ({})",
            config.verbose, config.sources.verbose
        ),
        format!("chart_kind:        {}", config.display.chart_kind),
        format!("variance_kind:     {}", config.display.variance_kind),
        format!("show_cents:        {}", config.display.show_cents),
        format!("percentage_places: {places}"),
        format!(
            "state_file:        {} ({})",
            config.state_file.display(),
            config.sources.state_file
        ),
    ]
    .join("\n")
}
