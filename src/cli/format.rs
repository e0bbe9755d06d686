//! Formatting commands.

use crate::cli::args::{CurrencyArgs, KindArgs, PercentArgs, ValueArgs};
use crate::core::models::{FormattedValue, VarianceReport};
use crate::error::Result;
use crate::format::{
    ValueKind, abbreviate_currency, abbreviate_number, format_for_chart, format_full_currency,
    format_full_number, format_percentage, format_variance, parse_value,
};
use crate::render;
use crate::storage::ResolvedConfig;

fn emit(
    command: &str,
    kind: &str,
    input: Option<f64>,
    text: String,
    config: &ResolvedConfig,
) -> Result<String> {
    tracing::debug!(command, kind, ?input, %text, "Formatted value");
    let value = FormattedValue {
        input,
        kind: kind.to_string(),
        text,
    };
    render::render_value(command, &value, config.format, config.pretty)
}

/// Resolve the kind for `chart`/`variance`: flag, then config default.
///
/// With `strict`, unknown names are an error instead of a raw fallback.
fn resolve_kind(args: &KindArgs, configured: &str) -> Result<String> {
    let kind = args.kind.as_deref().unwrap_or(configured);
    if args.strict {
        kind.parse::<ValueKind>()?;
    }
    Ok(kind.to_string())
}

/// `dashfmt currency`
///
/// # Errors
/// Returns an error if rendering fails.
pub fn currency(args: &CurrencyArgs, config: &ResolvedConfig) -> Result<String> {
    let input = parse_value(&args.value);
    let show_cents = args.cents || config.display.show_cents;
    let text = abbreviate_currency(input, show_cents);
    emit("currency", ValueKind::Currency.name(), input, text, config)
}

/// `dashfmt number`
///
/// # Errors
/// Returns an error if rendering fails.
pub fn number(args: &ValueArgs, config: &ResolvedConfig) -> Result<String> {
    let input = parse_value(&args.value);
    emit("number", ValueKind::Number.name(), input, abbreviate_number(input), config)
}

/// `dashfmt percent`
///
/// # Errors
/// Returns an error if rendering fails.
pub fn percent(args: &PercentArgs, config: &ResolvedConfig) -> Result<String> {
    let input = parse_value(&args.value);
    let places = args.places.or(config.display.percentage_places);
    let text = format_percentage(input, places);
    emit("percent", ValueKind::Percentage.name(), input, text, config)
}

/// `dashfmt full-currency`
///
/// # Errors
/// Returns an error if rendering fails.
pub fn full_currency(args: &ValueArgs, config: &ResolvedConfig) -> Result<String> {
    let input = parse_value(&args.value);
    emit("full-currency", "moeda-completa", input, format_full_currency(input), config)
}

/// `dashfmt full-number`
///
/// # Errors
/// Returns an error if rendering fails.
pub fn full_number(args: &ValueArgs, config: &ResolvedConfig) -> Result<String> {
    let input = parse_value(&args.value);
    emit("full-number", "numero-completo", input, format_full_number(input), config)
}

/// `dashfmt chart`
///
/// # Errors
/// Returns an error for an unknown kind in strict mode, or if rendering fails.
pub fn chart(args: &KindArgs, config: &ResolvedConfig) -> Result<String> {
    let kind = resolve_kind(args, &config.display.chart_kind)?;
    let input = parse_value(&args.value);
    let text = format_for_chart(input, &kind);
    emit("chart", &kind, input, text, config)
}

/// `dashfmt variance`
///
/// # Errors
/// Returns an error for an unknown kind in strict mode, or if rendering fails.
pub fn variance(args: &KindArgs, config: &ResolvedConfig) -> Result<String> {
    let kind = resolve_kind(args, &config.display.variance_kind)?;
    let input = parse_value(&args.value);
    let report = VarianceReport::new(&kind, format_variance(input, &kind));
    tracing::debug!(%kind, ?input, text = %report.text, "Formatted variance");
    render::render_variance(&report, config.format, config.pretty, config.no_color)
}
