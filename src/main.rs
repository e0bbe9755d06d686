//! dashfmt CLI entry point.

#![forbid(unsafe_code)]
#![warn(clippy::pedantic, clippy::nursery)]
#![allow(clippy::module_name_repetitions)]

use clap::Parser;
use std::process::ExitCode;

use dashfmt::cli::{Cli, OutputFormat};
use dashfmt::core::logging;
use dashfmt::storage::{ENV_NO_COLOR, ENV_NO_COLOR_STD, ResolvedConfig};
use dashfmt::util::{Stream, should_use_color};

fn main() -> ExitCode {
    let cli = Cli::parse();

    logging::init(&logging::LogSettings::resolve(
        cli.log_level.as_deref(),
        cli.json_output,
        ResolvedConfig::verbose_requested(&cli),
    ));

    let Some(command) = cli.command.as_ref() else {
        print_quickstart();
        return ExitCode::SUCCESS;
    };

    let result = ResolvedConfig::resolve(&cli).and_then(|mut config| {
        config.no_color = !should_use_color(config.no_color, Stream::Stdout);
        colored::control::set_override(!config.no_color);
        tracing::debug!(
            format = ?config.format,
            format_source = %config.sources.format,
            state_file = %config.state_file.display(),
            "Resolved configuration"
        );
        dashfmt::cli::execute(command, &config)
    });

    match result {
        Ok(output) => {
            println!("{output}");
            ExitCode::SUCCESS
        }
        Err(e) => {
            tracing::debug!(error = %e, code = e.error_code(), "Command failed");
            let format = if cli.json {
                OutputFormat::Json
            } else {
                cli.format.unwrap_or(OutputFormat::Human)
            };
            let no_color = !should_use_color(cli.no_color, Stream::Stderr)
                || [ENV_NO_COLOR, ENV_NO_COLOR_STD]
                    .iter()
                    .any(|key| std::env::var_os(key).is_some());
            colored::control::set_override(!no_color);
            let error_output =
                dashfmt::render::error::render_error(&e, format, no_color, cli.pretty);
            eprintln!("{error_output}");
            ExitCode::from(e.exit_code() as u8)
        }
    }
}

fn print_quickstart() {
    println!("dashfmt - pt-BR dashboard value formatting");
    println!();
    println!("Examples:");
    println!("  dashfmt currency 1500000          R$ 1,50M");
    println!("  dashfmt number 12300000           12,3M");
    println!("  dashfmt percent 5                 5,00%");
    println!("  dashfmt full-currency 1234567.891 R$ 1.234.567,89");
    println!("  dashfmt variance 7 --kind percentual");
    println!("  dashfmt sidebar toggle");
    println!();
    println!("Run 'dashfmt --help' for all commands.");
}
