//! Convertor CLI
//!
//! Commands:
//! - interactive: Menu-driven session (default when no command is given)
//! - convert: Convert a single value between two units
//! - list: List available units
//! - categories: List categories and their base units

mod cli;
mod error;
mod interactive;
mod logging;
mod render;

use std::io::{self, Write};
use clap::Parser;
use convertor_units::{check_physical_limits, UnitRegistry, STANDARD_UNITS};
use tracing::info;

use crate::cli::{Cli, Commands};
use crate::error::CliError;
use crate::render::Painter;

/// Resolved output settings
struct Output {
    painter: Painter,
    precision: usize,
    json: bool,
}

fn main() {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    let output = Output {
        painter: Painter::for_stdout(cli.no_color),
        precision: usize::from(cli.precision),
        json: cli.json,
    };

    let registry: &UnitRegistry = &STANDARD_UNITS;
    info!(units = registry.len(), color = output.painter.is_colored(), "unit registry ready");

    if let Err(e) = run(cli.command, registry, &output) {
        report(&mut io::stdout().lock(), &mut io::stderr().lock(), &e, &output);
        std::process::exit(1);
    }
}

fn run(command: Option<Commands>, registry: &UnitRegistry, output: &Output) -> Result<(), CliError> {
    match command.unwrap_or(Commands::Interactive) {
        Commands::Interactive => {
            let stdin = io::stdin();
            let stdout = io::stdout();
            interactive::Session::new(registry, stdin.lock(), stdout.lock(), output.painter, output.precision)
                .run()
        }
        Commands::Convert { value, from, to } => {
            convert_once(&mut io::stdout().lock(), registry, value, &from, &to, output)
        }
        Commands::List { category } => {
            let units = match category {
                Some(category) => registry.units_by_category(category),
                None => registry.iter().collect(),
            };
            let mut out = io::stdout().lock();
            if output.json {
                write_json(&mut out, &render::units_json(&units))
            } else {
                write_lines(&mut out, &render::unit_table(&units))
            }
        }
        Commands::Categories => {
            let categories = registry.categories();
            let mut out = io::stdout().lock();
            if output.json {
                write_json(&mut out, &render::categories_json(&categories))
            } else {
                write_lines(&mut out, &render::category_lines(&categories))
            }
        }
    }
}

fn convert_once<W: Write>(
    out: &mut W,
    registry: &UnitRegistry,
    value: f64,
    from: &str,
    to: &str,
    output: &Output,
) -> Result<(), CliError> {
    let result = registry.convert(value, from, to)?;
    let source = registry.get_unit_info(from)?;
    let target = registry.get_unit_info(to)?;
    let warning = check_physical_limits(registry, value, from)?;

    if output.json {
        let body = render::conversion_json(value, source, target, result, output.precision, warning.as_ref());
        return write_json(out, &body);
    }

    let mut lines = Vec::new();
    if let Some(ref warning) = warning {
        lines.push(render::warning_line(&output.painter, warning));
    }
    lines.push(render::result_line(&output.painter, result, target, output.precision));
    write_lines(out, &lines)
}

fn write_lines<W: Write>(out: &mut W, lines: &[String]) -> Result<(), CliError> {
    for line in lines {
        writeln!(out, "{}", line)?;
    }
    Ok(())
}

fn write_json<W: Write>(out: &mut W, body: &serde_json::Value) -> Result<(), CliError> {
    let text = serde_json::to_string_pretty(body)?;
    writeln!(out, "{}", text)?;
    Ok(())
}

/// JSON errors go to `out` so scripts can parse them; text errors go to `err`
fn report<O: Write, E: Write>(out: &mut O, err: &mut E, e: &CliError, output: &Output) {
    // Nothing left to report to if these writes fail
    if output.json {
        let _ = writeln!(out, "{}", e.to_json());
        return;
    }
    let _ = writeln!(err, "{}", output.painter.error(&format!("Error: {}", e)));
    if let Some(suggestion) = e.suggestion() {
        let _ = writeln!(err, "{}", output.painter.warning(&format!("  (suggestion: {})", suggestion)));
    }
}
