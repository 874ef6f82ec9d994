//! Expand a single schedule field from the command line.
//!
//! Usage: `cron-field <field> <expression>`
//!
//! Environment variables:
//! - `RUST_LOG`: Log filter (default: warn)

use std::process::ExitCode;

use serde::Serialize;
use tracing::level_filters::LevelFilter;
use tracing_subscriber::EnvFilter;

use cron_field::domain::Field;
use cron_field::expand_field;

/// Printed to stdout on success.
#[derive(Serialize)]
struct Expansion<'a> {
    field: Field,
    expression: &'a str,
    values: Vec<u32>,
}

fn usage() -> ExitCode {
    eprintln!("usage: cron-field <field> <expression>");
    eprintln!("fields: minute, hour, day_of_month, month, day_of_week");
    ExitCode::from(2)
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::builder()
                .with_default_directive(LevelFilter::WARN.into())
                .from_env_lossy(),
        )
        .with_writer(std::io::stderr)
        .init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let [field, expression] = args.as_slice() else {
        return usage();
    };

    let field: Field = match field.parse() {
        Ok(field) => field,
        Err(e) => {
            eprintln!("{e}");
            return usage();
        }
    };

    let values = match expand_field(field, expression) {
        Ok(values) => values,
        Err(e) => {
            eprintln!("invalid {field} expression {expression:?}: {e}");
            return ExitCode::FAILURE;
        }
    };

    let expansion = Expansion {
        field,
        expression,
        values,
    };
    match serde_json::to_string(&expansion) {
        Ok(json) => {
            println!("{json}");
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("failed to serialize result: {e}");
            ExitCode::FAILURE
        }
    }
}
