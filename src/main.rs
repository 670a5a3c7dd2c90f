use std::io;

use clap::Parser;
use tracing::{debug, info};

use party_supply_calc_rs::cli::{Cli, Command, OutputFormat};
use party_supply_calc_rs::error::Result;
use party_supply_calc_rs::estimator::estimate;
use party_supply_calc_rs::interface::{
    display_estimate, display_presets, prompt_edit, prompt_field, write_csv, write_json, Field,
};
use party_supply_calc_rs::logging::init_logging;
use party_supply_calc_rs::models::{EstimationInput, EstimationResult};

fn main() {
    init_logging();

    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    let command = cli.command.unwrap_or_default();

    match command {
        Command::Estimate(args) => cmd_estimate(&args.to_input(), cli.format),
        Command::Interactive => cmd_interactive(cli.format),
        Command::Presets => {
            display_presets();
            Ok(())
        }
    }
}

/// Estimate once and print in the requested format.
fn cmd_estimate(input: &EstimationInput, format: OutputFormat) -> Result<()> {
    info!(head = input.headcount, vibe = %input.vibe, "estimate");
    let result = estimate(input);
    emit(&result, format)
}

/// Keep the current inputs, re-estimating after every edit.
fn cmd_interactive(format: OutputFormat) -> Result<()> {
    let mut input = EstimationInput::default();
    emit(&estimate(&input), format)?;

    loop {
        println!();
        let field = prompt_field(&input)?;
        if field == Field::Done {
            break;
        }

        input = prompt_edit(field, &input)?.normalized();
        debug!(?field, ?input, "input changed");

        emit(&estimate(&input), format)?;
    }

    Ok(())
}

fn emit(result: &EstimationResult, format: OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Table => {
            display_estimate(result);
            Ok(())
        }
        OutputFormat::Json => write_json(result, io::stdout().lock()),
        OutputFormat::Csv => write_csv(result, io::stdout().lock()),
    }
}
