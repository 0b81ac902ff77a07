mod commands;
mod logging;
mod output;
mod session;
mod utils;

use std::process;

use clap::{ArgAction, Parser, Subcommand};
use colored::Colorize;

use takehome_core::TaxTables;

use commands::breakeven::BreakevenArgs;
use commands::compare::CompareArgs;
use commands::contractor::ContractorArgs;
use commands::w2::W2Args;
use output::OutputFormat;

// ─── CLI definition ──────────────────────────────────────────────────────────

/// W-2 versus 1099 take-home comparison for Los Angeles, tax year 2025.
#[derive(Debug, Parser)]
#[command(
    name = "takehome",
    version,
    about = "Compare W-2 and 1099 take-home pay in Los Angeles",
    long_about = "Estimates annual take-home pay for a W-2 employee and a 1099 \
                  contractor under 2025 federal and California tax rules, values \
                  employer benefits, and solves for the break-even contract rate."
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Output format.
    #[arg(long, default_value = "table", global = true)]
    output: OutputFormat,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Price the W-2 employee scenario
    W2(W2Args),
    /// Price the 1099 contractor scenario
    Contractor(ContractorArgs),
    /// Solve for the contract rate matching a target net
    Breakeven(BreakevenArgs),
    /// Run both scenarios side by side with the break-even rate
    Compare(CompareArgs),
}

// ─── entry point ─────────────────────────────────────────────────────────────

fn main() {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    let tables = TaxTables::los_angeles_2025();
    let result = match &cli.command {
        Commands::W2(args) => commands::w2::run(args, cli.output, &tables),
        Commands::Contractor(args) => commands::contractor::run(args, cli.output, &tables),
        Commands::Breakeven(args) => commands::breakeven::run(args, cli.output, &tables),
        Commands::Compare(args) => commands::compare::run(args, cli.output, &tables),
    };

    if let Err(error) = result {
        eprintln!("{}: {error:#}", "error".red().bold());
        process::exit(1);
    }
}
