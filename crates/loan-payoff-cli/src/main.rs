mod commands;
mod input;
mod output;

use clap::{Parser, Subcommand, ValueEnum};
use colored::Colorize;
use std::process;

use commands::payoff::PayoffArgs;

/// Loan payoff projections with decimal precision
#[derive(Parser)]
#[command(
    name = "payoff",
    version,
    about = "Loan payoff projections with decimal precision",
    long_about = "A CLI for projecting loan payoff with decimal precision: \
                  months to payoff, total interest, total payment, and the \
                  calendar payoff date for a fixed-payment loan with an \
                  optional extra monthly payment."
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Output format
    #[arg(long, default_value = "json", global = true)]
    output: OutputFormat,
}

#[derive(Subcommand)]
enum Commands {
    /// Project the payoff of a fixed-payment loan
    Payoff(PayoffArgs),
    /// Print version information
    Version,
}

#[derive(Debug, Clone, ValueEnum)]
pub enum OutputFormat {
    Json,
    Table,
    Csv,
    Minimal,
}

fn main() {
    let cli = Cli::parse();

    let result: Result<serde_json::Value, Box<dyn std::error::Error>> = match cli.command {
        Commands::Payoff(args) => commands::payoff::run_payoff(args),
        Commands::Version => {
            println!("payoff {}", env!("CARGO_PKG_VERSION"));
            return;
        }
    };

    match result {
        Ok(value) => {
            output::format_output(&cli.output, &value);
            process::exit(0);
        }
        Err(e) => {
            eprintln!("{}: {}", "error".red().bold(), e);
            process::exit(1);
        }
    }
}
