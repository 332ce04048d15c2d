use chrono::NaiveDate;
use clap::Args;
use rust_decimal::Decimal;
use serde_json::Value;

use loan_payoff_core::payoff::projection::{self, PayoffInput};

use crate::input;

/// Arguments for the payoff projection
#[derive(Args)]
#[command(allow_hyphen_values = true)]
pub struct PayoffArgs {
    /// Path to JSON input file (overrides individual flags)
    #[arg(long)]
    pub input: Option<String>,

    /// Outstanding principal
    #[arg(long)]
    pub loan_amount: Option<Decimal>,

    /// Nominal annual interest rate as a percentage (e.g., 5.5)
    #[arg(long, alias = "annual-rate-pct")]
    pub rate: Option<Decimal>,

    /// Regular contractual monthly payment
    #[arg(long)]
    pub monthly_payment: Option<Decimal>,

    /// Extra principal paid each month on top of the contractual payment
    #[arg(long)]
    pub additional_payment: Option<Decimal>,

    /// Anchor date for the projection, YYYY-MM-DD (defaults to today)
    #[arg(long)]
    pub as_of: Option<NaiveDate>,
}

pub fn run_payoff(args: PayoffArgs) -> Result<Value, Box<dyn std::error::Error>> {
    let payoff_input: PayoffInput = if let Some(ref path) = args.input {
        input::read_json(path)?
    } else if let Some(data) = input::read_stdin()? {
        serde_json::from_value(data)?
    } else {
        PayoffInput {
            loan_amount: args
                .loan_amount
                .ok_or("--loan-amount is required (or provide --input)")?,
            annual_rate_pct: args
                .rate
                .ok_or("--rate is required (or provide --input)")?,
            monthly_payment: args
                .monthly_payment
                .ok_or("--monthly-payment is required (or provide --input)")?,
            additional_payment: args.additional_payment.unwrap_or(Decimal::ZERO),
            as_of: args.as_of,
        }
    };

    let result = projection::project_payoff(&payoff_input)?;
    Ok(serde_json::to_value(result)?)
}
