//! Loan payoff projection: months to payoff, total interest and cost, and
//! the calendar payoff date for a fixed-payment loan with optional extra
//! principal each month. All math in `rust_decimal::Decimal`.

use chrono::{Local, Months, NaiveDate};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};
use std::time::Instant;

use crate::error::LoanPayoffError;
use crate::types::{with_metadata, ComputationOutput, Money, Rate};
use crate::LoanPayoffResult;

// ---------------------------------------------------------------------------
// Constants
// ---------------------------------------------------------------------------

/// Iteration ceiling for the simulation loop: 100 years of monthly periods.
/// A projection that reports exactly this many months did not amortise.
pub const MAX_PAYOFF_MONTHS: u32 = 1200;

/// Monthly periods per year.
const MONTHS_PER_YEAR: Decimal = dec!(12);

/// Divisor converting a percentage to a decimal fraction.
const PERCENT_SCALE: Decimal = dec!(100);

// ---------------------------------------------------------------------------
// Input types
// ---------------------------------------------------------------------------

/// Input for a loan payoff projection.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PayoffInput {
    /// Outstanding principal.
    pub loan_amount: Money,
    /// Nominal annual interest rate as a percentage (e.g., 5.5 = 5.5%).
    pub annual_rate_pct: Rate,
    /// Regular contractual monthly payment.
    pub monthly_payment: Money,
    /// Extra principal paid each month on top of the contractual payment.
    pub additional_payment: Money,
    /// Date the projection is anchored to. Today when absent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub as_of: Option<NaiveDate>,
}

// ---------------------------------------------------------------------------
// Output types
// ---------------------------------------------------------------------------

/// A single month in the payoff schedule.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PayoffPeriod {
    /// Month number, 1-based.
    pub month: u32,
    /// Balance at the start of the period.
    pub beginning_balance: Money,
    /// Interest accrued on the beginning balance.
    pub interest: Money,
    /// Principal portion of the payment. Negative when the payment does not
    /// cover the accrued interest.
    pub principal: Money,
    /// Amount actually paid this period. The final period pays only the
    /// remaining balance plus its interest.
    pub payment: Money,
    /// Balance carried into the next period.
    pub ending_balance: Money,
}

/// Payoff projection output.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PayoffOutput {
    /// Monthly periods until the balance reaches zero. Equals
    /// [`MAX_PAYOFF_MONTHS`] when the schedule never amortises.
    pub months_to_payoff: u32,
    /// Interest charged across all periods.
    pub total_interest: Money,
    /// All money paid across all periods (principal + interest).
    pub total_payment: Money,
    /// Total applied each month: contractual plus additional payment.
    pub monthly_outlay: Money,
    /// As-of date advanced by `months_to_payoff` calendar months, with the
    /// day clamped to the target month's last valid day where needed.
    pub payoff_date: NaiveDate,
    /// False when the iteration cap was reached with a balance outstanding.
    pub fully_amortized: bool,
    /// Month-by-month amortisation schedule.
    pub schedule: Vec<PayoffPeriod>,
}

// ---------------------------------------------------------------------------
// Public API
// ---------------------------------------------------------------------------

/// Project the payoff of a fixed-payment loan.
///
/// A schedule whose payments never exceed accruing interest is not an error:
/// the projection stops at [`MAX_PAYOFF_MONTHS`], reports the totals
/// accumulated up to the cap, sets `fully_amortized = false`, and attaches a
/// warning to the envelope.
pub fn project_payoff(
    input: &PayoffInput,
) -> LoanPayoffResult<ComputationOutput<PayoffOutput>> {
    let start = Instant::now();
    let mut warnings: Vec<String> = Vec::new();

    validate(input)?;

    let as_of = input.as_of.unwrap_or_else(|| Local::now().date_naive());
    let monthly_rate = input.annual_rate_pct / PERCENT_SCALE / MONTHS_PER_YEAR;
    let monthly_outlay = input.monthly_payment + input.additional_payment;

    // Nothing owed: a zero-period projection anchored to the as-of date.
    if input.loan_amount <= Decimal::ZERO {
        let output = PayoffOutput {
            months_to_payoff: 0,
            total_interest: Decimal::ZERO,
            total_payment: Decimal::ZERO,
            monthly_outlay,
            payoff_date: as_of,
            fully_amortized: true,
            schedule: Vec::new(),
        };
        let elapsed = start.elapsed().as_micros() as u64;
        return Ok(with_metadata(
            "Monthly Amortisation Simulation",
            input,
            warnings,
            elapsed,
            output,
        ));
    }

    let mut balance = input.loan_amount;
    let mut months: u32 = 0;
    let mut total_interest = Decimal::ZERO;
    let mut total_payment = Decimal::ZERO;
    let mut schedule: Vec<PayoffPeriod> = Vec::new();

    while balance > Decimal::ZERO && months < MAX_PAYOFF_MONTHS {
        let beginning = balance;

        // A non-amortising balance can compound past Decimal's range before
        // the cap is reached; the growth path saturates instead of panicking.
        let interest = beginning.saturating_mul(monthly_rate);
        let mut principal = monthly_outlay.saturating_sub(interest);
        let mut payment = monthly_outlay;

        if principal > beginning {
            // Final period: pay only the remaining balance plus its interest,
            // computed on the balance at the start of the period.
            principal = beginning;
            payment = beginning.saturating_add(interest);
        }

        balance = beginning.saturating_sub(principal);
        total_interest = total_interest.saturating_add(interest);
        total_payment = total_payment.saturating_add(payment);
        months += 1;

        schedule.push(PayoffPeriod {
            month: months,
            beginning_balance: beginning,
            interest,
            principal,
            payment,
            ending_balance: balance,
        });
    }

    let fully_amortized = balance <= Decimal::ZERO;
    if !fully_amortized {
        warnings.push(format!(
            "Balance of {} remains after {} months; the loan will not pay off \
             under current terms",
            balance, MAX_PAYOFF_MONTHS
        ));
    }

    let payoff_date = as_of.checked_add_months(Months::new(months)).ok_or_else(|| {
        LoanPayoffError::DateError(format!(
            "cannot advance {} by {} calendar months",
            as_of, months
        ))
    })?;

    let output = PayoffOutput {
        months_to_payoff: months,
        total_interest,
        total_payment,
        monthly_outlay,
        payoff_date,
        fully_amortized,
        schedule,
    };

    let elapsed = start.elapsed().as_micros() as u64;
    Ok(with_metadata(
        "Monthly Amortisation Simulation",
        input,
        warnings,
        elapsed,
        output,
    ))
}

// ---------------------------------------------------------------------------
// Validation
// ---------------------------------------------------------------------------

fn validate(input: &PayoffInput) -> LoanPayoffResult<()> {
    if input.loan_amount < Decimal::ZERO {
        return Err(LoanPayoffError::InvalidInput {
            field: "loan_amount".into(),
            reason: "Loan amount must be non-negative".into(),
        });
    }
    if input.annual_rate_pct < Decimal::ZERO || input.annual_rate_pct > PERCENT_SCALE {
        return Err(LoanPayoffError::InvalidInput {
            field: "annual_rate_pct".into(),
            reason: "Annual rate must be between 0 and 100 percent".into(),
        });
    }
    if input.monthly_payment < Decimal::ZERO {
        return Err(LoanPayoffError::InvalidInput {
            field: "monthly_payment".into(),
            reason: "Monthly payment must be non-negative".into(),
        });
    }
    if input.additional_payment < Decimal::ZERO {
        return Err(LoanPayoffError::InvalidInput {
            field: "additional_payment".into(),
            reason: "Additional payment must be non-negative".into(),
        });
    }
    Ok(())
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
