use napi::Result as NapiResult;
use napi_derive::napi;

/// Convert any Display error into a napi::Error.
fn to_napi_error(e: impl std::fmt::Display) -> napi::Error {
    napi::Error::from_reason(e.to_string())
}

// ---------------------------------------------------------------------------
// Payoff
// ---------------------------------------------------------------------------

#[napi]
pub fn project_loan_payoff(input_json: String) -> NapiResult<String> {
    let input: loan_payoff_core::payoff::projection::PayoffInput =
        serde_json::from_str(&input_json).map_err(to_napi_error)?;
    let output = loan_payoff_core::payoff::projection::project_payoff(&input)
        .map_err(to_napi_error)?;
    serde_json::to_string(&output).map_err(to_napi_error)
}
