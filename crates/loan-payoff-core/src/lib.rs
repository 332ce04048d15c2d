pub mod error;
pub mod payoff;
pub mod types;

pub use error::LoanPayoffError;
pub use types::*;

/// Standard result type for all loan-payoff operations
pub type LoanPayoffResult<T> = Result<T, LoanPayoffError>;
