pub mod projection;

pub use projection::{
    project_payoff, PayoffInput, PayoffOutput, PayoffPeriod, MAX_PAYOFF_MONTHS,
};
