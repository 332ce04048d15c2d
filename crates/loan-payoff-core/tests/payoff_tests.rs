use loan_payoff_core::payoff::projection::{self, PayoffInput, MAX_PAYOFF_MONTHS};
use loan_payoff_core::LoanPayoffError;
use chrono::NaiveDate;
use pretty_assertions::assert_eq;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

// ===========================================================================
// Payoff projection tests
// ===========================================================================

fn sample_car_loan() -> PayoffInput {
    // A typical used-car loan: 20k at 5.5% with a 400/month payment
    PayoffInput {
        loan_amount: dec!(20000),
        annual_rate_pct: dec!(5.5),
        monthly_payment: dec!(400),
        additional_payment: dec!(0),
        as_of: NaiveDate::from_ymd_opt(2026, 8, 7),
    }
}

#[test]
fn test_car_loan_projection() {
    let input = sample_car_loan();
    let result = projection::project_payoff(&input).unwrap();
    let out = &result.result;

    // n = ln(400 / (400 - 20000 * 0.0045833)) / ln(1.0045833) ~ 56.9
    assert_eq!(out.months_to_payoff, 57);
    assert!(out.fully_amortized);
    assert!(result.warnings.is_empty());

    // 57 calendar months from 2026-08-07
    assert_eq!(out.payoff_date, NaiveDate::from_ymd_opt(2031, 5, 7).unwrap());

    // Total interest lands near 2,768 over the life of the loan
    assert!(out.total_interest > dec!(2700));
    assert!(out.total_interest < dec!(2850));
}

#[test]
fn test_total_payment_equals_principal_plus_interest() {
    // The invariant must hold for any convergent schedule
    let cases = [
        (dec!(20000), dec!(5.5), dec!(400), dec!(0)),
        (dec!(20000), dec!(5.5), dec!(400), dec!(250)),
        (dec!(350000), dec!(6.25), dec!(2400), dec!(0)),
        (dec!(5000), dec!(22.9), dec!(250), dec!(50)),
        (dec!(950), dec!(0), dec!(100), dec!(0)),
    ];

    for (loan, rate, monthly, additional) in cases {
        let input = PayoffInput {
            loan_amount: loan,
            annual_rate_pct: rate,
            monthly_payment: monthly,
            additional_payment: additional,
            as_of: NaiveDate::from_ymd_opt(2026, 8, 7),
        };
        let out = projection::project_payoff(&input).unwrap().result;

        assert!(out.fully_amortized, "case {loan} at {rate}% should amortise");
        let diff = (out.total_payment - (loan + out.total_interest)).abs();
        assert!(
            diff <= dec!(0.0000001),
            "total_payment - total_interest should equal loan_amount for {loan} at {rate}%, diff = {diff}"
        );
    }
}

#[test]
fn test_extra_payment_strictly_helps() {
    let base = projection::project_payoff(&sample_car_loan()).unwrap().result;

    let mut input = sample_car_loan();
    input.additional_payment = dec!(100);
    let accelerated = projection::project_payoff(&input).unwrap().result;

    assert!(accelerated.months_to_payoff < base.months_to_payoff);
    assert!(accelerated.total_interest < base.total_interest);
    assert_eq!(accelerated.monthly_outlay, dec!(500));
}

#[test]
fn test_non_convergent_schedule_is_signalled_not_hidden() {
    let input = PayoffInput {
        loan_amount: dec!(20000),
        annual_rate_pct: dec!(24),
        monthly_payment: dec!(10),
        additional_payment: dec!(0),
        as_of: NaiveDate::from_ymd_opt(2026, 8, 7),
    };
    let result = projection::project_payoff(&input).unwrap();
    let out = &result.result;

    // First-month interest is 400; a 10/month payment never catches up.
    assert_eq!(out.months_to_payoff, MAX_PAYOFF_MONTHS);
    assert!(!out.fully_amortized);
    assert_eq!(out.total_payment, dec!(12000));
    assert_eq!(result.warnings.len(), 1);
    assert!(result.warnings[0].contains("will not pay off"));
}

#[test]
fn test_zero_principal_short_circuits() {
    let input = PayoffInput {
        loan_amount: dec!(0),
        annual_rate_pct: dec!(5.5),
        monthly_payment: dec!(400),
        additional_payment: dec!(0),
        as_of: NaiveDate::from_ymd_opt(2026, 8, 7),
    };
    let out = projection::project_payoff(&input).unwrap().result;

    assert_eq!(out.months_to_payoff, 0);
    assert_eq!(out.total_interest, Decimal::ZERO);
    assert_eq!(out.total_payment, Decimal::ZERO);
    assert_eq!(out.payoff_date, NaiveDate::from_ymd_opt(2026, 8, 7).unwrap());
}

#[test]
fn test_validation_error_names_the_field() {
    let mut input = sample_car_loan();
    input.loan_amount = dec!(-20000);
    let err = projection::project_payoff(&input).unwrap_err();

    match err {
        LoanPayoffError::InvalidInput { field, .. } => assert_eq!(field, "loan_amount"),
        other => panic!("Expected InvalidInput, got {other:?}"),
    }
}

#[test]
fn test_input_round_trips_through_json() {
    let input = sample_car_loan();
    let json = serde_json::to_string(&input).unwrap();
    let back: PayoffInput = serde_json::from_str(&json).unwrap();

    assert_eq!(back.loan_amount, input.loan_amount);
    assert_eq!(back.annual_rate_pct, input.annual_rate_pct);
    assert_eq!(back.as_of, input.as_of);

    // as_of may be omitted entirely by JSON callers
    let sparse: PayoffInput = serde_json::from_str(
        r#"{
            "loan_amount": "20000",
            "annual_rate_pct": "5.5",
            "monthly_payment": "400",
            "additional_payment": "0"
        }"#,
    )
    .unwrap();
    assert_eq!(sparse.as_of, None);
    assert_eq!(sparse.loan_amount, dec!(20000));
}

#[test]
fn test_envelope_serializes_for_downstream_consumers() {
    let result = projection::project_payoff(&sample_car_loan()).unwrap();
    let value = serde_json::to_value(&result).unwrap();

    assert!(value.get("result").is_some());
    assert!(value.get("methodology").is_some());
    assert!(value.get("warnings").is_some());
    let schedule = value["result"]["schedule"].as_array().unwrap();
    assert_eq!(schedule.len(), 57);
}
