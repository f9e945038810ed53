use approx::assert_abs_diff_eq;
use portal_charts::core::SeriesPoint;
use portal_charts::finance::{LoanTerms, monthly_installment};
use rust_decimal::Decimal;

#[test]
fn zero_rate_is_straight_line_repayment() {
    let terms = LoanTerms::new(120_000.0, 0.0, 24).expect("valid terms");
    assert_eq!(monthly_installment(terms), 5_000.0);

    let summary = terms.breakdown();
    assert_eq!(summary.total_payment, 120_000.0);
    assert_eq!(summary.total_interest, 0.0);
}

#[test]
fn reference_loan_matches_annuity_formula() {
    let terms = LoanTerms::new(800_000.0, 9.0, 60).expect("valid terms");
    let summary = terms.breakdown();

    assert_abs_diff_eq!(summary.installment, 16_606.68, epsilon = 0.5);
    assert_abs_diff_eq!(summary.total_payment, 996_401.0, epsilon = 30.0);
    assert_abs_diff_eq!(summary.total_interest, 196_401.0, epsilon = 30.0);
}

#[test]
fn positive_rate_total_exceeds_principal() {
    for rate in [0.5, 4.0, 9.0, 18.5] {
        let terms = LoanTerms::new(250_000.0, rate, 36).expect("valid terms");
        let summary = terms.breakdown();
        assert!(
            summary.total_payment > terms.principal(),
            "rate {rate}: total {} not above principal",
            summary.total_payment
        );
        assert!(summary.total_interest > 0.0);
    }
}

#[test]
fn breakdown_is_bit_identical_across_calls() {
    let terms = LoanTerms::new(543_210.0, 7.35, 84).expect("valid terms");
    let first = terms.breakdown();
    let second = terms.breakdown();

    assert_eq!(first.installment.to_bits(), second.installment.to_bits());
    assert_eq!(first.total_payment.to_bits(), second.total_payment.to_bits());
    assert_eq!(
        first.total_interest.to_bits(),
        second.total_interest.to_bits()
    );
}

#[test]
fn invalid_terms_are_rejected() {
    assert!(LoanTerms::new(0.0, 9.0, 60).is_err());
    assert!(LoanTerms::new(-5.0, 9.0, 60).is_err());
    assert!(LoanTerms::new(f64::NAN, 9.0, 60).is_err());
    assert!(LoanTerms::new(800_000.0, -0.1, 60).is_err());
    assert!(LoanTerms::new(800_000.0, f64::INFINITY, 60).is_err());
    assert!(LoanTerms::new(800_000.0, 9.0, 0).is_err());
}

#[test]
fn decimal_terms_round_trip_through_f64() {
    let terms = LoanTerms::from_decimal(
        Decimal::new(80_000_000, 2), // 800000.00
        Decimal::new(900, 2),        // 9.00
        60,
    )
    .expect("valid decimal terms");

    assert_eq!(terms.principal(), 800_000.0);
    assert_eq!(terms.annual_rate_percent(), 9.0);
    assert_eq!(terms.term_months(), 60);
}

#[test]
fn breakdown_points_split_principal_and_interest() {
    let terms = LoanTerms::new(800_000.0, 9.0, 60).expect("valid terms");
    let summary = terms.breakdown();
    let points = terms.breakdown_points();

    assert_eq!(
        points[0],
        SeriesPoint::new("Principal", terms.principal())
    );
    assert_eq!(points[1].label, "Interest");
    assert_eq!(points[1].value, summary.total_interest);
}
