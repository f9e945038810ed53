use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;
use serde::{Deserialize, Serialize};

use crate::core::SeriesPoint;
use crate::error::{PortalError, PortalResult};

/// Fixed-rate loan input: amount borrowed, yearly rate in percent, and term
/// in months.
///
/// Construction validates the fields once; a zero rate is valid and means an
/// interest-free loan.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LoanTerms {
    principal: f64,
    annual_rate_percent: f64,
    term_months: u32,
}

impl LoanTerms {
    pub fn new(principal: f64, annual_rate_percent: f64, term_months: u32) -> PortalResult<Self> {
        if !principal.is_finite() || principal <= 0.0 {
            return Err(PortalError::InvalidLoanTerms(
                "principal must be finite and > 0".to_owned(),
            ));
        }
        if !annual_rate_percent.is_finite() || annual_rate_percent < 0.0 {
            return Err(PortalError::InvalidLoanTerms(
                "annual rate must be finite and >= 0".to_owned(),
            ));
        }
        if term_months == 0 {
            return Err(PortalError::InvalidLoanTerms(
                "term must be at least one month".to_owned(),
            ));
        }

        Ok(Self {
            principal,
            annual_rate_percent,
            term_months,
        })
    }

    /// Builds terms from exact decimal amounts as entered in a form.
    pub fn from_decimal(
        principal: Decimal,
        annual_rate_percent: Decimal,
        term_months: u32,
    ) -> PortalResult<Self> {
        Self::new(
            decimal_to_f64(principal, "principal")?,
            decimal_to_f64(annual_rate_percent, "annual rate")?,
            term_months,
        )
    }

    #[must_use]
    pub fn principal(self) -> f64 {
        self.principal
    }

    #[must_use]
    pub fn annual_rate_percent(self) -> f64 {
        self.annual_rate_percent
    }

    #[must_use]
    pub fn term_months(self) -> u32 {
        self.term_months
    }

    /// Fixed monthly payment for these terms.
    #[must_use]
    pub fn installment(self) -> f64 {
        monthly_installment(self)
    }

    /// Full payment summary derived from the installment.
    #[must_use]
    pub fn breakdown(self) -> AmortizationSummary {
        let installment = monthly_installment(self);
        let total_payment = installment * f64::from(self.term_months);
        AmortizationSummary {
            installment,
            total_payment,
            total_interest: total_payment - self.principal,
        }
    }

    /// Principal/interest split as chart points for the breakdown bar chart.
    #[must_use]
    pub fn breakdown_points(self) -> Vec<SeriesPoint> {
        let summary = self.breakdown();
        vec![
            SeriesPoint::new("Principal", self.principal),
            SeriesPoint::new("Interest", summary.total_interest),
        ]
    }
}

/// Payment summary for one set of loan terms.
///
/// `total_payment` is always `installment * term_months` and `total_interest`
/// is `total_payment - principal`; both derive deterministically from the
/// terms.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AmortizationSummary {
    pub installment: f64,
    pub total_payment: f64,
    pub total_interest: f64,
}

/// Standard annuity formula: the fixed monthly payment amortizing
/// `principal` over `term_months` at the given yearly percentage rate.
///
/// A zero rate falls back to straight-line repayment so the formula never
/// divides by zero.
#[must_use]
pub fn monthly_installment(terms: LoanTerms) -> f64 {
    let monthly_rate = terms.annual_rate_percent / 12.0 / 100.0;
    let months = f64::from(terms.term_months);
    if monthly_rate == 0.0 {
        return terms.principal / months;
    }

    let growth = (1.0 + monthly_rate).powf(months);
    terms.principal * monthly_rate * growth / (growth - 1.0)
}

pub(crate) fn decimal_to_f64(value: Decimal, field_name: &str) -> PortalResult<f64> {
    value.to_f64().ok_or_else(|| {
        PortalError::InvalidLoanTerms(format!("{field_name} cannot be represented as f64"))
    })
}
