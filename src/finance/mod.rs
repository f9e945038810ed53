//! Loan amortization math backing the portal's finance view.

pub mod amortization;

pub use amortization::{AmortizationSummary, LoanTerms, monthly_installment};
