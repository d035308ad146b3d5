//! Literal approval thresholds. These are policy constants, not runtime settings.

/// Minimum combined applicant and coapplicant income, inclusive.
pub const MINIMUM_HOUSEHOLD_INCOME: f64 = 5000.0;

/// Largest loan amount (in thousands) the rule approves, inclusive.
pub const MAXIMUM_LOAN_AMOUNT: f64 = 500.0;

/// Credit history indicator value that counts as a clean repayment record.
pub const REQUIRED_CREDIT_HISTORY: f64 = 1.0;
