use serde::{Deserialize, Serialize};
use std::fmt;

/// Binary verdict returned by the approval rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LoanDecision {
    Approved,
    #[serde(rename = "Not Approved")]
    NotApproved,
}

impl LoanDecision {
    pub const fn label(self) -> &'static str {
        match self {
            LoanDecision::Approved => "Approved",
            LoanDecision::NotApproved => "Not Approved",
        }
    }

    pub const fn is_approved(self) -> bool {
        matches!(self, LoanDecision::Approved)
    }
}

impl fmt::Display for LoanDecision {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Threshold an application failed to meet, kept for adverse outcome explanations.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "criterion", rename_all = "snake_case")]
pub enum UnmetCriterion {
    InsufficientHouseholdIncome { required: f64, actual: f64 },
    MissingCreditHistory,
    LoanAmountAboveLimit { limit: f64, requested: f64 },
}

impl UnmetCriterion {
    pub fn summary(&self) -> String {
        match self {
            UnmetCriterion::InsufficientHouseholdIncome { required, actual } => format!(
                "household income {:.0} below required {:.0}",
                actual, required
            ),
            UnmetCriterion::MissingCreditHistory => {
                "no qualifying credit history on record".to_string()
            }
            UnmetCriterion::LoanAmountAboveLimit { limit, requested } => {
                format!("loan amount {:.0} exceeds limit {:.0}", requested, limit)
            }
        }
    }
}
