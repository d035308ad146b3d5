mod policy;
mod rules;
pub mod thresholds;

pub use policy::{LoanDecision, UnmetCriterion};
pub use rules::loan_approval_rule;

use super::domain::LoanApplication;
use serde::{Deserialize, Serialize};

/// Verdict for a validated application plus the thresholds it missed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoanEvaluation {
    pub decision: LoanDecision,
    pub household_income: f64,
    pub unmet_criteria: Vec<UnmetCriterion>,
}

impl LoanEvaluation {
    pub fn summary(&self) -> String {
        if self.unmet_criteria.is_empty() {
            format!("loan {}", self.decision.label().to_lowercase())
        } else {
            let reasons = self
                .unmet_criteria
                .iter()
                .map(UnmetCriterion::summary)
                .collect::<Vec<_>>();
            format!(
                "loan {}: {}",
                self.decision.label().to_lowercase(),
                reasons.join("; ")
            )
        }
    }
}

/// Apply the approval rule to a validated application.
pub fn evaluate(application: &LoanApplication) -> LoanEvaluation {
    let decision = loan_approval_rule(
        application.applicant_income(),
        application.coapplicant_income(),
        application.loan_amount(),
        application.credit_history(),
    );
    let household_income = application.household_income();
    let unmet_criteria = rules::unmet_criteria(
        household_income,
        application.loan_amount(),
        application.credit_history(),
    );

    LoanEvaluation {
        decision,
        household_income,
        unmet_criteria,
    }
}
