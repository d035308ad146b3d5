use serde::Serialize;
use tracing::{debug, info, warn};

use super::domain::{LoanApplication, LoanApplicationForm};
use super::evaluation::{evaluate, LoanEvaluation};
use super::validation::{validate, ValidationError};

/// Validated application together with the rule's verdict.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PredictionOutcome {
    pub application: LoanApplication,
    pub evaluation: LoanEvaluation,
}

/// Service composing the validation gate and the approval rule for a single submission.
#[derive(Debug, Default, Clone, Copy)]
pub struct LoanPredictionService;

impl LoanPredictionService {
    pub fn new() -> Self {
        Self
    }

    /// Validate the form and, when it passes, evaluate it against the approval rule.
    pub fn predict(&self, form: LoanApplicationForm) -> Result<PredictionOutcome, ValidationError> {
        let application = match validate(&form) {
            Ok(application) => application,
            Err(err) => {
                warn!(error = %err, "loan application rejected by validation");
                return Err(err);
            }
        };

        debug!(
            household_income = application.household_income(),
            loan_amount = application.loan_amount(),
            credit_history = application.credit_history(),
            "evaluating loan application"
        );

        let evaluation = evaluate(&application);

        info!(
            decision = %evaluation.decision,
            unmet = evaluation.unmet_criteria.len(),
            term_months = application.loan_amount_term().months(),
            "loan application evaluated"
        );

        Ok(PredictionOutcome {
            application,
            evaluation,
        })
    }
}
