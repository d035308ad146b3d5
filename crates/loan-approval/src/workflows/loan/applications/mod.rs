//! Loan application intake: form validation, the approval rule, and its HTTP surface.

pub mod domain;
pub mod evaluation;
pub mod router;
pub mod service;
pub mod validation;

#[cfg(test)]
mod tests;

pub use domain::{
    Dependents, Education, Gender, LoanApplication, LoanApplicationForm, LoanTerm, PropertyArea,
    YesNo,
};
pub use evaluation::{evaluate, loan_approval_rule, LoanDecision, LoanEvaluation, UnmetCriterion};
pub use router::{loan_router, PredictionResponse};
pub use service::{LoanPredictionService, PredictionOutcome};
pub use validation::{validate, ValidationError};
