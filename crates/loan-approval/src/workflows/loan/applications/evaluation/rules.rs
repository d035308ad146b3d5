use super::policy::{LoanDecision, UnmetCriterion};
use super::thresholds::{MAXIMUM_LOAN_AMOUNT, MINIMUM_HOUSEHOLD_INCOME, REQUIRED_CREDIT_HISTORY};

/// The approval rule: household income of at least 5000, a credit history of exactly 1.0,
/// and a loan amount of at most 500. All bounds are inclusive.
pub fn loan_approval_rule(
    applicant_income: f64,
    coapplicant_income: f64,
    loan_amount: f64,
    credit_history: f64,
) -> LoanDecision {
    if applicant_income + coapplicant_income >= MINIMUM_HOUSEHOLD_INCOME
        && credit_history == REQUIRED_CREDIT_HISTORY
        && loan_amount <= MAXIMUM_LOAN_AMOUNT
    {
        LoanDecision::Approved
    } else {
        LoanDecision::NotApproved
    }
}

pub(crate) fn unmet_criteria(
    household_income: f64,
    loan_amount: f64,
    credit_history: f64,
) -> Vec<UnmetCriterion> {
    let mut unmet = Vec::new();

    if household_income < MINIMUM_HOUSEHOLD_INCOME {
        unmet.push(UnmetCriterion::InsufficientHouseholdIncome {
            required: MINIMUM_HOUSEHOLD_INCOME,
            actual: household_income,
        });
    }

    if credit_history != REQUIRED_CREDIT_HISTORY {
        unmet.push(UnmetCriterion::MissingCreditHistory);
    }

    if loan_amount > MAXIMUM_LOAN_AMOUNT {
        unmet.push(UnmetCriterion::LoanAmountAboveLimit {
            limit: MAXIMUM_LOAN_AMOUNT,
            requested: loan_amount,
        });
    }

    unmet
}
