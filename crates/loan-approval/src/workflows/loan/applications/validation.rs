use super::domain::{LoanApplication, LoanApplicationForm};

/// Reasons a submitted form cannot be evaluated.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ValidationError {
    #[error("please fill out all fields before submitting (missing: {})", .fields.join(", "))]
    MissingSelections { fields: Vec<&'static str> },
    #[error("{field} must be a finite, non-negative number")]
    InvalidAmount { field: &'static str },
    #[error(
        "applicant income and loan amount must be greater than zero (zero: {})",
        .fields.join(", ")
    )]
    NonPositiveAmount { fields: Vec<&'static str> },
    #[error("loan amount term of {0} months is not offered")]
    UnsupportedLoanTerm(u16),
    #[error("credit history must be 0 or 1, found {0}")]
    InvalidCreditHistory(f64),
}

/// Gate the approval rule: every selector chosen, amounts usable, income and loan non-zero.
///
/// Unset selectors are reported before any numeric problem so the applicant sees the same
/// message the form shows for an incomplete submission.
pub fn validate(form: &LoanApplicationForm) -> Result<LoanApplication, ValidationError> {
    let missing = missing_selections(form);
    if !missing.is_empty() {
        return Err(ValidationError::MissingSelections { fields: missing });
    }

    if !form.loan_amount_term.is_offered() {
        return Err(ValidationError::UnsupportedLoanTerm(
            form.loan_amount_term.months(),
        ));
    }

    for (field, value) in [
        ("applicant_income", form.applicant_income),
        ("coapplicant_income", form.coapplicant_income),
        ("loan_amount", form.loan_amount),
    ] {
        if !value.is_finite() || value < 0.0 {
            return Err(ValidationError::InvalidAmount { field });
        }
    }

    let mut zero_fields = Vec::new();
    if form.applicant_income == 0.0 {
        zero_fields.push("applicant_income");
    }
    if form.loan_amount == 0.0 {
        zero_fields.push("loan_amount");
    }
    if !zero_fields.is_empty() {
        return Err(ValidationError::NonPositiveAmount {
            fields: zero_fields,
        });
    }

    if form.credit_history != 0.0 && form.credit_history != 1.0 {
        return Err(ValidationError::InvalidCreditHistory(form.credit_history));
    }

    Ok(LoanApplication {
        gender: form.gender,
        married: form.married,
        dependents: form.dependents,
        education: form.education,
        self_employed: form.self_employed,
        applicant_income: form.applicant_income,
        coapplicant_income: form.coapplicant_income,
        loan_amount: form.loan_amount,
        loan_amount_term: form.loan_amount_term,
        credit_history: form.credit_history,
        property_area: form.property_area,
    })
}

fn missing_selections(form: &LoanApplicationForm) -> Vec<&'static str> {
    let mut missing = Vec::new();
    if form.gender.is_unset() {
        missing.push("gender");
    }
    if form.married.is_unset() {
        missing.push("married");
    }
    if form.education.is_unset() {
        missing.push("education");
    }
    if form.self_employed.is_unset() {
        missing.push("self_employed");
    }
    if form.property_area.is_unset() {
        missing.push("property_area");
    }
    if form.loan_amount_term.is_unset() {
        missing.push("loan_amount_term");
    }
    missing
}

impl TryFrom<LoanApplicationForm> for LoanApplication {
    type Error = ValidationError;

    fn try_from(form: LoanApplicationForm) -> Result<Self, Self::Error> {
        validate(&form)
    }
}
