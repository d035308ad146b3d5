use axum::response::Response;
use serde_json::Value;

use crate::workflows::loan::applications::domain::{
    Dependents, Education, Gender, LoanApplication, LoanApplicationForm, LoanTerm, PropertyArea,
    YesNo,
};
use crate::workflows::loan::applications::validation::validate;

/// Fully completed form that clears every approval threshold.
pub(super) fn approvable_form() -> LoanApplicationForm {
    LoanApplicationForm {
        gender: Gender::Female,
        married: YesNo::Yes,
        dependents: Dependents::One,
        education: Education::Graduate,
        self_employed: YesNo::No,
        applicant_income: 4200.0,
        coapplicant_income: 1500.0,
        loan_amount: 150.0,
        loan_amount_term: LoanTerm(360),
        credit_history: 1.0,
        property_area: PropertyArea::Semiurban,
    }
}

pub(super) fn form_with(
    applicant_income: f64,
    coapplicant_income: f64,
    loan_amount: f64,
    credit_history: f64,
) -> LoanApplicationForm {
    LoanApplicationForm {
        applicant_income,
        coapplicant_income,
        loan_amount,
        credit_history,
        ..approvable_form()
    }
}

pub(super) fn application(
    applicant_income: f64,
    coapplicant_income: f64,
    loan_amount: f64,
    credit_history: f64,
) -> LoanApplication {
    validate(&form_with(
        applicant_income,
        coapplicant_income,
        loan_amount,
        credit_history,
    ))
    .expect("fixture form validates")
}

pub(super) async fn read_json_body(response: Response) -> Value {
    let body = axum::body::to_bytes(response.into_body(), 64 * 1024)
        .await
        .expect("read body");
    serde_json::from_slice(&body).expect("json payload")
}
