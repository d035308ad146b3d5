//! End-to-end scenarios for loan intake through the public service facade and HTTP router.

use std::sync::Arc;

use axum::body::{to_bytes, Body};
use axum::http::{Request, StatusCode};
use serde_json::{json, Value};
use tower::ServiceExt;

use loan_approval::workflows::loan::applications::{
    loan_router, Dependents, Education, Gender, LoanApplicationForm, LoanDecision,
    LoanPredictionService, LoanTerm, PropertyArea, ValidationError, YesNo,
};

fn form(
    applicant_income: f64,
    coapplicant_income: f64,
    loan_amount: f64,
    credit_history: f64,
) -> LoanApplicationForm {
    LoanApplicationForm {
        gender: Gender::Male,
        married: YesNo::Yes,
        dependents: Dependents::Two,
        education: Education::Graduate,
        self_employed: YesNo::No,
        applicant_income,
        coapplicant_income,
        loan_amount,
        loan_amount_term: LoanTerm(180),
        credit_history,
        property_area: PropertyArea::Urban,
    }
}

#[test]
fn boundary_application_is_approved() {
    let service = LoanPredictionService::new();

    let outcome = service
        .predict(form(3000.0, 2000.0, 500.0, 1.0))
        .expect("valid form");

    assert_eq!(outcome.evaluation.decision, LoanDecision::Approved);
}

#[test]
fn one_below_income_boundary_is_not_approved() {
    let service = LoanPredictionService::new();

    let outcome = service
        .predict(form(2999.0, 2000.0, 500.0, 1.0))
        .expect("valid form");

    assert_eq!(outcome.evaluation.decision, LoanDecision::NotApproved);
}

#[test]
fn zero_applicant_income_never_reaches_the_rule() {
    let service = LoanPredictionService::new();

    let result = service.predict(form(0.0, 9000.0, 100.0, 1.0));

    assert!(matches!(
        result,
        Err(ValidationError::NonPositiveAmount { .. })
    ));
}

async fn post_prediction(body: Value) -> (StatusCode, Value) {
    let router = loan_router(Arc::new(LoanPredictionService::new()));
    let response = router
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/api/v1/loans/predictions")
                .header("content-type", "application/json")
                .body(Body::from(body.to_string()))
                .expect("request"),
        )
        .await
        .expect("router dispatch");

    let status = response.status();
    let body = to_bytes(response.into_body(), 1024 * 1024)
        .await
        .expect("body");
    (status, serde_json::from_slice(&body).expect("json"))
}

#[tokio::test]
async fn http_submission_returns_verdict() {
    let (status, payload) = post_prediction(json!({
        "gender": "Female",
        "married": "No",
        "dependents": "0",
        "education": "Graduate",
        "self_employed": "No",
        "applicant_income": 6000,
        "coapplicant_income": 0,
        "loan_amount": 141,
        "loan_amount_term": 360,
        "credit_history": 1.0,
        "property_area": "Urban"
    }))
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(payload.get("decision"), Some(&json!("Approved")));
    assert_eq!(
        payload.get("summary").and_then(Value::as_str),
        Some("loan approved")
    );
}

#[tokio::test]
async fn http_submission_with_placeholders_is_unprocessable() {
    let (status, payload) = post_prediction(json!({
        "gender": "None",
        "married": "Yes",
        "education": "Graduate",
        "self_employed": "No",
        "applicant_income": 6000,
        "loan_amount": 141,
        "loan_amount_term": 360,
        "credit_history": 1.0,
        "property_area": "None"
    }))
    .await;

    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    let error = payload
        .get("error")
        .and_then(Value::as_str)
        .expect("error message");
    assert!(error.contains("gender"));
    assert!(error.contains("property_area"));
}
