use std::sync::Arc;

use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::post,
    Router,
};
use chrono::{DateTime, Utc};
use serde::Serialize;
use serde_json::json;

use super::domain::{LoanApplication, LoanApplicationForm};
use super::evaluation::{LoanDecision, UnmetCriterion};
use super::service::LoanPredictionService;

/// Public payload returned for an evaluated application.
#[derive(Debug, Clone, Serialize)]
pub struct PredictionResponse {
    pub decision: LoanDecision,
    pub household_income: f64,
    pub unmet_criteria: Vec<UnmetCriterion>,
    pub summary: String,
    pub application: LoanApplication,
    pub evaluated_at: DateTime<Utc>,
}

/// Router builder exposing the prediction endpoint.
pub fn loan_router(service: Arc<LoanPredictionService>) -> Router {
    Router::new()
        .route("/api/v1/loans/predictions", post(predict_handler))
        .with_state(service)
}

/// Undecodable bodies get the same `{ error }` shape as validation failures.
pub(crate) async fn predict_handler(
    State(service): State<Arc<LoanPredictionService>>,
    payload: Result<axum::Json<LoanApplicationForm>, JsonRejection>,
) -> Response {
    let form = match payload {
        Ok(axum::Json(form)) => form,
        Err(rejection) => return unprocessable(rejection.body_text()),
    };

    match service.predict(form) {
        Ok(outcome) => {
            let summary = outcome.evaluation.summary();
            let response = PredictionResponse {
                decision: outcome.evaluation.decision,
                household_income: outcome.evaluation.household_income,
                unmet_criteria: outcome.evaluation.unmet_criteria,
                summary,
                application: outcome.application,
                evaluated_at: Utc::now(),
            };
            (StatusCode::OK, axum::Json(response)).into_response()
        }
        Err(error) => unprocessable(error.to_string()),
    }
}

fn unprocessable(message: String) -> Response {
    let payload = json!({
        "error": message,
    });
    (StatusCode::UNPROCESSABLE_ENTITY, axum::Json(payload)).into_response()
}
