use crate::infra::AppState;
use axum::extract::rejection::JsonRejection;
use axum::http::{header, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::Extension;
use axum::Json;
use loan_approval::error::AppError;
use loan_approval::workflows::dataset::{DatasetInsights, LoanDataset};
use loan_approval::workflows::loan::applications::{loan_router, LoanPredictionService};
use serde::Deserialize;
use serde_json::json;
use std::io::Cursor;
use std::sync::Arc;

#[derive(Debug, Deserialize)]
pub(crate) struct DatasetInsightsRequest {
    pub(crate) csv: String,
}

pub(crate) fn with_loan_routes(service: Arc<LoanPredictionService>) -> axum::Router {
    loan_router(service)
        .route("/health", axum::routing::get(healthcheck))
        .route("/ready", axum::routing::get(readiness_endpoint))
        .route("/metrics", axum::routing::get(metrics_endpoint))
        .route(
            "/api/v1/dataset/insights",
            axum::routing::get(dataset_insights_endpoint).post(uploaded_dataset_insights_endpoint),
        )
}

pub(crate) async fn healthcheck() -> Json<serde_json::Value> {
    Json(json!({ "status": "ok" }))
}

pub(crate) async fn readiness_endpoint(Extension(state): Extension<AppState>) -> impl IntoResponse {
    let ready = state.readiness.load(std::sync::atomic::Ordering::Relaxed);
    let status = if ready {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    };

    let payload = if ready {
        json!({ "status": "ready", "dataset_loaded": state.dataset.is_some() })
    } else {
        json!({ "status": "initializing" })
    };

    (status, Json(payload))
}

pub(crate) async fn metrics_endpoint(Extension(state): Extension<AppState>) -> impl IntoResponse {
    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "text/plain; version=0.0.4")],
        state.metrics.render(),
    )
}

pub(crate) async fn dataset_insights_endpoint(Extension(state): Extension<AppState>) -> Response {
    match state.dataset {
        Some(snapshot) => (StatusCode::OK, Json(snapshot.as_ref())).into_response(),
        None => (
            StatusCode::SERVICE_UNAVAILABLE,
            Json(json!({ "error": "reference dataset not loaded" })),
        )
            .into_response(),
    }
}

pub(crate) async fn uploaded_dataset_insights_endpoint(
    payload: Result<Json<DatasetInsightsRequest>, JsonRejection>,
) -> Result<Response, AppError> {
    let payload = match payload {
        Ok(Json(payload)) => payload,
        Err(rejection) => {
            let body = Json(json!({ "error": rejection.body_text() }));
            return Ok((StatusCode::UNPROCESSABLE_ENTITY, body).into_response());
        }
    };

    let reader = Cursor::new(payload.csv.into_bytes());
    let dataset = LoanDataset::from_reader(reader)?;
    let insights: DatasetInsights = dataset.insights();
    Ok(Json(insights).into_response())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infra::DatasetSnapshot;
    use axum::body::{to_bytes, Body};
    use axum::http::Request;
    use metrics_exporter_prometheus::PrometheusBuilder;
    use serde_json::Value;
    use std::sync::atomic::{AtomicBool, Ordering};
    use tower::ServiceExt;

    const SAMPLE: &str = "\
Loan_ID,Gender,Married,Dependents,Education,Self_Employed,ApplicantIncome,CoapplicantIncome,LoanAmount,Loan_Amount_Term,Credit_History,Property_Area,Loan_Status
LP001002,Male,No,0,Graduate,No,5849,0,,360,1,Urban,Y
LP001003,Male,Yes,1,Graduate,No,4583,1508,128,360,1,Rural,N
LP001005,Female,Yes,0,Not Graduate,Yes,3000,0,66,360,0,Urban,N
";

    fn state(dataset: Option<Arc<DatasetSnapshot>>) -> AppState {
        AppState {
            readiness: Arc::new(AtomicBool::new(true)),
            metrics: Arc::new(PrometheusBuilder::new().build_recorder().handle()),
            dataset,
        }
    }

    fn router(dataset: Option<Arc<DatasetSnapshot>>) -> axum::Router {
        router_with_state(state(dataset))
    }

    fn router_with_state(state: AppState) -> axum::Router {
        with_loan_routes(Arc::new(LoanPredictionService::new())).layer(Extension(state))
    }

    async fn send(router: axum::Router, request: Request<Body>) -> (StatusCode, Value) {
        let response = router.oneshot(request).await.expect("router dispatch");
        let status = response.status();
        let body = to_bytes(response.into_body(), 1024 * 1024)
            .await
            .expect("body");
        (status, serde_json::from_slice(&body).expect("json"))
    }

    fn get(uri: &str) -> Request<Body> {
        Request::builder()
            .method("GET")
            .uri(uri)
            .body(Body::empty())
            .expect("request")
    }

    #[tokio::test]
    async fn insights_unavailable_without_dataset() {
        let (status, payload) = send(router(None), get("/api/v1/dataset/insights")).await;

        assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
        assert!(payload.get("error").is_some());
    }

    #[tokio::test]
    async fn insights_served_from_startup_snapshot() {
        let dataset = LoanDataset::from_reader(SAMPLE.as_bytes()).expect("dataset loads");
        let snapshot = Arc::new(DatasetSnapshot::from_dataset(&dataset));

        let (status, payload) =
            send(router(Some(snapshot)), get("/api/v1/dataset/insights")).await;

        assert_eq!(status, StatusCode::OK);
        assert!(payload.get("loaded_at").is_some());
        assert_eq!(payload.pointer("/insights/rows"), Some(&json!(3)));
        assert_eq!(
            payload.pointer("/insights/status_by_education/groups/Graduate/Y"),
            Some(&json!(1))
        );
    }

    #[tokio::test]
    async fn uploaded_csv_is_summarized() {
        let request = Request::builder()
            .method("POST")
            .uri("/api/v1/dataset/insights")
            .header("content-type", "application/json")
            .body(Body::from(json!({ "csv": SAMPLE }).to_string()))
            .expect("request");

        let (status, payload) = send(router(None), request).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(payload.get("rows"), Some(&json!(3)));
        assert_eq!(
            payload.pointer("/imputation/columns/3/column"),
            Some(&json!("LoanAmount"))
        );
        assert_eq!(
            payload.pointer("/imputation/columns/3/value"),
            Some(&json!("97"))
        );
    }

    #[tokio::test]
    async fn uploaded_empty_csv_is_bad_request() {
        let header = SAMPLE.lines().next().expect("header");
        let request = Request::builder()
            .method("POST")
            .uri("/api/v1/dataset/insights")
            .header("content-type", "application/json")
            .body(Body::from(json!({ "csv": header }).to_string()))
            .expect("request");

        let (status, payload) = send(router(None), request).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert!(payload
            .get("error")
            .and_then(Value::as_str)
            .unwrap_or_default()
            .contains("no rows"));
    }

    #[tokio::test]
    async fn readiness_reports_dataset_state() {
        let (status, payload) = send(router(None), get("/ready")).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(payload.get("dataset_loaded"), Some(&json!(false)));
    }

    #[tokio::test]
    async fn readiness_is_unavailable_while_initializing() {
        let state = state(None);
        state.readiness.store(false, Ordering::Relaxed);

        let (status, payload) = send(router_with_state(state), get("/ready")).await;

        assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
        assert_eq!(payload, json!({ "status": "initializing" }));
    }

    #[tokio::test]
    async fn health_reports_ok() {
        let (status, payload) = send(router(None), get("/health")).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(payload, json!({ "status": "ok" }));
    }

    #[tokio::test]
    async fn metrics_render_prometheus_text() {
        let response = router(None)
            .oneshot(get("/metrics"))
            .await
            .expect("router dispatch");

        assert_eq!(response.status(), StatusCode::OK);
        let content_type = response
            .headers()
            .get(header::CONTENT_TYPE)
            .and_then(|value| value.to_str().ok())
            .unwrap_or_default();
        assert!(content_type.starts_with("text/plain"));
    }

    #[tokio::test]
    async fn uploaded_body_without_csv_is_unprocessable() {
        let request = Request::builder()
            .method("POST")
            .uri("/api/v1/dataset/insights")
            .header("content-type", "application/json")
            .body(Body::from(json!({ "rows": 3 }).to_string()))
            .expect("request");

        let (status, payload) = send(router(None), request).await;

        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
        assert!(payload
            .get("error")
            .and_then(Value::as_str)
            .unwrap_or_default()
            .contains("csv"));
    }
}
