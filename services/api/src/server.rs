use crate::cli::ServeArgs;
use crate::infra::{AppState, DatasetSnapshot};
use crate::routes::with_loan_routes;
use axum::Extension;
use axum_prometheus::PrometheusMetricLayer;
use loan_approval::config::AppConfig;
use loan_approval::error::AppError;
use loan_approval::telemetry;
use loan_approval::workflows::dataset::LoanDataset;
use loan_approval::workflows::loan::applications::LoanPredictionService;
use std::sync::atomic::Ordering;
use std::sync::Arc;
use tracing::{info, warn};

pub(crate) async fn run(mut args: ServeArgs) -> Result<(), AppError> {
    let mut config = AppConfig::load()?;

    if let Some(host) = args.host.take() {
        config.server.host = host;
    }
    if let Some(port) = args.port.take() {
        config.server.port = port;
    }
    if let Some(data) = args.data.take() {
        config.dataset.path = data;
    }

    telemetry::init(&config.telemetry)?;

    let dataset = match LoanDataset::from_path(&config.dataset.path) {
        Ok(dataset) => Some(Arc::new(DatasetSnapshot::from_dataset(&dataset))),
        Err(err) => {
            warn!(
                path = %config.dataset.path.display(),
                error = %err,
                "reference dataset unavailable; insights endpoint disabled"
            );
            None
        }
    };

    let (prometheus_layer, prometheus_handle) = PrometheusMetricLayer::pair();
    let readiness_flag = Arc::new(std::sync::atomic::AtomicBool::new(false));
    let app_state = AppState {
        readiness: readiness_flag.clone(),
        metrics: Arc::new(prometheus_handle),
        dataset,
    };

    let prediction_service = Arc::new(LoanPredictionService::new());

    let app = with_loan_routes(prediction_service)
        .layer(Extension(app_state))
        .layer(prometheus_layer);

    let addr = config.server.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    readiness_flag.store(true, Ordering::Release);

    info!(?config.environment, %addr, "loan approval service ready");

    axum::serve(listener, app).await?;
    Ok(())
}
