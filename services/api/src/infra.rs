use chrono::{DateTime, Utc};
use loan_approval::workflows::dataset::{DatasetInsights, LoanDataset};
use metrics_exporter_prometheus::PrometheusHandle;
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::sync::atomic::AtomicBool;
use std::sync::Arc;

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
    pub(crate) dataset: Option<Arc<DatasetSnapshot>>,
}

/// Insights computed once from the dataset loaded at startup.
#[derive(Debug, Serialize)]
pub(crate) struct DatasetSnapshot {
    pub(crate) loaded_at: DateTime<Utc>,
    pub(crate) insights: DatasetInsights,
}

impl DatasetSnapshot {
    pub(crate) fn from_dataset(dataset: &LoanDataset) -> Self {
        Self {
            loaded_at: Utc::now(),
            insights: dataset.insights(),
        }
    }
}

/// Parse a form selector from its display label, e.g. `Not Graduate` or `3+`.
pub(crate) fn parse_selection<T: DeserializeOwned>(raw: &str) -> Result<T, String> {
    let trimmed = raw.trim();
    serde_json::from_value(serde_json::Value::String(trimmed.to_string()))
        .map_err(|_| format!("'{trimmed}' is not one of the offered options"))
}
