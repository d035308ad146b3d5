//! Reference loan dataset: CSV import, gap filling, and descriptive summaries.

mod imputation;
mod insights;
mod parser;

pub use imputation::{ImputationReport, ImputationStrategy, ImputedColumn};
pub use insights::{
    CorrelationMatrix, DatasetInsights, Histogram, HistogramBin, StatusBreakdown, NUMERIC_COLUMNS,
};

use serde::Serialize;
use std::io::Read;
use std::path::Path;
use tracing::info;

/// Dataset row after imputation. Gender, Dependents, Self_Employed and the numeric columns
/// are always populated; the remaining categorical columns may still be missing.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LoanRecord {
    pub loan_id: String,
    pub gender: String,
    pub married: Option<String>,
    pub dependents: String,
    pub education: Option<String>,
    pub self_employed: String,
    pub applicant_income: f64,
    pub coapplicant_income: f64,
    pub loan_amount: f64,
    pub loan_amount_term: f64,
    pub credit_history: f64,
    pub property_area: Option<String>,
    pub loan_status: Option<String>,
}

#[derive(Debug, thiserror::Error)]
pub enum DatasetError {
    #[error("failed to read loan dataset: {0}")]
    Io(#[from] std::io::Error),
    #[error("invalid loan dataset CSV: {0}")]
    Csv(#[from] csv::Error),
    #[error("loan dataset contains no rows")]
    Empty,
    #[error("column {0} has no values to impute from")]
    UnimputableColumn(&'static str),
}

/// Immutable, imputed copy of the reference dataset.
#[derive(Debug, Clone)]
pub struct LoanDataset {
    records: Vec<LoanRecord>,
    imputation: ImputationReport,
}

impl LoanDataset {
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self, DatasetError> {
        let file = std::fs::File::open(path.as_ref())?;
        let dataset = Self::from_reader(file)?;
        info!(
            path = %path.as_ref().display(),
            rows = dataset.records.len(),
            "loan dataset loaded"
        );
        Ok(dataset)
    }

    pub fn from_reader<R: Read>(reader: R) -> Result<Self, DatasetError> {
        let rows = parser::parse_rows(reader)?;
        let (records, imputation) = imputation::impute(rows)?;

        info!(
            rows = records.len(),
            filled = imputation.total_filled(),
            "imputed missing loan dataset values"
        );

        Ok(Self {
            records,
            imputation,
        })
    }

    pub fn records(&self) -> &[LoanRecord] {
        &self.records
    }

    pub fn imputation(&self) -> &ImputationReport {
        &self.imputation
    }

    pub fn insights(&self) -> DatasetInsights {
        insights::build_insights(&self.records, &self.imputation)
    }
}
