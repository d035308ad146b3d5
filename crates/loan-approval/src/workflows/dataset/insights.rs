use serde::Serialize;
use std::collections::BTreeMap;

use super::imputation::ImputationReport;
use super::LoanRecord;

/// Numeric columns included in the correlation matrix, in display order.
pub const NUMERIC_COLUMNS: [&str; 5] = [
    "ApplicantIncome",
    "CoapplicantIncome",
    "LoanAmount",
    "Loan_Amount_Term",
    "Credit_History",
];

/// Descriptive summaries of the reference dataset.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DatasetInsights {
    pub rows: usize,
    pub imputation: ImputationReport,
    pub applicant_income: Histogram,
    pub loan_amount: Histogram,
    pub correlation: CorrelationMatrix,
    pub status_by_education: StatusBreakdown,
    pub status_by_credit_history: StatusBreakdown,
    pub status_by_gender: StatusBreakdown,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HistogramBin {
    pub lower: f64,
    pub upper: f64,
    pub count: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Histogram {
    pub column: &'static str,
    pub bins: Vec<HistogramBin>,
}

impl Histogram {
    /// Equal-width bins between min and max; the bin count follows Sturges' rule.
    pub fn from_values(column: &'static str, values: &[f64]) -> Self {
        if values.is_empty() {
            return Self {
                column,
                bins: Vec::new(),
            };
        }

        let min = values.iter().copied().fold(f64::INFINITY, f64::min);
        let max = values.iter().copied().fold(f64::NEG_INFINITY, f64::max);

        if min == max {
            return Self {
                column,
                bins: vec![HistogramBin {
                    lower: min,
                    upper: max,
                    count: values.len(),
                }],
            };
        }

        let bin_count = sturges_bins(values.len());
        let width = (max - min) / bin_count as f64;
        let mut counts = vec![0usize; bin_count];
        for value in values {
            let index = (((value - min) / width).floor() as usize).min(bin_count - 1);
            counts[index] += 1;
        }

        let bins = counts
            .into_iter()
            .enumerate()
            .map(|(index, count)| HistogramBin {
                lower: min + width * index as f64,
                upper: if index + 1 == bin_count {
                    max
                } else {
                    min + width * (index + 1) as f64
                },
                count,
            })
            .collect();

        Self { column, bins }
    }

    pub fn total(&self) -> usize {
        self.bins.iter().map(|bin| bin.count).sum()
    }
}

fn sturges_bins(n: usize) -> usize {
    ((n as f64).log2().ceil() as usize + 1).max(1)
}

/// Pearson correlations; `None` where a column has no variance.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CorrelationMatrix {
    pub columns: Vec<&'static str>,
    pub values: Vec<Vec<Option<f64>>>,
}

impl CorrelationMatrix {
    pub fn from_records(records: &[LoanRecord]) -> Self {
        let series: Vec<Vec<f64>> = NUMERIC_COLUMNS
            .iter()
            .map(|column| records.iter().map(|record| numeric_value(record, column)).collect())
            .collect();

        let values = series
            .iter()
            .map(|left| series.iter().map(|right| pearson(left, right)).collect())
            .collect();

        Self {
            columns: NUMERIC_COLUMNS.to_vec(),
            values,
        }
    }

    pub fn get(&self, left: &str, right: &str) -> Option<f64> {
        let row = self.columns.iter().position(|column| *column == left)?;
        let col = self.columns.iter().position(|column| *column == right)?;
        self.values[row][col]
    }
}

fn numeric_value(record: &LoanRecord, column: &str) -> f64 {
    match column {
        "ApplicantIncome" => record.applicant_income,
        "CoapplicantIncome" => record.coapplicant_income,
        "LoanAmount" => record.loan_amount,
        "Loan_Amount_Term" => record.loan_amount_term,
        _ => record.credit_history,
    }
}

pub(crate) fn pearson(left: &[f64], right: &[f64]) -> Option<f64> {
    let n = left.len().min(right.len());
    if n < 2 {
        return None;
    }

    let mean_left = left[..n].iter().sum::<f64>() / n as f64;
    let mean_right = right[..n].iter().sum::<f64>() / n as f64;

    let mut covariance = 0.0;
    let mut variance_left = 0.0;
    let mut variance_right = 0.0;
    for (x, y) in left[..n].iter().zip(&right[..n]) {
        let dx = x - mean_left;
        let dy = y - mean_right;
        covariance += dx * dy;
        variance_left += dx * dx;
        variance_right += dy * dy;
    }

    if variance_left == 0.0 || variance_right == 0.0 {
        return None;
    }

    Some((covariance / (variance_left * variance_right).sqrt()).clamp(-1.0, 1.0))
}

/// Loan status counts for each value of a categorical column.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StatusBreakdown {
    pub column: &'static str,
    pub groups: BTreeMap<String, BTreeMap<String, usize>>,
}

impl StatusBreakdown {
    /// Rows with no loan status or no group value are skipped.
    pub fn from_records<F>(records: &[LoanRecord], column: &'static str, group: F) -> Self
    where
        F: Fn(&LoanRecord) -> Option<String>,
    {
        let mut groups: BTreeMap<String, BTreeMap<String, usize>> = BTreeMap::new();
        for record in records {
            let (Some(value), Some(status)) = (group(record), record.loan_status.as_ref()) else {
                continue;
            };
            *groups
                .entry(value)
                .or_default()
                .entry(status.clone())
                .or_default() += 1;
        }

        Self { column, groups }
    }

    pub fn count(&self, value: &str, status: &str) -> usize {
        self.groups
            .get(value)
            .and_then(|statuses| statuses.get(status))
            .copied()
            .unwrap_or(0)
    }
}

pub(crate) fn build_insights(records: &[LoanRecord], imputation: &ImputationReport) -> DatasetInsights {
    let applicant_income: Vec<f64> = records.iter().map(|record| record.applicant_income).collect();
    let loan_amount: Vec<f64> = records.iter().map(|record| record.loan_amount).collect();

    DatasetInsights {
        rows: records.len(),
        imputation: imputation.clone(),
        applicant_income: Histogram::from_values("ApplicantIncome", &applicant_income),
        loan_amount: Histogram::from_values("LoanAmount", &loan_amount),
        correlation: CorrelationMatrix::from_records(records),
        status_by_education: StatusBreakdown::from_records(records, "Education", |record| {
            record.education.clone()
        }),
        status_by_credit_history: StatusBreakdown::from_records(
            records,
            "Credit_History",
            |record| Some(format!("{:.1}", record.credit_history)),
        ),
        status_by_gender: StatusBreakdown::from_records(records, "Gender", |record| {
            Some(record.gender.clone())
        }),
    }
}
