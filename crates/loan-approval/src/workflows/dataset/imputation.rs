use serde::Serialize;
use std::collections::BTreeMap;

use super::parser::RawLoanRow;
use super::{DatasetError, LoanRecord};

/// How a column's missing cells were filled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ImputationStrategy {
    Mode,
    Median,
}

/// Fill applied to a single column.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ImputedColumn {
    pub column: &'static str,
    pub strategy: ImputationStrategy,
    pub value: String,
    pub filled: usize,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ImputationReport {
    pub columns: Vec<ImputedColumn>,
}

impl ImputationReport {
    pub fn total_filled(&self) -> usize {
        self.columns.iter().map(|column| column.filled).sum()
    }

    pub fn column(&self, name: &str) -> Option<&ImputedColumn> {
        self.columns.iter().find(|column| column.column == name)
    }
}

/// Fill categorical gaps with the column mode and numeric gaps with the column median.
///
/// Gender, Dependents and Self_Employed use the mode; LoanAmount, Loan_Amount_Term and
/// Credit_History use the median. Other columns keep their missing values.
pub(crate) fn impute(
    rows: Vec<RawLoanRow>,
) -> Result<(Vec<LoanRecord>, ImputationReport), DatasetError> {
    if rows.is_empty() {
        return Err(DatasetError::Empty);
    }

    let gender = mode_fill("Gender", rows.iter().map(|row| row.gender.as_deref()))?;
    let dependents = mode_fill("Dependents", rows.iter().map(|row| row.dependents.as_deref()))?;
    let self_employed = mode_fill(
        "Self_Employed",
        rows.iter().map(|row| row.self_employed.as_deref()),
    )?;
    let loan_amount = median_fill("LoanAmount", rows.iter().map(|row| row.loan_amount))?;
    let loan_amount_term = median_fill(
        "Loan_Amount_Term",
        rows.iter().map(|row| row.loan_amount_term),
    )?;
    let credit_history =
        median_fill("Credit_History", rows.iter().map(|row| row.credit_history))?;

    let records = rows
        .into_iter()
        .map(|row| LoanRecord {
            loan_id: row.loan_id,
            gender: row.gender.unwrap_or_else(|| gender.fill.clone()),
            married: row.married,
            dependents: row.dependents.unwrap_or_else(|| dependents.fill.clone()),
            education: row.education,
            self_employed: row
                .self_employed
                .unwrap_or_else(|| self_employed.fill.clone()),
            applicant_income: row.applicant_income,
            coapplicant_income: row.coapplicant_income,
            loan_amount: row.loan_amount.unwrap_or(loan_amount.fill),
            loan_amount_term: row.loan_amount_term.unwrap_or(loan_amount_term.fill),
            credit_history: row.credit_history.unwrap_or(credit_history.fill),
            property_area: row.property_area,
            loan_status: row.loan_status,
        })
        .collect();

    let report = ImputationReport {
        columns: vec![
            gender.into_column(),
            dependents.into_column(),
            self_employed.into_column(),
            loan_amount.into_column(),
            loan_amount_term.into_column(),
            credit_history.into_column(),
        ],
    };

    Ok((records, report))
}

struct ModeFill {
    column: &'static str,
    fill: String,
    missing: usize,
}

impl ModeFill {
    fn into_column(self) -> ImputedColumn {
        ImputedColumn {
            column: self.column,
            strategy: ImputationStrategy::Mode,
            value: self.fill,
            filled: self.missing,
        }
    }
}

struct MedianFill {
    column: &'static str,
    fill: f64,
    missing: usize,
}

impl MedianFill {
    fn into_column(self) -> ImputedColumn {
        ImputedColumn {
            column: self.column,
            strategy: ImputationStrategy::Median,
            value: format!("{}", self.fill),
            filled: self.missing,
        }
    }
}

fn mode_fill<'a>(
    column: &'static str,
    values: impl Iterator<Item = Option<&'a str>>,
) -> Result<ModeFill, DatasetError> {
    let mut missing = 0;
    let mut present = Vec::new();
    for value in values {
        match value {
            Some(value) => present.push(value),
            None => missing += 1,
        }
    }

    let fill = mode(present).ok_or(DatasetError::UnimputableColumn(column))?;
    Ok(ModeFill {
        column,
        fill,
        missing,
    })
}

fn median_fill(
    column: &'static str,
    values: impl Iterator<Item = Option<f64>>,
) -> Result<MedianFill, DatasetError> {
    let mut missing = 0;
    let mut present = Vec::new();
    for value in values {
        match value {
            Some(value) => present.push(value),
            None => missing += 1,
        }
    }

    let fill = median(present).ok_or(DatasetError::UnimputableColumn(column))?;
    Ok(MedianFill {
        column,
        fill,
        missing,
    })
}

/// Most frequent value; ties resolve to the smallest value in sort order.
pub(crate) fn mode<'a>(values: impl IntoIterator<Item = &'a str>) -> Option<String> {
    let mut counts: BTreeMap<&str, usize> = BTreeMap::new();
    for value in values {
        *counts.entry(value).or_default() += 1;
    }

    let mut best: Option<(&str, usize)> = None;
    for (value, count) in counts {
        match best {
            Some((_, best_count)) if count <= best_count => {}
            _ => best = Some((value, count)),
        }
    }

    best.map(|(value, _)| value.to_string())
}

/// Median of the values; even counts average the two middle values.
pub(crate) fn median(mut values: Vec<f64>) -> Option<f64> {
    if values.is_empty() {
        return None;
    }

    values.sort_by(f64::total_cmp);
    let mid = values.len() / 2;
    if values.len() % 2 == 0 {
        Some((values[mid - 1] + values[mid]) / 2.0)
    } else {
        Some(values[mid])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mode_prefers_smallest_value_on_ties() {
        assert_eq!(mode(["Yes", "No", "Yes", "No"]), Some("No".to_string()));
        assert_eq!(mode(["3+", "1", "0", "1"]), Some("1".to_string()));
        assert_eq!(mode(Vec::<&str>::new()), None);
    }

    #[test]
    fn median_handles_odd_and_even_counts() {
        assert_eq!(median(vec![360.0, 120.0, 180.0]), Some(180.0));
        assert_eq!(median(vec![128.0, 66.0, 120.0, 141.0]), Some(124.0));
        assert_eq!(median(vec![]), None);
    }
}
