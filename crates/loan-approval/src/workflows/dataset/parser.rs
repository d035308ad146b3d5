use serde::{de, Deserialize, Deserializer};
use std::io::Read;

/// One CSV row before imputation. Empty cells are `None`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub(crate) struct RawLoanRow {
    #[serde(rename = "Loan_ID", default)]
    pub(crate) loan_id: String,
    #[serde(rename = "Gender", default, deserialize_with = "empty_string_as_none")]
    pub(crate) gender: Option<String>,
    #[serde(rename = "Married", default, deserialize_with = "empty_string_as_none")]
    pub(crate) married: Option<String>,
    #[serde(
        rename = "Dependents",
        default,
        deserialize_with = "empty_string_as_none"
    )]
    pub(crate) dependents: Option<String>,
    #[serde(
        rename = "Education",
        default,
        deserialize_with = "empty_string_as_none"
    )]
    pub(crate) education: Option<String>,
    #[serde(
        rename = "Self_Employed",
        default,
        deserialize_with = "empty_string_as_none"
    )]
    pub(crate) self_employed: Option<String>,
    #[serde(rename = "ApplicantIncome", deserialize_with = "required_number")]
    pub(crate) applicant_income: f64,
    #[serde(rename = "CoapplicantIncome", deserialize_with = "required_number")]
    pub(crate) coapplicant_income: f64,
    #[serde(rename = "LoanAmount", default, deserialize_with = "optional_number")]
    pub(crate) loan_amount: Option<f64>,
    #[serde(
        rename = "Loan_Amount_Term",
        default,
        deserialize_with = "optional_number"
    )]
    pub(crate) loan_amount_term: Option<f64>,
    #[serde(rename = "Credit_History", default, deserialize_with = "optional_number")]
    pub(crate) credit_history: Option<f64>,
    #[serde(
        rename = "Property_Area",
        default,
        deserialize_with = "empty_string_as_none"
    )]
    pub(crate) property_area: Option<String>,
    #[serde(
        rename = "Loan_Status",
        default,
        deserialize_with = "empty_string_as_none"
    )]
    pub(crate) loan_status: Option<String>,
}

pub(crate) fn parse_rows<R: Read>(reader: R) -> Result<Vec<RawLoanRow>, csv::Error> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(reader);

    csv_reader.deserialize::<RawLoanRow>().collect()
}

fn empty_string_as_none<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let opt = Option::<String>::deserialize(deserializer)?;
    Ok(opt.filter(|value| !value.trim().is_empty()))
}

fn optional_number<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    let opt = empty_string_as_none(deserializer)?;
    opt.map(|raw| parse_number(&raw).map_err(de::Error::custom))
        .transpose()
}

fn required_number<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;
    parse_number(&raw).map_err(de::Error::custom)
}

fn parse_number(raw: &str) -> Result<f64, String> {
    let trimmed = raw.trim();
    match trimmed.parse::<f64>() {
        Ok(value) if value.is_finite() => Ok(value),
        _ => Err(format!("'{trimmed}' is not a number")),
    }
}
