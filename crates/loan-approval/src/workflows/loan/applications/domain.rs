use serde::{Deserialize, Serialize};

/// Applicant gender as offered by the intake form.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Gender {
    #[default]
    #[serde(rename = "None")]
    Unset,
    Male,
    Female,
    TransGender,
}

impl Gender {
    pub const fn label(self) -> &'static str {
        match self {
            Gender::Unset => "None",
            Gender::Male => "Male",
            Gender::Female => "Female",
            Gender::TransGender => "TransGender",
        }
    }

    pub const fn is_unset(self) -> bool {
        matches!(self, Gender::Unset)
    }
}

/// Yes/No selector used for the marital status and self-employment questions.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum YesNo {
    #[default]
    #[serde(rename = "None")]
    Unset,
    No,
    Yes,
}

impl YesNo {
    pub const fn label(self) -> &'static str {
        match self {
            YesNo::Unset => "None",
            YesNo::No => "No",
            YesNo::Yes => "Yes",
        }
    }

    pub const fn is_unset(self) -> bool {
        matches!(self, YesNo::Unset)
    }
}

/// Number of dependents. The selector has no placeholder and starts at zero.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Dependents {
    #[default]
    #[serde(rename = "0")]
    Zero,
    #[serde(rename = "1")]
    One,
    #[serde(rename = "2")]
    Two,
    #[serde(rename = "3+")]
    ThreeOrMore,
}

impl Dependents {
    pub const fn label(self) -> &'static str {
        match self {
            Dependents::Zero => "0",
            Dependents::One => "1",
            Dependents::Two => "2",
            Dependents::ThreeOrMore => "3+",
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Education {
    #[default]
    #[serde(rename = "None")]
    Unset,
    Graduate,
    #[serde(rename = "Not Graduate")]
    NotGraduate,
}

impl Education {
    pub const fn label(self) -> &'static str {
        match self {
            Education::Unset => "None",
            Education::Graduate => "Graduate",
            Education::NotGraduate => "Not Graduate",
        }
    }

    pub const fn is_unset(self) -> bool {
        matches!(self, Education::Unset)
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum PropertyArea {
    #[default]
    #[serde(rename = "None")]
    Unset,
    Urban,
    Semiurban,
    Rural,
}

impl PropertyArea {
    pub const fn label(self) -> &'static str {
        match self {
            PropertyArea::Unset => "None",
            PropertyArea::Urban => "Urban",
            PropertyArea::Semiurban => "Semiurban",
            PropertyArea::Rural => "Rural",
        }
    }

    pub const fn is_unset(self) -> bool {
        matches!(self, PropertyArea::Unset)
    }
}

/// Loan amount term in months. Zero is the selector's placeholder.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LoanTerm(pub u16);

impl LoanTerm {
    /// Terms offered by the intake form, in display order.
    pub const OFFERED_MONTHS: [u16; 5] = [360, 180, 120, 84, 60];

    pub const fn months(self) -> u16 {
        self.0
    }

    pub const fn is_unset(self) -> bool {
        self.0 == 0
    }

    pub fn is_offered(self) -> bool {
        Self::OFFERED_MONTHS.contains(&self.0)
    }
}

/// Raw intake form exactly as submitted, placeholders included.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoanApplicationForm {
    pub gender: Gender,
    pub married: YesNo,
    pub dependents: Dependents,
    pub education: Education,
    pub self_employed: YesNo,
    pub applicant_income: f64,
    pub coapplicant_income: f64,
    pub loan_amount: f64,
    pub loan_amount_term: LoanTerm,
    pub credit_history: f64,
    pub property_area: PropertyArea,
}

/// Validated loan application. Only [`super::validation::validate`] constructs it.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LoanApplication {
    pub(crate) gender: Gender,
    pub(crate) married: YesNo,
    pub(crate) dependents: Dependents,
    pub(crate) education: Education,
    pub(crate) self_employed: YesNo,
    pub(crate) applicant_income: f64,
    pub(crate) coapplicant_income: f64,
    pub(crate) loan_amount: f64,
    pub(crate) loan_amount_term: LoanTerm,
    pub(crate) credit_history: f64,
    pub(crate) property_area: PropertyArea,
}

impl LoanApplication {
    pub fn gender(&self) -> Gender {
        self.gender
    }

    pub fn married(&self) -> YesNo {
        self.married
    }

    pub fn dependents(&self) -> Dependents {
        self.dependents
    }

    pub fn education(&self) -> Education {
        self.education
    }

    pub fn self_employed(&self) -> YesNo {
        self.self_employed
    }

    pub fn applicant_income(&self) -> f64 {
        self.applicant_income
    }

    pub fn coapplicant_income(&self) -> f64 {
        self.coapplicant_income
    }

    pub fn household_income(&self) -> f64 {
        self.applicant_income + self.coapplicant_income
    }

    pub fn loan_amount(&self) -> f64 {
        self.loan_amount
    }

    pub fn loan_amount_term(&self) -> LoanTerm {
        self.loan_amount_term
    }

    /// Binary indicator, always `0.0` or `1.0`.
    pub fn credit_history(&self) -> f64 {
        self.credit_history
    }

    pub fn property_area(&self) -> PropertyArea {
        self.property_area
    }
}
