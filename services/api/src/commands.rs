use crate::infra::parse_selection;
use clap::Args;
use loan_approval::config::AppConfig;
use loan_approval::error::AppError;
use loan_approval::telemetry;
use loan_approval::workflows::dataset::{
    CorrelationMatrix, DatasetInsights, Histogram, LoanDataset, StatusBreakdown,
};
use loan_approval::workflows::loan::applications::{
    Dependents, Education, Gender, LoanApplicationForm, LoanPredictionService, LoanTerm,
    PredictionOutcome, PropertyArea, YesNo,
};
use std::path::PathBuf;

const BAR_WIDTH: usize = 40;

#[derive(Args, Debug)]
pub(crate) struct PredictArgs {
    /// Gender (Male, Female, TransGender)
    #[arg(long, value_parser = parse_selection::<Gender>, default_value = "None")]
    pub(crate) gender: Gender,
    /// Married (No, Yes)
    #[arg(long, value_parser = parse_selection::<YesNo>, default_value = "None")]
    pub(crate) married: YesNo,
    /// Dependents (0, 1, 2, 3+)
    #[arg(long, value_parser = parse_selection::<Dependents>, default_value = "0")]
    pub(crate) dependents: Dependents,
    /// Education (Graduate, "Not Graduate")
    #[arg(long, value_parser = parse_selection::<Education>, default_value = "None")]
    pub(crate) education: Education,
    /// Self employed (No, Yes)
    #[arg(long, value_parser = parse_selection::<YesNo>, default_value = "None")]
    pub(crate) self_employed: YesNo,
    /// Applicant income
    #[arg(long, default_value_t = 0.0)]
    pub(crate) applicant_income: f64,
    /// Coapplicant income
    #[arg(long, default_value_t = 0.0)]
    pub(crate) coapplicant_income: f64,
    /// Loan amount (thousands)
    #[arg(long, default_value_t = 0.0)]
    pub(crate) loan_amount: f64,
    /// Loan amount term in months (360, 180, 120, 84, 60)
    #[arg(long, default_value_t = 0)]
    pub(crate) loan_amount_term: u16,
    /// Credit history indicator (0 or 1)
    #[arg(long, default_value_t = 0.0)]
    pub(crate) credit_history: f64,
    /// Property area (Urban, Semiurban, Rural)
    #[arg(long, value_parser = parse_selection::<PropertyArea>, default_value = "None")]
    pub(crate) property_area: PropertyArea,
    /// Print the full outcome as JSON
    #[arg(long)]
    pub(crate) json: bool,
    /// Log evaluation details to stderr
    #[arg(long, short)]
    pub(crate) verbose: bool,
}

impl PredictArgs {
    pub(crate) fn form(&self) -> LoanApplicationForm {
        LoanApplicationForm {
            gender: self.gender,
            married: self.married,
            dependents: self.dependents,
            education: self.education,
            self_employed: self.self_employed,
            applicant_income: self.applicant_income,
            coapplicant_income: self.coapplicant_income,
            loan_amount: self.loan_amount,
            loan_amount_term: LoanTerm(self.loan_amount_term),
            credit_history: self.credit_history,
            property_area: self.property_area,
        }
    }
}

#[derive(Args, Debug)]
pub(crate) struct DatasetArgs {
    /// Loan dataset CSV (defaults to LOAN_DATA_PATH or loan_data.csv)
    #[arg(long)]
    pub(crate) csv: Option<PathBuf>,
    /// Log import details to stderr
    #[arg(long, short)]
    pub(crate) verbose: bool,
}

pub(crate) fn run_predict(args: PredictArgs) -> Result<(), AppError> {
    telemetry::init_cli(args.verbose)?;
    let service = LoanPredictionService::new();
    let outcome = service.predict(args.form())?;

    if args.json {
        println!("{}", render_outcome_json(&outcome)?);
        return Ok(());
    }

    println!("Loan Prediction: {}", outcome.evaluation.decision);
    println!(
        "Household income {:.0} | Loan amount {:.0} | Term {} months | Credit history {:.1}",
        outcome.evaluation.household_income,
        outcome.application.loan_amount(),
        outcome.application.loan_amount_term().months(),
        outcome.application.credit_history()
    );
    if !outcome.evaluation.unmet_criteria.is_empty() {
        println!("Unmet criteria");
        for criterion in &outcome.evaluation.unmet_criteria {
            println!("- {}", criterion.summary());
        }
    }

    Ok(())
}

pub(crate) fn render_outcome_json(outcome: &PredictionOutcome) -> Result<String, AppError> {
    Ok(serde_json::to_string_pretty(outcome)?)
}

pub(crate) fn run_dataset_report(args: DatasetArgs) -> Result<(), AppError> {
    telemetry::init_cli(args.verbose)?;
    let path = match args.csv {
        Some(path) => path,
        None => AppConfig::load()?.dataset.path,
    };

    let dataset = LoanDataset::from_path(&path)?;
    render_dataset_report(&path, &dataset.insights());
    Ok(())
}

pub(crate) fn render_dataset_report(path: &std::path::Path, insights: &DatasetInsights) {
    println!("Loan dataset report");
    println!("Source: {} ({} rows)", path.display(), insights.rows);

    println!("\nImputation");
    for column in &insights.imputation.columns {
        println!(
            "- {}: {} missing filled with {:?} {}",
            column.column, column.filled, column.strategy, column.value
        );
    }

    render_histogram(&insights.applicant_income);
    render_histogram(&insights.loan_amount);
    render_correlation(&insights.correlation);
    render_breakdown(&insights.status_by_education);
    render_breakdown(&insights.status_by_credit_history);
    render_breakdown(&insights.status_by_gender);
}

fn render_histogram(histogram: &Histogram) {
    println!("\nDistribution of {}", histogram.column);
    let peak = histogram
        .bins
        .iter()
        .map(|bin| bin.count)
        .max()
        .unwrap_or(0);
    for bin in &histogram.bins {
        let filled = if peak == 0 {
            0
        } else {
            bin.count * BAR_WIDTH / peak
        };
        println!(
            "{:>10.1} - {:>10.1} | {:<width$} {}",
            bin.lower,
            bin.upper,
            "#".repeat(filled),
            bin.count,
            width = BAR_WIDTH
        );
    }
}

fn render_correlation(matrix: &CorrelationMatrix) {
    println!("\nCorrelation matrix");
    print!("{:>18}", "");
    for column in &matrix.columns {
        print!(" {:>18}", column);
    }
    println!();
    for (column, row) in matrix.columns.iter().zip(&matrix.values) {
        print!("{:>18}", column);
        for value in row {
            match value {
                Some(value) => print!(" {:>18.2}", value),
                None => print!(" {:>18}", "n/a"),
            }
        }
        println!();
    }
}

fn render_breakdown(breakdown: &StatusBreakdown) {
    println!("\nLoan status by {}", breakdown.column);
    for (value, statuses) in &breakdown.groups {
        let counts = statuses
            .iter()
            .map(|(status, count)| format!("{status}={count}"))
            .collect::<Vec<_>>();
        println!("- {}: {}", value, counts.join(", "));
    }
}
