//! Loan application intake, the approval rule, and reference dataset insights.

pub mod config;
pub mod error;
pub mod telemetry;
pub mod workflows;
