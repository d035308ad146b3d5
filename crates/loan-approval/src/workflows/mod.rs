pub mod dataset;
pub mod loan;
