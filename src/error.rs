use chrono::NaiveDate;
use rust_decimal::Decimal;
use thiserror::Error;

/// Errors surfaced by the plan engine.
///
/// Every failed calculation returns exactly one of these and no partial plan.
#[derive(Error, Debug, PartialEq)]
pub enum PlanError {
    #[error(
        "Invalid installment count {requested}{}",
        .max.map(|max| format!(": must be between 1 and {max}")).unwrap_or_default()
    )]
    InvalidInstallmentCount { requested: i32, max: Option<i32> },
    #[error("Invalid course dates: start {start} is after end {end}")]
    InvalidCourseDates { start: NaiveDate, end: NaiveDate },
    #[error("No installments available before the exam month")]
    NoInstallmentsAvailable,
    #[error("Invalid discount: {0}")]
    InvalidDiscount(String),
    #[error("Date out of range: {0}")]
    DateOutOfRange(NaiveDate),
}

/// Errors raised while loading or selecting catalog records.
#[derive(Error, Debug)]
pub enum CatalogError {
    #[error("CSV error: {0}")]
    CsvError(#[from] csv::Error),
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
    #[error("Missing column: {0}")]
    MissingColumn(String),
    #[error("Line {line}: invalid or missing date in '{column}': '{value}'")]
    InvalidDate {
        line: u64,
        column: String,
        value: String,
    },
    #[error("Line {line}: invalid tuition price '{value}'")]
    InvalidPrice { line: u64, value: String },
    #[error("Course not found: {0}")]
    CourseNotFound(String),
}

/// Errors raised while loading or checking a [`crate::config::PlanConfig`].
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
    #[error("Invalid config JSON: {0}")]
    ParseError(#[from] serde_json::Error),
    #[error("Invalid max_installments {value}: must be between 1 and {limit}")]
    InvalidMaxInstallments { value: i32, limit: i32 },
    #[error("Invalid fee '{name}': {value} is negative")]
    NegativeFee { name: &'static str, value: Decimal },
}

pub type Result<T, E = PlanError> = std::result::Result<T, E>;
