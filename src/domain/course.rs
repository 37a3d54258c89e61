use super::money::Money;
use crate::error::{PlanError, Result};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// The two course families, each with its own installment policy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CourseKind {
    /// Installment runway is tied to the exam month.
    Standard,
    /// Installment cap shrinks for every month past the enrollment deadline.
    Flexible,
}

impl CourseKind {
    /// Classifies a course by a case-sensitive substring match on its name.
    pub fn classify(name: &str, flexible_marker: &str) -> Self {
        if name.contains(flexible_marker) {
            Self::Flexible
        } else {
            Self::Standard
        }
    }
}

/// A course record as offered for sale in the catalog.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CourseOffering {
    pub name: String,
    pub start_date: NaiveDate,
    /// The exam month. Only year and month are meaningful.
    pub end_date: NaiveDate,
    pub enrollment_deadline: NaiveDate,
    pub tuition_price: Money,
}

impl CourseOffering {
    pub fn new(
        name: impl Into<String>,
        start_date: NaiveDate,
        end_date: NaiveDate,
        enrollment_deadline: NaiveDate,
        tuition_price: Money,
    ) -> Self {
        Self {
            name: name.into(),
            start_date,
            end_date,
            enrollment_deadline,
            tuition_price,
        }
    }

    /// Checks that the course does not end before it starts.
    pub fn validate(&self) -> Result<()> {
        if self.start_date > self.end_date {
            return Err(PlanError::InvalidCourseDates {
                start: self.start_date,
                end: self.end_date,
            });
        }
        Ok(())
    }

    pub fn kind(&self, flexible_marker: &str) -> CourseKind {
        CourseKind::classify(&self.name, flexible_marker)
    }

    pub fn is_flexible(&self, flexible_marker: &str) -> bool {
        self.kind(flexible_marker) == CourseKind::Flexible
    }
}
