//! Installment eligibility rules for each course family.

use super::calendar::{add_months, month_start, months_between};
use super::course::{CourseKind, CourseOffering};
use crate::error::{PlanError, Result};
use chrono::NaiveDate;
use serde::Serialize;

/// The range of installment counts a course can be paid over.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct InstallmentBounds {
    pub min: i32,
    pub max: i32,
    pub first_payment_date: NaiveDate,
}

impl InstallmentBounds {
    pub fn contains(&self, count: i32) -> bool {
        (self.min..=self.max).contains(&count)
    }
}

/// Decides when installments start and how many a course allows.
pub trait CoursePlanPolicy: Send + Sync {
    /// Date of the first monthly installment, always the 1st of a month.
    fn first_payment_date(&self, offering: &CourseOffering, today: NaiveDate) -> Result<NaiveDate>;

    /// Largest installment count on offer. May be below 1.
    fn max_installments(
        &self,
        offering: &CourseOffering,
        today: NaiveDate,
        first_payment: NaiveDate,
    ) -> Result<i32>;

    /// Computes `[1, max]` and the first payment date.
    ///
    /// Returns [`PlanError::NoInstallmentsAvailable`] when `max < 1`.
    fn installment_bounds(
        &self,
        offering: &CourseOffering,
        today: NaiveDate,
    ) -> Result<InstallmentBounds> {
        let first_payment_date = self.first_payment_date(offering, today)?;
        let max = self.max_installments(offering, today, first_payment_date)?;
        if max < 1 {
            return Err(PlanError::NoInstallmentsAvailable);
        }
        Ok(InstallmentBounds {
            min: 1,
            max,
            first_payment_date,
        })
    }
}

pub type CoursePlanPolicyBox = Box<dyn CoursePlanPolicy>;

/// Returns the policy for a course family, capped at `cap` installments.
pub fn policy_for(kind: CourseKind, cap: i32) -> CoursePlanPolicyBox {
    match kind {
        CourseKind::Standard => Box::new(StandardPolicy { cap }),
        CourseKind::Flexible => Box::new(FlexiblePolicy { cap }),
    }
}

/// Installments run monthly up to and including the exam month.
///
/// Payments start the month after enrollment, but never earlier than
/// `cap - 1` months before the exam month.
#[derive(Debug, Clone, Copy)]
pub struct StandardPolicy {
    pub cap: i32,
}

impl StandardPolicy {
    pub fn earliest_allowed(&self, end_date: NaiveDate) -> Result<NaiveDate> {
        add_months(end_date, 1i32.saturating_sub(self.cap))
    }
}

impl CoursePlanPolicy for StandardPolicy {
    fn first_payment_date(&self, offering: &CourseOffering, today: NaiveDate) -> Result<NaiveDate> {
        let next_month = add_months(today, 1)?;
        let earliest_allowed = self.earliest_allowed(offering.end_date)?;
        Ok(next_month.max(earliest_allowed))
    }

    fn max_installments(
        &self,
        offering: &CourseOffering,
        _today: NaiveDate,
        first_payment: NaiveDate,
    ) -> Result<i32> {
        // Inclusive of both the first payment month and the exam month.
        let months_until_exam = months_between(first_payment, offering.end_date) + 1;
        Ok(months_until_exam.min(self.cap).max(0))
    }
}

/// Installments start with the course; the cap drops by one for every
/// month elapsed after the enrollment deadline month, down to 1.
#[derive(Debug, Clone, Copy)]
pub struct FlexiblePolicy {
    pub cap: i32,
}

impl FlexiblePolicy {
    /// First month in which the late-commitment penalty applies.
    pub fn penalty_start(&self, enrollment_deadline: NaiveDate) -> Result<NaiveDate> {
        add_months(enrollment_deadline, 1)
    }

    pub fn months_since_penalty(&self, enrollment_deadline: NaiveDate, today: NaiveDate) -> Result<i32> {
        let penalty_start = self.penalty_start(enrollment_deadline)?;
        Ok(months_between(penalty_start, today).max(0))
    }
}

impl CoursePlanPolicy for FlexiblePolicy {
    fn first_payment_date(&self, offering: &CourseOffering, today: NaiveDate) -> Result<NaiveDate> {
        let start_month = month_start(offering.start_date);
        if today < start_month {
            Ok(start_month)
        } else {
            add_months(today, 1)
        }
    }

    fn max_installments(
        &self,
        offering: &CourseOffering,
        today: NaiveDate,
        _first_payment: NaiveDate,
    ) -> Result<i32> {
        let elapsed = self.months_since_penalty(offering.enrollment_deadline, today)?;
        Ok(self.cap.saturating_sub(elapsed).max(1))
    }
}
