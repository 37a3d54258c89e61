//! Human-readable rendering of courses and plans.

use crate::application::catalog::ListedOffering;
use crate::domain::course::CourseOffering;
use crate::domain::money::Money;
use crate::domain::plan::PlanResult;
use crate::domain::policy::InstallmentBounds;
use chrono::NaiveDate;
use serde::Serialize;
use std::io::{self, Write};

pub const NO_PLAN_MESSAGE: &str = "No available payment months before the exam month.";

/// Formats a date as `1 July 2025`.
pub fn long_date(date: NaiveDate) -> String {
    date.format("%-d %B %Y").to_string()
}

/// Formats the exam month as `June 2026`.
pub fn exam_month(date: NaiveDate) -> String {
    date.format("%B %Y").to_string()
}

/// Machine-readable view of one calculation.
#[derive(Debug, Serialize)]
pub struct PlanReport<'a> {
    pub course: &'a CourseOffering,
    pub bounds: Option<&'a InstallmentBounds>,
    pub plan: Option<&'a PlanResult>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<&'static str>,
}

pub fn write_json<W: Write>(out: &mut W, report: &PlanReport<'_>) -> io::Result<()> {
    serde_json::to_writer_pretty(&mut *out, report)?;
    writeln!(out)
}

pub fn write_catalog<W: Write>(out: &mut W, listed: &[ListedOffering]) -> io::Result<()> {
    for course in listed {
        writeln!(
            out,
            "{} | starts {} | exam {} | {}",
            course.display_name(),
            long_date(course.offering.start_date),
            exam_month(course.offering.end_date),
            course.offering.tuition_price.rounded()
        )?;
    }
    Ok(())
}

pub fn write_course_details<W: Write>(out: &mut W, offering: &CourseOffering) -> io::Result<()> {
    writeln!(out, "Course Details")?;
    writeln!(out, "Start Date: {}", long_date(offering.start_date))?;
    writeln!(out, "Exam Month: {}", exam_month(offering.end_date))?;
    writeln!(out, "Enrollment Deadline: {}", long_date(offering.enrollment_deadline))?;
    writeln!(out, "Tuition Pricing: {}", offering.tuition_price.rounded())?;
    Ok(())
}

pub fn write_bounds<W: Write>(out: &mut W, bounds: &InstallmentBounds) -> io::Result<()> {
    writeln!(out, "Installments available: {} to {}", bounds.min, bounds.max)?;
    writeln!(out, "First payment: {}", long_date(bounds.first_payment_date))?;
    Ok(())
}

pub fn write_plan<W: Write>(out: &mut W, plan: &PlanResult) -> io::Result<()> {
    writeln!(out, "Summary")?;
    writeln!(out, "Downpayment: {}", plan.downpayment)?;
    writeln!(out, "Finance Fee (spread): {}", plan.finance_fee)?;
    if plan.late_fee > Money::ZERO {
        writeln!(out, "Late Fee: {}", plan.late_fee)?;
    }
    writeln!(
        out,
        "Monthly Payment: {} x {} months",
        plan.installment_amount, plan.num_installments
    )?;
    writeln!(out, "Total Paid: {}", plan.total_paid)?;
    writeln!(out)?;
    writeln!(out, "Payment Schedule")?;
    for entry in &plan.schedule {
        writeln!(out, "{}: {}", entry, entry.amount)?;
    }
    Ok(())
}
