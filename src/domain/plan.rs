use super::calendar::{add_months, month_start};
use super::course::CourseOffering;
use super::money::{Discount, Money};
use crate::config::FeeSchedule;
use crate::error::{PlanError, Result};
use chrono::NaiveDate;
use serde::Serialize;
use std::fmt;

/// A single plan calculation requested by the caller.
#[derive(Debug, Clone, PartialEq)]
pub struct PlanRequest {
    pub offering: CourseOffering,
    pub today: NaiveDate,
    pub num_installments: i32,
    pub discount: Option<Discount>,
}

impl PlanRequest {
    pub fn new(offering: CourseOffering, today: NaiveDate, num_installments: i32) -> Self {
        Self {
            offering,
            today,
            num_installments,
            discount: None,
        }
    }

    pub fn with_discount(mut self, discount: Discount) -> Self {
        self.discount = Some(discount);
        self
    }
}

/// What a schedule line pays for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "date", rename_all = "snake_case")]
pub enum ScheduleLabel {
    Downpayment,
    LateFee,
    Installment(NaiveDate),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ScheduleEntry {
    pub label: ScheduleLabel,
    pub amount: Money,
}

impl ScheduleEntry {
    pub fn date(&self) -> Option<NaiveDate> {
        match self.label {
            ScheduleLabel::Installment(date) => Some(date),
            _ => None,
        }
    }
}

impl fmt::Display for ScheduleEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.label {
            ScheduleLabel::Downpayment => write!(f, "Immediate Downpayment"),
            ScheduleLabel::LateFee => write!(f, "+£{} Late Fee", self.amount.value().normalize()),
            ScheduleLabel::Installment(date) => write!(f, "{}", date.format("%-d %B %Y")),
        }
    }
}

/// The computed payment plan.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PlanResult {
    pub downpayment: Money,
    pub late_fee: Money,
    pub finance_fee: Money,
    pub installment_amount: Money,
    pub num_installments: u32,
    pub first_payment_date: NaiveDate,
    /// May hold fewer dated lines than `num_installments`: installments that
    /// would fall after the exam month are not emitted.
    pub schedule: Vec<ScheduleEntry>,
    pub total_paid: Money,
}

impl PlanResult {
    /// Dated installment lines only.
    pub fn installments(&self) -> impl Iterator<Item = &ScheduleEntry> {
        self.schedule
            .iter()
            .filter(|entry| matches!(entry.label, ScheduleLabel::Installment(_)))
    }
}

/// Resolved inputs for the fee and schedule calculation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlanTerms {
    pub first_payment_date: NaiveDate,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    /// Tuition after any discount.
    pub total_cost: Money,
    pub num_installments: i32,
    pub today: NaiveDate,
}

/// Computes fees, the per-installment amount and the dated schedule.
///
/// The down-payment steps up once `today` reaches the 1st of the start
/// month. The late fee applies when `today` is strictly after the start date.
/// The finance fee and the late fee are folded into the balance spread over
/// the installments.
pub fn compute_plan(terms: &PlanTerms, fees: &FeeSchedule) -> Result<PlanResult> {
    let count = u32::try_from(terms.num_installments)
        .ok()
        .filter(|count| *count >= 1)
        .ok_or(PlanError::InvalidInstallmentCount {
            requested: terms.num_installments,
            max: None,
        })?;

    let downpayment = if terms.today >= month_start(terms.start_date) {
        fees.started_downpayment
    } else {
        fees.downpayment
    };
    let late_fee = if terms.today > terms.start_date {
        fees.late_fee
    } else {
        Money::ZERO
    };
    let finance_fee = fees.finance_fee;

    let remaining_balance = terms.total_cost - downpayment + late_fee;
    let installment_amount = (remaining_balance + finance_fee).split(count);

    let mut schedule = vec![ScheduleEntry {
        label: ScheduleLabel::Downpayment,
        amount: downpayment.rounded(),
    }];
    if !late_fee.is_zero() {
        schedule.push(ScheduleEntry {
            label: ScheduleLabel::LateFee,
            amount: late_fee.rounded(),
        });
    }

    let exam_month = month_start(terms.end_date);
    for i in 0..terms.num_installments {
        let due = add_months(terms.first_payment_date, i)?;
        if due > exam_month {
            break;
        }
        schedule.push(ScheduleEntry {
            label: ScheduleLabel::Installment(due),
            amount: installment_amount,
        });
    }

    let total_paid = (downpayment + late_fee + installment_amount * count).rounded();

    Ok(PlanResult {
        downpayment: downpayment.rounded(),
        late_fee: late_fee.rounded(),
        finance_fee: finance_fee.rounded(),
        installment_amount,
        num_installments: count,
        first_payment_date: terms.first_payment_date,
        schedule,
        total_paid,
    })
}
