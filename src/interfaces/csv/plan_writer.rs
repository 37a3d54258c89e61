use crate::domain::plan::PlanResult;
use rust_decimal::Decimal;
use serde::Serialize;
use std::io::Write;

#[derive(Debug, Serialize)]
struct ScheduleRow {
    label: String,
    amount: Decimal,
}

/// Writes a payment schedule as `label,amount` CSV rows.
pub struct PlanWriter<W: Write> {
    writer: csv::Writer<W>,
}

impl<W: Write> PlanWriter<W> {
    pub fn new(sink: W) -> Self {
        Self {
            writer: csv::Writer::from_writer(sink),
        }
    }

    /// Writes one row per schedule line, in payment order, then flushes.
    pub fn write_plan(&mut self, plan: &PlanResult) -> csv::Result<()> {
        for entry in &plan.schedule {
            self.writer.serialize(ScheduleRow {
                label: entry.to_string(),
                amount: entry.amount.value(),
            })?;
        }
        self.writer.flush()?;
        Ok(())
    }
}
