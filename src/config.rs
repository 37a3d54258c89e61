//! Tunable constants for the plan rules.
//!
//! Every field has a default matching the published pricing, so an empty
//! JSON object (or no config file at all) yields the standard behaviour.

use crate::domain::money::Money;
use crate::error::ConfigError;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Ceiling for `max_installments`; configs may lower the cap, never raise it.
pub const INSTALLMENT_LIMIT: i32 = 12;

/// Substring in a course name that marks the flexible course family.
pub const FLEXIBLE_MARKER: &str = "Complete SQE Prep Flexible";

/// Flat fees charged on top of tuition.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FeeSchedule {
    /// Down-payment before the course start month.
    pub downpayment: Money,
    /// Down-payment once the course start month has begun.
    pub started_downpayment: Money,
    /// Charged when enrolling after the course start date.
    pub late_fee: Money,
    /// Financing fee, spread across the installments.
    pub finance_fee: Money,
}

impl Default for FeeSchedule {
    fn default() -> Self {
        Self {
            downpayment: Money::new(dec!(199)),
            started_downpayment: Money::new(dec!(500)),
            late_fee: Money::new(dec!(149)),
            finance_fee: Money::new(dec!(149)),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlanConfig {
    pub fees: FeeSchedule,
    /// Upper bound on installments for any course.
    pub max_installments: i32,
    pub flexible_marker: String,
    /// Days after the enrollment deadline a course stays on sale.
    pub enrollment_grace_days: u32,
}

impl Default for PlanConfig {
    fn default() -> Self {
        Self {
            fees: FeeSchedule::default(),
            max_installments: INSTALLMENT_LIMIT,
            flexible_marker: FLEXIBLE_MARKER.to_string(),
            enrollment_grace_days: 14,
        }
    }
}

impl FeeSchedule {
    fn validate(&self) -> Result<(), ConfigError> {
        let fees = [
            ("downpayment", self.downpayment),
            ("started_downpayment", self.started_downpayment),
            ("late_fee", self.late_fee),
            ("finance_fee", self.finance_fee),
        ];
        match fees.into_iter().find(|(_, fee)| *fee < Money::ZERO) {
            Some((name, fee)) => Err(ConfigError::NegativeFee {
                name,
                value: fee.value(),
            }),
            None => Ok(()),
        }
    }
}

impl PlanConfig {
    /// Loads and validates a config from a JSON file. Missing fields fall
    /// back to defaults.
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let raw = std::fs::read_to_string(path)?;
        let config: Self = serde_json::from_str(&raw)?;
        config.validate()?;
        Ok(config)
    }

    /// Checks that the cap lies in `1..=INSTALLMENT_LIMIT` and that no fee is
    /// negative.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(1..=INSTALLMENT_LIMIT).contains(&self.max_installments) {
            return Err(ConfigError::InvalidMaxInstallments {
                value: self.max_installments,
                limit: INSTALLMENT_LIMIT,
            });
        }
        self.fees.validate()
    }
}
