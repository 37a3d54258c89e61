use crate::config::PlanConfig;
use crate::domain::course::{CourseKind, CourseOffering};
use crate::domain::plan::{PlanRequest, PlanResult, PlanTerms, compute_plan};
use crate::domain::policy::{CoursePlanPolicyBox, InstallmentBounds, policy_for};
use crate::error::{ConfigError, PlanError, Result};
use chrono::NaiveDate;
use tracing::debug;

/// The main entry point for payment-plan calculations.
///
/// `PlanEngine` holds only configuration. Every call is a pure function of its
/// arguments, so one engine can be shared freely between threads.
#[derive(Debug, Clone, Default)]
pub struct PlanEngine {
    config: PlanConfig,
}

impl PlanEngine {
    /// Creates a new `PlanEngine` with the given fee and policy settings.
    ///
    /// Fails when the config is out of range; see [`PlanConfig::validate`].
    pub fn new(config: PlanConfig) -> std::result::Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self { config })
    }

    pub fn config(&self) -> &PlanConfig {
        &self.config
    }

    pub fn classify(&self, offering: &CourseOffering) -> CourseKind {
        offering.kind(&self.config.flexible_marker)
    }

    fn policy(&self, offering: &CourseOffering) -> CoursePlanPolicyBox {
        policy_for(self.classify(offering), self.config.max_installments)
    }

    /// Computes the installment counts on offer and the first payment date.
    ///
    /// Fails with [`PlanError::InvalidCourseDates`] for a course ending before
    /// it starts and [`PlanError::NoInstallmentsAvailable`] when no count is
    /// on offer.
    pub fn installment_bounds(
        &self,
        offering: &CourseOffering,
        today: NaiveDate,
    ) -> Result<InstallmentBounds> {
        offering.validate()?;
        let bounds = self.policy(offering).installment_bounds(offering, today)?;
        debug!(
            course = %offering.name,
            kind = ?self.classify(offering),
            %today,
            max = bounds.max,
            first_payment = %bounds.first_payment_date,
            "computed installment bounds"
        );
        Ok(bounds)
    }

    /// Builds the full plan for the requested installment count.
    ///
    /// The count must lie within [`PlanEngine::installment_bounds`]; it is
    /// never silently truncated.
    pub fn build_plan(&self, request: &PlanRequest) -> Result<PlanResult> {
        let offering = &request.offering;
        let bounds = self.installment_bounds(offering, request.today)?;
        if !bounds.contains(request.num_installments) {
            return Err(PlanError::InvalidInstallmentCount {
                requested: request.num_installments,
                max: Some(bounds.max),
            });
        }

        let total_cost = match &request.discount {
            Some(discount) => discount.apply(offering.tuition_price)?,
            None => offering.tuition_price,
        };

        let terms = PlanTerms {
            first_payment_date: bounds.first_payment_date,
            start_date: offering.start_date,
            end_date: offering.end_date,
            total_cost,
            num_installments: request.num_installments,
            today: request.today,
        };
        let plan = compute_plan(&terms, &self.config.fees)?;
        debug!(
            course = %offering.name,
            %total_cost,
            downpayment = %plan.downpayment,
            late_fee = %plan.late_fee,
            installment = %plan.installment_amount,
            count = plan.num_installments,
            "built payment plan"
        );
        Ok(plan)
    }
}
