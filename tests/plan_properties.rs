use chrono::{Datelike, Days};
use payplan::application::engine::PlanEngine;
use payplan::domain::calendar::{add_months, month_start};
use payplan::domain::course::CourseOffering;
use payplan::domain::money::Money;
use payplan::domain::plan::PlanRequest;
use payplan::error::PlanError;
use rand::SeedableRng;
use rand::rngs::StdRng;
use rust_decimal_macros::dec;

mod common;
use common::{date, random_offering, random_today};

const CASES: usize = 500;

#[test]
fn test_every_offered_count_builds_a_consistent_plan() {
    let engine = PlanEngine::default();
    let mut rng = StdRng::seed_from_u64(7);

    for case in 0..CASES {
        let offering = random_offering(&mut rng, case % 2 == 0);
        let today = random_today(&mut rng);
        let bounds = match engine.installment_bounds(&offering, today) {
            Ok(bounds) => bounds,
            Err(PlanError::NoInstallmentsAvailable) => continue,
            Err(e) => panic!("unexpected error for {offering:?} at {today}: {e}"),
        };
        assert!(bounds.max >= 1 && bounds.max <= 12);
        assert_eq!(bounds.first_payment_date.day(), 1);

        for count in bounds.min..=bounds.max {
            let plan = engine
                .build_plan(&PlanRequest::new(offering.clone(), today, count))
                .unwrap();
            assert!(!plan.schedule.is_empty());
            assert_eq!(
                plan.total_paid,
                plan.downpayment + plan.late_fee + plan.installment_amount * plan.num_installments
            );
            let dated = plan.installments().count();
            assert!(dated <= count as usize);
            for entry in plan.installments() {
                let due = entry.date().unwrap();
                assert!(due <= month_start(offering.end_date));
                assert!(due >= bounds.first_payment_date);
            }
        }

        let over = engine.build_plan(&PlanRequest::new(offering.clone(), today, bounds.max + 1));
        assert!(matches!(
            over,
            Err(PlanError::InvalidInstallmentCount { requested, .. }) if requested == bounds.max + 1
        ));
    }
}

#[test]
fn test_flexible_cap_shrinks_monthly_and_never_below_one() {
    let engine = PlanEngine::default();
    let mut rng = StdRng::seed_from_u64(11);

    for _ in 0..50 {
        let offering = random_offering(&mut rng, true);
        let mut previous = i32::MAX;
        for month in 0..30 {
            let today = add_months(offering.enrollment_deadline, month).unwrap() + Days::new(14);
            let max = engine.installment_bounds(&offering, today).unwrap().max;
            assert!(max >= 1);
            assert!(max <= previous, "cap grew at month {month} for {offering:?}");
            previous = max;
        }
        assert_eq!(previous, 1);
    }
}

#[test]
fn test_downpayment_is_a_step_at_the_start_month() {
    let engine = PlanEngine::default();
    let offering = CourseOffering::new(
        "SQE1 Complete SQE Prep Flexible",
        date(2025, 9, 17),
        date(2026, 9, 1),
        date(2025, 9, 1),
        Money::new(dec!(5000)),
    );

    let mut today = date(2025, 3, 1);
    while today < date(2026, 3, 1) {
        let plan = engine
            .build_plan(&PlanRequest::new(offering.clone(), today, 1))
            .unwrap();
        let expected = if today >= date(2025, 9, 1) {
            dec!(500)
        } else {
            dec!(199)
        };
        assert_eq!(plan.downpayment, Money::new(expected), "at {today}");
        let late = if today > date(2025, 9, 17) { dec!(149) } else { dec!(0) };
        assert_eq!(plan.late_fee, Money::new(late), "at {today}");
        today = today + Days::new(1);
    }
}

#[test]
fn test_build_plan_is_idempotent() {
    let engine = PlanEngine::default();
    let mut rng = StdRng::seed_from_u64(42);

    for case in 0..100 {
        let offering = random_offering(&mut rng, case % 3 == 0);
        let today = random_today(&mut rng);
        let Ok(bounds) = engine.installment_bounds(&offering, today) else {
            continue;
        };
        let request = PlanRequest::new(offering, today, bounds.max);
        let first = engine.build_plan(&request).unwrap();
        let second = engine.build_plan(&request).unwrap();
        assert_eq!(first, second);
        assert_eq!(
            serde_json::to_string(&first).unwrap(),
            serde_json::to_string(&second).unwrap()
        );
    }
}
