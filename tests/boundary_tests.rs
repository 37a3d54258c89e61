use assert_cmd::cargo_bin;
use assert_cmd::prelude::*;
use predicates::prelude::*;
use std::process::Command;

mod common;

#[test]
fn test_count_above_max_is_rejected() {
    let catalog = common::write_catalog(&["SQE1,01/09/2025,01/06/2026,15/08/2025,12000"]).unwrap();

    let mut cmd = Command::new(cargo_bin!("payplan"));
    cmd.arg(catalog.path())
        .args(["--today", "2025-06-15", "--course", "SQE1", "-n", "13"]);

    cmd.assert()
        .failure()
        .stderr(predicate::str::contains(
            "Invalid installment count 13: must be between 1 and 12",
        ));
}

#[test]
fn test_zero_count_is_rejected() {
    let catalog = common::write_catalog(&["SQE1,01/09/2025,01/06/2026,15/08/2025,12000"]).unwrap();

    let mut cmd = Command::new(cargo_bin!("payplan"));
    cmd.arg(catalog.path())
        .args(["--today", "2025-06-15", "--course", "SQE1", "-n", "0"]);

    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("Invalid installment count 0"));
}

#[test]
fn test_course_ending_before_start_is_rejected() {
    let catalog = common::write_catalog(&["Backwards,01/09/2025,01/06/2025,15/08/2025,12000"]).unwrap();

    let mut cmd = Command::new(cargo_bin!("payplan"));
    cmd.arg(catalog.path())
        .args(["--today", "2025-06-15", "--course", "Backwards"]);

    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("Invalid course dates"));
}

#[test]
fn test_discount_amount_reduces_installments() {
    let catalog = common::write_catalog(&["Cheap,01/09/2025,01/06/2026,15/08/2025,1000"]).unwrap();

    let mut cmd = Command::new(cargo_bin!("payplan"));
    cmd.arg(catalog.path()).args([
        "--today",
        "2025-06-15",
        "--course",
        "Cheap",
        "-n",
        "1",
        "--discount-amount",
        "250",
    ]);

    // (750 - 199 + 0 + 149) / 1
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("Monthly Payment: £700.00 x 1 months"));
}

#[test]
fn test_invalid_discount_percent() {
    let catalog = common::write_catalog(&["SQE1,01/09/2025,01/06/2026,15/08/2025,12000"]).unwrap();

    let mut cmd = Command::new(cargo_bin!("payplan"));
    cmd.arg(catalog.path()).args([
        "--today",
        "2025-06-15",
        "--course",
        "SQE1",
        "-n",
        "1",
        "--discount-percent",
        "120",
    ]);

    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("Invalid discount"));
}

#[test]
fn test_conflicting_discounts() {
    let mut cmd = Command::new(cargo_bin!("payplan"));
    cmd.args([
        "tests/fixtures/catalog.csv",
        "--discount-amount",
        "10",
        "--discount-percent",
        "10",
    ]);

    cmd.assert().failure();
}
