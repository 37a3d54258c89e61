#![allow(dead_code)]

use chrono::{Days, NaiveDate};
use payplan::domain::course::CourseOffering;
use payplan::domain::money::Money;
use rand::Rng;
use rust_decimal::Decimal;
use std::io::{Error, Write};
use tempfile::NamedTempFile;

pub const HEADER: &str =
    "Product Name,Course Start Date,Course End Date,eCommerce Enrollment Deadline,Tuition Pricing";

pub fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

/// Writes a catalog CSV with the standard header and the given rows.
pub fn write_catalog(rows: &[&str]) -> Result<NamedTempFile, Error> {
    let mut file = NamedTempFile::new()?;
    writeln!(file, "{HEADER}")?;
    for row in rows {
        writeln!(file, "{row}")?;
    }
    file.flush()?;
    Ok(file)
}

/// A random but valid offering between 2023 and 2028.
pub fn random_offering<R: Rng>(rng: &mut R, flexible: bool) -> CourseOffering {
    let base = date(2023, 1, 1);
    let start = base + Days::new(rng.gen_range(0..1500));
    let end = start + Days::new(rng.gen_range(0..700));
    let deadline = start - Days::new(rng.gen_range(0..90));
    let tuition = Decimal::new(rng.gen_range(0..2_000_000), 2);
    let name = if flexible {
        "SQE1 Complete SQE Prep Flexible"
    } else {
        "SQE1 Complete SQE Prep"
    };
    CourseOffering::new(name, start, end, deadline, Money::new(tuition))
}

/// A random date between 2022 and 2029.
pub fn random_today<R: Rng>(rng: &mut R) -> NaiveDate {
    date(2022, 6, 1) + Days::new(rng.gen_range(0..2500))
}
