//! Application layer orchestrating the plan calculation.
//!
//! `CatalogResolver` narrows the loaded catalog down to the courses on sale
//! and `PlanEngine` turns a selected course into a dated payment plan.

pub mod catalog;
pub mod engine;
