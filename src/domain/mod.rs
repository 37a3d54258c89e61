//! Domain types and the plan rules.
//!
//! Everything here is a pure function of its inputs. The current date is
//! always passed in, never read from the clock.

pub mod calendar;
pub mod course;
pub mod money;
pub mod plan;
pub mod policy;
pub mod ports;
