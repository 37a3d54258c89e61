//! Adapters between the engine and the outside world: catalog input and
//! plan output.

pub mod csv;
pub mod report;
