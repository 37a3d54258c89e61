pub mod catalog_reader;
pub mod plan_writer;
