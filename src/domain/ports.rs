use super::course::CourseOffering;
use crate::error::CatalogError;
use async_trait::async_trait;

/// Supplies normalized course records.
///
/// Implementations own parsing and validation of their raw format; rows that
/// cannot be normalized are dropped before they reach the engine.
#[async_trait]
pub trait CatalogSource: Send + Sync {
    async fn load(&self) -> Result<Vec<CourseOffering>, CatalogError>;
}

pub type CatalogSourceBox = Box<dyn CatalogSource>;
