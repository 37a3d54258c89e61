use crate::domain::course::CourseOffering;
use crate::domain::ports::CatalogSource;
use crate::error::CatalogError;
use async_trait::async_trait;
use std::sync::Arc;

/// A catalog held in memory.
///
/// Cloning shares the same records. Useful for tests and for embedding the
/// engine behind a catalog that was loaded elsewhere.
#[derive(Debug, Default, Clone)]
pub struct InMemoryCatalog {
    offerings: Arc<Vec<CourseOffering>>,
}

impl InMemoryCatalog {
    /// Creates a catalog over the given records, kept in order.
    pub fn new(offerings: Vec<CourseOffering>) -> Self {
        Self {
            offerings: Arc::new(offerings),
        }
    }
}

#[async_trait]
impl CatalogSource for InMemoryCatalog {
    async fn load(&self) -> Result<Vec<CourseOffering>, CatalogError> {
        Ok(self.offerings.as_ref().clone())
    }
}
