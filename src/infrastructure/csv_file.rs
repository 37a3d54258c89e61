use crate::domain::course::CourseOffering;
use crate::domain::ports::CatalogSource;
use crate::error::CatalogError;
use crate::interfaces::csv::catalog_reader::CatalogReader;
use async_trait::async_trait;
use std::path::PathBuf;
use tracing::{debug, warn};

/// A catalog backed by a CSV export of the course spreadsheet.
///
/// The file is read on every `load`. Rows with missing or malformed dates or
/// prices are logged and skipped.
#[derive(Debug, Clone)]
pub struct CsvFileCatalog {
    path: PathBuf,
}

impl CsvFileCatalog {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

#[async_trait]
impl CatalogSource for CsvFileCatalog {
    async fn load(&self) -> Result<Vec<CourseOffering>, CatalogError> {
        let bytes = tokio::fs::read(&self.path).await?;
        let mut offerings = Vec::new();
        let mut skipped = 0usize;
        for result in CatalogReader::new(bytes.as_slice()).offerings()? {
            match result {
                Ok(offering) => offerings.push(offering),
                Err(e) => {
                    skipped += 1;
                    warn!(path = %self.path.display(), error = %e, "skipping catalog row");
                }
            }
        }
        debug!(path = %self.path.display(), loaded = offerings.len(), skipped, "loaded catalog");
        Ok(offerings)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[tokio::test]
    async fn test_load_skips_bad_rows() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "Product Name,Course Start Date,Course End Date,Enrolment Deadline,Tuition Pricing").unwrap();
        writeln!(file, "SQE1,01/09/2025,01/06/2026,15/08/2025,2499").unwrap();
        writeln!(file, "SQE2,not a date,01/06/2026,15/08/2025,2499").unwrap();
        writeln!(file, "SQE3,01/09/2025,01/06/2026,15/08/2025,1999").unwrap();

        let loaded = CsvFileCatalog::new(file.path()).load().await.unwrap();
        let names: Vec<&str> = loaded.iter().map(|o| o.name.as_str()).collect();
        assert_eq!(names, vec!["SQE1", "SQE3"]);
    }

    #[tokio::test]
    async fn test_load_missing_file() {
        let result = CsvFileCatalog::new("does/not/exist.csv").load().await;
        assert!(matches!(result, Err(CatalogError::IoError(_))));
    }

    #[tokio::test]
    async fn test_load_missing_column_fails() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "Product Name,Tuition Pricing").unwrap();
        let result = CsvFileCatalog::new(file.path()).load().await;
        assert!(matches!(result, Err(CatalogError::MissingColumn(_))));
    }
}
