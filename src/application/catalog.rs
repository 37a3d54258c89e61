use crate::domain::course::CourseOffering;
use crate::domain::ports::CatalogSourceBox;
use crate::error::CatalogError;
use chrono::{Days, NaiveDate};
use tracing::debug;

/// Suffix appended to courses past their deadline but still on sale.
pub const RECENTLY_CLOSED_SUFFIX: &str = " (Recently Closed)";

/// A course that is still on sale at a given date.
#[derive(Debug, Clone, PartialEq)]
pub struct ListedOffering {
    pub offering: CourseOffering,
    /// The enrollment deadline has passed but the grace period has not.
    pub recently_closed: bool,
}

impl ListedOffering {
    pub fn display_name(&self) -> String {
        if self.recently_closed {
            format!("{}{}", self.offering.name, RECENTLY_CLOSED_SUFFIX)
        } else {
            self.offering.name.clone()
        }
    }
}

/// Loads the catalog and narrows it to the courses on sale.
pub struct CatalogResolver {
    source: CatalogSourceBox,
    grace_days: u32,
}

impl CatalogResolver {
    /// Creates a resolver over `source`, keeping courses on sale for
    /// `grace_days` after their enrollment deadline.
    pub fn new(source: CatalogSourceBox, grace_days: u32) -> Self {
        Self { source, grace_days }
    }

    /// Courses whose enrollment deadline is at most `grace_days` in the past,
    /// in catalog order.
    pub async fn open_offerings(&self, today: NaiveDate) -> Result<Vec<ListedOffering>, CatalogError> {
        let cutoff = today
            .checked_sub_days(Days::new(u64::from(self.grace_days)))
            .unwrap_or(NaiveDate::MIN);

        let offerings = self.source.load().await?;
        let total = offerings.len();
        let listed: Vec<ListedOffering> = offerings
            .into_iter()
            .filter(|offering| offering.enrollment_deadline >= cutoff)
            .map(|offering| ListedOffering {
                recently_closed: offering.enrollment_deadline < today,
                offering,
            })
            .collect();

        debug!(%today, %cutoff, total, open = listed.len(), "resolved open offerings");
        Ok(listed)
    }

    /// Finds an open course by its name, with or without the
    /// "(Recently Closed)" tag. The first match wins.
    pub async fn select(&self, today: NaiveDate, name: &str) -> Result<CourseOffering, CatalogError> {
        let name = name.trim();
        self.open_offerings(today)
            .await?
            .into_iter()
            .find(|listed| listed.offering.name == name || listed.display_name() == name)
            .map(|listed| listed.offering)
            .ok_or_else(|| CatalogError::CourseNotFound(name.to_string()))
    }
}
