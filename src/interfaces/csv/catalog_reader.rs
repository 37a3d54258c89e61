use crate::domain::course::CourseOffering;
use crate::domain::money::Money;
use crate::error::CatalogError;
use chrono::{NaiveDate, NaiveDateTime};
use rust_decimal::Decimal;
use std::io::Read;
use std::str::FromStr;

pub const NAME_COLUMN: &str = "product name";
pub const START_COLUMN: &str = "course start date";
pub const END_COLUMN: &str = "course end date";
pub const PRICE_COLUMN: &str = "tuition pricing";

const DATE_FORMATS: &[&str] = &["%d/%m/%Y", "%d-%m-%Y", "%d.%m.%Y", "%Y-%m-%d", "%d %B %Y", "%d %b %Y"];
const SHORT_YEAR_FORMATS: &[&str] = &["%d/%m/%y", "%d-%m-%y", "%d.%m.%y"];
const DATETIME_FORMATS: &[&str] = &["%d/%m/%Y %H:%M:%S", "%d/%m/%Y %H:%M", "%Y-%m-%d %H:%M:%S"];

/// Parses a day-first date as found in spreadsheet exports.
///
/// Two-digit years follow chrono's `%y` pivot: 00-69 are 20xx, 70-99 are
/// 19xx. A time-of-day suffix is ignored.
pub fn parse_day_first(value: &str) -> Option<NaiveDate> {
    let value = value.trim();
    if value.is_empty() {
        return None;
    }
    let date_part = value.split_whitespace().next().unwrap_or(value);
    let parts: Vec<&str> = date_part.split(['/', '-', '.']).collect();
    if parts.len() == 3 && parts[0].len() <= 2 && parts[2].len() == 2 {
        return SHORT_YEAR_FORMATS
            .iter()
            .find_map(|format| NaiveDate::parse_from_str(date_part, format).ok());
    }

    DATE_FORMATS
        .iter()
        .find_map(|format| NaiveDate::parse_from_str(value, format).ok())
        .or_else(|| {
            DATETIME_FORMATS
                .iter()
                .find_map(|format| NaiveDateTime::parse_from_str(value, format).ok())
                .map(|datetime| datetime.date())
        })
}

/// Parses a tuition price, tolerating a pound sign and thousands separators.
pub fn parse_price(value: &str) -> Option<Decimal> {
    let cleaned: String = value
        .trim()
        .trim_start_matches('£')
        .chars()
        .filter(|c| *c != ',' && !c.is_whitespace())
        .collect();
    Decimal::from_str(&cleaned)
        .ok()
        .filter(|price| *price >= Decimal::ZERO)
}

/// Positions of the columns the engine needs, after header normalization.
#[derive(Debug, Clone)]
struct Columns {
    name: usize,
    start: usize,
    end: usize,
    deadline: usize,
    deadline_header: String,
    price: usize,
}

impl Columns {
    fn locate(headers: &csv::StringRecord) -> Result<Self, CatalogError> {
        let normalized: Vec<String> = headers.iter().map(|h| h.trim().to_lowercase()).collect();
        let position = |wanted: &str| {
            normalized
                .iter()
                .position(|h| h == wanted)
                .ok_or_else(|| CatalogError::MissingColumn(wanted.to_string()))
        };
        let deadline = normalized
            .iter()
            .position(|h| h.contains("enrol") && h.contains("deadline"))
            .ok_or_else(|| CatalogError::MissingColumn("enrollment deadline".to_string()))?;

        Ok(Self {
            name: position(NAME_COLUMN)?,
            start: position(START_COLUMN)?,
            end: position(END_COLUMN)?,
            deadline,
            deadline_header: normalized[deadline].clone(),
            price: position(PRICE_COLUMN)?,
        })
    }

    fn offering(&self, record: &csv::StringRecord) -> Result<CourseOffering, CatalogError> {
        let line = record.position().map_or(0, |p| p.line());
        let field = |index: usize| record.get(index).unwrap_or("").trim();
        let date = |index: usize, column: &str| {
            parse_day_first(field(index)).ok_or_else(|| CatalogError::InvalidDate {
                line,
                column: column.to_string(),
                value: field(index).to_string(),
            })
        };

        let start_date = date(self.start, START_COLUMN)?;
        let end_date = date(self.end, END_COLUMN)?;
        let enrollment_deadline = date(self.deadline, &self.deadline_header)?;
        let tuition_price = parse_price(field(self.price)).ok_or_else(|| CatalogError::InvalidPrice {
            line,
            value: field(self.price).to_string(),
        })?;

        Ok(CourseOffering::new(
            field(self.name),
            start_date,
            end_date,
            enrollment_deadline,
            Money::new(tuition_price),
        ))
    }
}

/// Reads course offerings from a CSV export of the catalog spreadsheet.
///
/// Header names are matched case-insensitively after trimming. The deadline
/// column is the first one mentioning both "enrol" and "deadline".
pub struct CatalogReader<R: Read> {
    reader: csv::Reader<R>,
}

impl<R: Read> CatalogReader<R> {
    /// Creates a new `CatalogReader` from any `Read` source (e.g., File, Stdin).
    pub fn new(source: R) -> Self {
        let reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .flexible(true)
            .from_reader(source);
        Self { reader }
    }

    /// Returns an iterator that lazily reads and normalizes offerings.
    ///
    /// Fails up front when a required column is missing; afterwards each row
    /// yields its own result so one bad row does not abort the load.
    pub fn offerings(
        mut self,
    ) -> Result<impl Iterator<Item = Result<CourseOffering, CatalogError>>, CatalogError> {
        let columns = Columns::locate(self.reader.headers()?)?;
        Ok(self
            .reader
            .into_records()
            .map(move |record| columns.offering(&record?)))
    }
}
