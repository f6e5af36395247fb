//! Parsing of customer supplied delivery dates
use super::error::ValidationError;
use chrono::{NaiveDate, NaiveDateTime};

const DATE_FORMAT: &str = "%Y-%m-%d";
const DATETIME_FORMATS: [&str; 3] = ["%Y-%m-%d %H:%M:%S", "%Y-%m-%dT%H:%M:%S", "%Y-%m-%d %H:%M"];

/// A candidate delivery date, keeping the precision it was entered with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum DeliveryDate {
    Date(NaiveDate),
    DateTime(NaiveDateTime),
}

impl DeliveryDate {
    /// Parse a checkout value. Blank input is `Ok(None)`, the field is optional.
    pub fn parse(raw: &str) -> Result<Option<Self>, ValidationError> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Ok(None);
        }

        if let Ok(date) = NaiveDate::parse_from_str(trimmed, DATE_FORMAT) {
            return Ok(Some(DeliveryDate::Date(date)));
        }
        DATETIME_FORMATS
            .iter()
            .find_map(|fmt| NaiveDateTime::parse_from_str(trimmed, fmt).ok())
            .map(|dt| Some(DeliveryDate::DateTime(dt)))
            .ok_or_else(|| ValidationError::InvalidDate(trimmed.to_string()))
    }
    pub fn date(&self) -> NaiveDate {
        match self {
            DeliveryDate::Date(date) => *date,
            DeliveryDate::DateTime(dt) => dt.date(),
        }
    }
    pub fn has_time(&self) -> bool {
        matches!(self, DeliveryDate::DateTime(_))
    }
    /// Past check at the precision the candidate carries. A date-only value
    /// equal to today is not in the past.
    pub fn is_past(&self, now: NaiveDateTime) -> bool {
        match self {
            DeliveryDate::Date(date) => *date < now.date(),
            DeliveryDate::DateTime(dt) => *dt <= now,
        }
    }
}

/// One validation call's worth of input
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeliveryRequest {
    pub candidate: Option<DeliveryDate>,
    pub now: NaiveDateTime,
}

impl DeliveryRequest {
    pub fn new(raw: Option<&str>, now: NaiveDateTime) -> Result<Self, ValidationError> {
        let candidate = match raw {
            Some(raw) => DeliveryDate::parse(raw)?,
            None => None,
        };
        Ok(Self { candidate, now })
    }
}
