//! Calendar date in the school's `"DD/MM/YYYY"` convention.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::{DomainError, DomainResult};
use crate::value_object::ValueObject;

/// A validated school date. Construction goes through [`SchoolDate::parse`],
/// so a held value is always a real calendar date.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SchoolDate(NaiveDate);

impl SchoolDate {
    pub fn parse(s: &str) -> DomainResult<Self> {
        let date = NaiveDate::parse_from_str(s, "%d/%m/%Y").map_err(|_| {
            DomainError::validation(format!("invalid date (expected DD/MM/YYYY): {s}"))
        })?;
        Ok(Self(date))
    }

    pub fn as_naive(&self) -> NaiveDate {
        self.0
    }
}

impl core::fmt::Display for SchoolDate {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{}", self.0.format("%d/%m/%Y"))
    }
}

impl ValueObject for SchoolDate {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn round_trips_its_format() {
        let date = SchoolDate::parse("29/02/2024").unwrap();
        assert_eq!(date.to_string(), "29/02/2024");
    }

    #[test]
    fn rejects_bad_input() {
        for bad in ["2024-02-29", "31/02/2024", "1/13/2024", "yesterday"] {
            assert!(SchoolDate::parse(bad).is_err(), "{bad} should not parse");
        }
    }
}
