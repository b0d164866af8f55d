//! Date/time values as KML writes them.
//!
//! KML time fields accept `xsd:dateTime`, `xsd:date`, `xsd:gYearMonth` and
//! `xsd:gYear`. Each form keeps its precision so it is written back the same
//! way it was read.

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, FixedOffset, NaiveDate, NaiveDateTime, SecondsFormat};
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::error::ScalarError;

const LOCAL_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%.f";
const DATE_FORMAT: &str = "%Y-%m-%d";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum KmlDateTime {
    /// `1997`
    Year(i32),
    /// `1997-07`
    YearMonth(i32, u32),
    /// `1997-07-16`
    Date(NaiveDate),
    /// `1997-07-16T07:30:15`, no zone designator.
    Local(NaiveDateTime),
    /// `1997-07-16T07:30:15Z` or with a numeric offset.
    Zoned(DateTime<FixedOffset>),
}

impl KmlDateTime {
    pub fn parse(text: &str) -> Result<Self, ScalarError> {
        let s = text.trim();
        if let Ok(zoned) = DateTime::parse_from_rfc3339(s) {
            return Ok(Self::Zoned(zoned));
        }
        if let Ok(local) = NaiveDateTime::parse_from_str(s, LOCAL_FORMAT) {
            return Ok(Self::Local(local));
        }
        if let Ok(date) = NaiveDate::parse_from_str(s, DATE_FORMAT) {
            return Ok(Self::Date(date));
        }
        if let Some((year, month)) = s.split_once('-') {
            if let (Some(year), Some(month)) = (parse_year(year), parse_month(month)) {
                return Ok(Self::YearMonth(year, month));
            }
        } else if let Some(year) = parse_year(s) {
            return Ok(Self::Year(year));
        }
        Err(ScalarError::new("dateTime", text))
    }
}

fn parse_year(text: &str) -> Option<i32> {
    if text.len() == 4 && text.bytes().all(|b| b.is_ascii_digit()) {
        text.parse().ok()
    } else {
        None
    }
}

fn parse_month(text: &str) -> Option<u32> {
    if text.len() != 2 {
        return None;
    }
    text.parse().ok().filter(|m| (1..=12).contains(m))
}

impl fmt::Display for KmlDateTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Year(year) => write!(f, "{year:04}"),
            Self::YearMonth(year, month) => write!(f, "{year:04}-{month:02}"),
            Self::Date(date) => write!(f, "{}", date.format(DATE_FORMAT)),
            Self::Local(local) => write!(f, "{}", local.format(LOCAL_FORMAT)),
            Self::Zoned(zoned) => f.write_str(&zoned.to_rfc3339_opts(SecondsFormat::AutoSi, true)),
        }
    }
}

impl FromStr for KmlDateTime {
    type Err = ScalarError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}
