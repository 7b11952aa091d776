// File: src/model/date.rs
//! Date parsing for the three supported format families.
//!
//! A date cell is split on `/`, `-` or `.` into exactly three numeric
//! components; the selected family fixes their order. Impossible calendar
//! dates (Feb 30, month 13, ...) are rejected rather than normalized.
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;
use strum::EnumIter;
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, EnumIter)]
pub enum DateFormat {
    /// day / month / year
    #[default]
    Dmy,
    /// month / day / year
    Mdy,
    /// year / month / day
    Ymd,
}

impl DateFormat {
    pub fn from_name(name: &str) -> Option<Self> {
        match name.to_ascii_lowercase().as_str() {
            "dmy" => Some(DateFormat::Dmy),
            "mdy" => Some(DateFormat::Mdy),
            "ymd" => Some(DateFormat::Ymd),
            _ => None,
        }
    }
}

impl fmt::Display for DateFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DateFormat::Dmy => write!(f, "DD/MM/YYYY"),
            DateFormat::Mdy => write!(f, "MM/DD/YYYY"),
            DateFormat::Ymd => write!(f, "YYYY/MM/DD"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DateFormatError {
    #[error("'{text}': expected 3 components separated by '/', '-' or '.', found {found}")]
    ComponentCount { text: String, found: usize },
    #[error("'{text}': component '{component}' is not a number")]
    NonNumeric { text: String, component: String },
    #[error("'{text}' is not a valid calendar date")]
    InvalidDate { text: String },
}

/// Parse `text` under the given format family.
pub fn parse_date(text: &str, format: DateFormat) -> Result<NaiveDate, DateFormatError> {
    let parts: Vec<&str> = text.split(['/', '-', '.']).collect();
    if parts.len() != 3 {
        return Err(DateFormatError::ComponentCount {
            text: text.to_string(),
            found: parts.len(),
        });
    }

    let mut numbers = [0i32; 3];
    for (slot, part) in numbers.iter_mut().zip(&parts) {
        *slot = part
            .trim()
            .parse::<i32>()
            .map_err(|_| DateFormatError::NonNumeric {
                text: text.to_string(),
                component: part.to_string(),
            })?;
    }

    let (day, month, year) = match format {
        DateFormat::Dmy => (numbers[0], numbers[1], numbers[2]),
        DateFormat::Mdy => (numbers[1], numbers[0], numbers[2]),
        DateFormat::Ymd => (numbers[2], numbers[1], numbers[0]),
    };

    if month < 1 || day < 1 {
        return Err(DateFormatError::InvalidDate {
            text: text.to_string(),
        });
    }

    NaiveDate::from_ymd_opt(year, month as u32, day as u32).ok_or_else(|| {
        DateFormatError::InvalidDate {
            text: text.to_string(),
        }
    })
}

/// `YYYYMMDD`, zero-padded, as the interchange format expects.
pub fn format_ics_date(date: NaiveDate) -> String {
    date.format("%Y%m%d").to_string()
}

/// Canonical display form of a date under a format family ('/' separated,
/// zero-padded). Round-trips with [`parse_date`] for canonical input.
pub fn format_for_display(date: NaiveDate, format: DateFormat) -> String {
    match format {
        DateFormat::Dmy => date.format("%d/%m/%Y").to_string(),
        DateFormat::Mdy => date.format("%m/%d/%Y").to_string(),
        DateFormat::Ymd => date.format("%Y/%m/%d").to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_separators_are_interchangeable() {
        for text in ["15/03/1990", "15-03-1990", "15.03.1990"] {
            let date = parse_date(text, DateFormat::Dmy).unwrap();
            assert_eq!(date, NaiveDate::from_ymd_opt(1990, 3, 15).unwrap());
        }
    }

    #[test]
    fn test_component_order_per_family() {
        let dmy = parse_date("01/02/2000", DateFormat::Dmy).unwrap();
        let mdy = parse_date("01/02/2000", DateFormat::Mdy).unwrap();
        assert_eq!(dmy, NaiveDate::from_ymd_opt(2000, 2, 1).unwrap());
        assert_eq!(mdy, NaiveDate::from_ymd_opt(2000, 1, 2).unwrap());
        let ymd = parse_date("2000/02/01", DateFormat::Ymd).unwrap();
        assert_eq!(ymd, NaiveDate::from_ymd_opt(2000, 2, 1).unwrap());
    }

    #[test]
    fn test_impossible_dates_rejected() {
        assert!(matches!(
            parse_date("30/02/2001", DateFormat::Dmy),
            Err(DateFormatError::InvalidDate { .. })
        ));
        assert!(matches!(
            parse_date("01/13/2001", DateFormat::Dmy),
            Err(DateFormatError::InvalidDate { .. })
        ));
    }

    #[test]
    fn test_display_roundtrip() {
        for (text, fmt) in [
            ("15/03/1990", DateFormat::Dmy),
            ("03/15/1990", DateFormat::Mdy),
            ("1990/03/15", DateFormat::Ymd),
        ] {
            let date = parse_date(text, fmt).unwrap();
            assert_eq!(format_for_display(date, fmt), text);
        }
    }
}
