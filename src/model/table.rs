// File: src/model/table.rs
//! Typed in-memory representation of a parsed delimited table.
//!
//! Row 0 is the header row by convention; everything after it is data.
//! Cell values are kept verbatim (no trimming or casing) so callers see
//! exactly what the tokenizer produced.
use serde::{Deserialize, Serialize};
use std::fmt;
use strum::EnumIter;
use thiserror::Error;

/// Delimiters offered to the caller. The tokenizer itself accepts any byte;
/// this is the supported set of the configuration surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, EnumIter)]
pub enum Delimiter {
    #[default]
    Comma,
    Semicolon,
    Tab,
}

impl Delimiter {
    pub fn as_byte(&self) -> u8 {
        match self {
            Delimiter::Comma => b',',
            Delimiter::Semicolon => b';',
            Delimiter::Tab => b'\t',
        }
    }

    /// Accepts both the spelled-out name and the literal character.
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "comma" | "," => Some(Delimiter::Comma),
            "semicolon" | ";" => Some(Delimiter::Semicolon),
            "tab" | "\t" => Some(Delimiter::Tab),
            _ => None,
        }
    }
}

impl fmt::Display for Delimiter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Delimiter::Comma => write!(f, "comma"),
            Delimiter::Semicolon => write!(f, "semicolon"),
            Delimiter::Tab => write!(f, "tab"),
        }
    }
}

#[derive(Debug, Error)]
pub enum ParseError {
    #[error("input could not be tokenized: {0}")]
    Tokenizer(#[from] csv::Error),
    #[error("input contains no rows (a header row is required)")]
    Empty,
}

/// Parsed table. Created wholesale per parse, never mutated in place;
/// re-parsing replaces the whole model.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TabularModel {
    rows: Vec<Vec<String>>,
}

impl TabularModel {
    /// Tokenize `raw` into a table. Ragged rows are tolerated here; missing
    /// cells read as the empty string through [`cell`].
    pub fn parse(raw: &str, delimiter: Delimiter) -> Result<Self, ParseError> {
        let mut reader = csv::ReaderBuilder::new()
            .delimiter(delimiter.as_byte())
            .has_headers(false)
            .flexible(true)
            .from_reader(raw.as_bytes());

        let mut rows = Vec::new();
        for record in reader.records() {
            let record = record?;
            rows.push(record.iter().map(str::to_string).collect());
        }

        if rows.is_empty() {
            return Err(ParseError::Empty);
        }
        Ok(Self { rows })
    }

    pub fn headers(&self) -> &[String] {
        &self.rows[0]
    }

    pub fn header_at(&self, index: usize) -> Option<&str> {
        self.rows[0].get(index).map(String::as_str)
    }

    pub fn column_count(&self) -> usize {
        self.rows[0].len()
    }

    /// Total row count, header row included.
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Data row by absolute index. Index 0 is the header row and yields None,
    /// matching the data iteration range `[1, row_count)`.
    pub fn data_row(&self, index: usize) -> Option<&[String]> {
        if index == 0 {
            return None;
        }
        self.rows.get(index).map(Vec::as_slice)
    }

    /// Iterate data rows with their absolute index (starting at 1).
    pub fn data_rows(&self) -> impl Iterator<Item = (usize, &[String])> {
        self.rows.iter().enumerate().skip(1).map(|(i, r)| (i, r.as_slice()))
    }
}

/// Ragged-row tolerance: a cell past the end of its row reads as empty.
pub fn cell(row: &[String], index: usize) -> &str {
    row.get(index).map(String::as_str).unwrap_or("")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ragged_row_reads_empty() {
        let model = TabularModel::parse("a,b,c\n1,2\n", Delimiter::Comma).unwrap();
        let row = model.data_row(1).unwrap();
        assert_eq!(cell(row, 1), "2");
        assert_eq!(cell(row, 2), "");
    }

    #[test]
    fn test_no_normalization() {
        let model = TabularModel::parse("Name\n  Alice  \n", Delimiter::Comma).unwrap();
        assert_eq!(cell(model.data_row(1).unwrap(), 0), "  Alice  ");
    }

    #[test]
    fn test_header_row_not_data() {
        let model = TabularModel::parse("Name,Date\nAlice,1/1/2000\n", Delimiter::Comma).unwrap();
        assert!(model.data_row(0).is_none());
        assert_eq!(model.data_rows().count(), 1);
    }
}
