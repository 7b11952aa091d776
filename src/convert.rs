// File: src/convert.rs
//! The conversion pipeline: column-mapped row iteration, per-row
//! validation, date parsing, anniversary expansion and serialization.
//!
//! One call processes the entire table and returns. Rows with an empty
//! name or date cell are considered intentionally incomplete and skipped
//! without comment; rows whose date cell fails to parse are skipped and
//! reported on the outcome so the caller can point at exact rows.
use crate::ics::CalendarSerializer;
use crate::model::date::{DateFormat, DateFormatError, parse_date};
use crate::model::expand::{Occurrence, expand, title_for};
use crate::model::table::{Delimiter, ParseError, TabularModel, cell};
use chrono::Utc;
use thiserror::Error;

/// User-declared association between semantic fields and column positions.
/// Read-only snapshot consumed per conversion.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ColumnMapping {
    pub name: Option<usize>,
    pub date: Option<usize>,
    pub note: Option<usize>,
}

/// A column picked by position or by header text. Header names resolve
/// case-sensitively to the first matching column.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ColumnSelector {
    Index(usize),
    Name(String),
}

impl ColumnSelector {
    /// A purely numeric selector is a position; anything else is a header name.
    pub fn parse(text: &str) -> Self {
        match text.parse::<usize>() {
            Ok(index) => ColumnSelector::Index(index),
            Err(_) => ColumnSelector::Name(text.to_string()),
        }
    }

    pub fn resolve(&self, model: &TabularModel) -> Option<usize> {
        match self {
            ColumnSelector::Index(index) => {
                (*index < model.column_count()).then_some(*index)
            }
            ColumnSelector::Name(name) => {
                model.headers().iter().position(|h| h == name)
            }
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ConversionRequest {
    pub mapping: ColumnMapping,
    pub max_age: u32,
    pub date_format: DateFormat,
}

/// Diagnostic for a row that was dropped because its date cell did not
/// parse. Carries the offending value verbatim.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkippedRow {
    pub row: usize,
    pub value: String,
    pub reason: DateFormatError,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConversionOutcome {
    /// The serialized interchange document.
    pub document: String,
    /// Rows that produced occurrences.
    pub rows_processed: usize,
    /// Total occurrences written.
    pub events: usize,
    /// Rows dropped for unparseable dates (empty-cell rows are not listed).
    pub skipped: Vec<SkippedRow>,
}

#[derive(Debug, Error)]
pub enum ConvertError {
    #[error(transparent)]
    Parse(#[from] ParseError),
    #[error("required column mapping missing: {0}")]
    MappingMissing(&'static str),
    #[error("{field} column {index} is out of range for a table with {columns} columns")]
    MappingOutOfRange {
        field: &'static str,
        index: usize,
        columns: usize,
    },
}

/// Convert an already-parsed table.
pub fn convert(
    model: &TabularModel,
    request: &ConversionRequest,
) -> Result<ConversionOutcome, ConvertError> {
    let name_index = request
        .mapping
        .name
        .ok_or(ConvertError::MappingMissing("name"))?;
    let date_index = request
        .mapping
        .date
        .ok_or(ConvertError::MappingMissing("date"))?;

    let columns = model.column_count();
    for (field, index) in [
        ("name", Some(name_index)),
        ("date", Some(date_index)),
        ("note", request.mapping.note),
    ] {
        if let Some(index) = index
            && index >= columns
        {
            return Err(ConvertError::MappingOutOfRange {
                field,
                index,
                columns,
            });
        }
    }

    // One timestamp per run; every UID in the document shares it.
    let generated_at = Utc::now().timestamp_millis();

    let mut occurrences = Vec::new();
    let mut skipped = Vec::new();
    let mut rows_processed = 0;

    for (row_index, row) in model.data_rows() {
        let name = cell(row, name_index);
        let date_text = cell(row, date_index);
        if name.is_empty() || date_text.is_empty() {
            continue;
        }

        let base = match parse_date(date_text, request.date_format) {
            Ok(date) => date,
            Err(reason) => {
                log::warn!("row {}: skipping unparseable date: {}", row_index, reason);
                skipped.push(SkippedRow {
                    row: row_index,
                    value: date_text.to_string(),
                    reason,
                });
                continue;
            }
        };

        let note = request
            .mapping
            .note
            .map(|index| cell(row, index))
            .filter(|text| !text.is_empty())
            .map(str::to_string);

        for (age, date) in expand(base, request.max_age) {
            occurrences.push(Occurrence {
                title: title_for(name, age),
                date,
                description: note.clone(),
                uid: format!("{}-{}-{}@csvtoics", generated_at, row_index, age),
            });
        }
        rows_processed += 1;
    }

    let events = occurrences.len();
    let document = CalendarSerializer::serialize(&occurrences);
    log::info!(
        "converted {} rows into {} events ({} skipped)",
        rows_processed,
        events,
        skipped.len()
    );

    Ok(ConversionOutcome {
        document,
        rows_processed,
        events,
        skipped,
    })
}

/// Single-call entry point: tokenize and convert in one go.
pub fn convert_raw(
    raw: &str,
    delimiter: Delimiter,
    request: &ConversionRequest,
) -> Result<ConversionOutcome, ConvertError> {
    let model = TabularModel::parse(raw, delimiter)?;
    convert(&model, request)
}
