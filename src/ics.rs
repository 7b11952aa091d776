// File: src/ics.rs
//! Serialization of occurrences into a calendar interchange document.
//!
//! Line endings are CRLF throughout, as RFC 5545 requires. DTSTART and
//! DTEND carry the same `VALUE=DATE` date (all-day, zero-duration). Free
//! text in SUMMARY/DESCRIPTION goes through TEXT escaping so embedded
//! commas, semicolons and newlines cannot break the property grammar.
use crate::model::date::format_ics_date;
use crate::model::expand::Occurrence;

pub const PRODID: &str = "-//CSV to ICS Converter//EN";

/// RFC 5545 3.3.11 TEXT escaping. Backslash first so the escapes
/// themselves survive.
fn escape_text(value: &str) -> String {
    value
        .replace('\\', "\\\\")
        .replace(';', "\\;")
        .replace(',', "\\,")
        .replace("\r\n", "\\n")
        .replace('\n', "\\n")
}

pub struct CalendarSerializer;

impl CalendarSerializer {
    /// Render the full document. Deterministic given identical occurrences;
    /// UID uniqueness across runs is the pipeline's concern.
    pub fn serialize(occurrences: &[Occurrence]) -> String {
        // Rough per-event size keeps reallocation down on large tables.
        let mut out = String::with_capacity(64 + occurrences.len() * 160);
        out.push_str("BEGIN:VCALENDAR\r\n");
        out.push_str("VERSION:2.0\r\n");
        out.push_str("PRODID:");
        out.push_str(PRODID);
        out.push_str("\r\n");

        for occurrence in occurrences {
            let date = format_ics_date(occurrence.date);
            out.push_str("BEGIN:VEVENT\r\n");
            out.push_str(&format!("DTSTART;VALUE=DATE:{}\r\n", date));
            out.push_str(&format!("DTEND;VALUE=DATE:{}\r\n", date));
            out.push_str(&format!("SUMMARY:{}\r\n", escape_text(&occurrence.title)));
            if let Some(note) = &occurrence.description
                && !note.is_empty()
            {
                out.push_str(&format!("DESCRIPTION:{}\r\n", escape_text(note)));
            }
            out.push_str(&format!("UID:{}\r\n", occurrence.uid));
            out.push_str("END:VEVENT\r\n");
        }

        out.push_str("END:VCALENDAR\r\n");
        out
    }
}
