// sheet.rs
use crate::domain::notes::DayNote;
use crate::sources::models::{ManualRow, NoteRow};
use crate::sources::SourceError;
use chrono::{DateTime, NaiveDate, NaiveDateTime};
use serde::de::DeserializeOwned;

const MANUAL_COLUMNS: [&[&str]; 3] = [&["Lodge", "Property"], &["Start Date"], &["End Date"]];
const NOTE_COLUMNS: [&[&str]; 2] = [&["Date"], &["Note"]];

// Month-first before day-first: an ambiguous 06/05/2024 is the 5th of June.
const DATE_FORMATS: [&str; 6] = [
    "%Y-%m-%d",
    "%Y/%m/%d",
    "%m/%d/%Y",
    "%d/%m/%Y",
    "%d %B %Y",
    "%d %b %Y",
];

const DATETIME_FORMATS: [&str; 8] = [
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%d %H:%M",
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%dT%H:%M",
    "%m/%d/%Y %H:%M:%S",
    "%m/%d/%Y %H:%M",
    "%d/%m/%Y %H:%M:%S",
    "%d/%m/%Y %H:%M",
];

/// Rows of the manual bookings sheet. Only the document as a whole can
/// fail here; row-level problems are left for the normalizer to drop.
pub fn parse_manual_rows(body: &str) -> Result<Vec<ManualRow>, SourceError> {
    read_rows(body, &MANUAL_COLUMNS)
}

/// Day notes in sheet order. Unlike booking rows, one unreadable date
/// rejects the whole notes sheet.
pub fn parse_notes(body: &str) -> Result<Vec<DayNote>, SourceError> {
    let rows: Vec<NoteRow> = read_rows(body, &NOTE_COLUMNS)?;

    let mut notes = Vec::with_capacity(rows.len());
    for (i, row) in rows.into_iter().enumerate() {
        let Some(raw_date) = non_empty(row.date) else {
            continue;
        };
        let date = parse_sheet_date(&raw_date).ok_or_else(|| {
            // +2: header line plus one-based numbering
            SourceError::Malformed(format!("row {}: unreadable date '{raw_date}'", i + 2))
        })?;
        let Some(text) = non_empty(row.note) else {
            continue;
        };
        notes.push(DayNote { date, text });
    }

    Ok(notes)
}

/// Calendar date of a sheet cell, with any time of day dropped.
pub fn parse_sheet_date(raw: &str) -> Option<NaiveDate> {
    let raw = raw.trim();

    DATE_FORMATS
        .iter()
        .find_map(|fmt| NaiveDate::parse_from_str(raw, fmt).ok())
        .or_else(|| {
            DATETIME_FORMATS
                .iter()
                .find_map(|fmt| NaiveDateTime::parse_from_str(raw, fmt).ok())
                .map(|dt| dt.date())
        })
        .or_else(|| {
            DateTime::parse_from_rfc3339(raw)
                .ok()
                .map(|dt| dt.naive_local().date())
        })
}

pub(crate) fn non_empty(cell: Option<String>) -> Option<String> {
    cell.map(|s| s.trim().to_string()).filter(|s| !s.is_empty())
}

fn read_rows<T: DeserializeOwned>(
    body: &str,
    required: &[&[&str]],
) -> Result<Vec<T>, SourceError> {
    let mut reader = csv::ReaderBuilder::new()
        .flexible(true)
        .trim(csv::Trim::All)
        .from_reader(body.as_bytes());

    let headers = reader
        .headers()
        .map_err(|e| SourceError::Malformed(format!("CSV header error: {e}")))?
        .clone();

    for names in required {
        if !names.iter().any(|name| headers.iter().any(|h| h == *name)) {
            return Err(SourceError::Malformed(format!(
                "missing column '{}'",
                names.join("' or '")
            )));
        }
    }

    reader
        .deserialize()
        .collect::<Result<Vec<T>, _>>()
        .map_err(|e| SourceError::Malformed(format!("CSV error: {e}")))
}
