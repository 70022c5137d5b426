use chrono::NaiveDate;
use serde::Deserialize;

// VCALENDAR
//  └── VEVENT
//       ├── DTSTART      -> start (date part only)
//       ├── DTEND        -> end   (date part only)
//       ├── SUMMARY
//       └── DESCRIPTION

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FeedEvent {
    pub start: Option<NaiveDate>,
    pub end: Option<NaiveDate>,
    pub summary: Option<String>,
    pub description: Option<String>,
}

/// One row of the manual bookings sheet. Cells are kept as text so a bad
/// date drops the row instead of failing the whole sheet.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct ManualRow {
    #[serde(rename = "Lodge", alias = "Property")]
    pub lodge: Option<String>,
    #[serde(rename = "Start Date")]
    pub start_date: Option<String>,
    #[serde(rename = "End Date")]
    pub end_date: Option<String>,
    #[serde(rename = "Guest Name")]
    pub guest_name: Option<String>,
    #[serde(rename = "Description")]
    pub description: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct NoteRow {
    #[serde(rename = "Date")]
    pub date: Option<String>,
    #[serde(rename = "Note")]
    pub note: Option<String>,
}
