// src/domain/booking.rs

use crate::sources::models::{FeedEvent, ManualRow};
use crate::sources::sheet::{non_empty, parse_sheet_date};
use chrono::NaiveDate;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BookingOrigin {
    Feed,
    Manual,
}

/// One reservation or blocked span at one property, flattened from
/// whichever source it came from. Built fresh on every run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BookingRecord {
    pub property_id: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub guest_label: String,
    pub description: Option<String>,
    pub origin: BookingOrigin,
    /// Owner or maintenance block. Never counts towards check-in/out.
    pub is_blocked: bool,
}

impl BookingRecord {
    /// Creates a booking from a calendar feed event. Both dates must be
    /// present and in order; the summary decides whether it is a block.
    pub fn from_feed_event(
        property_id: &str,
        event: &FeedEvent,
        blocked_keywords: &[String],
    ) -> Result<Self, String> {
        let start_date = event.start.ok_or("Missing DTSTART")?;
        let end_date = event.end.ok_or("Missing DTEND")?;
        if end_date < start_date {
            return Err(format!("DTEND {end_date} before DTSTART {start_date}"));
        }

        let guest_label = event.summary.clone().unwrap_or_default();
        let is_blocked = is_blocked(&guest_label, blocked_keywords);

        Ok(BookingRecord {
            property_id: property_id.to_string(),
            start_date,
            end_date,
            guest_label,
            description: event.description.clone(),
            origin: BookingOrigin::Feed,
            is_blocked,
        })
    }

    /// Creates a booking from a manual sheet row. Manual entries are real
    /// guests by convention, so they are never treated as blocks.
    pub fn from_manual_row(row: &ManualRow) -> Result<Self, String> {
        let property_id = non_empty(row.lodge.clone()).ok_or("Missing or empty lodge")?;

        let parse_date = |cell: &Option<String>, what: &str| -> Result<NaiveDate, String> {
            let raw = non_empty(cell.clone()).ok_or(format!("Missing or empty {what}"))?;
            parse_sheet_date(&raw).ok_or(format!("Unreadable {what} '{raw}'"))
        };
        let start_date = parse_date(&row.start_date, "start date")?;
        let end_date = parse_date(&row.end_date, "end date")?;
        if end_date < start_date {
            return Err(format!("End date {end_date} before start date {start_date}"));
        }

        Ok(BookingRecord {
            property_id,
            start_date,
            end_date,
            guest_label: non_empty(row.guest_name.clone()).unwrap_or_default(),
            description: non_empty(row.description.clone()),
            origin: BookingOrigin::Manual,
            is_blocked: false,
        })
    }
}

/// Case-insensitive substring match against the keyword list. Whitespace
/// is ignored on both sides, since unfolding a long feed line can eat the
/// space at the fold.
pub fn is_blocked(label: &str, keywords: &[String]) -> bool {
    let label = squash(label);
    keywords
        .iter()
        .map(|k| squash(k))
        .any(|k| !k.is_empty() && label.contains(&k))
}

fn squash(text: &str) -> String {
    text.chars()
        .filter(|c| !c.is_whitespace())
        .flat_map(char::to_lowercase)
        .collect()
}
