// loader.rs
use crate::config::Settings;
use crate::domain::{BookingRecord, DayNote};
use crate::sources::feed::parse_feed;
use crate::sources::sheet::{parse_manual_rows, parse_notes};
use crate::sources::{Fetch, SourceError};
use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SourceKind {
    /// Calendar feed of the named property.
    Feed(String),
    ManualBookings,
    Notes,
}

/// A source that failed and was left out of this run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceWarning {
    pub kind: SourceKind,
    pub error: SourceError,
}

impl fmt::Display for SourceWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.kind {
            SourceKind::Feed(name) => write!(f, "Failed to fetch calendar for {name}: {}", self.error),
            SourceKind::ManualBookings => {
                write!(f, "Manual bookings could not be loaded: {}", self.error)
            }
            SourceKind::Notes => write!(f, "Notes/tasks could not be loaded: {}", self.error),
        }
    }
}

#[derive(Debug, Default)]
pub struct LoadedSources {
    /// Feed bookings in property order, then manual ones. Not deduplicated.
    pub bookings: Vec<BookingRecord>,
    pub notes: Vec<DayNote>,
    pub warnings: Vec<SourceWarning>,
}

impl LoadedSources {
    fn warn(&mut self, kind: SourceKind, error: SourceError) {
        let warning = SourceWarning { kind, error };
        log::warn!("⚠️ {warning}");
        self.warnings.push(warning);
    }
}

/// Fetch and normalize every configured source, one after another.
/// Nothing here fails the run: a broken source becomes a warning and
/// contributes no records.
pub fn load_sources(fetcher: &dyn Fetch, settings: &Settings) -> LoadedSources {
    let mut loaded = LoadedSources::default();

    for property in &settings.properties {
        let Some(url) = &property.ical_url else {
            continue;
        };
        let name = property.name.trim();

        match fetcher.fetch(url).and_then(|body| parse_feed(&body)) {
            Ok(events) => {
                let before = loaded.bookings.len();
                for event in &events {
                    match BookingRecord::from_feed_event(name, event, &settings.blocked_keywords) {
                        Ok(booking) => loaded.bookings.push(booking),
                        Err(reason) => log::debug!("Skipping event for {name}: {reason}"),
                    }
                }
                log::debug!(
                    "{name}: {} bookings from {} events",
                    loaded.bookings.len() - before,
                    events.len()
                );
            }
            Err(e) => loaded.warn(SourceKind::Feed(name.to_string()), e),
        }
    }

    if let Some(url) = &settings.manual_bookings_url {
        match fetcher.fetch(url).and_then(|body| parse_manual_rows(&body)) {
            Ok(rows) => {
                for (i, row) in rows.iter().enumerate() {
                    match BookingRecord::from_manual_row(row) {
                        Ok(booking) => loaded.bookings.push(booking),
                        Err(reason) => log::debug!("Dropping manual row {}: {reason}", i + 2),
                    }
                }
            }
            Err(e) => loaded.warn(SourceKind::ManualBookings, e),
        }
    }

    if let Some(url) = &settings.notes_url {
        match fetcher.fetch(url).and_then(|body| parse_notes(&body)) {
            Ok(notes) => loaded.notes = notes,
            Err(e) => loaded.warn(SourceKind::Notes, e),
        }
    }

    loaded
}
