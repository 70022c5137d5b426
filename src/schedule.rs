// src/schedule.rs

use crate::app::App;
use crate::domain::booking::BookingOrigin;
use crate::domain::{build_window, merge_notes, summarize, DayStatus, Summary};
use crate::sources::{load_sources, SourceWarning};
use chrono::NaiveDate;
use serde::Serialize;

/// One day as handed to the calendar widget.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CalendarEntry {
    pub title: String,
    pub start: String,
    pub end: String,
    pub color: String,
}

impl From<&DayStatus> for CalendarEntry {
    fn from(day: &DayStatus) -> Self {
        let date = day.date.format("%Y-%m-%d").to_string();
        Self {
            title: day.title(),
            start: date.clone(),
            end: date,
            color: day.color(),
        }
    }
}

/// A full snapshot for one page load: the classified window plus whatever
/// went wrong while loading sources.
#[derive(Debug)]
pub struct Schedule {
    pub today: NaiveDate,
    pub days: Vec<DayStatus>,
    pub warnings: Vec<SourceWarning>,
}

impl Schedule {
    /// fetch -> normalize -> classify -> annotate. Always yields a complete
    /// window, even when every source failed.
    pub fn build(app: &App, today: NaiveDate) -> Self {
        let settings = &app.settings;
        let loaded = load_sources(app.fetcher.as_ref(), settings);

        let mut days = build_window(
            &loaded.bookings,
            &settings.property_names(),
            today,
            settings.window_days,
        );
        merge_notes(&mut days, &loaded.notes);

        let manual = loaded
            .bookings
            .iter()
            .filter(|b| b.origin == BookingOrigin::Manual)
            .count();
        log::info!(
            "Built {}-day schedule from {today} ({} bookings, {manual} manual, {} notes, {} warnings)",
            days.len(),
            loaded.bookings.len(),
            loaded.notes.len(),
            loaded.warnings.len()
        );

        Self {
            today,
            days,
            warnings: loaded.warnings,
        }
    }

    pub fn summary(&self) -> Option<Summary<'_>> {
        summarize(&self.days)
    }

    pub fn calendar_entries(&self) -> Vec<CalendarEntry> {
        self.days.iter().map(CalendarEntry::from).collect()
    }
}
