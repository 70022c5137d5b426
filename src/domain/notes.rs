// src/domain/notes.rs

use crate::domain::logic::DayStatus;
use chrono::NaiveDate;
use std::collections::HashMap;

pub const NOTE_SEPARATOR: &str = "; ";

/// Free-text annotation for a calendar date, independent of property.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DayNote {
    pub date: NaiveDate,
    pub text: String,
}

/// Attach each day's notes, joined in source order. Labels are untouched.
pub fn merge_notes(days: &mut [DayStatus], notes: &[DayNote]) {
    let mut by_date: HashMap<NaiveDate, Vec<&str>> = HashMap::new();
    for note in notes {
        by_date.entry(note.date).or_default().push(&note.text);
    }

    for day in days {
        day.note_text = by_date
            .get(&day.date)
            .map(|texts| texts.join(NOTE_SEPARATOR))
            .unwrap_or_default();
    }
}
