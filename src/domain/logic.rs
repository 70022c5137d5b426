// src/domain/logic.rs

use crate::domain::booking::BookingRecord;
use crate::domain::status::StatusLabel;
use chrono::NaiveDate;
use std::collections::HashSet;

/// Per-property check-out/check-in presence for one day, in property order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DayFlags {
    pub checkout: Vec<bool>,
    pub checkin: Vec<bool>,
}

impl DayFlags {
    fn checkouts(&self) -> usize {
        self.checkout.iter().filter(|&&f| f).count()
    }

    fn checkins(&self) -> usize {
        self.checkin.iter().filter(|&&f| f).count()
    }

    fn every_checkout(&self) -> bool {
        self.checkout.iter().all(|&f| f)
    }

    fn every_checkin(&self) -> bool {
        self.checkin.iter().all(|&f| f)
    }
}

type Rule = (fn(&DayFlags) -> bool, StatusLabel);

fn turnaround_everywhere(f: &DayFlags) -> bool {
    f.every_checkout() && f.every_checkin()
}

fn checkouts_everywhere_no_checkin(f: &DayFlags) -> bool {
    f.every_checkout() && f.checkins() == 0
}

fn one_out_one_in(f: &DayFlags) -> bool {
    f.checkouts() == 1 && f.checkins() == 1
}

fn one_out_none_in(f: &DayFlags) -> bool {
    f.checkouts() == 1 && f.checkins() == 0
}

fn any_checkin(f: &DayFlags) -> bool {
    f.checkins() > 0
}

/// Evaluated top-down, first match wins. The two Single Changeover rules
/// are distinct predicates; one out with two in is Check-in Only.
const LADDER: [Rule; 5] = [
    (turnaround_everywhere, StatusLabel::TurnaroundBoth),
    (checkouts_everywhere_no_checkin, StatusLabel::DoubleCheckoutOnly),
    (one_out_one_in, StatusLabel::SingleChangeover),
    (one_out_none_in, StatusLabel::SingleChangeover),
    (any_checkin, StatusLabel::CheckInOnly),
];

/// Maps one day's flags to its label. Anything the ladder does not catch
/// is a free day.
pub fn derive_day_label(flags: &DayFlags) -> StatusLabel {
    LADDER
        .iter()
        .find(|(matches, _)| matches(flags))
        .map(|(_, label)| *label)
        .unwrap_or(StatusLabel::Free)
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DayStatus {
    pub date: NaiveDate,
    pub checkout_flags: Vec<bool>,
    pub checkin_flags: Vec<bool>,
    pub label: StatusLabel,
    /// "Hart Lodge: Out & In", one entry per property with activity.
    pub changeover_detail: Vec<String>,
    pub note_text: String,
}

impl DayStatus {
    pub fn title(&self) -> String {
        let mut title = format!("{} {}", self.label, self.changeover_detail.join(", "));
        if !self.note_text.is_empty() {
            title.push_str(" | 📝 Notes: ");
            title.push_str(&self.note_text);
        }
        title
    }

    pub fn color(&self) -> String {
        self.label.color()
    }
}

/// Start and end dates of every non-blocked booking, keyed by property.
struct BoundaryIndex<'a> {
    ends: HashSet<(&'a str, NaiveDate)>,
    starts: HashSet<(&'a str, NaiveDate)>,
}

impl<'a> BoundaryIndex<'a> {
    fn new(bookings: &'a [BookingRecord]) -> Self {
        let mut ends = HashSet::new();
        let mut starts = HashSet::new();

        for booking in bookings.iter().filter(|b| !b.is_blocked) {
            ends.insert((booking.property_id.as_str(), booking.end_date));
            starts.insert((booking.property_id.as_str(), booking.start_date));
        }

        Self { ends, starts }
    }

    fn classify(&self, date: NaiveDate, properties: &[String]) -> DayStatus {
        let mut flags = DayFlags {
            checkout: Vec::with_capacity(properties.len()),
            checkin: Vec::with_capacity(properties.len()),
        };
        let mut changeover_detail = Vec::new();

        for property in properties {
            let out = self.ends.contains(&(property.as_str(), date));
            let inn = self.starts.contains(&(property.as_str(), date));
            flags.checkout.push(out);
            flags.checkin.push(inn);

            let moves = match (out, inn) {
                (true, true) => "Out & In",
                (true, false) => "Out",
                (false, true) => "In",
                (false, false) => continue,
            };
            changeover_detail.push(format!("{property}: {moves}"));
        }

        let label = derive_day_label(&flags);

        DayStatus {
            date,
            checkout_flags: flags.checkout,
            checkin_flags: flags.checkin,
            label,
            changeover_detail,
            note_text: String::new(),
        }
    }
}

/// One DayStatus for each of `window_days` consecutive dates from `today`.
/// Bookings only matter through their boundary dates, so a stay running
/// past either edge of the window counts only on the edge dates inside it.
pub fn build_window(
    bookings: &[BookingRecord],
    properties: &[String],
    today: NaiveDate,
    window_days: usize,
) -> Vec<DayStatus> {
    let index = BoundaryIndex::new(bookings);

    today
        .iter_days()
        .take(window_days)
        .map(|date| index.classify(date, properties))
        .collect()
}
