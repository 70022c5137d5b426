// src/domain/alerts.rs

use crate::domain::logic::DayStatus;

/// What the banners at the top of the page show.
#[derive(Debug)]
pub struct Summary<'a> {
    pub today_status: &'a DayStatus,
    /// Future days with the most severe label, in date order.
    pub upcoming_alerts: Vec<&'a DayStatus>,
}

/// The first entry of the window is today. `None` only for an empty window,
/// which validated settings never produce.
pub fn summarize(days: &[DayStatus]) -> Option<Summary<'_>> {
    let today_status = days.first()?;

    let upcoming_alerts = days
        .iter()
        .filter(|d| d.date > today_status.date && d.label.is_alert())
        .collect();

    Some(Summary {
        today_status,
        upcoming_alerts,
    })
}
