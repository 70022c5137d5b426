// feed.rs
use crate::sources::models::FeedEvent;
use crate::sources::SourceError;
use chrono::NaiveDate;
use ical::parser::ical::component::IcalEvent;

/// Parse an iCalendar document into its VEVENTs.
///
/// A body holding no VCALENDAR at all (an HTML login page, an empty
/// response) is treated as malformed rather than as an empty calendar.
pub fn parse_feed(body: &str) -> Result<Vec<FeedEvent>, SourceError> {
    let reader = ical::IcalParser::new(body.as_bytes());

    let mut calendars = 0;
    let mut events = Vec::new();

    for calendar_result in reader {
        let calendar = calendar_result
            .map_err(|e| SourceError::Malformed(format!("ICS parse error: {e}")))?;
        calendars += 1;
        events.extend(calendar.events.iter().map(parse_event));
    }

    if calendars == 0 {
        return Err(SourceError::Malformed("no VCALENDAR found".into()));
    }

    Ok(events)
}

fn parse_event(event: &IcalEvent) -> FeedEvent {
    let mut feed_event = FeedEvent::default();

    for property in &event.properties {
        match property.name.as_str() {
            "DTSTART" => {
                feed_event.start = property.value.as_deref().and_then(date_part);
            }
            "DTEND" => {
                feed_event.end = property.value.as_deref().and_then(date_part);
            }
            "SUMMARY" => {
                feed_event.summary.clone_from(&property.value);
            }
            "DESCRIPTION" => {
                feed_event.description.clone_from(&property.value);
            }
            _ => {}
        }
    }

    feed_event
}

/// Calendar date of a DATE or DATE-TIME value. The time of day and any
/// zone are dropped, so `20240605T230000Z` is the 5th.
fn date_part(value: &str) -> Option<NaiveDate> {
    let value = value.trim();
    let date = value.get(..8)?;
    let rest = value.get(8..)?;
    if !(rest.is_empty() || rest.starts_with('T')) {
        return None;
    }
    NaiveDate::parse_from_str(date, "%Y%m%d").ok()
}
