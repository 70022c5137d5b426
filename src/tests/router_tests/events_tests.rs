use crate::sources::SourceError;
use crate::tests::utils::{get, ics, test_app, StubFetcher, HARE_URL, HART_URL, MANUAL_URL};
use serde_json::Value;

fn entries(body: &str) -> Vec<Value> {
    let value: Value = serde_json::from_str(body).unwrap();
    value.as_array().unwrap().clone()
}

fn entry_for<'a>(entries: &'a [Value], date: &str) -> &'a Value {
    entries.iter().find(|e| e["start"] == date).unwrap()
}

#[test]
fn events_cover_the_whole_window() {
    let app = test_app(StubFetcher::default());

    let resp = get(&app, "/events.json?today=2024-06-01");
    assert_eq!(resp.status, 200);
    assert_eq!(resp.content_type, "application/json");

    let entries = entries(resp.text());
    assert_eq!(entries.len(), 60);
    assert_eq!(entries[0]["start"], "2024-06-01");
    assert_eq!(entries[0]["end"], "2024-06-01");
    assert_eq!(entries[59]["start"], "2024-07-30");
}

#[test]
fn every_source_down_means_every_day_free() {
    let fetcher = StubFetcher::default()
        .failing(HART_URL, SourceError::Unavailable("connection refused".into()))
        .failing(HARE_URL, SourceError::Malformed("no VCALENDAR found".into()));
    let app = test_app(fetcher);

    let entries = entries(get(&app, "/events.json?today=2024-06-01").text());
    assert_eq!(entries.len(), 60);
    for entry in &entries {
        assert_eq!(entry["color"], "#a1d99b");
        assert!(entry["title"].as_str().unwrap().starts_with("🔷 Free"));
    }
}

#[test]
fn checkout_next_to_same_day_stay_is_check_in_only() {
    let fetcher = StubFetcher::default()
        .with(HART_URL, &ics(&[("20240601", "20240605", "Reserved")]))
        .with(HARE_URL, &ics(&[("20240605", "20240605", "Reserved")]));
    let app = test_app(fetcher);

    let entries = entries(get(&app, "/events.json?today=2024-06-01").text());
    let day = entry_for(&entries, "2024-06-05");
    assert_eq!(
        day["title"],
        "🟢 Check-in Only Hart Lodge: Out, Hare Lodge: Out & In"
    );
    assert_eq!(day["color"], "#4caf50");

    // arrival day of the Hart stay
    assert_eq!(entry_for(&entries, "2024-06-01")["title"], "🟢 Check-in Only Hart Lodge: In");
}

#[test]
fn blocked_feed_events_are_ignored() {
    let fetcher = StubFetcher::default().with(
        HART_URL,
        &ics(&[("20240602", "20240604", "Airbnb (Not available)")]),
    );
    let app = test_app(fetcher);

    let entries = entries(get(&app, "/events.json?today=2024-06-01").text());
    assert_eq!(entry_for(&entries, "2024-06-02")["title"], "🔷 Free ");
    assert_eq!(entry_for(&entries, "2024-06-04")["title"], "🔷 Free ");
}

#[test]
fn manual_bookings_merge_with_feeds() {
    let fetcher = StubFetcher::default()
        .with(HART_URL, &ics(&[("20240601", "20240603", "Reserved")]))
        .with(
            MANUAL_URL,
            "Lodge,Start Date,End Date,Guest Name\nHare Lodge,2024-05-28,2024-06-03,Blocked friend\n",
        );
    let app = test_app(fetcher);

    let entries = entries(get(&app, "/events.json?today=2024-06-01").text());
    // manual rows are never blocked, whatever the guest name says
    let day = entry_for(&entries, "2024-06-03");
    assert_eq!(day["title"], "🔶 Double Checkout Only Hart Lodge: Out, Hare Lodge: Out");
    assert_eq!(day["color"], "#e65100");
}

#[test]
fn broken_manual_sheet_keeps_feed_bookings() {
    let fetcher = StubFetcher::default()
        .with(HART_URL, &ics(&[("20240601", "20240603", "Reserved")]))
        .with(MANUAL_URL, "<html>not a sheet</html>");
    let app = test_app(fetcher);

    let entries = entries(get(&app, "/events.json?today=2024-06-01").text());
    assert_eq!(entry_for(&entries, "2024-06-03")["title"], "🟡 Single Changeover Hart Lodge: Out");
}
