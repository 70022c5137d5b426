// src/tests/router_tests/dashboard_tests.rs

use crate::sources::SourceError;
use crate::tests::utils::{get, ics, test_app, StubFetcher, HARE_URL, HART_URL, NOTES_URL};
use astra::{Body, Request};
use http::Method;

fn turnaround_week() -> StubFetcher {
    StubFetcher::default()
        .with(
            HART_URL,
            &ics(&[
                ("20240601", "20240605", "Reserved"),
                ("20240606", "20240610", "Reserved"),
                ("20240610", "20240612", "Reserved"),
            ]),
        )
        .with(
            HARE_URL,
            &ics(&[
                ("20240605", "20240605", "Reserved"),
                ("20240606", "20240610", "Reserved"),
                ("20240610", "20240615", "Reserved"),
            ]),
        )
}

#[test]
fn dashboard_shows_today_banner() {
    let app = test_app(turnaround_week());

    let resp = get(&app, "/?today=2024-06-05");
    assert_eq!(resp.status, 200);
    assert!(resp.content_type.starts_with("text/html"));

    let body = resp.text();
    assert!(body.contains("📅 Today: Wednesday, 05 June 2024"));
    // both out, only Hare back in: falls through to Check-in Only
    assert!(body.contains("🟢 Check-in Only Hart Lodge: Out, Hare Lodge: Out &amp; In"));
    assert!(body.contains("background-color:#4caf50;"));
}

#[test]
fn dashboard_alerts_on_upcoming_double_turnaround() {
    let app = test_app(turnaround_week());

    let body = get(&app, "/?today=2024-06-05").text().to_string();
    assert!(body.contains("ALERT: Double Turnaround Days Coming!"));
    assert!(body.contains("Upcoming: Monday, 10 June 2024"));
}

#[test]
fn todays_turnaround_is_not_an_upcoming_alert() {
    let app = test_app(turnaround_week());

    let body = get(&app, "/?today=2024-06-10").text().to_string();
    assert!(body.contains("🔴 Turnaround in BOTH"));
    assert!(!body.contains("ALERT: Double Turnaround Days Coming!"));
}

#[test]
fn failed_feed_is_a_warning_not_an_error() {
    let fetcher = turnaround_week().failing(
        HART_URL,
        SourceError::Unavailable("HTTP 500 Internal Server Error".into()),
    );
    let app = test_app(fetcher);

    let resp = get(&app, "/?today=2024-06-05");
    assert_eq!(resp.status, 200);

    let body = resp.text();
    assert!(body.contains("Failed to fetch calendar for Hart Lodge"));
    // Hare's own same-day stay still shows
    assert!(body.contains("Hare Lodge: Out &amp; In"));
    assert!(!body.contains("Hart Lodge: Out"));
}

#[test]
fn notes_are_shown_on_their_day() {
    let fetcher = turnaround_week().with(
        NOTES_URL,
        "Date,Note\n2024-06-05,Hot tub service\n2024-06-05,Log delivery\n",
    );
    let app = test_app(fetcher);

    let body = get(&app, "/?today=2024-06-05").text().to_string();
    assert!(body.contains("📝 Notes: Hot tub service; Log delivery"));
}

#[test]
fn bad_today_is_rejected() {
    let app = test_app(StubFetcher::default());

    let resp = get(&app, "/?today=05/06/2024");
    assert_eq!(resp.status, 400);
    assert!(resp.text().contains("expected YYYY-MM-DD"));
}

#[test]
fn unknown_routes_are_not_found() {
    let app = test_app(StubFetcher::default());
    assert_eq!(get(&app, "/admin").status, 404);

    let mut req = Request::new(Body::empty());
    *req.method_mut() = Method::POST;
    *req.uri_mut() = "/".parse().unwrap();
    assert!(matches!(
        crate::router::handle(req, &app),
        Err(crate::errors::ServerError::NotFound)
    ));
}
