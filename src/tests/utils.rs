use crate::app::App;
use crate::config::{PropertySource, Settings};
use crate::responses::error_to_response;
use crate::router::handle;
use crate::sources::{Fetch, SourceError};
use astra::{Body, Request};
use std::collections::HashMap;
use std::io::Read;

pub const HART_URL: &str = "https://feeds.test/hart.ics";
pub const HARE_URL: &str = "https://feeds.test/hare.ics";
pub const MANUAL_URL: &str = "https://sheets.test/manual.csv";
pub const NOTES_URL: &str = "https://sheets.test/notes.csv";

/// Serves canned bodies instead of touching the network. Unknown URLs
/// answer like a 404.
#[derive(Default)]
pub struct StubFetcher {
    responses: HashMap<String, Result<String, SourceError>>,
}

impl StubFetcher {
    pub fn with(mut self, url: &str, body: &str) -> Self {
        self.responses.insert(url.to_string(), Ok(body.to_string()));
        self
    }

    pub fn failing(mut self, url: &str, error: SourceError) -> Self {
        self.responses.insert(url.to_string(), Err(error));
        self
    }
}

impl Fetch for StubFetcher {
    fn fetch(&self, url: &str) -> Result<String, SourceError> {
        self.responses
            .get(url)
            .cloned()
            .unwrap_or_else(|| Err(SourceError::Unavailable("HTTP 404 Not Found".into())))
    }
}

/// Two lodges with feeds plus both sheets, the reference deployment.
pub fn test_settings() -> Settings {
    Settings {
        properties: vec![
            PropertySource {
                name: "Hart Lodge".into(),
                ical_url: Some(HART_URL.into()),
            },
            PropertySource {
                name: "Hare Lodge".into(),
                ical_url: Some(HARE_URL.into()),
            },
        ],
        manual_bookings_url: Some(MANUAL_URL.into()),
        notes_url: Some(NOTES_URL.into()),
        ..Settings::default()
    }
}

pub fn test_app(fetcher: StubFetcher) -> App {
    App::with_fetcher(test_settings(), fetcher)
}

/// Wrap VEVENT (start, end, summary) triples in a calendar document.
pub fn ics(events: &[(&str, &str, &str)]) -> String {
    let mut body = String::from("BEGIN:VCALENDAR\r\nVERSION:2.0\r\n");
    for (start, end, summary) in events {
        body.push_str(&format!(
            "BEGIN:VEVENT\r\nDTSTART;VALUE=DATE:{start}\r\nDTEND;VALUE=DATE:{end}\r\nSUMMARY:{summary}\r\nEND:VEVENT\r\n"
        ));
    }
    body.push_str("END:VCALENDAR\r\n");
    body
}

pub struct TestResponse {
    pub status: u16,
    pub content_type: String,
    pub body: Vec<u8>,
}

impl TestResponse {
    pub fn text(&self) -> &str {
        std::str::from_utf8(&self.body).unwrap()
    }
}

/// GET `uri` through the router, turning errors into pages the same way
/// the server loop does.
pub fn get(app: &App, uri: &str) -> TestResponse {
    let mut req = Request::new(Body::empty());
    *req.uri_mut() = uri.parse().unwrap();

    let mut resp = match handle(req, app) {
        Ok(resp) => resp,
        Err(err) => error_to_response(err),
    };

    let content_type = resp
        .headers()
        .get("Content-Type")
        .and_then(|v| v.to_str().ok())
        .unwrap_or("")
        .to_string();

    let mut body = Vec::new();
    resp.body_mut().reader().read_to_end(&mut body).unwrap();

    TestResponse {
        status: resp.status().as_u16(),
        content_type,
        body,
    }
}
