use crate::app::App;
use crate::errors::ServerError;
use crate::responses::{html_response, json_response, ResultResp};
use crate::schedule::Schedule;
use crate::spreadsheets::export_schedule_xlsx;
use crate::templates;
use astra::Request;
use chrono::{Local, NaiveDate};
use std::collections::HashMap;

pub fn handle(req: Request, app: &App) -> ResultResp {
    let method = req.method().as_str();
    let path = req.uri().path();
    log::debug!("{method} {path}");

    match (method, path) {
        ("GET", "/") => {
            let schedule = Schedule::build(app, requested_today(&req)?);
            html_response(templates::pages::dashboard_page(&schedule))
        }
        ("GET", "/events.json") => {
            let schedule = Schedule::build(app, requested_today(&req)?);
            json_response(&schedule.calendar_entries())
        }
        ("GET", "/schedule.xlsx") => {
            let schedule = Schedule::build(app, requested_today(&req)?);
            export_schedule_xlsx(&schedule)
        }
        _ => Err(ServerError::NotFound),
    }
}

/// `?today=YYYY-MM-DD` anchors the window; otherwise it starts at the
/// server's local date.
fn requested_today(req: &Request) -> Result<NaiveDate, ServerError> {
    match parse_query(req).get("today") {
        Some(raw) => NaiveDate::parse_from_str(raw, "%Y-%m-%d")
            .map_err(|_| ServerError::BadRequest(format!("invalid date '{raw}', expected YYYY-MM-DD"))),
        None => Ok(Local::now().date_naive()),
    }
}

fn parse_query(req: &Request) -> HashMap<String, String> {
    let mut map = HashMap::new();

    if let Some(q) = req.uri().query() {
        for pair in q.split('&') {
            let mut parts = pair.splitn(2, '=');
            if let (Some(k), Some(v)) = (parts.next(), parts.next()) {
                map.insert(k.to_string(), v.to_string());
            }
        }
    }

    map
}
