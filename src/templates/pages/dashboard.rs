use crate::domain::Summary;
use crate::schedule::Schedule;
use crate::templates::{card, desktop_layout, swatch};
use chrono::NaiveDate;
use maud::{html, Markup, PreEscaped};

const LONG_DATE: &str = "%A, %d %B %Y";

const CALENDAR_INIT_JS: &str = r#"
document.addEventListener('DOMContentLoaded', function () {
  var el = document.getElementById('cleaning-calendar');
  if (!el || typeof FullCalendar === 'undefined') { return; }
  var calendar = new FullCalendar.Calendar(el, {
    initialView: 'listWeek',
    initialDate: el.dataset.today,
    height: 650,
    headerToolbar: {
      left: 'prev,today,next',
      center: 'title',
      right: 'dayGridMonth,timeGridWeek,listWeek'
    },
    events: el.dataset.events
  });
  calendar.render();
});
"#;

pub fn dashboard_page(schedule: &Schedule) -> Markup {
    let today_param = schedule.today.format("%Y-%m-%d").to_string();

    desktop_layout(
        "Lodge Cleaning Schedule",
        html! {
            main {
                @for warning in &schedule.warnings {
                    div class="warning" { "⚠️ " (warning.to_string()) }
                }

                @if let Some(summary) = schedule.summary() {
                    (today_banner(schedule.today, &summary))
                    (alert_banner(&summary))
                }

                div
                    id="cleaning-calendar"
                    data-today=(today_param)
                    data-events=(format!("/events.json?today={today_param}"))
                {}
                script { (PreEscaped(CALENDAR_INIT_JS)) }

                (card(&format!("Next {} days", schedule.days.len()), agenda_table(schedule)))

                p {
                    a href=(format!("/schedule.xlsx?today={today_param}")) { "Download as spreadsheet" }
                }
            }
        },
    )
}

fn today_banner(today: NaiveDate, summary: &Summary) -> Markup {
    let status = summary.today_status;

    html! {
        div class="today" {
            h3 { "📅 Today: " (today.format(LONG_DATE).to_string()) }
            div class="today-status" style=(format!("background-color:{};", status.color())) {
                (status.title())
            }
        }
    }
}

fn alert_banner(summary: &Summary) -> Markup {
    let upcoming = summary
        .upcoming_alerts
        .iter()
        .map(|day| day.date.format(LONG_DATE).to_string())
        .collect::<Vec<_>>()
        .join(", ");

    html! {
        @if !summary.upcoming_alerts.is_empty() {
            div class="blink" {
                "⚠️ ALERT: Double Turnaround Days Coming!"
                br;
                span style="font-size:0.9em;" { "Upcoming: " (upcoming) }
            }
        }
    }
}

fn agenda_table(schedule: &Schedule) -> Markup {
    html! {
        table class="agenda" {
            thead {
                tr {
                    th { "Date" }
                    th { "Status" }
                    th { "Changeovers" }
                    th { "Notes" }
                }
            }
            tbody {
                @for day in &schedule.days {
                    tr data-severity=(day.label.severity()) {
                        td { (day.date.format("%a %d %b").to_string()) }
                        td { (swatch(&day.label.to_string(), &day.color())) }
                        td { (day.changeover_detail.join(", ")) }
                        td { (day.note_text) }
                    }
                }
            }
        }
    }
}
