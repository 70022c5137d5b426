use maud::{html, Markup};

pub mod error;

pub use error::error_page;

pub fn card(title: &str, body: Markup) -> Markup {
    html! {
        section class="card" {
            h2 { (title) }
            div class="card-body" {
                (body)
            }
        }
    }
}

/// Label text on its status color.
pub fn swatch(text: &str, color: &str) -> Markup {
    html! {
        span class="swatch" style=(format!("background-color:{color};")) { (text) }
    }
}
