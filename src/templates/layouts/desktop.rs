use maud::{html, Markup, PreEscaped, DOCTYPE};

const FULLCALENDAR_JS: &str =
    "https://cdn.jsdelivr.net/npm/fullcalendar@6.1.15/index.global.min.js";

const PAGE_CSS: &str = r#"
body { font-family: system-ui, sans-serif; margin: 0 auto; max-width: 1100px; padding: 0 1rem 2rem; }
header { text-align: center; }
header h1 { margin-bottom: 0; }
header p { margin-top: 4px; font-size: 1.2em; }
@keyframes blink { 50% { opacity: 0; } }
.blink { animation: blink 1s infinite; color: red; font-weight: bold; font-size: 1.2em; text-align: center; margin-top: 10px; }
.today { text-align: center; margin: 20px 0; }
.today h3 { margin-bottom: 0; }
.today-status { display: inline-block; color: black; font-size: 1.2em; padding: 10px 20px; border-radius: 12px; margin-top: 8px; min-width: 260px; }
.warning { background: #fff4e5; border-left: 4px solid #e65100; padding: 8px 12px; margin: 6px 0; }
.card { margin-top: 2rem; }
.agenda { border-collapse: collapse; width: 100%; }
.agenda th, .agenda td { text-align: left; padding: 6px 10px; border-bottom: 1px solid #ddd; vertical-align: top; }
.swatch { display: inline-block; padding: 2px 8px; border-radius: 8px; color: black; white-space: nowrap; }
"#;

pub fn desktop_layout(title: &str, content: Markup) -> Markup {
    html! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta charset="utf-8";
                meta name="viewport" content="width=device-width, initial-scale=1.0";
                title { (title) }
                style { (PreEscaped(PAGE_CSS)) }
                script src=(FULLCALENDAR_JS) {}
            }
            body {
                header {
                    h1 { "🧽 Lodge Cleaning Dashboard" }
                    p { "Optimised for iPad & Mobile Use" }
                }
                (content)
            }
        }
    }
}
