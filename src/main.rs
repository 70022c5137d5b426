use crate::app::App;
use crate::config::Settings;
use crate::responses::error_to_response;
use crate::router::handle;
use astra::Server;

mod app;
mod config;
mod domain;
mod errors;
mod responses;
mod router;
mod schedule;
mod sources;
mod spreadsheets;
mod templates;

#[cfg(test)]
mod tests;

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    // 1️⃣ Load settings (LODGE_CONFIG, ./lodge.toml or defaults)
    let settings = match Settings::load() {
        Ok(settings) => settings,
        Err(e) => {
            log::error!("❌ {e}");
            std::process::exit(1);
        }
    };

    // 2️⃣ Build the shared fetcher + source cache
    let addr = settings.bind_addr;
    let max_workers = settings.max_workers;
    let app = match App::new(settings) {
        Ok(app) => app,
        Err(e) => {
            log::error!("❌ HTTP client setup failed: {e}");
            std::process::exit(1);
        }
    };

    // 3️⃣ Start the server
    log::info!(
        "Starting server at http://{addr} ({} properties, {}-day window)",
        app.settings.properties.len(),
        app.settings.window_days
    );

    let server = Server::bind(&addr).max_workers(max_workers);

    // 4️⃣ Serve requests, passing the app into closure
    let result = server.serve(move |req, _info| match handle(req, &app) {
        Ok(resp) => resp,
        Err(err) => error_to_response(err),
    });

    if let Err(e) = result {
        log::error!("Server ended with error: {e}");
    }

    log::info!("Server shut down cleanly.");
}
