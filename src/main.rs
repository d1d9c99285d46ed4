use crate::config::Config;
use crate::messages::MessageLog;
use crate::router::{handle, AppState};
use crate::service::HouseService;
use astra::Server;

mod config;
mod domain;
mod errors;
mod messages;
mod responses;
mod router;
mod service;
mod templates;

#[cfg(test)]
mod tests;

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    // 1️⃣ Resolve configuration (env vars with local-dev defaults)
    let config = match Config::from_env() {
        Ok(config) => config,
        Err(e) => {
            log::error!("❌ Bad configuration: {e}");
            std::process::exit(1);
        }
    };

    // 2️⃣ Wire the shared collaborators
    let messages = MessageLog::new();
    let service = match HouseService::new(config.api_base_url.clone(), messages.clone()) {
        Ok(service) => service,
        Err(e) => {
            log::error!("❌ HTTP client init failed: {e}");
            std::process::exit(1);
        }
    };
    let state = AppState { service, messages };

    // 3️⃣ Start the server
    log::info!("Listings API at {}", config.api_base_url);
    log::info!("Starting server at http://{}", config.bind_addr);

    let server = Server::bind(config.bind_addr).max_workers(8);

    let result = server.serve(move |req, _info| match handle(req, &state) {
        Ok(resp) => resp,
        Err(err) => responses::html_error_response(err),
    });

    if let Err(e) = result {
        log::error!("Server ended with error: {e}");
    }

    log::info!("Server shut down cleanly.");
}
