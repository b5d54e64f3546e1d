use crate::app_state::AppState;
use crate::config::load_settings;
use crate::db::connection::init_db;
use crate::router::handle;
use astra::Server;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

mod app_state;
mod auth;
mod config;
mod dashboard;
mod db;
mod domain;
mod errors;
mod providers;
mod responses;
mod router;
mod templates;
mod tours;


fn main() {
    let settings = match load_settings() {
        Ok(settings) => settings,
        Err(e) => {
            eprintln!("{e}");
            std::process::exit(1);
        }
    };

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&settings.log_filter));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let app = match AppState::from_settings(&settings) {
        Ok(app) => app,
        Err(e) => {
            error!(error = %e, "startup failed");
            std::process::exit(1);
        }
    };

    if let Err(e) = init_db(&app.db) {
        error!(error = %e, "database initialization failed");
        std::process::exit(1);
    }

    info!(addr = %settings.bind_addr, tours_api = %settings.tours_api_base, "starting server");

    let server = Server::bind(&settings.bind_addr).max_workers(settings.max_workers);

    let result = server.serve(move |req, _info| match handle(req, &app) {
        Ok(resp) => resp,
        Err(err) => {
            if err.status() >= 500 {
                error!(error = %err, "request failed");
            }
            responses::error_to_response(err)
        }
    });

    if let Err(e) = result {
        error!(error = %e, "server ended with error");
    }

    info!("server shut down");
}
