use actix_web::{web, App, HttpServer};
use dotenv::dotenv;
use env_logger::Env;
use log::{error, info};

use crate::{config::AppConfig, state::AppState, utils::check_storage_root};

mod config;
mod errors;
mod models;
mod routes;
mod state;
mod storage;
mod utils;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    dotenv().ok();
    env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();

    let config = AppConfig::from_env().map_err(|e| {
        error!("Failed to load configuration: {}", e);
        e
    })?;

    check_storage_root(&config);

    let host = config.host.clone();
    let port = config.port;
    info!(
        "Starting magazine API on http://{}:{}{}...",
        host, port, config.route_prefix
    );

    let state = web::Data::new(AppState::new(config));

    HttpServer::new(move || {
        let state = state.clone();

        App::new()
            .wrap(actix_web::middleware::Logger::default())
            .app_data(state.clone())
            .configure(|cfg| routes::configure(cfg, &state.config))
    })
    .bind((host.as_str(), port))?
    .run()
    .await
}
