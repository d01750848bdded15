#[macro_use]
extern crate log;
extern crate pretty_env_logger;

use actix_web::middleware::Logger;
use actix_web::{App, HttpServer};
use campus_food::auth::session_middleware;
use campus_food::config::AppConfig;
use campus_food::{api, AppState};
use dotenvy::dotenv;
use std::io::{Error, ErrorKind};

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    if let Err(e) = dotenv() {
        eprintln!("Failed to load .env file: {}", e);
    }

    // Setup logging
    if std::env::var("RUST_LOG").is_err() {
        std::env::set_var("RUST_LOG", "info");
    }
    pretty_env_logger::init();

    let config = AppConfig::from_env().map_err(|e| {
        error!("Invalid configuration: {}", e);
        Error::new(ErrorKind::InvalidInput, e)
    })?;

    info!("Initializing database connection pool...");
    let state = AppState::new(&config).map_err(|e| {
        error!("Unable to initialise application state: {}", e);
        Error::new(ErrorKind::Other, e)
    })?;

    let session_key = config.session_key();
    let cookie_secure = config.cookie_secure;

    info!("Starting server at http://{}:{}", config.host, config.port);

    HttpServer::new(move || {
        App::new()
            .wrap(session_middleware(session_key.clone(), cookie_secure))
            .wrap(Logger::default())
            .configure(|cfg| api::configure(cfg, &state))
    })
    .bind((config.host.as_str(), config.port))?
    .run()
    .await
}
