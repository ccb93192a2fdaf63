mod api_models;
mod app_state;
mod checkups;
mod configurations;
mod handlers;
mod model;
mod routes;
mod search;
mod traits;

use actix_cors::Cors;
use actix_web::{App, HttpServer, middleware::Logger, web};
use anyhow::Context;
use app_state::AppState;
use log::{error, info};
use tokio::sync::RwLock;

use configurations::system::Config;
use routes::configure_routes;

#[actix_web::main]
async fn main() -> Result<(), std::io::Error> {
    // Load configuration first
    let config_path: String =
        std::env::var("CONFIG_PATH").unwrap_or_else(|_| "./config.json".to_string());
    let config: Config = match Config::load_from_file(&config_path) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Failed to load configuration: {}", e);
            std::process::exit(1);
        }
    };

    // Validate configuration
    if let Err(e) = config.validate() {
        eprintln!("Configuration validation failed: {}", e);
        std::process::exit(1);
    }

    // Initialize logger with config level
    env_logger::Builder::from_default_env()
        .filter_level(match config.logging.level.as_str() {
            "trace" => log::LevelFilter::Trace,
            "debug" => log::LevelFilter::Debug,
            "info" => log::LevelFilter::Info,
            "warn" => log::LevelFilter::Warn,
            "error" => log::LevelFilter::Error,
            _ => log::LevelFilter::Info,
        })
        .init();

    info!("Starting Actix Web Service...");
    info!(
        "Configuration: Server {}:{}",
        config.server.host, config.server.port
    );

    // Create shared application state. Artifact loading and the
    // consistency checkup both happen here, before the server binds.
    let app_state = match AppState::new(config.clone()) {
        Ok(state) => {
            info!("Model artifacts loaded and consistent");
            web::Data::new(RwLock::new(state))
        }
        Err(e) => {
            error!("Failed to initialize app state: {}", e);
            std::process::exit(1);
        }
    };

    info!("Application state initialized successfully");

    // Start HTTP server
    let bind_address = format!("{}:{}", config.server.host, config.server.port);
    info!("Starting HTTP server on {}", bind_address);

    let mut server = HttpServer::new(move || {
        App::new()
            .wrap(Logger::default())
            .wrap(Cors::permissive())
            .app_data(app_state.clone())
            .service(configure_routes())
    });

    // Set number of workers if specified
    if let Some(workers) = config.server.workers {
        server = server.workers(workers);
        info!("Using {} worker threads", workers);
    }

    server
        .bind(&bind_address)
        .with_context(|| format!("Failed to bind to {}", bind_address))
        .map_err(|e| std::io::Error::new(std::io::ErrorKind::Other, e))?
        .run()
        .await
}
