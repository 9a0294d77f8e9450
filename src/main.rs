use tracing::info;

use mirolite::{Config, Database, WebServer};

#[tokio::main]
async fn main() {
    // Load configuration
    let config = match Config::load("config.toml") {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Failed to load config.toml: {e}");
            eprintln!("Using default configuration.");
            Config::default()
        }
    };

    // Initialize logging
    if let Err(e) = mirolite::logging::init(&config.logging) {
        eprintln!("Failed to initialize logging: {e}");
        // Fall back to console-only logging
        mirolite::logging::init_console_only(&config.logging.level);
    }

    info!("Mirolite - collaborative whiteboard backend");

    let db = match Database::open(&config.database.path, config.database.max_connections).await {
        Ok(db) => db,
        Err(e) => {
            tracing::error!("Failed to open database: {e}");
            std::process::exit(1);
        }
    };

    let server = match WebServer::new(&config.server, &config.auth, db) {
        Ok(server) => server,
        Err(e) => {
            tracing::error!("Failed to configure web server: {e}");
            std::process::exit(1);
        }
    };

    info!(
        "Serving API on {}:{}",
        config.server.host, config.server.port
    );
    if let Err(e) = server.run().await {
        tracing::error!("Web server error: {e}");
        std::process::exit(1);
    }
}
