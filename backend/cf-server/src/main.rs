use cf_server::{AppState, build_router, error::ServerError, logger};

use cf_auth::JwtValidator;
use cf_config::Config;

use std::error::Error;
use std::sync::Arc;

use log::{error, info, warn};
use tokio::net::TcpListener;

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    // A missing .env file is normal
    if let Ok(path) = dotenvy::dotenv() {
        eprintln!("Loaded environment from {}", path.display());
    }

    // Load and validate configuration
    let config = Config::load()?;
    config.validate()?;

    // Ensure log directory exists before the logger opens the file
    let log_file_path = config.log_file_path()?;
    if let Some(parent) = log_file_path.as_ref().and_then(|p| p.parent()) {
        std::fs::create_dir_all(parent)?;
    }

    // Initialize logger (before any other logging)
    logger::initialize(config.logging.level, log_file_path, config.logging.colored)?;

    info!("Starting cf-server v{}", env!("CARGO_PKG_VERSION"));
    config.log_summary();

    // Open the database and bring its schema up to date
    let database_path = config.database_path()?;
    info!("Connecting to database: {}", database_path.display());

    let pool = cf_db::connect(&database_path, config.database.max_connections).await?;
    info!("Database ready");

    // Create JWT validator (optional based on auth.enabled)
    let jwt_validator: Option<Arc<JwtValidator>> = if config.auth.enabled {
        let validator = if let Some(ref secret) = config.auth.jwt_secret {
            JwtValidator::with_hs256(secret.as_bytes())
        } else if let Some(ref key_path) = config.auth.jwt_public_key_path {
            let full_path = Config::config_dir()?.join(key_path);
            let public_key =
                std::fs::read_to_string(&full_path).map_err(|e| ServerError::JwtKeyFile {
                    path: full_path.display().to_string(),
                    source: e,
                })?;
            JwtValidator::with_rs256(&public_key)?
        } else {
            return Err(ServerError::Config(cf_config::ConfigError::auth(
                "auth.enabled requires jwt_secret or jwt_public_key_path",
            ))
            .into());
        };
        info!("JWT: {} sign-in verification enabled", validator.algorithm());
        Some(Arc::new(validator))
    } else {
        warn!("Sign-in verification DISABLED - trusting the X-User-Id header");
        None
    };

    let app = build_router(AppState::new(pool, jwt_validator));

    // Create TCP listener
    let listener = TcpListener::bind(config.bind_addr()).await?;

    // Get actual bound address (important when port is 0 / auto-assigned)
    let actual_addr = listener.local_addr()?;
    info!("Server listening on {}", actual_addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(async {
            match tokio::signal::ctrl_c().await {
                Ok(()) => info!("Received SIGINT (Ctrl+C), initiating graceful shutdown"),
                Err(e) => error!("Failed to listen for SIGINT: {}", e),
            }
        })
        .await?;

    info!("Graceful shutdown complete");

    Ok(())
}
