use sp_server::state::AppState;
use sp_server::{build_router, config, logger};

use sp_auth::TokenService;
use sp_session::{IdentitySessions, MemoryStore};

use std::error::Error;
use std::sync::Arc;

use log::{error, info};
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use tokio::net::TcpListener;

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    // Load and validate configuration
    let config = config::Config::from_env()?;

    // Initialize logger (before any other logging)
    let log_level = config
        .log_level
        .parse()
        .unwrap_or(log::LevelFilter::Info);
    logger::initialize(log_level, config.log_colored)?;

    info!("Starting sp-server v{}", env!("CARGO_PKG_VERSION"));

    // Ensure the database directory exists
    let database_path = std::path::Path::new(&config.database_path);
    if let Some(parent) = database_path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)?;
        }
    }

    info!("Connecting to database: {}", database_path.display());

    let pool = SqlitePoolOptions::new()
        .max_connections(10)
        .connect_with(
            SqliteConnectOptions::new()
                .filename(database_path)
                .create_if_missing(true)
                .journal_mode(sqlx::sqlite::SqliteJournalMode::Wal)
                .synchronous(sqlx::sqlite::SqliteSynchronous::Normal)
                .busy_timeout(std::time::Duration::from_secs(5)),
        )
        .await?;

    info!("Database connection established");

    // Run migrations
    info!("Running database migrations...");
    sqlx::migrate!("../crates/sp-db/migrations").run(&pool).await?;
    info!("Migrations complete");

    // Session store with sliding idle expiry
    let store = Arc::new(MemoryStore::new(config.session_idle_timeout()));
    let sessions = IdentitySessions::new(store);
    info!(
        "Session store initialized: idle timeout {}s",
        config.session_idle_timeout_secs
    );

    // Access token service
    let tokens = Arc::new(TokenService::with_hs256(
        config.jwt_secret.as_bytes(),
        config.access_token_lifetime(),
    ));

    // Build application state
    let app_state = AppState {
        pool,
        sessions,
        tokens,
        session_cookie_name: config.session_cookie_name.clone(),
    };

    // Build router
    let app = build_router(app_state);

    // Create TCP listener
    let listener = TcpListener::bind(&config.bind_addr).await?;
    let actual_addr = listener.local_addr()?;
    info!("Server listening on {}", actual_addr);

    // Start server; stop on SIGINT
    axum::serve(listener, app)
        .with_graceful_shutdown(async {
            match tokio::signal::ctrl_c().await {
                Ok(()) => info!("Received SIGINT (Ctrl+C), shutting down"),
                Err(e) => error!("Failed to listen for SIGINT: {}", e),
            }
        })
        .await?;

    info!("Graceful shutdown complete");

    Ok(())
}
