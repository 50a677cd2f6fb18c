//! Server setup and initialization
//!
//! Provides the main application builder and server runner.

use axum::Router;
use reqres_common::{AppConfig, AppError, AppResult};
use reqres_db::{create_pool, initialize, SqlitePool};
use reqres_service::ServiceContextBuilder;
use tokio::net::TcpListener;
use tracing::{error, info};

use crate::middleware::apply_middleware;
use crate::routes::create_router;
use crate::state::AppState;

/// Build the complete Axum application with all routes and middleware
pub fn create_app(state: AppState) -> Router {
    let router = create_router();
    let router = apply_middleware(router, state.config());
    router.with_state(state)
}

/// Open the database, bootstrap its schema and create AppState
pub async fn create_app_state(config: AppConfig) -> AppResult<AppState> {
    if !config.database.is_in_memory() {
        tokio::fs::create_dir_all(&config.database.path).await.map_err(|e| {
            AppError::Config(format!(
                "Failed to create database directory {}: {}",
                config.database.path.display(),
                e
            ))
        })?;
    }

    info!(url = %config.database.url, "Connecting to SQLite...");
    let db_config = reqres_db::DatabaseConfig::from(&config.database);
    let pool = create_pool(&db_config)
        .await
        .map_err(|e| AppError::Database(e.to_string()))?;

    let report = initialize(&pool).await?;
    info!(
        roles_seeded = report.roles_seeded,
        users_seeded = report.users_seeded,
        role_column_added = report.role_column_added,
        "Database schema ready"
    );

    let service_context = ServiceContextBuilder::new()
        .pool(pool)
        .build()
        .map_err(|e| AppError::Config(e.to_string()))?;

    Ok(AppState::new(service_context, config))
}

/// Serve the application until a shutdown signal arrives
pub async fn run_server(app: Router, listener: TcpListener) -> AppResult<()> {
    let addr = listener
        .local_addr()
        .map_err(|e| AppError::Config(format!("Failed to read listener address: {}", e)))?;

    info!("Server listening on http://{}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| AppError::Config(format!("Server error: {}", e)))?;

    Ok(())
}

/// Run the complete server with configuration
pub async fn run(config: AppConfig) -> AppResult<()> {
    let address = config.api.address();
    let base_url = config.api.base_url();

    let state = create_app_state(config).await?;
    let pool = state.service_context().pool().clone();

    let app = create_app(state);

    let listener = TcpListener::bind(&address)
        .await
        .map_err(|e| AppError::Config(format!("Failed to bind to {}: {}", address, e)))?;

    info!("API documentation at {}/api-docs", base_url);

    let result = run_server(app, listener).await;

    close_pool(pool).await;

    result
}

async fn close_pool(pool: SqlitePool) {
    info!("Closing database connections");
    pool.close().await;
}

async fn shutdown_signal() {
    use tokio::signal;

    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            error!(error = %e, "Failed to install Ctrl+C handler");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut stream) => {
                stream.recv().await;
            }
            Err(e) => {
                error!(error = %e, "Failed to install SIGTERM handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {
            info!("Received Ctrl+C, shutting down gracefully...");
        },
        () = terminate => {
            info!("Received SIGTERM, shutting down gracefully...");
        },
    }
}
