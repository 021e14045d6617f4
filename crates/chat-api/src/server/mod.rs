//! Server setup and initialization
//!
//! Connects the store, builds the application, and owns the process
//! lifecycle: the presence reaper runs beside the HTTP server and is
//! stopped after the server drains.

use std::sync::Arc;

use axum::Router;
use chat_common::{AppConfig, AppError, StorageBackend};
use chat_db::{
    create_pool, run_migrations, MemoryStore, PgMessageRepository, PgParticipantRepository,
    PoolConfig,
};
use chat_service::{PresencePolicy, PresenceReaper, ServiceContext, ServiceContextBuilder};
use tokio::net::TcpListener;
use tokio::sync::watch;
use tracing::{info, warn};

use crate::middleware::apply_middleware;
use crate::routes::{create_router, health_routes};
use crate::state::AppState;

/// Build the complete Axum application with all routes and middleware
pub fn create_app(state: AppState) -> Router {
    let config = state.config();
    let router = create_router().merge(health_routes());
    let router = apply_middleware(router, &config.cors, config.app.env.is_production());
    router.with_state(state)
}

/// Connect the configured store and build the service context
///
/// Fails before anything is served if the store is unreachable.
async fn create_service_context(config: &AppConfig) -> Result<ServiceContext, AppError> {
    let builder =
        ServiceContextBuilder::new().presence(PresencePolicy::from(&config.presence));

    let builder = match config.storage.backend {
        StorageBackend::Memory => {
            warn!("Using in-memory store; state is lost on restart");
            builder.store(Arc::new(MemoryStore::new()))
        }
        StorageBackend::Postgres => {
            let db_config = config
                .database
                .as_ref()
                .ok_or_else(|| AppError::config("DATABASE_URL is required for the postgres backend"))?;

            info!("Connecting to PostgreSQL...");
            let pool = create_pool(&PoolConfig::from(db_config))
                .await
                .map_err(|e| AppError::Database(e.to_string()))?;
            run_migrations(&pool)
                .await
                .map_err(|e| AppError::Database(e.to_string()))?;
            info!("PostgreSQL connection established");

            builder
                .participant_repo(Arc::new(PgParticipantRepository::new(pool.clone())))
                .message_repo(Arc::new(PgMessageRepository::new(pool)))
        }
    };

    builder.build().map_err(|e| AppError::Config(e.to_string()))
}

/// Initialize all dependencies and create AppState
pub async fn create_app_state(config: AppConfig) -> Result<AppState, AppError> {
    let service_context = create_service_context(&config).await?;
    Ok(AppState::new(service_context, config))
}

/// Serve `app` on `listener` until `shutdown` resolves
pub async fn run_server<F>(app: Router, listener: TcpListener, shutdown: F) -> Result<(), AppError>
where
    F: std::future::Future<Output = ()> + Send + 'static,
{
    if let Ok(addr) = listener.local_addr() {
        info!("Server listening on http://{}", addr);
    }

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown)
        .await
        .map_err(|e| AppError::Server(e.to_string()))
}

/// Resolves on Ctrl-C or SIGTERM
pub async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            warn!(error = %e, "Failed to listen for Ctrl-C");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                warn!(error = %e, "Failed to listen for SIGTERM");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {},
        () = terminate => {},
    }

    info!("Shutdown signal received");
}

/// Run the complete server with configuration
pub async fn run(config: AppConfig) -> Result<(), AppError> {
    let addr = config.api.address();

    // Create app state
    let state = create_app_state(config).await?;

    // Start the presence reaper
    let (stop_reaper, reaper_stopped) = watch::channel(false);
    let reaper = PresenceReaper::new(state.shared_context()).spawn(reaper_stopped);

    // Build application
    let app = create_app(state);

    let listener = TcpListener::bind(&addr)
        .await
        .map_err(|e| AppError::Server(format!("Failed to bind to {addr}: {e}")))?;

    let served = run_server(app, listener, shutdown_signal()).await;

    // Stop the reaper once no more requests are in flight
    let _ = stop_reaper.send(true);
    if let Err(e) = reaper.await {
        warn!(error = %e, "Presence reaper task ended abnormally");
    }

    served
}
