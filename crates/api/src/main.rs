use std::net::SocketAddr;
use std::sync::Arc;

use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::EnvFilter;

use apnaghar_api::config::ServerConfig;
use apnaghar_api::state::AppState;
use apnaghar_api::{bootstrap, router};
use apnaghar_db::DbPool;

const DEFAULT_LOG_FILTER: &str = "apnaghar_api=debug,apnaghar_db=debug,apnaghar_media=debug,tower_http=debug";

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();
    init_tracing();

    let config = ServerConfig::from_env();
    tracing::info!(
        host = %config.host,
        port = config.port,
        media_backend = ?config.media.backend,
        "Loaded server configuration",
    );

    let pool = prepare_database(&config).await;

    if let Some(admin) = &config.admin_bootstrap {
        match bootstrap::ensure_admin(&pool, admin).await {
            Ok(true) => tracing::info!(email = %admin.email, "Bootstrap admin created"),
            Ok(false) => tracing::debug!(email = %admin.email, "Bootstrap admin already exists"),
            Err(e) => tracing::error!(error = %e, "Failed to create bootstrap admin"),
        }
    }

    let media = config
        .media
        .build_store()
        .expect("Failed to configure media storage");
    tracing::info!(backend = media.name(), "Media storage ready");

    let state = AppState {
        pool,
        config: Arc::new(config.clone()),
        media,
    };
    let app = router::build_app_router(state, &config);

    let addr = SocketAddr::new(
        config.host.parse().expect("HOST must be an IP address"),
        config.port,
    );
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .expect("Failed to bind to address");
    tracing::info!(%addr, "ApnaGhar Plots API listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .expect("Server error");

    tracing::info!("Server stopped");
}

/// `RUST_LOG` selects levels; `LOG_FORMAT=json` switches to JSON lines.
fn init_tracing() {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| DEFAULT_LOG_FILTER.into());
    let json = std::env::var("LOG_FORMAT").is_ok_and(|f| f.eq_ignore_ascii_case("json"));

    let registry = tracing_subscriber::registry().with(filter);
    if json {
        registry.with(tracing_subscriber::fmt::layer().json()).init();
    } else {
        registry.with(tracing_subscriber::fmt::layer()).init();
    }
}

/// Connect, verify the connection, and apply pending migrations.
async fn prepare_database(config: &ServerConfig) -> DbPool {
    let pool = apnaghar_db::create_pool(&config.database_url, config.db_max_connections)
        .await
        .expect("Failed to connect to database");

    apnaghar_db::health_check(&pool)
        .await
        .expect("Database health check failed");

    apnaghar_db::run_migrations(&pool)
        .await
        .expect("Failed to run database migrations");

    tracing::info!(max_connections = config.db_max_connections, "Database ready");
    pool
}

/// Resolves on Ctrl-C, or SIGTERM on Unix.
async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl-C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("Failed to install SIGTERM handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => tracing::info!("Received SIGINT, shutting down"),
        () = terminate => tracing::info!("Received SIGTERM, shutting down"),
    }
}
