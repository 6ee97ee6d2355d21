//! Cafe Desk dashboard server.
//!
//! Serves the affiliate and super-admin dashboards on port 3001.
//!
//! Migrations are NOT run on startup. Run them explicitly via:
//! ```bash
//! cargo run -p cafe-desk-cli -- migrate
//! ```

#![cfg_attr(not(test), forbid(unsafe_code))]

use cafe_desk_admin::config::DashboardConfig;
use cafe_desk_admin::state::AppState;
use cafe_desk_admin::{db, routes, telemetry};

#[tokio::main]
async fn main() {
    let config = DashboardConfig::from_env().expect("Failed to load configuration");

    telemetry::init_tracing("cafe_desk_admin=info,tower_http=debug");

    let pool = db::create_pool(&config.database)
        .await
        .expect("Failed to create database pool");
    tracing::info!(database = ?config.database, "Database pool created");

    let addr = config.socket_addr();
    let app = routes::app(AppState::new(pool));

    tracing::info!("dashboard listening on http://{}", addr);

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .expect("Failed to bind to address");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .expect("Server error");
}

/// Wait for shutdown signal (Ctrl+C or SIGTERM).
async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("Failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {},
        () = terminate => {},
    }

    tracing::info!("Shutdown signal received, starting graceful shutdown");
}
