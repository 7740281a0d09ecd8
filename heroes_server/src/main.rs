//! Heroes server: reads `.env` and the environment, checks the database, then serves the API.
//!
//! Run from repo root: `cargo run -p heroes-server`

use heroes_api::{app, check_db_connection, connect_store, AppState, DbConfig, ServerConfig};
use tokio::net::TcpListener;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("heroes_api=info,heroes_server=info")),
        )
        .init();

    let db_config = DbConfig::from_env()?;
    let server_config = ServerConfig::from_env()?;
    tracing::debug!(?db_config, ?server_config, "configuration loaded");

    let store = connect_store(&db_config).await?;
    check_db_connection(store.as_ref()).await?;

    let state = AppState::new(store.clone()).with_expose_alter_ego(server_config.expose_alter_ego);
    let router = app(state, server_config.body_limit);

    let listener = TcpListener::bind(&server_config.bind_addr).await?;
    tracing::info!("listening on http://{}", listener.local_addr()?);
    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    store.close().await;
    tracing::info!("shut down");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!(error = %e, "failed to listen for ctrl-c");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut sig) => {
                sig.recv().await;
            }
            Err(e) => {
                tracing::error!(error = %e, "failed to listen for SIGTERM");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
    tracing::info!("shutdown signal received");
}
