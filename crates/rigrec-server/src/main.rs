mod api;
mod middleware;

use std::sync::Arc;

use tracing_subscriber::EnvFilter;

use crate::api::{build_app, AppState};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let config = Arc::new(rigrec_core::load_app_config()?);
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(config.log_level.clone()))?;
    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    let catalog = Arc::new(rigrec_core::load_catalog(&config.catalog_path)?);
    tracing::info!(
        listings = catalog.listings.len(),
        path = %config.catalog_path.display(),
        "loaded fallback catalog"
    );

    let search = match &config.search_api_key {
        Some(key) => {
            let client = match &config.search_base_url {
                Some(base) => {
                    rigrec_search::SearchClient::with_base_url(key, config.search_timeout_secs, base)?
                }
                None => rigrec_search::SearchClient::new(key, config.search_timeout_secs)?,
            };
            Some(Arc::new(client))
        }
        None => {
            tracing::warn!("RIGREC_SEARCH_API_KEY not set; serving from the fallback catalog only");
            None
        }
    };

    let app = build_app(AppState {
        config: Arc::clone(&config),
        catalog,
        search,
    });

    let listener = tokio::net::TcpListener::bind(config.bind_addr).await?;
    tracing::info!(addr = %config.bind_addr, env = %config.env, "rigrec-server listening");
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("failed to listen for ctrl-c");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {},
        () = terminate => {},
    }

    tracing::info!("received shutdown signal, starting graceful shutdown");
}
