use std::sync::Arc;

use tokio::net::TcpListener;
use tokio::signal;

use folio::errors::Report;
use folio::log;
use folio_proxy::{AppState, ProxyConfig};

#[tokio::main]
async fn main() -> Result<(), Report> {
    // Setup logging
    folio::log::setup()?;

    let config = ProxyConfig::load()?;
    let addr = config.addr();
    log::info!(
        "Forwarding /api to {} and serving {}",
        config.bff_base_url,
        config.static_dir.display()
    );

    let state = Arc::new(AppState::new(config)?);
    let app = folio_proxy::router(state);

    let listener = TcpListener::bind(addr).await?;
    log::info!("Starting server on http://{}", listener.local_addr()?);
    log::info!("Press Ctrl+C to stop the server");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    log::info!("Shutting down server");

    Ok(())
}

/// Wait for a shutdown signal (Ctrl+C or SIGTERM)
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(err) = signal::ctrl_c().await {
            log::error!("Failed to install Ctrl+C handler: {err}");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut stream) => {
                stream.recv().await;
            }
            Err(err) => {
                log::error!("Failed to install SIGTERM handler: {err}");
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

    log::info!("Signal received, starting graceful shutdown");
}
