//! API server implementation.

use crate::routes::create_router;
use crate::state::AppState;
use cyclesense_core::{Config, Result, SystemState};
use std::net::SocketAddr;
use tokio::net::TcpListener;
use tokio::signal;
use tracing::{info, warn};

/// Cyclesense API server.
#[derive(Debug)]
pub struct Server {
    state: AppState,
    addr: SocketAddr,
}

impl Server {
    /// Creates a server that will listen on `addr`.
    pub fn new(addr: SocketAddr) -> Self {
        Self {
            state: AppState::new(),
            addr,
        }
    }

    /// Creates a server from the resolved configuration.
    pub fn from_config(config: &Config) -> Result<Self> {
        Ok(Self::new(config.socket_addr()?))
    }

    /// Shared state, for callers that want to observe readiness.
    pub fn state(&self) -> &AppState {
        &self.state
    }

    /// Address the server will bind.
    pub fn addr(&self) -> SocketAddr {
        self.addr
    }

    /// Binds, loads the advisor, and serves until shutdown.
    ///
    /// Shutdown starts on Ctrl-C, on SIGTERM, or when anything holding the
    /// state moves its status to [`SystemState::Stopping`].
    pub async fn run(self) -> Result<()> {
        let listener = TcpListener::bind(self.addr).await?;
        info!("Server listening on http://{}", self.addr);

        self.state.load();

        let status = self.state.status().clone();
        let mut updates = status.subscribe();
        let router = create_router(self.state);
        axum::serve(listener, router)
            .with_graceful_shutdown(async move {
                tokio::select! {
                    _ = shutdown_signal() => status.set_state(SystemState::Stopping),
                    _ = async {
                        let _ = updates.wait_for(|s| *s == SystemState::Stopping).await;
                    } => {}
                }
                info!(system = status.name(), "Shutting down");
            })
            .await?;

        info!("Server stopped");
        Ok(())
    }
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            warn!(error = %e, "Failed to listen for Ctrl+C");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut sig) => {
                sig.recv().await;
            }
            Err(e) => {
                warn!(error = %e, "Failed to install SIGTERM handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            info!("Received Ctrl+C, shutting down gracefully");
        },
        _ = terminate => {
            info!("Received SIGTERM, shutting down gracefully");
        },
    }
}
