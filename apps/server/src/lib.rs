//! # Statistics Server
//!
//! Serves the statistics form over HTTP on `axum`, with graceful shutdown on Ctrl+C/SIGTERM.
//!
//! ## Example
//! ```no_run
//! use primer_server::Server;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     Server::builder()
//!         .port(9001)
//!         .build()?
//!         .run()
//!         .await
//! }
//! ```

pub mod router;

use anyhow::{Context, Result, bail};
use axum_server::Handle;
use primer::domain::config::ServiceConfig;
use std::net::SocketAddr;
use std::time::Duration;
use tokio::signal;
use tracing::{error, info};

/// A fluent builder for configuring and initializing the [`Server`].
#[must_use = "builders do nothing unless you call .build()"]
#[derive(Debug, Default)]
pub struct ServerBuilder {
    cfg: ServiceConfig,
}

impl ServerBuilder {
    /// Set up the server's configuration.
    pub fn config(mut self, cfg: ServiceConfig) -> Self {
        self.cfg = cfg;
        self
    }

    pub fn port(mut self, port: u16) -> Self {
        self.cfg.server.port = port;
        self
    }

    /// Consumes the builder and validates the configuration.
    ///
    /// # Errors
    /// Returns an error if the shutdown timeout is zero, which would drop in-flight
    /// requests immediately.
    ///
    /// # Examples
    /// ```
    /// # use primer_server::Server;
    /// let server = Server::builder().port(9100).build().unwrap();
    /// assert_eq!(server.address().port(), 9100);
    /// ```
    pub fn build(self) -> Result<Server> {
        if self.cfg.server.shutdown_timeout_secs == 0 {
            bail!("server.shutdown_timeout_secs must be greater than zero");
        }

        let address = SocketAddr::new(self.cfg.server.address, self.cfg.server.port);
        info!(address = %address, "Initializing server");

        Ok(Server { cfg: self.cfg })
    }
}

/// A configured server instance ready to run.
#[must_use = "call .run().await to start the server"]
#[derive(Debug)]
pub struct Server {
    cfg: ServiceConfig,
}

impl Server {
    /// Returns a new [`ServerBuilder`] to configure the server.
    pub fn builder() -> ServerBuilder {
        ServerBuilder::default()
    }

    /// Socket address the server binds to.
    #[must_use]
    pub fn address(&self) -> SocketAddr {
        SocketAddr::new(self.cfg.server.address, self.cfg.server.port)
    }

    /// Starts the server and runs until the shutdown signal is received.
    ///
    /// # Errors
    /// Returns an error if the server fails to bind to the configured address.
    pub async fn run(self) -> Result<()> {
        let address = self.address();
        let grace = Duration::from_secs(self.cfg.server.shutdown_timeout_secs);

        info!(address = %address, "Starting server");

        let app = router::init();

        let handle = Handle::<SocketAddr>::new();
        let shutdown_handle = handle.clone();

        tokio::spawn(async move {
            if let Err(e) = shutdown_signal().await {
                error!("Error while waiting for shutdown signal: {e}");
                return;
            }
            info!(grace_secs = grace.as_secs(), "Shutdown signal received, draining connections");
            shutdown_handle.graceful_shutdown(Some(grace));
        });

        info!("Listening on http://{address}");

        axum_server::bind(address)
            .handle(handle)
            .serve(app.into_make_service())
            .await
            .context("HTTP server failed")?;

        info!("Server shutdown complete");
        Ok(())
    }
}

/// Waits for SIGINT (Ctrl+C) or, on Unix, SIGTERM.
async fn shutdown_signal() -> Result<()> {
    let ctrl_c = async { signal::ctrl_c().await.context("Failed to install Ctrl+C handler") };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .context("Failed to install SIGTERM handler")?
            .recv()
            .await;
        Ok::<_, anyhow::Error>(())
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<Result<()>>();

    tokio::select! {
        res = ctrl_c => res?,
        res = terminate => res?,
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_listen_on_9001() {
        let server = Server::builder().build().unwrap();
        assert_eq!(server.address().port(), 9001);
        assert!(server.address().ip().is_unspecified());
    }

    #[test]
    fn zero_grace_period_is_rejected() {
        let mut cfg = ServiceConfig::default();
        cfg.server.shutdown_timeout_secs = 0;
        assert!(Server::builder().config(cfg).build().is_err());
    }
}
