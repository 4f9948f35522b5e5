use std::future::Future;
use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Context;
use tokio::net::TcpListener;
use tracing::info;

use crate::config::Config;
use crate::http::connection::{Connection, HandlerContext};

pub struct Server {
    listener: TcpListener,
    ctx: Arc<HandlerContext>,
}

impl Server {
    pub async fn bind(addr: &str, ctx: HandlerContext) -> anyhow::Result<Self> {
        let listener = TcpListener::bind(addr)
            .await
            .with_context(|| format!("failed to bind {}", addr))?;
        Ok(Self::from_listener(listener, ctx))
    }

    pub async fn from_config(cfg: &Config) -> anyhow::Result<Self> {
        let ctx = HandlerContext::from_config(cfg).await?;
        Self::bind(&cfg.server.listen_addr, ctx).await
    }

    pub fn from_listener(listener: TcpListener, ctx: HandlerContext) -> Self {
        Self {
            listener,
            ctx: Arc::new(ctx),
        }
    }

    pub fn local_addr(&self) -> anyhow::Result<SocketAddr> {
        Ok(self.listener.local_addr()?)
    }

    /// Accepts connections until `shutdown` resolves.
    ///
    /// Every connection runs on its own task; the loop never waits for one.
    /// Once `shutdown` completes the listening socket is dropped. Handlers
    /// already spawned keep running to completion.
    pub async fn run_until<F>(self, shutdown: F) -> anyhow::Result<()>
    where
        F: Future<Output = ()>,
    {
        let Self { listener, ctx } = self;
        info!("Listening on {}", listener.local_addr()?);

        tokio::pin!(shutdown);

        loop {
            tokio::select! {
                biased;

                _ = &mut shutdown => {
                    info!("Shutdown signal received, no longer accepting connections");
                    break;
                }

                accepted = listener.accept() => {
                    let (socket, peer) = match accepted {
                        Ok(pair) => pair,
                        Err(e) => {
                            tracing::warn!(error = %e, "Failed to accept connection");
                            continue;
                        }
                    };
                    tracing::debug!("Accepted connection from {}", peer);

                    let ctx = Arc::clone(&ctx);
                    tokio::spawn(async move {
                        let conn = Connection::new(socket, peer, ctx);
                        if let Err(e) = conn.run().await {
                            tracing::warn!("Connection error from {}: {}", peer, e);
                        }
                    });
                }
            }
        }

        drop(listener);
        Ok(())
    }
}
