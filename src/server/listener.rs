use std::time::Duration;

use anyhow::Context;
use tokio::net::TcpListener;
use tracing::info;

use crate::config::Config;
use crate::files::FileStore;
use crate::http::connection::Connection;

/// Binds the configured address and serves connections until the process
/// stops.
pub async fn run(cfg: &Config) -> anyhow::Result<()> {
    let listener = TcpListener::bind(&cfg.listen_addr)
        .await
        .with_context(|| format!("failed to bind {}", cfg.listen_addr))?;
    info!("Listening on {}", cfg.listen_addr);

    let store = FileStore::new(cfg.base_dir.clone());
    serve(listener, store, cfg.request_timeout()).await
}

/// Accept loop over an already-bound listener.
///
/// Split out from [`run`] so tests can bind port 0 and drive independently
/// configured server instances. Each accepted socket gets its own task and
/// its own [`Connection`]; one connection failing never touches the loop.
pub async fn serve(
    listener: TcpListener,
    store: FileStore,
    read_timeout: Duration,
) -> anyhow::Result<()> {
    loop {
        let (socket, peer) = listener.accept().await?;
        info!("Accepted connection from {}", peer);

        let store = store.clone();
        tokio::spawn(async move {
            let mut conn = Connection::new(socket, store, read_timeout);
            if let Err(e) = conn.run().await {
                tracing::error!("Connection error from {}: {}", peer, e);
            }
        });
    }
}
