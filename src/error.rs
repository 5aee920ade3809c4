//! Startup and serve failures for the host binary.

use std::net::SocketAddr;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum HostError {
    #[error("invalid PORT value {0:?}")]
    InvalidPort(String),
    #[error("leptos configuration: {0}")]
    Config(String),
    #[error("failed to bind {addr}: {source}")]
    Bind {
        addr: SocketAddr,
        #[source]
        source: std::io::Error,
    },
    #[error("server failed: {0}")]
    Serve(#[from] std::io::Error),
}
