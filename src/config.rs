//! Host configuration from the environment (`.env` is loaded first).

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use std::net::{Ipv4Addr, SocketAddr};

use crate::error::HostError;

pub const DEFAULT_PORT: u16 = 3000;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct HostConfig {
    pub port: u16,
}

impl HostConfig {
    /// # Errors
    ///
    /// Returns [`HostError::InvalidPort`] when `PORT` is set but unparseable.
    pub fn from_env() -> Result<Self, HostError> {
        let raw = std::env::var("PORT").ok();
        Ok(Self {
            port: parse_port(raw.as_deref())?,
        })
    }

    /// Listen on every interface.
    pub fn addr(self) -> SocketAddr {
        SocketAddr::from((Ipv4Addr::UNSPECIFIED, self.port))
    }
}

/// Parse `PORT`, defaulting when unset or blank.
///
/// # Errors
///
/// Returns [`HostError::InvalidPort`] for anything that is not a `u16`.
pub fn parse_port(raw: Option<&str>) -> Result<u16, HostError> {
    match raw.map(str::trim) {
        None | Some("") => Ok(DEFAULT_PORT),
        Some(value) => value.parse().map_err(|_| HostError::InvalidPort(value.to_owned())),
    }
}
