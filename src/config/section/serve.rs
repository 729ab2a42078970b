//! `[serve]` section configuration.
//!
//! # Example
//!
//! ```toml
//! [serve]
//! interface = "127.0.0.1"
//! port = 4567         # next free port is used when taken
//! workers = 4         # compile threads
//! ```
//!
//! `interface` must be an IP literal; `0.0.0.0` exposes the assets on the LAN.

use serde::{Deserialize, Serialize};
use std::net::{IpAddr, Ipv4Addr};

/// Asset server settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ServeConfig {
    /// Network interface to bind.
    pub interface: IpAddr,

    /// HTTP port number. Up to 9 following ports are tried when taken.
    pub port: u16,

    /// Worker threads handling requests.
    pub workers: usize,
}

impl Default for ServeConfig {
    fn default() -> Self {
        Self {
            interface: IpAddr::V4(Ipv4Addr::new(127, 0, 0, 1)),
            port: 4567,
            workers: 4,
        }
    }
}
