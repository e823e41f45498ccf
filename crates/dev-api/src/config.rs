//! Backend Configuration
//!
//! Read from the environment:
//! - `FWCONSOLE_ADDR`: bind address (default `127.0.0.1:8080`)
//! - `FWCONSOLE_DIST`: directory with the built console, served at `/`
//! - `FWCONSOLE_LOG`: log level (default `info`)

use std::net::SocketAddr;
use std::path::PathBuf;

use anyhow::Context;
use log::LevelFilter;

pub const DEFAULT_ADDR: &str = "127.0.0.1:8080";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DevConfig {
    pub addr: SocketAddr,
    pub dist: Option<PathBuf>,
    pub log_level: LevelFilter,
}

impl DevConfig {
    pub fn from_env() -> anyhow::Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> anyhow::Result<Self> {
        let addr = lookup("FWCONSOLE_ADDR").unwrap_or_else(|| DEFAULT_ADDR.to_string());
        let addr = addr
            .parse()
            .with_context(|| format!("FWCONSOLE_ADDR is not a socket address: {}", addr))?;

        let dist = lookup("FWCONSOLE_DIST").filter(|d| !d.is_empty()).map(PathBuf::from);

        let log_level = match lookup("FWCONSOLE_LOG") {
            Some(level) => level
                .parse()
                .with_context(|| format!("FWCONSOLE_LOG is not a log level: {}", level))?,
            None => LevelFilter::Info,
        };

        Ok(Self { addr, dist, log_level })
    }
}
