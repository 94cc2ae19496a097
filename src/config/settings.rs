//! Runtime settings for the HTTP service and CLI.
//!
//! Values come from the process environment (optionally seeded from a
//! `.env` file) and can be overridden by command-line flags.

use std::env;
use std::net::{IpAddr, SocketAddr};
use std::path::PathBuf;

use thiserror::Error;

/// Default directory holding the reference tables.
pub const DEFAULT_DATA_DIR: &str = "./data/reference";

/// Errors raised while reading runtime settings.
#[derive(Debug, Error)]
pub enum SettingsError {
    /// `SALARY_PORT` is not a valid port number.
    #[error("SALARY_PORT must be a valid u16 port number")]
    InvalidPort,
    /// The host is not an IP address or `localhost`.
    #[error("invalid host address: {source}")]
    InvalidHost {
        /// Underlying parse error.
        #[source]
        source: std::net::AddrParseError,
    },
}

/// Top-level runtime settings.
#[derive(Debug, Clone)]
pub struct AppSettings {
    /// HTTP binding.
    pub server: ServerSettings,
    /// Directory holding the reference tables.
    pub data_dir: PathBuf,
    /// Log filter used when `RUST_LOG` is not set.
    pub log_level: String,
}

impl AppSettings {
    /// Reads settings from `.env` and the environment.
    pub fn load() -> Result<Self, SettingsError> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Reads settings through an arbitrary lookup function.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, SettingsError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let host = lookup("SALARY_HOST").unwrap_or_else(|| "127.0.0.1".to_string());
        let port = lookup("SALARY_PORT")
            .unwrap_or_else(|| "3000".to_string())
            .parse::<u16>()
            .map_err(|_| SettingsError::InvalidPort)?;
        let data_dir = lookup("SALARY_DATA_DIR").unwrap_or_else(|| DEFAULT_DATA_DIR.to_string());
        let log_level = lookup("SALARY_LOG_LEVEL").unwrap_or_else(|| "info".to_string());

        Ok(Self {
            server: ServerSettings { host, port },
            data_dir: PathBuf::from(data_dir),
            log_level,
        })
    }
}

/// Settings controlling the HTTP server binding.
#[derive(Debug, Clone)]
pub struct ServerSettings {
    /// Host name or IP address.
    pub host: String,
    /// TCP port.
    pub port: u16,
}

impl ServerSettings {
    /// Resolves the socket address to bind.
    pub fn socket_addr(&self) -> Result<SocketAddr, SettingsError> {
        if self.host.eq_ignore_ascii_case("localhost") {
            return Ok(SocketAddr::new(IpAddr::from([127, 0, 0, 1]), self.port));
        }

        let ip: IpAddr = self
            .host
            .parse()
            .map_err(|source| SettingsError::InvalidHost { source })?;

        Ok(SocketAddr::new(ip, self.port))
    }
}
