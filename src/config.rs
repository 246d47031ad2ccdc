// src/config.rs
use std::{
    fmt::Debug,
    net::{IpAddr, Ipv4Addr, SocketAddr},
    path::PathBuf,
};

use thiserror::Error;

pub const API_KEY_VAR: &str = "GOOGLE_CLOUD_VISION_API_KEY";
pub const DEFAULT_VISION_ENDPOINT: &str = "https://vision.googleapis.com/v1/images:annotate";
pub const DEFAULT_BIND_ADDR: SocketAddr = SocketAddr::new(IpAddr::V4(Ipv4Addr::UNSPECIFIED), 3000);
pub const DEFAULT_MAX_BODY_BYTES: usize = 10 * 1024 * 1024;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid {var} value {value:?}: {reason}")]
    Invalid {
        var: &'static str,
        value: String,
        reason: String,
    },
}

/// Startup configuration, built once and handed to [`crate::state::AppState`].
#[derive(Clone)]
pub struct Config {
    /// `None` keeps the server up but fails every recognize request.
    pub api_key: Option<String>,
    pub vision_endpoint: String,
    pub bind_addr: SocketAddr,
    pub max_body_bytes: usize,
    pub public_dir: PathBuf,
}

impl Debug for Config {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Config")
            .field("api_key", &self.api_key.as_ref().map(|_| "<redacted>"))
            .field("vision_endpoint", &self.vision_endpoint)
            .field("bind_addr", &self.bind_addr)
            .field("max_body_bytes", &self.max_body_bytes)
            .field("public_dir", &self.public_dir)
            .finish()
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_key: None,
            vision_endpoint: DEFAULT_VISION_ENDPOINT.to_string(),
            bind_addr: DEFAULT_BIND_ADDR,
            max_body_bytes: DEFAULT_MAX_BODY_BYTES,
            public_dir: PathBuf::from("public"),
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Build from any variable source; blank values count as unset.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |name: &str| lookup(name).filter(|v| !v.trim().is_empty());

        let bind_addr: SocketAddr = match get("BIND_ADDR") {
            Some(raw) => raw.trim().parse().map_err(|e: std::net::AddrParseError| ConfigError::Invalid {
                var: "BIND_ADDR",
                value: raw.clone(),
                reason: e.to_string(),
            })?,
            None => DEFAULT_BIND_ADDR,
        };

        let max_body_bytes: usize = match get("MAX_BODY_BYTES") {
            Some(raw) => raw.trim().parse().map_err(|e: std::num::ParseIntError| ConfigError::Invalid {
                var: "MAX_BODY_BYTES",
                value: raw.clone(),
                reason: e.to_string(),
            })?,
            None => DEFAULT_MAX_BODY_BYTES,
        };

        Ok(Self {
            api_key: get(API_KEY_VAR).map(|key| key.trim().to_string()),
            vision_endpoint: get("VISION_API_URL").unwrap_or_else(|| DEFAULT_VISION_ENDPOINT.to_string()),
            bind_addr,
            max_body_bytes,
            public_dir: get("PUBLIC_DIR").map(PathBuf::from).unwrap_or_else(|| PathBuf::from("public")),
        })
    }
}
