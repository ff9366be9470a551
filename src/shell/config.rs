// Runtime configuration read from the environment.
//
// Variables
// - ROSTER_HTTP_ADDR: bind address, defaults to 0.0.0.0:3001.
// - ROSTER_SEED_FILE: optional JSON roster seed loaded at start-up.
// - ROSTER_CORS_ORIGINS: optional comma separated list of allowed browser origins.

use axum::http::{HeaderName, HeaderValue, Method, header};
use std::net::SocketAddr;
use std::path::PathBuf;
use thiserror::Error;
use tower_http::cors::{AllowOrigin, CorsLayer};

use crate::shell::caller::{USER_ID_HEADER, USER_ROLE_HEADER};

pub const DEFAULT_HTTP_ADDR: &str = "0.0.0.0:3001";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("ROSTER_HTTP_ADDR is not a socket address: {value}")]
    InvalidAddr {
        value: String,
        #[source]
        source: std::net::AddrParseError,
    },

    #[error("ROSTER_CORS_ORIGINS contains an invalid origin: {0}")]
    InvalidOrigin(String),
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub http_addr: SocketAddr,
    pub seed_file: Option<PathBuf>,
    pub cors_origins: Vec<HeaderValue>,
}

impl AppConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let non_empty = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let raw_addr = non_empty("ROSTER_HTTP_ADDR").unwrap_or_else(|| DEFAULT_HTTP_ADDR.into());
        let http_addr = raw_addr
            .trim()
            .parse()
            .map_err(|source| ConfigError::InvalidAddr {
                value: raw_addr.clone(),
                source,
            })?;

        let seed_file = non_empty("ROSTER_SEED_FILE").map(|v| PathBuf::from(v.trim()));

        let cors_origins = non_empty("ROSTER_CORS_ORIGINS")
            .map(|raw| {
                raw.split(',')
                    .map(str::trim)
                    .filter(|origin| !origin.is_empty())
                    .map(|origin| {
                        HeaderValue::from_str(origin)
                            .map_err(|_| ConfigError::InvalidOrigin(origin.to_string()))
                    })
                    .collect::<Result<Vec<_>, _>>()
            })
            .transpose()?
            .unwrap_or_default();

        Ok(Self {
            http_addr,
            seed_file,
            cors_origins,
        })
    }

    pub fn cors_layer(&self) -> CorsLayer {
        if self.cors_origins.is_empty() {
            return CorsLayer::permissive();
        }
        CorsLayer::new()
            .allow_origin(AllowOrigin::list(self.cors_origins.clone()))
            .allow_methods([Method::GET, Method::POST, Method::PUT])
            .allow_headers([
                header::CONTENT_TYPE,
                HeaderName::from_static(USER_ID_HEADER),
                HeaderName::from_static(USER_ROLE_HEADER),
            ])
    }
}
