use std::net::SocketAddr;

use crate::server::error::{config::ConfigError, AppError};

const DEFAULT_DATABASE_URL: &str = "sqlite://app.db?mode=rwc";
const DEFAULT_LISTEN_ADDR: &str = "127.0.0.1:5555";

pub struct Config {
    pub database_url: String,

    pub listen_addr: SocketAddr,
}

impl Config {
    pub fn from_env() -> Result<Self, AppError> {
        let listen_addr =
            std::env::var("LISTEN_ADDR").unwrap_or_else(|_| DEFAULT_LISTEN_ADDR.to_string());

        Ok(Self {
            database_url: std::env::var("DATABASE_URL")
                .unwrap_or_else(|_| DEFAULT_DATABASE_URL.to_string()),
            listen_addr: listen_addr
                .parse()
                .map_err(|source| ConfigError::InvalidListenAddr {
                    value: listen_addr.clone(),
                    source,
                })?,
        })
    }
}
