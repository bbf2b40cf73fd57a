use std::net::AddrParseError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    /// Listen address environment variable could not be parsed.
    ///
    /// The `LISTEN_ADDR` variable must be a socket address such as
    /// `127.0.0.1:5555`. Check the `.env.example` file for the expected format.
    #[error("Invalid listen address '{value}': {source}")]
    InvalidListenAddr {
        /// The string value that failed to parse
        value: String,
        /// The underlying parse error
        #[source]
        source: AddrParseError,
    },
}
