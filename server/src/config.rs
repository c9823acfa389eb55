//! Process settings read from the environment.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

pub const PORT_ENV: &str = "PORT";
pub const DEFAULT_PORT: u16 = 3000;

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("invalid {PORT_ENV} `{0}`")]
    InvalidPort(String),
}

/// Port to bind; [`DEFAULT_PORT`] when unset or blank.
///
/// # Errors
///
/// Returns [`ConfigError::InvalidPort`] when the value is not a port number.
pub fn listen_port(raw: Option<&str>) -> Result<u16, ConfigError> {
    match raw.map(str::trim).filter(|value| !value.is_empty()) {
        None => Ok(DEFAULT_PORT),
        Some(value) => value.parse().map_err(|_| ConfigError::InvalidPort(value.to_owned())),
    }
}
