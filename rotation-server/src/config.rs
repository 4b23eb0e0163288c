//! Server configuration from the environment.

use std::net::SocketAddr;

/// Environment variable holding the bind address.
pub const ADDR_VAR: &str = "ROTATION_ADDR";

/// Environment variable holding the static asset directory.
pub const STATIC_DIR_VAR: &str = "ROTATION_STATIC_DIR";

/// Errors reading server configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// Bind address could not be parsed
    #[error("{var}={value:?} is not a valid socket address: {source}")]
    InvalidAddr {
        var: &'static str,
        value: String,
        source: std::net::AddrParseError,
    },
}

/// Where and how the server listens.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub addr: SocketAddr,
    pub static_dir: String,
}

impl ServerConfig {
    /// Read configuration from process environment variables.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_vars(|key| std::env::var(key).ok())
    }

    /// Read configuration through a variable lookup, falling back to defaults
    /// for anything unset.
    pub fn from_vars(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let defaults = Self::default();

        let addr = match lookup(ADDR_VAR) {
            Some(value) => value.parse().map_err(|source| ConfigError::InvalidAddr {
                var: ADDR_VAR,
                value: value.clone(),
                source,
            })?,
            None => defaults.addr,
        };

        let static_dir = lookup(STATIC_DIR_VAR).unwrap_or(defaults.static_dir);

        Ok(Self { addr, static_dir })
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            addr: SocketAddr::from(([127, 0, 0, 1], 3000)),
            static_dir: "static".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key: &str| map.get(key).cloned()
    }

    #[test]
    fn defaults_when_unset() {
        let config = ServerConfig::from_vars(lookup(&[])).unwrap();
        assert_eq!(config, ServerConfig::default());
        assert_eq!(config.addr.port(), 3000);
        assert_eq!(config.static_dir, "static");
    }

    #[test]
    fn overrides() {
        let config = ServerConfig::from_vars(lookup(&[
            (ADDR_VAR, "0.0.0.0:8080"),
            (STATIC_DIR_VAR, "/srv/rotation/static"),
        ]))
        .unwrap();
        assert_eq!(config.addr, SocketAddr::from(([0, 0, 0, 0], 8080)));
        assert_eq!(config.static_dir, "/srv/rotation/static");
    }

    #[test]
    fn bad_addr() {
        let err = ServerConfig::from_vars(lookup(&[(ADDR_VAR, "localhost")])).unwrap_err();
        assert!(err.to_string().starts_with("ROTATION_ADDR=\"localhost\""));
    }
}
