//! Configuration management for the lists server.
//!
//! Loads configuration from environment variables with sensible defaults.

use serde::{Deserialize, Serialize};
use std::env;
use std::net::SocketAddr;
use std::time::Duration;

/// Default session cookie name.
pub const DEFAULT_SESSION_COOKIE: &str = "session_lists_sid";

/// Default maximum number of live sessions.
pub const DEFAULT_SESSION_CAPACITY: usize = 10_000;

/// Default seconds a session may sit idle before it is dropped.
pub const DEFAULT_SESSION_IDLE_SECS: u64 = 60 * 60;

/// Errors raised while reading configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// A variable was set but could not be parsed
    #[error("invalid value {value:?} for {var}")]
    Invalid {
        /// Environment variable name
        var: &'static str,
        /// Raw value found
        value: String,
    },
}

/// Application configuration loaded from environment variables.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Host to bind to
    pub host: String,
    /// Port to bind to
    pub port: u16,
    /// Log level (trace, debug, info, warn, error), used when `RUST_LOG` is unset
    pub log_level: String,
    /// Name of the cookie carrying the session id
    pub session_cookie: String,
    /// Maximum number of live sessions
    pub session_capacity: usize,
    /// Seconds a session may sit idle before it is dropped
    pub session_idle_secs: u64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 4567,
            log_level: "info".to_string(),
            session_cookie: DEFAULT_SESSION_COOKIE.to_string(),
            session_capacity: DEFAULT_SESSION_CAPACITY,
            session_idle_secs: DEFAULT_SESSION_IDLE_SECS,
        }
    }
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// | Variable | Default |
    /// |---|---|
    /// | `LISTS_HOST` | `127.0.0.1` |
    /// | `LISTS_PORT` | `4567` |
    /// | `LISTS_LOG_LEVEL` | `info` |
    /// | `LISTS_SESSION_COOKIE` | `session_lists_sid` |
    /// | `LISTS_SESSION_CAPACITY` | `10000` |
    /// | `LISTS_SESSION_IDLE_SECS` | `3600` |
    ///
    /// # Errors
    ///
    /// [`ConfigError::Invalid`] if `LISTS_PORT` is not a port number,
    /// `LISTS_SESSION_COOKIE` is not a valid cookie name, or either session
    /// limit is not a positive integer.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|var| env::var(var).ok())
    }

    /// Load configuration through an arbitrary variable lookup.
    ///
    /// # Errors
    ///
    /// Same as [`Config::from_env`].
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&'static str) -> Option<String>,
    {
        let defaults = Self::default();

        let port = match lookup("LISTS_PORT") {
            Some(raw) => raw.trim().parse::<u16>().map_err(|_| ConfigError::Invalid {
                var: "LISTS_PORT",
                value: raw,
            })?,
            None => defaults.port,
        };

        let session_cookie = match lookup("LISTS_SESSION_COOKIE") {
            Some(raw) if !is_cookie_name(raw.trim()) => {
                return Err(ConfigError::Invalid {
                    var: "LISTS_SESSION_COOKIE",
                    value: raw,
                });
            }
            Some(raw) => raw.trim().to_string(),
            None => defaults.session_cookie,
        };

        let session_capacity = match lookup("LISTS_SESSION_CAPACITY") {
            Some(raw) => positive(&raw).ok_or(ConfigError::Invalid {
                var: "LISTS_SESSION_CAPACITY",
                value: raw,
            })?,
            None => defaults.session_capacity,
        };

        let session_idle_secs = match lookup("LISTS_SESSION_IDLE_SECS") {
            Some(raw) => positive(&raw).ok_or(ConfigError::Invalid {
                var: "LISTS_SESSION_IDLE_SECS",
                value: raw,
            })?,
            None => defaults.session_idle_secs,
        };

        Ok(Self {
            host: lookup("LISTS_HOST").unwrap_or(defaults.host),
            port,
            log_level: lookup("LISTS_LOG_LEVEL").unwrap_or(defaults.log_level),
            session_cookie,
            session_capacity,
            session_idle_secs,
        })
    }

    /// How long a session may sit idle before it is dropped.
    #[must_use]
    pub const fn session_idle_timeout(&self) -> Duration {
        Duration::from_secs(self.session_idle_secs)
    }

    /// Address to bind the listener to.
    ///
    /// # Errors
    ///
    /// [`ConfigError::Invalid`] if `host` is not an IP address.
    pub fn bind_addr(&self) -> Result<SocketAddr, ConfigError> {
        format!("{}:{}", self.host, self.port)
            .parse()
            .map_err(|_| ConfigError::Invalid {
                var: "LISTS_HOST",
                value: self.host.clone(),
            })
    }
}

/// Whether `name` is a cookie name that can go into a `Set-Cookie` header:
/// a non-empty token of visible ASCII without separators.
fn is_cookie_name(name: &str) -> bool {
    const SEPARATORS: &[u8] = b"()<>@,;:\\\"/[]?={}";
    !name.is_empty()
        && name
            .bytes()
            .all(|b| b.is_ascii_graphic() && !SEPARATORS.contains(&b))
}

fn positive<T>(raw: &str) -> Option<T>
where
    T: std::str::FromStr + Default + PartialOrd,
{
    raw.trim().parse::<T>().ok().filter(|value| *value > T::default())
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(vars: &[(&'static str, &str)]) -> impl Fn(&'static str) -> Option<String> {
        let vars: HashMap<&'static str, String> =
            vars.iter().map(|(k, v)| (*k, (*v).to_string())).collect();
        move |var| vars.get(var).cloned()
    }

    #[test]
    fn defaults_when_unset() {
        let config = Config::from_lookup(lookup(&[])).unwrap();
        assert_eq!(config, Config::default());
        assert_eq!(config.bind_addr().unwrap().to_string(), "127.0.0.1:4567");
    }

    #[test]
    fn overrides_from_environment() {
        let config = Config::from_lookup(lookup(&[
            ("LISTS_HOST", "0.0.0.0"),
            ("LISTS_PORT", "8080"),
            ("LISTS_LOG_LEVEL", "debug"),
            ("LISTS_SESSION_COOKIE", "sid"),
        ]))
        .unwrap();

        assert_eq!(config.port, 8080);
        assert_eq!(config.log_level, "debug");
        assert_eq!(config.session_cookie, "sid");
        assert_eq!(config.bind_addr().unwrap().to_string(), "0.0.0.0:8080");
    }

    #[test]
    fn bad_port_is_rejected() {
        let err = Config::from_lookup(lookup(&[("LISTS_PORT", "http")])).unwrap_err();
        assert_eq!(err.to_string(), "invalid value \"http\" for LISTS_PORT");
    }

    #[test]
    fn empty_cookie_name_is_rejected() {
        assert!(Config::from_lookup(lookup(&[("LISTS_SESSION_COOKIE", " ")])).is_err());
    }

    #[test]
    fn cookie_names_must_be_header_safe() {
        for bad in ["bad name;", "a=b", "sid\"", "caf\u{e9}", "x\ty", "(sid)"] {
            let err = Config::from_lookup(lookup(&[("LISTS_SESSION_COOKIE", bad)])).unwrap_err();
            assert!(
                err.to_string().ends_with("for LISTS_SESSION_COOKIE"),
                "{bad:?} was accepted"
            );
        }

        for good in ["sid", "lists.session-id", "__Host-sid"] {
            let config = Config::from_lookup(lookup(&[("LISTS_SESSION_COOKIE", good)])).unwrap();
            assert_eq!(config.session_cookie, good);
        }
    }

    #[test]
    fn session_limits_from_environment() {
        let config = Config::from_lookup(lookup(&[
            ("LISTS_SESSION_CAPACITY", "25"),
            ("LISTS_SESSION_IDLE_SECS", "90"),
        ]))
        .unwrap();

        assert_eq!(config.session_capacity, 25);
        assert_eq!(config.session_idle_timeout(), Duration::from_secs(90));
    }

    #[test]
    fn session_limits_must_be_positive() {
        assert!(Config::from_lookup(lookup(&[("LISTS_SESSION_CAPACITY", "0")])).is_err());
        assert!(Config::from_lookup(lookup(&[("LISTS_SESSION_CAPACITY", "-3")])).is_err());
        assert!(Config::from_lookup(lookup(&[("LISTS_SESSION_IDLE_SECS", "0")])).is_err());
        assert!(Config::from_lookup(lookup(&[("LISTS_SESSION_IDLE_SECS", "soon")])).is_err());
    }

    #[test]
    fn hostname_is_not_a_bind_addr() {
        let config = Config {
            host: "localhost".to_string(),
            ..Config::default()
        };
        assert!(config.bind_addr().is_err());
    }
}
