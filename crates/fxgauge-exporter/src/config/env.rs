//! Process settings from environment variables.
//!
//! | var                | default                                   |
//! |--------------------|-------------------------------------------|
//! | `LISTEN_ADDR`      | `0.0.0.0:9393`                            |
//! | `CONFIG_FILE`      | `./config.yaml` (empty disables)          |
//! | `REFRESH_INTERVAL` | `600` seconds                             |
//! | `FETCH_TIMEOUT`    | `30` seconds                              |
//! | `UPSTREAM_URL`     | `http://www.cbr.ru/scripts/XML_daily.asp` |
//!
//! Durations that are not a positive integer fall back to their default with
//! a warning; a zero interval would turn the refresh loop into a busy loop.

use std::net::SocketAddr;
use std::path::PathBuf;
use std::time::Duration;

use serde::Deserialize;

use fxgauge_core::error::{FxError, Result};

pub const DEFAULT_LISTEN_ADDR: &str = "0.0.0.0:9393";
pub const DEFAULT_CONFIG_FILE: &str = "./config.yaml";
pub const DEFAULT_REFRESH_INTERVAL_SECS: u64 = 600;
pub const DEFAULT_FETCH_TIMEOUT_SECS: u64 = 30;
pub const DEFAULT_UPSTREAM_URL: &str = "http://www.cbr.ru/scripts/XML_daily.asp";

/// Raw view of the environment; everything optional and unparsed.
#[derive(Debug, Default, Deserialize)]
struct RawEnv {
    listen_addr: Option<String>,
    config_file: Option<String>,
    refresh_interval: Option<String>,
    fetch_timeout: Option<String>,
    upstream_url: Option<String>,
}

#[derive(Debug, Clone)]
pub struct Settings {
    pub listen_addr: SocketAddr,
    /// `None` when `CONFIG_FILE` is set to an empty string.
    pub config_file: Option<PathBuf>,
    pub refresh_interval: Duration,
    pub fetch_timeout: Duration,
    pub upstream_url: String,
}

impl Settings {
    pub fn from_env() -> Result<Self> {
        let raw: RawEnv = envy::from_env()
            .map_err(|e| FxError::Config(format!("read environment failed: {e}")))?;
        Self::from_raw(raw)
    }

    /// Same as [`Settings::from_env`] over an explicit set of variables.
    pub fn from_vars<I>(vars: I) -> Result<Self>
    where
        I: IntoIterator<Item = (String, String)>,
    {
        let raw: RawEnv = envy::from_iter(vars)
            .map_err(|e| FxError::Config(format!("read environment failed: {e}")))?;
        Self::from_raw(raw)
    }

    fn from_raw(raw: RawEnv) -> Result<Self> {
        let listen = raw.listen_addr.as_deref().unwrap_or(DEFAULT_LISTEN_ADDR);
        let listen_addr: SocketAddr = listen.trim().parse().map_err(|_| {
            FxError::Config(format!("LISTEN_ADDR must be a valid socket address: {listen}"))
        })?;

        let config_file = match raw.config_file.as_deref() {
            None => Some(PathBuf::from(DEFAULT_CONFIG_FILE)),
            Some(p) if p.trim().is_empty() => None,
            Some(p) => Some(PathBuf::from(p)),
        };

        let upstream_url = match raw.upstream_url {
            Some(u) if !u.trim().is_empty() => u.trim().to_string(),
            _ => DEFAULT_UPSTREAM_URL.to_string(),
        };

        Ok(Self {
            listen_addr,
            config_file,
            refresh_interval: positive_secs(
                "REFRESH_INTERVAL",
                raw.refresh_interval.as_deref(),
                DEFAULT_REFRESH_INTERVAL_SECS,
            ),
            fetch_timeout: positive_secs(
                "FETCH_TIMEOUT",
                raw.fetch_timeout.as_deref(),
                DEFAULT_FETCH_TIMEOUT_SECS,
            ),
            upstream_url,
        })
    }
}

fn positive_secs(var: &str, raw: Option<&str>, fallback: u64) -> Duration {
    let Some(raw) = raw else {
        return Duration::from_secs(fallback);
    };

    match raw.trim().parse::<u64>() {
        Ok(secs) if secs > 0 => Duration::from_secs(secs),
        _ => {
            tracing::warn!(
                var,
                value = raw,
                fallback_secs = fallback,
                "expected a positive number of seconds, using fallback"
            );
            Duration::from_secs(fallback)
        }
    }
}
