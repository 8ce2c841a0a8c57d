// src/config/options.rs
use std::{env, time::Duration};

use super::consts::*;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ClientOptions {
    /// Site root, e.g. `https://v2ex.com`. Trailing slashes are dropped by the client.
    pub base_url: String,
    /// Raw `Cookie` header value for a logged-in session.
    pub cookie: Option<String>,
    /// Whole-request timeout. `None` waits indefinitely.
    pub timeout: Option<Duration>,
}

impl Default for ClientOptions {
    fn default() -> Self {
        Self {
            base_url: s!(DEFAULT_BASE_URL),
            cookie: None,
            timeout: Some(Duration::from_secs(REQUEST_TIMEOUT_SECS)),
        }
    }
}

impl ClientOptions {
    /// Read `BASE_URL`, `COOKIE` and `TX2JSON_TIMEOUT_SECS` from the process environment.
    /// Unset or empty values keep their defaults. A timeout of `0` disables it.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub(crate) fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut opts = Self::default();
        let get = |key: &str| lookup(key).map(|v| v.trim().to_string()).filter(|v| !v.is_empty());

        if let Some(base) = get(ENV_BASE_URL) {
            opts.base_url = base;
        }
        opts.cookie = get(ENV_COOKIE);

        if let Some(raw) = get(ENV_TIMEOUT_SECS) {
            match raw.parse::<u64>() {
                Ok(0) => opts.timeout = None,
                Ok(secs) => opts.timeout = Some(Duration::from_secs(secs)),
                Err(_) => log::warn!("Ignoring {ENV_TIMEOUT_SECS}={raw:?}: not a whole number of seconds"),
            }
        }
        opts
    }

    pub fn with_cookie(mut self, cookie: impl Into<String>) -> Self {
        let cookie = cookie.into();
        self.cookie = if cookie.trim().is_empty() { None } else { Some(cookie) };
        self
    }
}
