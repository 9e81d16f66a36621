use std::fmt;
use std::time::Duration;

use url::Url;

use crate::errors::ConfigError;

pub const SIMULATED_DOWNLOAD_URL_VAR: &str = "ACTION_HUB_LOAD_TESTING_SIMULATED_DOWNLOAD_URL";
pub const API_KEY_VAR: &str = "ACTION_HUB_LOAD_TESTING_API_KEY";
pub const WAIT_MS_VAR: &str = "ACTION_HUB_LOAD_TESTING_WAIT_MS";

const DEFAULT_WAIT_MS: u64 = 1000;

#[derive(Clone)]
pub struct LoadTestConfig {
    /// Sent verbatim as `form_params.simulated_download_url`.
    pub simulated_download_url: String,
    pub api_key: String,
    /// Pause between two executions of the same virtual user.
    pub wait_time: Duration,
}

impl LoadTestConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let required = |var: &'static str| {
            lookup(var)
                .filter(|value| !value.trim().is_empty())
                .ok_or(ConfigError::Missing(var))
        };

        let simulated_download_url = required(SIMULATED_DOWNLOAD_URL_VAR)?;
        Url::parse(&simulated_download_url).map_err(|e| ConfigError::Invalid {
            var: SIMULATED_DOWNLOAD_URL_VAR,
            reason: e.to_string(),
        })?;

        let api_key = required(API_KEY_VAR)?;

        let wait_ms = match lookup(WAIT_MS_VAR) {
            Some(value) => value.trim().parse::<u64>().map_err(|e| ConfigError::Invalid {
                var: WAIT_MS_VAR,
                reason: e.to_string(),
            })?,
            None => DEFAULT_WAIT_MS,
        };

        Ok(Self {
            simulated_download_url,
            api_key,
            wait_time: Duration::from_millis(wait_ms),
        })
    }
}

impl fmt::Debug for LoadTestConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LoadTestConfig")
            .field("simulated_download_url", &self.simulated_download_url)
            .field("api_key", &"<redacted>")
            .field("wait_time", &self.wait_time)
            .finish()
    }
}
