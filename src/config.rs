//! Faucet client configuration.
//!
//! The base URL is passed in explicitly (or read once from the
//! environment) rather than consulted as ambient global state, so tests
//! can point a form at a local mock server.

use std::env;
use std::time::Duration;

use crate::error::{FaucetError, Result};

/// Expected bech32 prefix for Terra account addresses.
pub const TERRA_ADDRESS_PREFIX: &str = "terra";

/// How long a settled status stays visible before auto-clearing.
pub const DEFAULT_STATUS_CLEAR_DELAY: Duration = Duration::from_millis(6000);

/// Environment variable naming the faucet service base URL.
pub const API_URL_ENV: &str = "FAUCET_API_URL";

/// Configuration for a [`MintForm`](crate::form::MintForm).
#[derive(Clone, Debug)]
pub struct FaucetConfig {
    /// Base URL of the faucet service, e.g. `https://faucet.example.com`.
    pub api_url: String,
    /// bech32 prefix receiver addresses must carry.
    pub expected_prefix: String,
    /// Delay before a settled status line is cleared.
    pub status_clear_delay: Duration,
}

impl FaucetConfig {
    /// Create a configuration with the Terra defaults.
    pub fn new(api_url: &str) -> Self {
        Self {
            api_url: api_url.to_string(),
            expected_prefix: TERRA_ADDRESS_PREFIX.to_string(),
            status_clear_delay: DEFAULT_STATUS_CLEAR_DELAY,
        }
    }

    /// Create a configuration from the `FAUCET_API_URL` environment variable.
    pub fn from_env() -> Result<Self> {
        let api_url = env::var(API_URL_ENV).map_err(|_| FaucetError::Config {
            reason: format!("{} not set", API_URL_ENV),
        })?;
        Ok(Self::new(&api_url))
    }

    /// Override the expected address prefix (for non-Terra networks).
    pub fn with_expected_prefix(mut self, prefix: &str) -> Self {
        self.expected_prefix = prefix.to_string();
        self
    }

    /// Override the status auto-clear delay.
    pub fn with_status_clear_delay(mut self, delay: Duration) -> Self {
        self.status_clear_delay = delay;
        self
    }
}
