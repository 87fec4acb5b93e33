//! Mint request orchestration and status lifecycle.
//!
//! A [`MintForm`] drives one submission at a time: pre-flight field
//! checks, address validation, a single mint request, and a transient
//! status line that auto-clears after a fixed delay.

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use std::time::Duration;

use tracing::debug;

use crate::address::is_valid_address;
use crate::asset::AssetId;
use crate::client::FaucetClient;
use crate::config::FaucetConfig;
use crate::error::FaucetError;

/// Whether the form can accept a new submission.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RequestState {
    /// No submission attempted yet.
    Idle,
    /// A mint request is in flight; submit is disabled.
    Loading,
    /// The last mint request settled; submit is enabled again.
    Settled,
}

/// Outcome of one submission, as displayed to the user.
#[derive(Clone, Debug, PartialEq)]
pub enum MintOutcome {
    Success { message: serde_json::Value },
    Failure { error_text: String },
}

impl MintOutcome {
    pub fn is_success(&self) -> bool {
        matches!(self, MintOutcome::Success { .. })
    }

    /// Render the status line shown under the form.
    pub fn status_line(&self) -> String {
        match self {
            MintOutcome::Success { message } => format!("✅ Success: {}", message),
            MintOutcome::Failure { error_text } => format!("❌ Error: {}", error_text),
        }
    }
}

struct FormState {
    request_state: RequestState,
    status: Option<MintOutcome>,
    /// Bumped on every status write; stale clear timers compare against it.
    status_epoch: u64,
}

fn lock(state: &Mutex<FormState>) -> MutexGuard<'_, FormState> {
    state.lock().unwrap_or_else(PoisonError::into_inner)
}

/// Releases the `Loading` flag on every exit path of the network leg,
/// including cancellation of the submit future.
struct SettleGuard {
    state: Arc<Mutex<FormState>>,
}

impl Drop for SettleGuard {
    fn drop(&mut self) {
        lock(&self.state).request_state = RequestState::Settled;
    }
}

/// One faucet request form.
///
/// All state lives behind an `Arc`, so the auto-clear timer spawned per
/// settled submission holds only a weak reference and no-ops if the
/// form has been torn down by the time it fires.
pub struct MintForm {
    client: FaucetClient,
    expected_prefix: String,
    status_clear_delay: Duration,
    state: Arc<Mutex<FormState>>,
}

impl MintForm {
    /// Create a form for the faucet named in `config`.
    pub fn new(config: FaucetConfig) -> Self {
        Self {
            client: FaucetClient::new(&config.api_url),
            expected_prefix: config.expected_prefix,
            status_clear_delay: config.status_clear_delay,
            state: Arc::new(Mutex::new(FormState {
                request_state: RequestState::Idle,
                status: None,
                status_epoch: 0,
            })),
        }
    }

    /// Current rendered status line, if any.
    pub fn status(&self) -> Option<String> {
        lock(&self.state)
            .status
            .as_ref()
            .map(MintOutcome::status_line)
    }

    pub fn request_state(&self) -> RequestState {
        lock(&self.state).request_state
    }

    /// True while a mint request is in flight.
    pub fn is_loading(&self) -> bool {
        self.request_state() == RequestState::Loading
    }

    /// Drive one end-to-end submission from raw form values.
    ///
    /// Returns the outcome, or `None` when a previous submission is
    /// still in flight (re-submission while loading is a no-op).
    pub async fn submit(&self, asset: &str, address: &str) -> Option<MintOutcome> {
        if self.is_loading() {
            debug!("submit ignored: request already in flight");
            return None;
        }

        if asset.is_empty() || address.is_empty() {
            return Some(self.reject(FaucetError::MissingFields));
        }

        let asset: AssetId = match asset.parse() {
            Ok(asset) => asset,
            Err(e) => return Some(self.reject(e)),
        };

        if !is_valid_address(address, &self.expected_prefix) {
            return Some(self.reject(FaucetError::InvalidAddress));
        }

        // At most one request in flight per form.
        {
            let mut state = lock(&self.state);
            if state.request_state == RequestState::Loading {
                return None;
            }
            state.request_state = RequestState::Loading;
        }

        let result = {
            let _settle = SettleGuard {
                state: Arc::clone(&self.state),
            };
            self.client.mint(asset, address).await
        };

        let outcome = match result {
            Ok(message) => MintOutcome::Success { message },
            Err(e) => MintOutcome::Failure {
                error_text: e.to_string(),
            },
        };

        let epoch = self.set_status(outcome.clone());
        self.schedule_clear(epoch);
        Some(outcome)
    }

    /// Pre-flight and validation failures set the status without
    /// touching the request state or scheduling a clear; the form stays
    /// interactive and the message persists until superseded.
    fn reject(&self, error: FaucetError) -> MintOutcome {
        let outcome = MintOutcome::Failure {
            error_text: error.to_string(),
        };
        self.set_status(outcome.clone());
        outcome
    }

    fn set_status(&self, outcome: MintOutcome) -> u64 {
        let mut state = lock(&self.state);
        state.status = Some(outcome);
        state.status_epoch += 1;
        state.status_epoch
    }

    /// Schedule the one-shot timer that clears the status line.
    fn schedule_clear(&self, epoch: u64) {
        let state = Arc::downgrade(&self.state);
        let delay = self.status_clear_delay;
        tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            // Superseded statuses and torn-down forms are left alone.
            let Some(state) = state.upgrade() else { return };
            let mut state = lock(&state);
            if state.status_epoch == epoch {
                state.status = None;
            }
        });
    }
}
