//! HTTP client for the faucet mint endpoint.
//!
//! One endpoint is consumed: `POST {api_url}/v1/mint/{asset}` with a
//! JSON body naming the receiver address. Responses are duck-typed
//! JSON; the two known shapes are `{"message": ..}` on success and
//! `{"error": ".."}` on rejection.

use serde::Serialize;
use tracing::{debug, warn};

use crate::asset::AssetId;
use crate::error::{FaucetError, Result};

/// Body of a mint request.
#[derive(Serialize)]
struct MintRequestBody<'a> {
    receiver: &'a str,
}

/// Client for a faucet service.
pub struct FaucetClient {
    http_client: reqwest::Client,
    api_url: String,
}

impl FaucetClient {
    /// Create a new faucet client for the given base URL.
    pub fn new(api_url: &str) -> Self {
        Self {
            http_client: reqwest::Client::new(),
            api_url: api_url.trim_end_matches('/').to_string(),
        }
    }

    /// Base URL this client targets.
    pub fn api_url(&self) -> &str {
        &self.api_url
    }

    /// Request one mint of `asset` to `receiver`.
    ///
    /// Fire-once: the request is never retried. The caller is expected
    /// to have validated `receiver` already.
    ///
    /// # Returns
    /// The `message` value from the response body on success.
    pub async fn mint(&self, asset: AssetId, receiver: &str) -> Result<serde_json::Value> {
        let url = format!("{}/v1/mint/{}", self.api_url, asset.as_str());
        debug!(%url, receiver, "sending mint request");

        let response = self
            .http_client
            .post(&url)
            .json(&MintRequestBody { receiver })
            .send()
            .await
            .map_err(|e| FaucetError::Transport {
                reason: format!("Mint request failed: {}", e),
            })?;

        let status = response.status();
        let body = response.text().await.map_err(|e| FaucetError::Transport {
            reason: format!("Failed to read mint response: {}", e),
        })?;

        if !status.is_success() {
            // An unparsable or shapeless failure body still yields a
            // user-presentable message.
            let message = serde_json::from_str::<serde_json::Value>(&body)
                .ok()
                .and_then(|v| v.get("error").and_then(|e| e.as_str()).map(str::to_string))
                .unwrap_or_else(|| "Unknown error".to_string());
            warn!(%status, %message, "faucet rejected mint request");
            return Err(FaucetError::Server { message });
        }

        let body: serde_json::Value =
            serde_json::from_str(&body).map_err(|e| FaucetError::Transport {
                reason: format!("Failed to parse mint response: {}", e),
            })?;

        match body.get("message") {
            Some(message) => Ok(message.clone()),
            None => Err(FaucetError::Transport {
                reason: "Invalid mint response".to_string(),
            }),
        }
    }
}
