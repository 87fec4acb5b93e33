//! # terra-faucet
//!
//! Client-side mint request logic for the Terra Classic testnet faucet.
//!
//! The crate validates bech32 receiver addresses against a network
//! prefix and drives single mint requests against a faucet service,
//! mapping the response into a transient, auto-clearing status line.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use terra_faucet::{FaucetConfig, MintForm};
//!
//! # async fn run() {
//! let form = MintForm::new(FaucetConfig::new("https://faucet.terraclassic.example"));
//!
//! form.submit("lunc", "terra1...").await;
//!
//! if let Some(status) = form.status() {
//!     println!("{status}");
//! }
//! # }
//! ```
//!
//! Submissions never abort the form: validation failures, transport
//! errors, and server rejections all settle into a status message and
//! leave the form interactive.

pub mod address;
pub mod asset;
pub mod client;
pub mod config;
pub mod error;
pub mod form;

// Re-export the form-facing surface
pub use address::{decode_address, is_valid_address, DecodedAddress};
pub use asset::AssetId;
pub use client::FaucetClient;
pub use config::{FaucetConfig, DEFAULT_STATUS_CLEAR_DELAY, TERRA_ADDRESS_PREFIX};
pub use error::{FaucetError, Result};
pub use form::{MintForm, MintOutcome, RequestState};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
