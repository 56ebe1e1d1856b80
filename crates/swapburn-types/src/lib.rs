//! Common types for the swap-and-burn service.
//!
//! This crate holds the data types shared by every other crate in the
//! workspace: chain transactions and receipts, token configuration, swap
//! quotes and results, API error responses, and the unit conversion helpers
//! that move amounts between human-readable and smallest-unit form.

/// API request/response and error types for the HTTP boundary.
pub mod api;
/// Transaction and receipt types for chain interactions.
pub mod chain;
/// Secret string wrapper for private key material.
pub mod secret_string;
/// Quote, transaction result, and transfer event types.
pub mod swap;
/// Token configuration types.
pub mod tokens;
/// Formatting and unit conversion helpers.
pub mod utils;

pub use api::*;
pub use chain::*;
pub use secret_string::SecretString;
pub use swap::*;
pub use tokens::TokenConfig;
pub use utils::{
	bps_to_percent, format_token_amount, format_units, parse_units, truncate_id,
	without_0x_prefix, UnitsError,
};

/// Re-exported primitive types so downstream crates agree on one version.
pub use alloy::primitives::{Address, Bytes, Log, B256, U256};
