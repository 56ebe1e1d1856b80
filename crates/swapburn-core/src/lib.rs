//! Core engine for the swap-and-burn service.
//!
//! The engine coordinates the chain client, the quote provider, and the token
//! contracts to run three operations on behalf of the service account: swap
//! the input token for the output token, burn the output token, or do both in
//! sequence, burning exactly what the swap delivered.

use swapburn_account::AccountError;
use swapburn_chain::ChainError;
use swapburn_config::ConfigError;
use swapburn_quote::QuoteError;
use swapburn_types::UnitsError;
use thiserror::Error;

pub mod builder;
pub mod engine;

#[cfg(test)]
pub(crate) mod test_utils;

pub use builder::{BuilderError, SwapBurnBuilder};
pub use engine::{
	approval::ApprovalManager, balances::BalanceReader, burn::BurnExecutor,
	context::EngineContext, events::TransferEventExtractor, pipeline::SwapThenBurnPipeline,
	swap::SwapExecutor, SwapBurnEngine,
};

/// Errors produced by engine operations.
#[derive(Debug, Error)]
pub enum SwapBurnError {
	/// The caller supplied an unusable amount.
	#[error("Validation error: {0}")]
	Validation(String),
	/// The quote provider failed or returned an unusable quote.
	#[error("{0}")]
	Quote(String),
	/// A chain read or write failed, or an approval reverted.
	#[error("{0}")]
	Rpc(String),
	/// A receipt did not appear in time. The transaction may still be mined.
	#[error("Timeout waiting for transaction {tx_hash} after {timeout_seconds} seconds")]
	Timeout {
		tx_hash: String,
		timeout_seconds: u64,
	},
	#[error("Insufficient {symbol} balance. Available: {available}, Required: {required}")]
	InsufficientBalance {
		symbol: String,
		available: String,
		required: String,
	},
	/// The swap receipt carries no transfer of the output token to the account.
	#[error("No {token} Transfer to {recipient} found in transaction {tx_hash}")]
	EventNotFound {
		token: String,
		recipient: String,
		tx_hash: String,
	},
	#[error("Swap transaction {tx_hash} failed")]
	SwapFailed { tx_hash: String },
	#[error("Configuration error: {0}")]
	Config(String),
}

impl From<ChainError> for SwapBurnError {
	fn from(err: ChainError) -> Self {
		match err {
			ChainError::Timeout {
				tx_hash,
				timeout_seconds,
			} => SwapBurnError::Timeout {
				tx_hash,
				timeout_seconds,
			},
			other => SwapBurnError::Rpc(other.to_string()),
		}
	}
}

impl From<QuoteError> for SwapBurnError {
	fn from(err: QuoteError) -> Self {
		match err {
			QuoteError::Chain(chain) => chain.into(),
			other => SwapBurnError::Quote(other.to_string()),
		}
	}
}

impl From<UnitsError> for SwapBurnError {
	fn from(err: UnitsError) -> Self {
		match err {
			UnitsError::UnsupportedDecimals(_) => SwapBurnError::Config(err.to_string()),
			other => SwapBurnError::Validation(other.to_string()),
		}
	}
}

impl From<AccountError> for SwapBurnError {
	fn from(err: AccountError) -> Self {
		SwapBurnError::Config(err.to_string())
	}
}

impl From<ConfigError> for SwapBurnError {
	fn from(err: ConfigError) -> Self {
		SwapBurnError::Config(err.to_string())
	}
}
