//! Construction of a [`SwapBurnEngine`] from configuration.
//!
//! The builder creates the account, the chain service, and the quote
//! provider, reads the account address once, and captures everything the
//! components need in a single [`EngineContext`].

use crate::engine::{context::EngineContext, SwapBurnEngine};
use crate::SwapBurnError;
use std::sync::Arc;
use std::time::Duration;
use swapburn_account::{implementations::local::create_account, AccountError, AccountService};
use swapburn_chain::{implementations::evm::alloy::create_chain_service, ChainError};
use swapburn_config::Config;
use swapburn_quote::{implementations::openocean::OpenOceanQuote, QuoteError, QuoteService};
use thiserror::Error;

/// Errors that can occur during engine construction.
#[derive(Debug, Error)]
pub enum BuilderError {
	#[error("Account setup failed: {0}")]
	Account(#[from] AccountError),
	#[error("Chain setup failed: {0}")]
	Chain(#[from] ChainError),
	#[error("Quote provider setup failed: {0}")]
	Quote(#[from] QuoteError),
}

impl From<BuilderError> for SwapBurnError {
	fn from(err: BuilderError) -> Self {
		SwapBurnError::Config(err.to_string())
	}
}

/// Builder for constructing a SwapBurnEngine from a validated [`Config`].
pub struct SwapBurnBuilder {
	config: Config,
}

impl SwapBurnBuilder {
	pub fn new(config: Config) -> Self {
		Self { config }
	}

	/// Builds the engine. No network traffic happens here; the RPC endpoint
	/// and quote API are first contacted by the first operation.
	pub async fn build(self) -> Result<SwapBurnEngine, BuilderError> {
		let config = self.config;

		let account = AccountService::new(create_account(&config.account.private_key)?);
		let address = account.get_address().await?;
		tracing::info!(component = "account", address = %address, "Loaded");

		let chain = Arc::new(create_chain_service(
			&config.network.rpc_url,
			config.network.chain_id,
			&account,
			Duration::from_secs(config.network.receipt_timeout_seconds),
			Duration::from_secs(config.network.poll_interval_seconds),
		)?);
		tracing::info!(
			component = "chain",
			chain_id = config.network.chain_id,
			receipt_timeout_seconds = config.network.receipt_timeout_seconds,
			"Loaded"
		);

		let provider = OpenOceanQuote::new(
			&config.quote.base_url,
			config.network.chain_id,
			Duration::from_secs(config.quote.timeout_seconds),
		)?;
		let quote = Arc::new(QuoteService::new(Box::new(provider), chain.clone(), address));
		tracing::info!(component = "quote", base_url = %config.quote.base_url, "Loaded");

		let context = Arc::new(EngineContext {
			account: address,
			chain_id: config.network.chain_id,
			router: config.quote.router_address,
			input_token: config.tokens.input,
			output_token: config.tokens.output,
			slippage_bps: config.quote.slippage_bps,
		});
		tracing::info!(
			input = %context.input_token.symbol,
			output = %context.output_token.symbol,
			slippage_bps = context.slippage_bps,
			"Engine ready"
		);

		Ok(SwapBurnEngine::new(context, chain, quote))
	}
}
