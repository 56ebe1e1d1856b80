//! Swap quotes for the swap-and-burn service.
//!
//! A quote is requested fresh for every swap and never cached. The current
//! gas price is read from the chain and forwarded to the provider so that its
//! route and gas estimate reflect live conditions.

use async_trait::async_trait;
use std::sync::Arc;
use swapburn_chain::{ChainError, ChainService};
use swapburn_types::{Address, Quote, U256};
use thiserror::Error;

pub mod implementations {
	pub mod openocean;
}

/// Errors that can occur while obtaining a quote.
#[derive(Debug, Error)]
pub enum QuoteError {
	/// The provider answered but reported a failure code.
	#[error("Quote provider error: {message}")]
	Provider { code: i64, message: String },
	/// The HTTP request itself failed.
	#[error("Quote request failed: {0}")]
	Network(String),
	/// The provider answered with a body that is not a usable quote.
	#[error("Invalid quote response: {0}")]
	InvalidResponse(String),
	/// The gas price lookup that precedes every quote failed.
	#[error(transparent)]
	Chain(#[from] ChainError),
}

/// Parameters of a single quote request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuoteRequest {
	pub in_token: Address,
	pub out_token: Address,
	/// Input amount in human-readable units of the input token.
	pub amount: String,
	/// Gas price in wei.
	pub gas_price: U256,
	pub slippage_bps: u32,
	/// Account that will send the swap.
	pub account: Address,
}

/// Trait defining the interface for quote providers.
#[async_trait]
pub trait QuoteInterface: Send + Sync {
	/// Requests an executable swap quote.
	async fn fetch_quote(&self, request: &QuoteRequest) -> Result<Quote, QuoteError>;
}

/// Service that pairs a quote provider with live gas price data.
pub struct QuoteService {
	implementation: Box<dyn QuoteInterface>,
	chain: Arc<ChainService>,
	account: Address,
}

impl QuoteService {
	pub fn new(
		implementation: Box<dyn QuoteInterface>,
		chain: Arc<ChainService>,
		account: Address,
	) -> Self {
		Self {
			implementation,
			chain,
			account,
		}
	}

	/// Gets a quote for swapping `amount` (human units) of `in_token` into
	/// `out_token`.
	pub async fn get_quote(
		&self,
		in_token: Address,
		out_token: Address,
		amount: &str,
		slippage_bps: u32,
	) -> Result<Quote, QuoteError> {
		let gas_price = self.chain.get_gas_price().await?;

		let request = QuoteRequest {
			in_token,
			out_token,
			amount: amount.to_string(),
			gas_price,
			slippage_bps,
			account: self.account,
		};
		tracing::debug!(?request, "Requesting swap quote");

		let quote = self.implementation.fetch_quote(&request).await?;
		tracing::info!(
			in_amount = %quote.in_amount,
			out_amount = %quote.out_amount,
			estimated_gas = quote.estimated_gas,
			"Quote received"
		);
		Ok(quote)
	}
}
