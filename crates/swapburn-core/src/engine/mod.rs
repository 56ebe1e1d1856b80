//! Swap-and-burn engine.
//!
//! [`SwapBurnEngine`] is the single entry point used by the HTTP service. It
//! owns one instance of each component, all sharing the same
//! [`EngineContext`] and chain service, and is itself shared behind an `Arc`
//! across concurrent requests.

use crate::SwapBurnError;
use std::sync::Arc;
use swapburn_chain::ChainService;
use swapburn_quote::QuoteService;
use swapburn_types::{
	parse_units, Address, BurnResult, SwapThenBurnResult, TokenBalance, TokenConfig,
	TransactionResult, U256,
};
use tracing::instrument;

pub mod approval;
pub mod balances;
pub mod burn;
pub mod context;
pub mod events;
pub mod pipeline;
pub mod swap;
pub(crate) mod token;

use self::{
	balances::BalanceReader, burn::BurnExecutor, context::EngineContext,
	pipeline::SwapThenBurnPipeline, swap::SwapExecutor,
};

/// Converts a caller-supplied amount into smallest units of `token`,
/// rejecting anything that is not a strictly positive decimal.
pub(crate) fn parse_amount(amount: &str, token: &TokenConfig) -> Result<U256, SwapBurnError> {
	let value = parse_units(amount, token.decimals).map_err(|e| {
		SwapBurnError::Validation(format!("Invalid {} amount: {}", token.symbol, e))
	})?;
	if value.is_zero() {
		return Err(SwapBurnError::Validation(
			"Amount must be greater than 0".to_string(),
		));
	}
	Ok(value)
}

/// Facade over the swap, burn, pipeline, and balance components.
pub struct SwapBurnEngine {
	context: Arc<EngineContext>,
	swap: Arc<SwapExecutor>,
	burn: Arc<BurnExecutor>,
	pipeline: SwapThenBurnPipeline,
	balances: BalanceReader,
}

impl SwapBurnEngine {
	pub fn new(
		context: Arc<EngineContext>,
		chain: Arc<ChainService>,
		quote: Arc<QuoteService>,
	) -> Self {
		let swap = Arc::new(SwapExecutor::new(context.clone(), chain.clone(), quote));
		let burn = Arc::new(BurnExecutor::new(context.clone(), chain.clone()));
		let pipeline =
			SwapThenBurnPipeline::new(context.clone(), chain.clone(), swap.clone(), burn.clone());
		let balances = BalanceReader::new(context.clone(), chain);

		Self {
			context,
			swap,
			burn,
			pipeline,
			balances,
		}
	}

	/// Address of the service account.
	pub fn account(&self) -> Address {
		self.context.account
	}

	pub fn context(&self) -> &EngineContext {
		&self.context
	}

	/// Swaps `amount` of the input token into the output token.
	#[instrument(skip_all, fields(amount = %amount))]
	pub async fn swap(&self, amount: &str) -> Result<TransactionResult, SwapBurnError> {
		self.swap.swap(amount).await
	}

	/// Swaps, then burns exactly what the swap delivered.
	#[instrument(skip_all, fields(amount = %amount))]
	pub async fn swap_then_burn(&self, amount: &str) -> Result<SwapThenBurnResult, SwapBurnError> {
		self.pipeline.swap_then_burn(amount).await
	}

	/// Burns `amount` of the output token from the service account.
	#[instrument(skip_all, fields(amount = %amount))]
	pub async fn burn(&self, amount: &str) -> Result<BurnResult, SwapBurnError> {
		self.burn.burn(amount).await
	}

	/// Current balances of both configured tokens.
	#[instrument(skip_all)]
	pub async fn balances(&self) -> Result<Vec<TokenBalance>, SwapBurnError> {
		self.balances.balances().await
	}
}
