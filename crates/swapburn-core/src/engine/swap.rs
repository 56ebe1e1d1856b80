//! Swap execution through the aggregator router.

use crate::engine::{approval::ApprovalManager, context::EngineContext, parse_amount};
use crate::SwapBurnError;
use std::sync::Arc;
use swapburn_chain::ChainService;
use swapburn_quote::QuoteService;
use swapburn_types::{Transaction, TransactionReceipt, TransactionResult};

/// Headroom applied on top of the provider's gas estimate, in percent.
const GAS_LIMIT_PERCENT: u64 = 125;

/// Gas limit submitted with a swap: the estimate plus 25%, rounded down.
pub(crate) fn swap_gas_limit(estimated_gas: u64) -> u64 {
	estimated_gas.saturating_mul(GAS_LIMIT_PERCENT) / 100
}

/// Swaps the configured input token into the configured output token.
pub struct SwapExecutor {
	context: Arc<EngineContext>,
	chain: Arc<ChainService>,
	quote: Arc<QuoteService>,
	approvals: ApprovalManager,
}

impl SwapExecutor {
	pub fn new(
		context: Arc<EngineContext>,
		chain: Arc<ChainService>,
		quote: Arc<QuoteService>,
	) -> Self {
		Self {
			approvals: ApprovalManager::new(chain.clone()),
			context,
			chain,
			quote,
		}
	}

	/// Swaps `amount` (human units of the input token) and returns the
	/// normalized result of the swap transaction.
	pub async fn swap(&self, amount: &str) -> Result<TransactionResult, SwapBurnError> {
		let receipt = self.execute(amount).await?;
		Ok(TransactionResult::from(&receipt))
	}

	/// Runs the swap and returns the raw receipt.
	///
	/// A reverted swap is still a receipt here; the caller inspects `success`.
	async fn execute(&self, amount: &str) -> Result<TransactionReceipt, SwapBurnError> {
		let input = &self.context.input_token;
		let output = &self.context.output_token;
		let amount_in = parse_amount(amount, input)?;

		tracing::info!(
			amount = %amount.trim(),
			from = %input.symbol,
			to = %output.symbol,
			"Starting swap"
		);

		let quote = self
			.quote
			.get_quote(
				input.address,
				output.address,
				amount.trim(),
				self.context.slippage_bps,
			)
			.await?;
		tracing::debug!(?quote, "Quote received");

		self.approvals
			.ensure_approval(
				self.context.account,
				self.context.router,
				input.address,
				amount_in,
			)
			.await?;

		let tx = Transaction::call(quote.to, quote.data.clone())
			.with_value(quote.value)
			.with_gas_limit(swap_gas_limit(quote.estimated_gas));

		let receipt = self.chain.submit_and_wait(tx).await?;
		tracing::info!(
			tx_hash = %receipt.hash,
			success = receipt.success,
			gas_used = receipt.gas_used,
			"Swap completed"
		);
		Ok(receipt)
	}
}
