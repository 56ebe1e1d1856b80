//! Swap followed by a burn of exactly what the swap delivered.

use crate::engine::{
	burn::BurnExecutor, context::EngineContext, events::TransferEventExtractor,
	swap::SwapExecutor,
};
use crate::SwapBurnError;
use std::sync::Arc;
use swapburn_chain::ChainService;
use swapburn_types::{format_units, SwapThenBurnResult};

/// Composes swap, transfer extraction, and burn.
///
/// The burn amount comes from the swap's own `Transfer` event rather than
/// from the quote or a balance difference, so unrelated balance changes
/// never leak into it.
pub struct SwapThenBurnPipeline {
	context: Arc<EngineContext>,
	chain: Arc<ChainService>,
	swap: Arc<SwapExecutor>,
	burn: Arc<BurnExecutor>,
	extractor: TransferEventExtractor,
}

impl SwapThenBurnPipeline {
	pub fn new(
		context: Arc<EngineContext>,
		chain: Arc<ChainService>,
		swap: Arc<SwapExecutor>,
		burn: Arc<BurnExecutor>,
	) -> Self {
		Self {
			context,
			chain,
			swap,
			burn,
			extractor: TransferEventExtractor::new(),
		}
	}

	/// Swaps `amount` of the input token, then burns the output tokens the
	/// swap delivered to the service account.
	///
	/// A failed swap stops the pipeline before any burn. Once the swap is
	/// mined nothing is rolled back: a later failure leaves the swapped
	/// tokens in the account.
	pub async fn swap_then_burn(&self, amount: &str) -> Result<SwapThenBurnResult, SwapBurnError> {
		let swap = self.swap.swap(amount).await?;
		if !swap.status.is_success() {
			return Err(SwapBurnError::SwapFailed {
				tx_hash: swap.transaction_hash,
			});
		}

		let hash = swap.hash().ok_or_else(|| {
			SwapBurnError::Rpc(format!("Malformed transaction hash {}", swap.transaction_hash))
		})?;
		let receipt = self.chain.wait_for_receipt(&hash).await?;

		let output = &self.context.output_token;
		let received =
			self.extractor
				.extract_incoming_amount(&receipt, output.address, self.context.account)?;
		if received.is_zero() {
			return Err(SwapBurnError::EventNotFound {
				token: output.address.to_string(),
				recipient: self.context.account.to_string(),
				tx_hash: receipt.hash.to_string(),
			});
		}
		let burn_amount = format_units(received, output.decimals)?;
		tracing::info!(
			received = %burn_amount,
			token = %output.symbol,
			"Swap delivered tokens, burning"
		);

		let burn = self.burn.burn(&burn_amount).await?;
		Ok(SwapThenBurnResult { swap, burn })
	}
}
