//! Burning of the output token held by the service account.

use crate::engine::{context::EngineContext, parse_amount, token};
use crate::SwapBurnError;
use std::sync::Arc;
use swapburn_chain::ChainService;
use swapburn_types::{format_token_amount, BurnResult, TransactionResult};

/// Burns the configured output token from the service account.
pub struct BurnExecutor {
	context: Arc<EngineContext>,
	chain: Arc<ChainService>,
}

impl BurnExecutor {
	pub fn new(context: Arc<EngineContext>, chain: Arc<ChainService>) -> Self {
		Self { context, chain }
	}

	/// Burns `amount` (human units of the output token).
	///
	/// The balance is checked first and nothing is submitted when it falls
	/// short. The returned balance is computed from the pre-burn read rather
	/// than read again.
	pub async fn burn(&self, amount: &str) -> Result<BurnResult, SwapBurnError> {
		let token = &self.context.output_token;
		let amount = amount.trim();
		let amount_raw = parse_amount(amount, token)?;

		let balance = token::balance_of(&self.chain, token.address, self.context.account).await?;
		let available = format_token_amount(balance, token.decimals)?;
		tracing::info!(
			token = %token.symbol,
			balance = %available,
			amount = %amount,
			"Starting burn"
		);

		if balance < amount_raw {
			return Err(SwapBurnError::InsufficientBalance {
				symbol: token.symbol.clone(),
				available,
				required: amount.to_string(),
			});
		}

		let receipt = self
			.chain
			.submit_and_wait(token::burn_tx(token.address, amount_raw))
			.await?;

		let remaining = if receipt.success {
			balance - amount_raw
		} else {
			tracing::warn!(tx_hash = %receipt.hash, "Burn transaction reverted");
			balance
		};

		Ok(BurnResult {
			transaction: TransactionResult::from(&receipt),
			amount_burned: amount.to_string(),
			balance: format_token_amount(remaining, token.decimals)?,
		})
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::test_utils::{context, FakeChain, OUTPUT_TOKEN};
	use swapburn_types::{TransactionStatus, U256};

	#[tokio::test]
	async fn test_insufficient_balance_writes_nothing() {
		let chain = FakeChain::new().with_balance(OUTPUT_TOKEN, U256::from(5_000u64));
		let executor = BurnExecutor::new(context(), chain.service());

		let err = executor.burn("100").await.unwrap_err();

		match err {
			SwapBurnError::InsufficientBalance {
				symbol,
				available,
				required,
			} => {
				assert_eq!(symbol, "IDRX");
				assert_eq!(available, "50");
				assert_eq!(required, "100");
			},
			other => panic!("expected insufficient balance, got {other:?}"),
		}
		assert!(chain.state.lock().unwrap().submitted.is_empty());
	}

	#[tokio::test]
	async fn test_burn_reports_remaining_balance() {
		let chain = FakeChain::new().with_balance(OUTPUT_TOKEN, U256::from(300_000u64));
		let executor = BurnExecutor::new(context(), chain.service());

		let result = executor.burn("2500.00").await.unwrap();

		assert_eq!(result.transaction.status, TransactionStatus::Success);
		assert_eq!(result.amount_burned, "2500.00");
		assert_eq!(result.balance, "500");

		let state = chain.state.lock().unwrap();
		let burns = state.burns();
		assert_eq!(burns.len(), 1);
		assert_eq!(burns[0].to, OUTPUT_TOKEN);
		assert_eq!(
			U256::from_be_slice(&burns[0].data[4..36]),
			U256::from(250_000u64)
		);
		assert_eq!(state.balances.get(&OUTPUT_TOKEN), Some(&U256::from(50_000u64)));
	}

	#[tokio::test]
	async fn test_burn_entire_balance() {
		let chain = FakeChain::new().with_balance(OUTPUT_TOKEN, U256::from(1_050u64));
		let executor = BurnExecutor::new(context(), chain.service());

		let result = executor.burn("10.5").await.unwrap();

		assert_eq!(result.balance, "0");
	}

	#[tokio::test]
	async fn test_rejects_excess_precision() {
		let chain = FakeChain::new().with_balance(OUTPUT_TOKEN, U256::from(1_000u64));
		let executor = BurnExecutor::new(context(), chain.service());

		let err = executor.burn("1.005").await.unwrap_err();

		assert!(matches!(err, SwapBurnError::Validation(_)));
		assert!(chain.state.lock().unwrap().submitted.is_empty());
	}
}
