//! Balance lookups for the configured tokens.

use crate::engine::{context::EngineContext, token};
use crate::SwapBurnError;
use std::sync::Arc;
use swapburn_chain::ChainService;
use swapburn_types::{format_token_amount, TokenBalance, TokenConfig};

/// Reads the service account's balance of the input and output tokens.
pub struct BalanceReader {
	context: Arc<EngineContext>,
	chain: Arc<ChainService>,
}

impl BalanceReader {
	pub fn new(context: Arc<EngineContext>, chain: Arc<ChainService>) -> Self {
		Self { context, chain }
	}

	/// Balances of the input token, then the output token.
	pub async fn balances(&self) -> Result<Vec<TokenBalance>, SwapBurnError> {
		let input = self.balance(&self.context.input_token).await?;
		let output = self.balance(&self.context.output_token).await?;
		Ok(vec![input, output])
	}

	async fn balance(&self, token: &TokenConfig) -> Result<TokenBalance, SwapBurnError> {
		let raw = token::balance_of(&self.chain, token.address, self.context.account).await?;
		Ok(TokenBalance {
			symbol: token.symbol.clone(),
			address: token.address.to_string(),
			raw: raw.to_string(),
			formatted: format_token_amount(raw, token.decimals)?,
		})
	}
}
