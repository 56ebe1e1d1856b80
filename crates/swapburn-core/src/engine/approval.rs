//! Token allowance management.

use crate::engine::token;
use crate::SwapBurnError;
use std::sync::Arc;
use swapburn_chain::ChainService;
use swapburn_types::{truncate_id, Address, U256};

/// Makes sure a spender may pull a given amount of a token.
///
/// The allowance is read fresh on every check. Nothing prevents it from
/// changing between the check and the transaction that relies on it.
pub struct ApprovalManager {
	chain: Arc<ChainService>,
}

impl ApprovalManager {
	pub fn new(chain: Arc<ChainService>) -> Self {
		Self { chain }
	}

	/// Approves exactly `required` when the current allowance is lower, and
	/// waits for the approval to be mined. Does nothing otherwise.
	pub async fn ensure_approval(
		&self,
		owner: Address,
		spender: Address,
		token: Address,
		required: U256,
	) -> Result<(), SwapBurnError> {
		let current = token::allowance(&self.chain, token, owner, spender).await?;
		tracing::info!(
			token = %token,
			spender = %spender,
			current = %current,
			required = %required,
			"Checked allowance"
		);

		if current >= required {
			tracing::debug!("Sufficient allowance already exists");
			return Ok(());
		}

		let receipt = self
			.chain
			.submit_and_wait(token::approve_tx(token, spender, required))
			.await?;

		if !receipt.success {
			return Err(SwapBurnError::Rpc(format!(
				"Approval transaction {} reverted",
				receipt.hash
			)));
		}

		tracing::info!(tx_hash = %truncate_id(&receipt.hash.to_string()), "Token approval confirmed");
		Ok(())
	}
}
