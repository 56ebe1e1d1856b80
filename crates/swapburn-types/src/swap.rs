//! Swap, burn, and transfer types.
//!
//! A [`Quote`] is produced once per swap request and consumed by the swap
//! that follows it. [`TransactionResult`] and [`BurnResult`] are the
//! normalized, JSON-serializable outcomes returned to callers.

use crate::chain::{TransactionHash, TransactionReceipt};
use alloy::primitives::{Address, Bytes, U256};
use serde::{Deserialize, Serialize};

/// Token descriptor as reported by the quote provider.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuoteToken {
	pub address: Address,
	pub symbol: String,
	pub decimals: u8,
}

/// A validated swap quote.
///
/// Quotes reflect market conditions at the time they were requested and are
/// never reused across swaps.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Quote {
	/// Token being sold.
	pub in_token: QuoteToken,
	/// Token being bought.
	pub out_token: QuoteToken,
	/// Input amount in the input token's smallest unit.
	pub in_amount: U256,
	/// Estimated output amount in the output token's smallest unit.
	pub out_amount: U256,
	/// Contract the swap transaction must be sent to.
	pub to: Address,
	/// Call payload for the swap transaction.
	pub data: Bytes,
	/// Native value to attach to the swap transaction.
	pub value: U256,
	/// Provider gas estimate for the swap.
	pub estimated_gas: u64,
	/// Provider status code.
	pub code: u16,
}

/// Terminal status of a mined transaction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransactionStatus {
	Success,
	Failed,
}

impl TransactionStatus {
	pub fn is_success(&self) -> bool {
		matches!(self, TransactionStatus::Success)
	}
}

/// Normalized outcome of a confirmed transaction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TransactionResult {
	/// Transaction hash with 0x prefix.
	pub transaction_hash: String,
	pub status: TransactionStatus,
	/// Gas consumed, as a decimal string.
	pub gas_used: String,
	pub block_number: u64,
}

impl From<&TransactionReceipt> for TransactionResult {
	fn from(receipt: &TransactionReceipt) -> Self {
		Self {
			transaction_hash: receipt.hash.to_string(),
			status: if receipt.success {
				TransactionStatus::Success
			} else {
				TransactionStatus::Failed
			},
			gas_used: receipt.gas_used.to_string(),
			block_number: receipt.block_number,
		}
	}
}

impl TransactionResult {
	/// Parses the hash back into its typed form.
	pub fn hash(&self) -> Option<TransactionHash> {
		self.transaction_hash.parse().ok().map(TransactionHash)
	}
}

/// Outcome of a burn, including the amount burned and the remaining balance.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BurnResult {
	#[serde(flatten)]
	pub transaction: TransactionResult,
	/// Amount burned, in human-readable units as requested.
	pub amount_burned: String,
	/// Balance left after the burn, in human-readable units.
	pub balance: String,
}

/// Combined outcome of a swap followed by a burn of the received tokens.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SwapThenBurnResult {
	pub swap: TransactionResult,
	pub burn: BurnResult,
}

/// A decoded ERC20 `Transfer` event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransferEvent {
	/// Contract that emitted the event.
	pub token: Address,
	pub from: Address,
	pub to: Address,
	pub value: U256,
}

/// Balance of one configured token held by the service account.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenBalance {
	pub symbol: String,
	pub address: String,
	/// Balance in the token's smallest unit.
	pub raw: String,
	/// Balance in human-readable units.
	pub formatted: String,
}
