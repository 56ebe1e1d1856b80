//! Chain access for the swap-and-burn service.
//!
//! All chain traffic goes through [`ChainService`]: read-only contract calls,
//! submission of transactions signed by the service account, gas price
//! lookups, and polling for receipts with an upper time bound. The transport
//! itself sits behind [`ChainInterface`] so the pipeline can run against an
//! in-memory chain in tests.

use async_trait::async_trait;
use std::time::Duration;
use swapburn_types::{
	truncate_id, Address, Bytes, Transaction, TransactionHash, TransactionReceipt, U256,
};
use thiserror::Error;
use tokio::time::Instant;

pub mod implementations {
	pub mod evm {
		pub mod alloy;
	}
}

/// Errors that can occur while talking to the chain.
#[derive(Debug, Error)]
pub enum ChainError {
	/// The RPC endpoint failed or rejected the request.
	#[error("Network error: {0}")]
	Network(String),
	/// No receipt appeared within the configured bound.
	#[error("Timeout waiting for transaction {tx_hash} after {timeout_seconds} seconds")]
	Timeout {
		tx_hash: String,
		timeout_seconds: u64,
	},
	/// The node answered with data that could not be interpreted.
	#[error("Invalid response: {0}")]
	InvalidResponse(String),
	/// The signing key could not be turned into a wallet.
	#[error("Invalid signing key: {0}")]
	InvalidKey(String),
}

/// Low-level chain transport.
#[async_trait]
pub trait ChainInterface: Send + Sync {
	/// Executes a read-only call against `to` and returns the raw return data.
	async fn call(&self, to: Address, data: Bytes) -> Result<Bytes, ChainError>;

	/// Signs and broadcasts a transaction, returning its hash once accepted by
	/// the node.
	async fn submit(&self, tx: Transaction) -> Result<TransactionHash, ChainError>;

	/// Returns the receipt if the transaction has been mined.
	async fn get_receipt(
		&self,
		hash: &TransactionHash,
	) -> Result<Option<TransactionReceipt>, ChainError>;

	/// Current gas price in wei.
	async fn get_gas_price(&self) -> Result<U256, ChainError>;
}

/// Service wrapping a chain transport with receipt polling.
pub struct ChainService {
	implementation: Box<dyn ChainInterface>,
	receipt_timeout: Duration,
	poll_interval: Duration,
}

impl ChainService {
	pub fn new(
		implementation: Box<dyn ChainInterface>,
		receipt_timeout: Duration,
		poll_interval: Duration,
	) -> Self {
		Self {
			implementation,
			receipt_timeout,
			poll_interval,
		}
	}

	/// Executes a read-only contract call.
	pub async fn call(&self, to: Address, data: Bytes) -> Result<Bytes, ChainError> {
		self.implementation.call(to, data).await
	}

	/// Submits a transaction without waiting for it to be mined.
	pub async fn submit(&self, tx: Transaction) -> Result<TransactionHash, ChainError> {
		let to = tx.to;
		let hash = self.implementation.submit(tx).await?;
		tracing::info!(
			tx_hash = %truncate_id(&hash.to_string()),
			to = %to,
			"Submitted transaction"
		);
		Ok(hash)
	}

	/// Polls until the transaction is mined or the receipt timeout elapses.
	///
	/// A mined transaction is returned whether it succeeded or reverted; the
	/// caller decides what a revert means.
	pub async fn wait_for_receipt(
		&self,
		hash: &TransactionHash,
	) -> Result<TransactionReceipt, ChainError> {
		let start_time = Instant::now();

		loop {
			if let Some(receipt) = self.implementation.get_receipt(hash).await? {
				tracing::info!(
					tx_hash = %truncate_id(&hash.to_string()),
					block = receipt.block_number,
					success = receipt.success,
					"Transaction mined"
				);
				return Ok(receipt);
			}

			if start_time.elapsed() >= self.receipt_timeout {
				return Err(ChainError::Timeout {
					tx_hash: hash.to_string(),
					timeout_seconds: self.receipt_timeout.as_secs(),
				});
			}

			tracing::debug!(tx_hash = %truncate_id(&hash.to_string()), "Receipt not available yet");
			tokio::time::sleep(self.poll_interval).await;
		}
	}

	/// Submits a transaction and waits for its receipt.
	pub async fn submit_and_wait(&self, tx: Transaction) -> Result<TransactionReceipt, ChainError> {
		let hash = self.submit(tx).await?;
		self.wait_for_receipt(&hash).await
	}

	/// Current gas price in wei.
	pub async fn get_gas_price(&self) -> Result<U256, ChainError> {
		self.implementation.get_gas_price().await
	}
}
