//! Alloy-backed EVM chain transport.
//!
//! Requests go through a single HTTP provider whose wallet filler signs every
//! outgoing transaction with the service account. Nonce, fee, and (when no
//! explicit limit is given) gas estimation are handled by the provider's
//! recommended fillers.

use crate::{ChainError, ChainInterface, ChainService};
use alloy::network::{EthereumWallet, ReceiptResponse, TransactionBuilder};
use alloy::providers::{DynProvider, Provider, ProviderBuilder};
use alloy::rpc::types::TransactionRequest;
use alloy::signers::local::PrivateKeySigner;
use alloy::signers::Signer;
use async_trait::async_trait;
use std::time::Duration;
use swapburn_account::AccountService;
use swapburn_types::{Address, Bytes, Transaction, TransactionHash, TransactionReceipt, U256};

/// Alloy-based EVM chain implementation for a single network.
pub struct AlloyChain {
	provider: DynProvider,
	chain_id: u64,
}

impl AlloyChain {
	/// Creates a provider for `rpc_url` that signs with `signer` on `chain_id`.
	pub fn new(
		rpc_url: &str,
		chain_id: u64,
		signer: PrivateKeySigner,
	) -> Result<Self, ChainError> {
		let url = rpc_url
			.parse()
			.map_err(|e| ChainError::Network(format!("Invalid RPC URL {}: {}", rpc_url, e)))?;

		let wallet = EthereumWallet::from(signer.with_chain_id(Some(chain_id)));
		let provider = ProviderBuilder::new()
			.wallet(wallet)
			.connect_http(url)
			.erased();

		Ok(Self { provider, chain_id })
	}
}

fn to_request(tx: Transaction) -> TransactionRequest {
	let request = TransactionRequest::default()
		.with_to(tx.to)
		.with_input(tx.data)
		.with_value(tx.value);

	match tx.gas_limit {
		Some(gas_limit) => request.with_gas_limit(gas_limit),
		None => request,
	}
}

#[async_trait]
impl ChainInterface for AlloyChain {
	async fn call(&self, to: Address, data: Bytes) -> Result<Bytes, ChainError> {
		let request = TransactionRequest::default().with_to(to).with_input(data);

		self.provider
			.call(request)
			.await
			.map_err(|e| ChainError::Network(format!("Call to {} failed: {}", to, e)))
	}

	async fn submit(&self, tx: Transaction) -> Result<TransactionHash, ChainError> {
		let request = to_request(tx);

		// The provider's wallet handles signing
		let pending_tx = self
			.provider
			.send_transaction(request)
			.await
			.map_err(|e| ChainError::Network(format!("Failed to send transaction: {}", e)))?;

		let tx_hash = *pending_tx.tx_hash();
		tracing::debug!(chain_id = self.chain_id, tx_hash = %tx_hash, "Transaction accepted by node");

		Ok(TransactionHash(tx_hash))
	}

	async fn get_receipt(
		&self,
		hash: &TransactionHash,
	) -> Result<Option<TransactionReceipt>, ChainError> {
		let receipt = self
			.provider
			.get_transaction_receipt(hash.0)
			.await
			.map_err(|e| ChainError::Network(format!("Failed to get receipt: {}", e)))?;

		let Some(receipt) = receipt else {
			return Ok(None);
		};

		let block_number = receipt.block_number.ok_or_else(|| {
			ChainError::InvalidResponse(format!("Receipt for {} has no block number", hash))
		})?;

		Ok(Some(TransactionReceipt {
			hash: TransactionHash(receipt.transaction_hash),
			block_number,
			gas_used: receipt.gas_used,
			success: receipt.status(),
			logs: receipt
				.inner
				.logs()
				.iter()
				.map(|log| log.inner.clone())
				.collect(),
		}))
	}

	async fn get_gas_price(&self) -> Result<U256, ChainError> {
		let gas_price = self
			.provider
			.get_gas_price()
			.await
			.map_err(|e| ChainError::Network(format!("Failed to get gas price: {}", e)))?;

		Ok(U256::from(gas_price))
	}
}

fn signer_for(account: &AccountService) -> Result<PrivateKeySigner, ChainError> {
	account.get_private_key().with_exposed(|key| {
		key.parse::<PrivateKeySigner>()
			.map_err(|_| ChainError::InvalidKey("Invalid private key format".to_string()))
	})
}

/// Builds the chain service for the configured network, signing with the
/// service account's key.
pub fn create_chain_service(
	rpc_url: &str,
	chain_id: u64,
	account: &AccountService,
	receipt_timeout: Duration,
	poll_interval: Duration,
) -> Result<ChainService, ChainError> {
	let signer = signer_for(account)?;
	let chain = AlloyChain::new(rpc_url, chain_id, signer)?;
	Ok(ChainService::new(
		Box::new(chain),
		receipt_timeout,
		poll_interval,
	))
}
