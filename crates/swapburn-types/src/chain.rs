//! Chain transaction types.
//!
//! These types describe what is sent to the chain and what comes back once a
//! transaction is mined. They are independent of the RPC library used by the
//! chain client so that the pipeline can be exercised against fakes.

use alloy::primitives::{Address, Bytes, Log, B256, U256};
use std::fmt;

/// Blockchain transaction hash.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TransactionHash(pub B256);

impl fmt::Display for TransactionHash {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "{:#x}", self.0)
	}
}

impl From<B256> for TransactionHash {
	fn from(hash: B256) -> Self {
		Self(hash)
	}
}

/// A transaction to be signed by the local account and submitted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Transaction {
	/// Destination contract.
	pub to: Address,
	/// ABI-encoded call payload.
	pub data: Bytes,
	/// Native value attached to the call, in wei.
	pub value: U256,
	/// Explicit gas limit. When absent the provider estimates it.
	pub gas_limit: Option<u64>,
}

impl Transaction {
	/// Builds a zero-value contract call with an estimated gas limit.
	pub fn call(to: Address, data: impl Into<Bytes>) -> Self {
		Self {
			to,
			data: data.into(),
			value: U256::ZERO,
			gas_limit: None,
		}
	}

	/// Sets an explicit gas limit.
	pub fn with_gas_limit(mut self, gas_limit: u64) -> Self {
		self.gas_limit = Some(gas_limit);
		self
	}

	/// Sets the native value sent with the call.
	pub fn with_value(mut self, value: U256) -> Self {
		self.value = value;
		self
	}
}

/// Receipt of a mined transaction.
///
/// Carries the execution status and the raw event logs so that callers can
/// decode whichever events they care about.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransactionReceipt {
	/// The hash of the transaction.
	pub hash: TransactionHash,
	/// The block number where the transaction was included.
	pub block_number: u64,
	/// Gas consumed by the transaction.
	pub gas_used: u64,
	/// Whether the transaction executed successfully.
	pub success: bool,
	/// Logs emitted during execution, in order.
	pub logs: Vec<Log>,
}
