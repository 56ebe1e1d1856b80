//! Extraction of received token amounts from receipt logs.

use crate::engine::token::IBurnableToken;
use crate::SwapBurnError;
use alloy::sol_types::SolEvent;
use swapburn_types::{Address, Log, TransactionReceipt, TransferEvent, U256};

/// Finds how much of a token a recipient received in a transaction.
#[derive(Debug, Default, Clone, Copy)]
pub struct TransferEventExtractor;

impl TransferEventExtractor {
	pub fn new() -> Self {
		Self
	}

	/// Decodes a log as an ERC20 `Transfer`, or returns `None` when it is any
	/// other event.
	pub fn decode_transfer(log: &Log) -> Option<TransferEvent> {
		let transfer = IBurnableToken::Transfer::decode_log_data(&log.data).ok()?;

		Some(TransferEvent {
			token: log.address,
			from: transfer.from,
			to: transfer.to,
			value: transfer.value,
		})
	}

	/// Returns the value of the first `Transfer` of `token` to `recipient`,
	/// in log order.
	pub fn extract_incoming_amount(
		&self,
		receipt: &TransactionReceipt,
		token: Address,
		recipient: Address,
	) -> Result<U256, SwapBurnError> {
		receipt
			.logs
			.iter()
			.filter_map(Self::decode_transfer)
			.find(|transfer| transfer.token == token && transfer.to == recipient)
			.map(|transfer| {
				tracing::debug!(
					from = %transfer.from,
					value = %transfer.value,
					"Found incoming transfer"
				);
				transfer.value
			})
			.ok_or_else(|| SwapBurnError::EventNotFound {
				token: token.to_string(),
				recipient: recipient.to_string(),
				tx_hash: receipt.hash.to_string(),
			})
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::test_utils::{approval_log, transfer_log, ACCOUNT, OUTPUT_TOKEN, ROUTER};
	use alloy::primitives::LogData;
	use swapburn_types::{TransactionHash, B256};

	fn receipt(logs: Vec<Log>) -> TransactionReceipt {
		TransactionReceipt {
			hash: TransactionHash(B256::repeat_byte(0x42)),
			block_number: 10,
			gas_used: 100_000,
			success: true,
			logs,
		}
	}

	#[test]
	fn test_first_matching_transfer_wins() {
		let other_token = Address::repeat_byte(0x09);
		let receipt = receipt(vec![
			approval_log(OUTPUT_TOKEN, ACCOUNT, ROUTER, U256::from(1u64)),
			transfer_log(other_token, ROUTER, ACCOUNT, U256::from(7u64)),
			transfer_log(OUTPUT_TOKEN, ROUTER, Address::repeat_byte(0x33), U256::from(8u64)),
			transfer_log(OUTPUT_TOKEN, ROUTER, ACCOUNT, U256::from(250_000u64)),
			transfer_log(OUTPUT_TOKEN, ROUTER, ACCOUNT, U256::from(9u64)),
		]);

		let amount = TransferEventExtractor::new()
			.extract_incoming_amount(&receipt, OUTPUT_TOKEN, ACCOUNT)
			.unwrap();

		assert_eq!(amount, U256::from(250_000u64));
	}

	#[test]
	fn test_only_approval_logs_is_not_found() {
		let receipt = receipt(vec![
			approval_log(OUTPUT_TOKEN, ACCOUNT, ROUTER, U256::from(1u64)),
			approval_log(OUTPUT_TOKEN, ACCOUNT, ROUTER, U256::from(2u64)),
		]);

		let err = TransferEventExtractor::new()
			.extract_incoming_amount(&receipt, OUTPUT_TOKEN, ACCOUNT)
			.unwrap_err();

		assert!(matches!(err, SwapBurnError::EventNotFound { .. }));
	}

	#[test]
	fn test_address_match_ignores_checksum_case() {
		let token: Address = "0xa769d6492d58840fc1df124fa4fd3a96b5ef0e71"
			.parse()
			.unwrap();
		let same_token: Address = "0xA769D6492D58840FC1DF124FA4FD3A96B5EF0E71"
			.parse()
			.unwrap();
		let receipt = receipt(vec![transfer_log(token, ROUTER, ACCOUNT, U256::from(5u64))]);

		let amount = TransferEventExtractor::new()
			.extract_incoming_amount(&receipt, same_token, ACCOUNT)
			.unwrap();

		assert_eq!(amount, U256::from(5u64));
	}

	#[test]
	fn test_decode_transfer_fields() {
		let log = transfer_log(OUTPUT_TOKEN, ROUTER, ACCOUNT, U256::from(250_000u64));

		let transfer = TransferEventExtractor::decode_transfer(&log).unwrap();

		assert_eq!(transfer.token, OUTPUT_TOKEN);
		assert_eq!(transfer.from, ROUTER);
		assert_eq!(transfer.to, ACCOUNT);
		assert_eq!(transfer.value, U256::from(250_000u64));
		let approval = approval_log(OUTPUT_TOKEN, ACCOUNT, ROUTER, U256::from(1u64));
		assert_eq!(TransferEventExtractor::decode_transfer(&approval), None);
	}

	#[test]
	fn test_decode_skips_malformed_transfer() {
		let mut log = transfer_log(OUTPUT_TOKEN, ROUTER, ACCOUNT, U256::from(5u64));
		let topics = log.data.topics()[..2].to_vec();
		log.data = LogData::new_unchecked(topics, log.data.data.clone());

		assert_eq!(TransferEventExtractor::decode_transfer(&log), None);
	}
}
