//! In-memory chain and quote provider used by the engine tests.

use crate::engine::context::EngineContext;
use crate::engine::token::IBurnableToken;
use alloy::sol_types::{SolCall, SolEvent};
use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use std::time::Duration;
use swapburn_chain::{ChainError, ChainInterface, ChainService};
use swapburn_quote::{QuoteError, QuoteInterface, QuoteRequest, QuoteService};
use swapburn_types::{
	Address, Bytes, Log, Quote, QuoteToken, TokenConfig, Transaction, TransactionHash,
	TransactionReceipt, B256, U256,
};

pub const ACCOUNT: Address = Address::repeat_byte(0xaa);
pub const ROUTER: Address = Address::repeat_byte(0x70);
pub const SWAP_TARGET: Address = Address::repeat_byte(0x71);
pub const INPUT_TOKEN: Address = Address::repeat_byte(0x01);
pub const OUTPUT_TOKEN: Address = Address::repeat_byte(0x02);

pub fn context() -> Arc<EngineContext> {
	Arc::new(EngineContext {
		account: ACCOUNT,
		chain_id: 42161,
		router: ROUTER,
		input_token: TokenConfig {
			address: INPUT_TOKEN,
			symbol: "USDT".into(),
			decimals: 6,
		},
		output_token: TokenConfig {
			address: OUTPUT_TOKEN,
			symbol: "IDRX".into(),
			decimals: 2,
		},
		slippage_bps: 100,
	})
}

/// Encodes an ERC20 `Transfer` log.
pub fn transfer_log(token: Address, from: Address, to: Address, value: U256) -> Log {
	Log::new_unchecked(
		token,
		vec![
			IBurnableToken::Transfer::SIGNATURE_HASH,
			from.into_word(),
			to.into_word(),
		],
		Bytes::copy_from_slice(&value.to_be_bytes::<32>()),
	)
}

/// Encodes an ERC20 `Approval` log.
pub fn approval_log(token: Address, owner: Address, spender: Address, value: U256) -> Log {
	Log::new_unchecked(
		token,
		vec![
			IBurnableToken::Approval::SIGNATURE_HASH,
			owner.into_word(),
			spender.into_word(),
		],
		Bytes::copy_from_slice(&value.to_be_bytes::<32>()),
	)
}

fn word(value: U256) -> Bytes {
	Bytes::copy_from_slice(&value.to_be_bytes::<32>())
}

/// Observable state of the fake chain.
#[derive(Default)]
pub struct ChainState {
	/// Balances of the service account, per token.
	pub balances: HashMap<Address, U256>,
	/// Allowances granted by the service account, per token.
	pub allowances: HashMap<Address, U256>,
	/// Every submitted transaction, in order.
	pub submitted: Vec<Transaction>,
	/// Number of receipt lookups per transaction.
	pub receipt_reads: HashMap<B256, usize>,
	receipts: HashMap<B256, TransactionReceipt>,
	/// Logs attached to the next swap receipt.
	pub swap_logs: Vec<Log>,
	pub swap_reverts: bool,
	pub approve_reverts: bool,
	/// When set, submitted transactions never get a receipt.
	pub never_mined: bool,
}

impl ChainState {
	pub fn approvals(&self) -> Vec<&Transaction> {
		self.submitted_with(IBurnableToken::approveCall::SELECTOR)
	}

	pub fn burns(&self) -> Vec<&Transaction> {
		self.submitted_with(IBurnableToken::burnCall::SELECTOR)
	}

	/// Transactions that are neither approvals nor burns.
	pub fn swaps(&self) -> Vec<&Transaction> {
		self.submitted
			.iter()
			.filter(|tx| {
				!tx.data.starts_with(&IBurnableToken::approveCall::SELECTOR)
					&& !tx.data.starts_with(&IBurnableToken::burnCall::SELECTOR)
			})
			.collect()
	}

	fn submitted_with(&self, selector: [u8; 4]) -> Vec<&Transaction> {
		self.submitted
			.iter()
			.filter(|tx| tx.data.starts_with(&selector))
			.collect()
	}
}

/// Chain that executes approvals, burns, and swaps against in-memory state.
#[derive(Clone)]
pub struct FakeChain {
	pub state: Arc<Mutex<ChainState>>,
	pub gas_price: U256,
}

impl FakeChain {
	pub fn new() -> Self {
		Self {
			state: Arc::default(),
			gas_price: U256::from(10_000_000u64),
		}
	}

	pub fn with_balance(self, token: Address, balance: U256) -> Self {
		self.state.lock().unwrap().balances.insert(token, balance);
		self
	}

	pub fn with_allowance(self, token: Address, allowance: U256) -> Self {
		self.state.lock().unwrap().allowances.insert(token, allowance);
		self
	}

	pub fn with_swap_logs(self, logs: Vec<Log>) -> Self {
		self.state.lock().unwrap().swap_logs = logs;
		self
	}

	pub fn service(&self) -> Arc<ChainService> {
		Arc::new(ChainService::new(
			Box::new(self.clone()),
			Duration::from_secs(4),
			Duration::from_secs(1),
		))
	}
}

#[async_trait]
impl ChainInterface for FakeChain {
	async fn call(&self, to: Address, data: Bytes) -> Result<Bytes, ChainError> {
		let state = self.state.lock().unwrap();
		if data.starts_with(&IBurnableToken::balanceOfCall::SELECTOR) {
			return Ok(word(state.balances.get(&to).copied().unwrap_or_default()));
		}
		if data.starts_with(&IBurnableToken::allowanceCall::SELECTOR) {
			return Ok(word(state.allowances.get(&to).copied().unwrap_or_default()));
		}
		Err(ChainError::Network("execution reverted".into()))
	}

	async fn submit(&self, tx: Transaction) -> Result<TransactionHash, ChainError> {
		let mut state = self.state.lock().unwrap();
		let hash = B256::with_last_byte(state.submitted.len() as u8 + 1);

		let mut logs = vec![];
		let success = if tx.data.starts_with(&IBurnableToken::approveCall::SELECTOR) {
			let amount = U256::from_be_slice(&tx.data[36..68]);
			if !state.approve_reverts {
				state.allowances.insert(tx.to, amount);
			}
			!state.approve_reverts
		} else if tx.data.starts_with(&IBurnableToken::burnCall::SELECTOR) {
			let amount = U256::from_be_slice(&tx.data[4..36]);
			let balance = state.balances.entry(tx.to).or_default();
			*balance = balance.saturating_sub(amount);
			true
		} else {
			logs = state.swap_logs.clone();
			if !state.swap_reverts {
				// Credit transfers to the service account
				for log in &logs {
					let topics = log.data.topics();
					if topics.len() == 3 && topics[2] == ACCOUNT.into_word() {
						let value = U256::from_be_slice(&log.data.data[..32]);
						*state.balances.entry(log.address).or_default() += value;
					}
				}
			}
			!state.swap_reverts
		};

		if !state.never_mined {
			let receipt = TransactionReceipt {
				hash: TransactionHash(hash),
				block_number: 1_000 + state.submitted.len() as u64,
				gas_used: 50_000,
				success,
				logs,
			};
			state.receipts.insert(hash, receipt);
		}
		state.submitted.push(tx);
		Ok(TransactionHash(hash))
	}

	async fn get_receipt(
		&self,
		hash: &TransactionHash,
	) -> Result<Option<TransactionReceipt>, ChainError> {
		let mut state = self.state.lock().unwrap();
		*state.receipt_reads.entry(hash.0).or_default() += 1;
		Ok(state.receipts.get(&hash.0).cloned())
	}

	async fn get_gas_price(&self) -> Result<U256, ChainError> {
		Ok(self.gas_price)
	}
}

/// Quote provider returning a fixed quote, or a fixed error.
#[derive(Clone)]
pub struct FakeQuote {
	pub estimated_gas: u64,
	pub failure: Option<(i64, String)>,
	pub requests: Arc<Mutex<Vec<QuoteRequest>>>,
}

impl FakeQuote {
	pub fn new(estimated_gas: u64) -> Self {
		Self {
			estimated_gas,
			failure: None,
			requests: Arc::default(),
		}
	}

	pub fn failing(code: i64, message: &str) -> Self {
		Self {
			failure: Some((code, message.to_string())),
			..Self::new(0)
		}
	}

	pub fn service(&self, chain: Arc<ChainService>) -> Arc<QuoteService> {
		Arc::new(QuoteService::new(Box::new(self.clone()), chain, ACCOUNT))
	}
}

#[async_trait]
impl QuoteInterface for FakeQuote {
	async fn fetch_quote(&self, request: &QuoteRequest) -> Result<Quote, QuoteError> {
		self.requests.lock().unwrap().push(request.clone());
		if let Some((code, message)) = &self.failure {
			return Err(QuoteError::Provider {
				code: *code,
				message: message.clone(),
			});
		}

		Ok(Quote {
			in_token: QuoteToken {
				address: request.in_token,
				symbol: "USDT".into(),
				decimals: 6,
			},
			out_token: QuoteToken {
				address: request.out_token,
				symbol: "IDRX".into(),
				decimals: 2,
			},
			in_amount: U256::from(1_000_000u64),
			out_amount: U256::from(250_000u64),
			to: SWAP_TARGET,
			data: Bytes::from(vec![0x90, 0x41, 0x1a, 0x32]),
			value: U256::ZERO,
			estimated_gas: self.estimated_gas,
			code: 200,
		})
	}
}
