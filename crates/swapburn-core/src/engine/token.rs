//! Token contract surface used by the engine.
//!
//! Calls are ABI-encoded with `sol!` bindings and sent through the chain
//! service. Return values are single words and are decoded directly.

use alloy::sol;
use alloy::sol_types::SolCall;
use swapburn_chain::{ChainError, ChainService};
use swapburn_types::{Address, Bytes, Transaction, U256};

sol! {
	/// ERC20 token with a holder-initiated burn.
	interface IBurnableToken {
		event Transfer(address indexed from, address indexed to, uint256 value);
		event Approval(address indexed owner, address indexed spender, uint256 value);

		function balanceOf(address account) external view returns (uint256);
		function allowance(address owner, address spender) external view returns (uint256);
		function approve(address spender, uint256 amount) external returns (bool);
		function burn(uint256 amount) external;
	}
}

fn decode_word(bytes: &Bytes, function: &str) -> Result<U256, ChainError> {
	if bytes.len() < 32 {
		return Err(ChainError::InvalidResponse(format!(
			"Invalid {} response: {} bytes",
			function,
			bytes.len()
		)));
	}
	Ok(U256::from_be_slice(&bytes[..32]))
}

/// Reads `balanceOf(owner)` on `token`.
pub(crate) async fn balance_of(
	chain: &ChainService,
	token: Address,
	owner: Address,
) -> Result<U256, ChainError> {
	let call = IBurnableToken::balanceOfCall { account: owner };
	let result = chain.call(token, call.abi_encode().into()).await?;
	decode_word(&result, "balanceOf")
}

/// Reads `allowance(owner, spender)` on `token`.
pub(crate) async fn allowance(
	chain: &ChainService,
	token: Address,
	owner: Address,
	spender: Address,
) -> Result<U256, ChainError> {
	let call = IBurnableToken::allowanceCall { owner, spender };
	let result = chain.call(token, call.abi_encode().into()).await?;
	decode_word(&result, "allowance")
}

/// Builds an `approve(spender, amount)` transaction.
pub(crate) fn approve_tx(token: Address, spender: Address, amount: U256) -> Transaction {
	let call = IBurnableToken::approveCall { spender, amount };
	Transaction::call(token, call.abi_encode())
}

/// Builds a `burn(amount)` transaction.
pub(crate) fn burn_tx(token: Address, amount: U256) -> Transaction {
	let call = IBurnableToken::burnCall { amount };
	Transaction::call(token, call.abi_encode())
}
