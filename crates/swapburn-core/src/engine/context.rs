//! Shared engine configuration.

use swapburn_types::{Address, TokenConfig};

/// Immutable settings every engine component is constructed with.
///
/// Built once at startup. Chain state is never cached here; balances and
/// allowances are re-read on every operation.
#[derive(Debug, Clone)]
pub struct EngineContext {
	/// Address of the service account that signs every transaction.
	pub account: Address,
	pub chain_id: u64,
	/// Router that pulls the input token during a swap.
	pub router: Address,
	/// Token sold in the swap.
	pub input_token: TokenConfig,
	/// Token received from the swap and burned.
	pub output_token: TokenConfig,
	pub slippage_bps: u32,
}
