//! Conversion between human-readable decimal amounts and smallest units.
//!
//! All arithmetic on token amounts happens on `U256` smallest-unit values.
//! Decimal strings only exist at the edges: parsed on the way in, formatted on
//! the way out. The digit work is done by alloy's unit helpers.

use alloy::primitives::utils::{self as alloy_units, Unit};
use alloy::primitives::U256;
use thiserror::Error;

/// Errors produced when converting between decimal text and smallest units.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum UnitsError {
	#[error("Amount is empty")]
	Empty,
	#[error("Malformed amount: {0}")]
	Malformed(String),
	#[error("Amount {amount} has more than {decimals} decimal places")]
	TooPrecise { amount: String, decimals: u8 },
	#[error("Amount {0} is too large")]
	Overflow(String),
	#[error("Unsupported token decimals: {0}")]
	UnsupportedDecimals(u8),
}

fn check_decimals(decimals: u8) -> Result<(), UnitsError> {
	match Unit::new(decimals) {
		Some(_) => Ok(()),
		None => Err(UnitsError::UnsupportedDecimals(decimals)),
	}
}

/// Parses a decimal string such as `"12.5"` into smallest units.
///
/// Fractional digits beyond `decimals` are rejected rather than truncated,
/// and signs are not accepted.
pub fn parse_units(amount: &str, decimals: u8) -> Result<U256, UnitsError> {
	let amount = amount.trim();
	if amount.is_empty() {
		return Err(UnitsError::Empty);
	}
	check_decimals(decimals)?;

	let (integer, fraction) = amount.split_once('.').unwrap_or((amount, ""));
	if integer.is_empty() && fraction.is_empty() {
		return Err(UnitsError::Malformed(amount.to_string()));
	}
	if !integer.chars().all(|c| c.is_ascii_digit()) || !fraction.chars().all(|c| c.is_ascii_digit())
	{
		return Err(UnitsError::Malformed(amount.to_string()));
	}
	if fraction.len() > decimals as usize {
		return Err(UnitsError::TooPrecise {
			amount: amount.to_string(),
			decimals,
		});
	}
	// U256 holds any 77-digit value; scaling past that may wrap.
	if integer.trim_start_matches('0').len() + decimals as usize > 77 {
		return Err(UnitsError::Overflow(amount.to_string()));
	}

	alloy_units::parse_units(amount, decimals)
		.map(|parsed| parsed.get_absolute())
		.map_err(|_| UnitsError::Overflow(amount.to_string()))
}

/// Formats a smallest-unit value with exactly `decimals` fractional digits.
///
/// `format_units(U256::from(250000), 2)` is `"2500.00"`.
pub fn format_units(value: U256, decimals: u8) -> Result<String, UnitsError> {
	check_decimals(decimals)?;
	if decimals == 0 {
		return Ok(value.to_string());
	}
	alloy_units::format_units(value, decimals)
		.map_err(|_| UnitsError::UnsupportedDecimals(decimals))
}

/// Formats a smallest-unit value for display, trimming trailing zeros.
///
/// `format_token_amount(U256::from(5000), 2)` is `"50"` and
/// `format_token_amount(U256::from(1500000), 6)` is `"1.5"`.
pub fn format_token_amount(value: U256, decimals: u8) -> Result<String, UnitsError> {
	let fixed = format_units(value, decimals)?;
	if decimals == 0 {
		return Ok(fixed);
	}
	Ok(fixed.trim_end_matches('0').trim_end_matches('.').to_string())
}

/// Converts basis points to the percent string aggregators expect.
pub fn bps_to_percent(bps: u32) -> String {
	let whole = bps / 100;
	let fraction = bps % 100;
	if fraction == 0 {
		return whole.to_string();
	}
	let rendered = format!("{}.{:02}", whole, fraction);
	rendered.trim_end_matches('0').to_string()
}
