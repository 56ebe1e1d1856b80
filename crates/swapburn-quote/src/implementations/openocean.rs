//! OpenOcean-style aggregator quote provider.
//!
//! `GET {base_url}/{chain_id}/swap` returns the quote together with the
//! router call that executes it. The body carries its own status code and
//! only `code == 200` is treated as success.

use crate::{QuoteError, QuoteInterface, QuoteRequest};
use async_trait::async_trait;
use serde::Deserialize;
use std::time::Duration;
use swapburn_types::{bps_to_percent, Address, Bytes, Quote, QuoteToken, U256};

const SUCCESS_CODE: i64 = 200;

/// Quote provider backed by the OpenOcean swap API.
pub struct OpenOceanQuote {
	client: reqwest::Client,
	base_url: String,
	chain_id: u64,
}

impl OpenOceanQuote {
	pub fn new(base_url: &str, chain_id: u64, timeout: Duration) -> Result<Self, QuoteError> {
		let client = reqwest::Client::builder()
			.timeout(timeout)
			.build()
			.map_err(|e| QuoteError::Network(format!("Failed to build HTTP client: {}", e)))?;

		Ok(Self {
			client,
			base_url: base_url.trim_end_matches('/').to_string(),
			chain_id,
		})
	}

	fn swap_url(&self) -> String {
		format!("{}/{}/swap", self.base_url, self.chain_id)
	}
}

/// Query string for a quote request.
fn query_params(request: &QuoteRequest) -> Vec<(&'static str, String)> {
	vec![
		("inTokenAddress", format!("{:#x}", request.in_token)),
		("outTokenAddress", format!("{:#x}", request.out_token)),
		("amount", request.amount.clone()),
		("gasPrice", request.gas_price.to_string()),
		("slippage", bps_to_percent(request.slippage_bps)),
		("account", format!("{:#x}", request.account)),
	]
}

#[derive(Debug, Deserialize)]
struct RawResponse {
	code: i64,
	#[serde(default)]
	message: Option<String>,
	#[serde(default)]
	data: Option<serde_json::Value>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawQuote {
	in_token: RawToken,
	out_token: RawToken,
	in_amount: NumberOrString,
	out_amount: NumberOrString,
	estimated_gas: NumberOrString,
	to: String,
	data: String,
	#[serde(default)]
	value: Option<NumberOrString>,
}

#[derive(Debug, Deserialize)]
struct RawToken {
	address: String,
	symbol: String,
	decimals: u8,
}

/// Numeric fields arrive as JSON numbers or strings depending on the endpoint.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum NumberOrString {
	Number(u64),
	String(String),
}

impl NumberOrString {
	fn to_u256(&self, field: &str) -> Result<U256, QuoteError> {
		match self {
			NumberOrString::Number(n) => Ok(U256::from(*n)),
			NumberOrString::String(s) => s
				.trim()
				.parse::<U256>()
				.map_err(|_| invalid(format!("{} is not an integer: {}", field, s))),
		}
	}

	fn to_u64(&self, field: &str) -> Result<u64, QuoteError> {
		match self {
			NumberOrString::Number(n) => Ok(*n),
			NumberOrString::String(s) => s
				.trim()
				.parse::<u64>()
				.map_err(|_| invalid(format!("{} is not an integer: {}", field, s))),
		}
	}
}

fn invalid(message: impl Into<String>) -> QuoteError {
	QuoteError::InvalidResponse(message.into())
}

fn parse_address(value: &str, field: &str) -> Result<Address, QuoteError> {
	value
		.parse()
		.map_err(|_| invalid(format!("{} is not an address: {}", field, value)))
}

fn parse_token(token: RawToken, field: &str) -> Result<QuoteToken, QuoteError> {
	Ok(QuoteToken {
		address: parse_address(&token.address, field)?,
		symbol: token.symbol,
		decimals: token.decimals,
	})
}

/// Validates a provider response body into a [`Quote`].
pub(crate) fn parse_quote_response(body: serde_json::Value) -> Result<Quote, QuoteError> {
	let response: RawResponse =
		serde_json::from_value(body).map_err(|e| invalid(e.to_string()))?;

	if response.code != SUCCESS_CODE {
		return Err(QuoteError::Provider {
			code: response.code,
			message: response
				.message
				.unwrap_or_else(|| "Unknown provider error".to_string()),
		});
	}

	let data = response
		.data
		.ok_or_else(|| invalid("Response has no data field"))?;
	let raw: RawQuote = serde_json::from_value(data).map_err(|e| invalid(e.to_string()))?;

	let payload: Bytes = raw
		.data
		.parse()
		.map_err(|_| invalid(format!("data is not hex: {}", raw.data)))?;

	Ok(Quote {
		in_amount: raw.in_amount.to_u256("inAmount")?,
		out_amount: raw.out_amount.to_u256("outAmount")?,
		estimated_gas: raw.estimated_gas.to_u64("estimatedGas")?,
		value: match &raw.value {
			Some(value) => value.to_u256("value")?,
			None => U256::ZERO,
		},
		to: parse_address(&raw.to, "to")?,
		data: payload,
		in_token: parse_token(raw.in_token, "inToken.address")?,
		out_token: parse_token(raw.out_token, "outToken.address")?,
		code: SUCCESS_CODE as u16,
	})
}

#[async_trait]
impl QuoteInterface for OpenOceanQuote {
	async fn fetch_quote(&self, request: &QuoteRequest) -> Result<Quote, QuoteError> {
		let response = self
			.client
			.get(self.swap_url())
			.header("Content-Type", "application/json")
			.query(&query_params(request))
			.send()
			.await
			.map_err(|e| QuoteError::Network(e.to_string()))?;

		let status = response.status();
		let body = response
			.json::<serde_json::Value>()
			.await
			.map_err(|e| {
				if status.is_success() {
					invalid(format!("Body is not JSON: {}", e))
				} else {
					QuoteError::Network(format!("HTTP {}", status))
				}
			})?;

		parse_quote_response(body)
	}
}
