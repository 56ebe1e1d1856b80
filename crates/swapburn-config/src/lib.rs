//! Configuration module for the swap-and-burn service.
//!
//! Configuration is a single TOML file. `${VAR}` and `${VAR:-default}`
//! placeholders are expanded from the environment before parsing, which is how
//! the signing key is normally supplied. The parsed configuration is validated
//! before it is handed to the engine builder.

use regex::Regex;
use serde::Deserialize;
use std::str::FromStr;
use swapburn_types::{Address, SecretString, TokenConfig};
use thiserror::Error;

/// Errors that can occur during configuration operations.
#[derive(Debug, Error)]
pub enum ConfigError {
	/// Error that occurs during file I/O operations.
	#[error("IO error: {0}")]
	Io(#[from] std::io::Error),
	/// Error that occurs when parsing TOML configuration.
	#[error("Configuration error: {0}")]
	Parse(String),
	/// Error that occurs when configuration validation fails.
	#[error("Validation error: {0}")]
	Validation(String),
}

impl From<toml::de::Error> for ConfigError {
	fn from(err: toml::de::Error) -> Self {
		// Keep the message, drop the echoed input
		ConfigError::Parse(err.message().to_string())
	}
}

/// Main configuration structure.
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
	/// Identity of this service instance.
	pub service: ServiceConfig,
	/// Chain the service operates on.
	pub network: NetworkConfig,
	/// Signing account.
	pub account: AccountConfig,
	/// Swap aggregator settings.
	pub quote: QuoteConfig,
	/// Tokens swapped from and burned.
	pub tokens: TokensConfig,
	/// HTTP API server.
	pub api: Option<ApiConfig>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServiceConfig {
	pub id: String,
}

/// Chain connection settings.
#[derive(Debug, Clone, Deserialize)]
pub struct NetworkConfig {
	pub chain_id: u64,
	pub rpc_url: String,
	/// Upper bound on how long a receipt wait may take.
	#[serde(default = "default_receipt_timeout_seconds")]
	pub receipt_timeout_seconds: u64,
	/// Delay between receipt polls.
	#[serde(default = "default_poll_interval_seconds")]
	pub poll_interval_seconds: u64,
}

fn default_receipt_timeout_seconds() -> u64 {
	120
}

fn default_poll_interval_seconds() -> u64 {
	2
}

/// Signing account settings.
#[derive(Debug, Clone, Deserialize)]
pub struct AccountConfig {
	/// Hex private key with 0x prefix.
	pub private_key: SecretString,
}

/// Swap aggregator settings.
#[derive(Debug, Clone, Deserialize)]
pub struct QuoteConfig {
	/// Aggregator API base URL, without the chain id segment.
	pub base_url: String,
	/// Router contract that receives the token approval.
	pub router_address: Address,
	/// Maximum tolerated slippage in basis points.
	#[serde(default = "default_slippage_bps")]
	pub slippage_bps: u32,
	/// HTTP timeout for quote requests.
	#[serde(default = "default_quote_timeout_seconds")]
	pub timeout_seconds: u64,
}

fn default_slippage_bps() -> u32 {
	100 // 1%
}

fn default_quote_timeout_seconds() -> u64 {
	30
}

/// The token pair handled by the pipeline.
#[derive(Debug, Clone, Deserialize)]
pub struct TokensConfig {
	/// Token sold in the swap.
	pub input: TokenConfig,
	/// Token bought in the swap and then burned. Must expose `burn(uint256)`.
	pub output: TokenConfig,
}

/// Configuration for the HTTP API server.
///
/// A missing `[api]` section means the server runs with these defaults.
#[derive(Debug, Clone, Deserialize)]
pub struct ApiConfig {
	#[serde(default = "default_api_enabled")]
	pub enabled: bool,
	#[serde(default = "default_api_host")]
	pub host: String,
	#[serde(default = "default_api_port")]
	pub port: u16,
}

impl Default for ApiConfig {
	fn default() -> Self {
		Self {
			enabled: default_api_enabled(),
			host: default_api_host(),
			port: default_api_port(),
		}
	}
}

fn default_api_enabled() -> bool {
	true
}

fn default_api_host() -> String {
	"127.0.0.1".to_string()
}

fn default_api_port() -> u16 {
	3000
}

/// Resolves environment variables in a string.
///
/// Replaces `${VAR_NAME}` with the value of `VAR_NAME`, or with `default`
/// for `${VAR_NAME:-default}` when the variable is unset.
pub(crate) fn resolve_env_vars(input: &str) -> Result<String, ConfigError> {
	const MAX_INPUT_SIZE: usize = 1024 * 1024;
	if input.len() > MAX_INPUT_SIZE {
		return Err(ConfigError::Validation(format!(
			"Configuration file too large: {} bytes (max: {} bytes)",
			input.len(),
			MAX_INPUT_SIZE
		)));
	}

	let re = Regex::new(r"\$\{([A-Z_][A-Z0-9_]{0,127})(?::-([^}]{0,256}))?\}")
		.map_err(|e| ConfigError::Parse(format!("Regex error: {}", e)))?;

	let mut missing = None;
	let resolved = re.replace_all(input, |caps: &regex::Captures<'_>| {
		let var_name = &caps[1];
		match (std::env::var(var_name), caps.get(2)) {
			(Ok(value), _) => value,
			(Err(_), Some(default)) => default.as_str().to_string(),
			(Err(_), None) => {
				missing.get_or_insert_with(|| var_name.to_string());
				String::new()
			},
		}
	});

	if let Some(var_name) = missing {
		return Err(ConfigError::Validation(format!(
			"Environment variable '{}' not found",
			var_name
		)));
	}

	Ok(resolved.into_owned())
}

impl Config {
	/// Loads, expands, and validates a configuration file.
	pub async fn from_file(path: &str) -> Result<Self, ConfigError> {
		let content = tokio::fs::read_to_string(path).await?;
		content.parse()
	}

	/// Validates cross-field constraints that serde cannot express.
	fn validate(&self) -> Result<(), ConfigError> {
		if self.service.id.is_empty() {
			return Err(ConfigError::Validation("Service ID cannot be empty".into()));
		}

		if self.network.chain_id == 0 {
			return Err(ConfigError::Validation("Chain ID must be non-zero".into()));
		}
		if self.network.rpc_url.is_empty() {
			return Err(ConfigError::Validation("RPC URL cannot be empty".into()));
		}
		if self.network.receipt_timeout_seconds == 0 {
			return Err(ConfigError::Validation(
				"receipt_timeout_seconds must be greater than 0".into(),
			));
		}
		if self.network.poll_interval_seconds == 0 {
			return Err(ConfigError::Validation(
				"poll_interval_seconds must be greater than 0".into(),
			));
		}

		let key_ok = self
			.account
			.private_key
			.with_exposed(|key| key.starts_with("0x") && key.len() > 2);
		if !key_ok {
			return Err(ConfigError::Validation(
				"Invalid private key: it must be set and start with 0x".into(),
			));
		}

		if self.quote.base_url.is_empty() {
			return Err(ConfigError::Validation(
				"Quote base_url cannot be empty".into(),
			));
		}
		if self.quote.slippage_bps > 10_000 {
			return Err(ConfigError::Validation(format!(
				"slippage_bps must be at most 10000, got {}",
				self.quote.slippage_bps
			)));
		}
		if self.quote.timeout_seconds == 0 {
			return Err(ConfigError::Validation(
				"Quote timeout_seconds must be greater than 0".into(),
			));
		}

		if self.tokens.input.address == self.tokens.output.address {
			return Err(ConfigError::Validation(
				"Input and output tokens must be different".into(),
			));
		}
		for token in [&self.tokens.input, &self.tokens.output] {
			if token.decimals > 77 {
				return Err(ConfigError::Validation(format!(
					"Token {} has unsupported decimals {} (max 77)",
					token.symbol, token.decimals
				)));
			}
		}

		Ok(())
	}
}

impl FromStr for Config {
	type Err = ConfigError;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		let resolved = resolve_env_vars(s)?;
		let config: Config = toml::from_str(&resolved)?;
		config.validate()?;
		Ok(config)
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	const BASE_CONFIG: &str = r#"
[service]
id = "swap-burn-test"

[network]
chain_id = 42161
rpc_url = "http://localhost:8545"

[account]
private_key = "0xac0974bec39a17e36ba4a6b4d238ff944bacb478cbed5efcae784d7bf4f2ff80"

[quote]
base_url = "https://open-api.openocean.finance/v3"
router_address = "0x5C69bEe701ef814a2B6a3EDD4B1652CB9cc5aA6f"

[tokens.input]
address = "0xC163e796833a532C6AB1b4101B5dBF5c279db60a"
symbol = "USDT"
decimals = 6

[tokens.output]
address = "0xA769d6492d58840fc1DF124fA4fd3a96B5ef0E71"
symbol = "IDRX"
decimals = 2
"#;

	#[test]
	fn test_env_var_resolution() {
		std::env::set_var("SWAPBURN_TEST_HOST", "localhost");
		std::env::set_var("SWAPBURN_TEST_PORT", "8545");

		let input = "url = \"http://${SWAPBURN_TEST_HOST}:${SWAPBURN_TEST_PORT}\"";
		let result = resolve_env_vars(input).unwrap();
		assert_eq!(result, "url = \"http://localhost:8545\"");

		std::env::remove_var("SWAPBURN_TEST_HOST");
		std::env::remove_var("SWAPBURN_TEST_PORT");
	}

	#[test]
	fn test_env_var_with_default() {
		let input = "value = \"${SWAPBURN_MISSING_VAR:-fallback}\"";
		let result = resolve_env_vars(input).unwrap();
		assert_eq!(result, "value = \"fallback\"");
	}

	#[test]
	fn test_missing_env_var_error() {
		let input = "value = \"${SWAPBURN_MISSING_VAR}\"";
		let result = resolve_env_vars(input);
		assert!(result.is_err());
		assert!(result
			.unwrap_err()
			.to_string()
			.contains("SWAPBURN_MISSING_VAR"));
	}

	#[test]
	fn test_parse_applies_defaults() {
		let config: Config = BASE_CONFIG.parse().unwrap();

		assert_eq!(config.service.id, "swap-burn-test");
		assert_eq!(config.network.receipt_timeout_seconds, 120);
		assert_eq!(config.network.poll_interval_seconds, 2);
		assert_eq!(config.quote.slippage_bps, 100);
		assert_eq!(config.quote.timeout_seconds, 30);
		assert_eq!(config.tokens.input.decimals, 6);
		assert_eq!(config.tokens.output.symbol, "IDRX");
		assert!(config.api.is_none());
	}

	#[test]
	fn test_private_key_from_environment() {
		std::env::set_var(
			"SWAPBURN_TEST_PRIVATE_KEY",
			"0x59c6995e998f97a5a0044966f0945389dc9e86dae88c7a8412f4603b6b78690d",
		);
		let config_str = BASE_CONFIG.replace(
			"\"0xac0974bec39a17e36ba4a6b4d238ff944bacb478cbed5efcae784d7bf4f2ff80\"",
			"\"${SWAPBURN_TEST_PRIVATE_KEY}\"",
		);

		let config: Config = config_str.parse().unwrap();
		assert!(config
			.account
			.private_key
			.with_exposed(|k| k.starts_with("0x59c6")));

		std::env::remove_var("SWAPBURN_TEST_PRIVATE_KEY");
	}

	#[test]
	fn test_rejects_key_without_prefix() {
		let config_str = BASE_CONFIG.replace(
			"0xac0974bec39a17e36ba4a6b4d238ff944bacb478cbed5efcae784d7bf4f2ff80",
			"ac0974bec39a17e36ba4a6b4d238ff944bacb478cbed5efcae784d7bf4f2ff80",
		);

		let err = config_str.parse::<Config>().unwrap_err();
		assert!(matches!(err, ConfigError::Validation(_)));
		assert!(err.to_string().contains("0x"));
	}

	#[test]
	fn test_rejects_excessive_slippage() {
		let config_str = BASE_CONFIG.replace(
			"router_address = \"0x5C69bEe701ef814a2B6a3EDD4B1652CB9cc5aA6f\"",
			"router_address = \"0x5C69bEe701ef814a2B6a3EDD4B1652CB9cc5aA6f\"\nslippage_bps = 10001",
		);

		let err = config_str.parse::<Config>().unwrap_err();
		assert!(err.to_string().contains("slippage_bps"));
	}

	#[test]
	fn test_rejects_identical_tokens() {
		let config_str = BASE_CONFIG.replace(
			"0xA769d6492d58840fc1DF124fA4fd3a96B5ef0E71",
			"0xC163e796833a532C6AB1b4101B5dBF5c279db60a",
		);

		let err = config_str.parse::<Config>().unwrap_err();
		assert!(err.to_string().contains("different"));
	}

	#[test]
	fn test_rejects_unsupported_decimals() {
		let config_str = BASE_CONFIG.replace("decimals = 2", "decimals = 80");

		let err = config_str.parse::<Config>().unwrap_err();
		assert!(err.to_string().contains("IDRX"));
	}

	#[test]
	fn test_api_section() {
		let config_str = format!("{}\n[api]\nport = 8080\n", BASE_CONFIG);
		let config: Config = config_str.parse().unwrap();

		let api = config.api.unwrap();
		assert!(api.enabled);
		assert_eq!(api.host, "127.0.0.1");
		assert_eq!(api.port, 8080);
	}

	#[tokio::test]
	async fn test_from_file() {
		let dir = tempfile::tempdir().unwrap();
		let path = dir.path().join("config.toml");
		std::fs::write(&path, BASE_CONFIG).unwrap();

		let config = Config::from_file(path.to_str().unwrap()).await.unwrap();
		assert_eq!(config.network.chain_id, 42161);
	}

	#[tokio::test]
	async fn test_from_file_missing() {
		let result = Config::from_file("/nonexistent/swapburn.toml").await;
		assert!(matches!(result, Err(ConfigError::Io(_))));
	}
}
