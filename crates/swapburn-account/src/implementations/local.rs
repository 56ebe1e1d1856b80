//! Local private key account.

use crate::{AccountError, AccountInterface};
use alloy::signers::local::PrivateKeySigner;
use async_trait::async_trait;
use swapburn_types::{Address, SecretString};

/// Account backed by a private key held in process memory.
///
/// The key is parsed once at construction so a malformed key fails at startup
/// rather than on the first transaction.
pub struct LocalWallet {
	signer: PrivateKeySigner,
	private_key: SecretString,
}

impl LocalWallet {
	/// Creates a wallet from a 0x-prefixed hex private key.
	pub fn new(private_key: &SecretString) -> Result<Self, AccountError> {
		let signer = private_key.with_exposed(|key| {
			if !key.starts_with("0x") {
				return Err(AccountError::InvalidKey(
					"Private key must start with 0x".to_string(),
				));
			}
			key.parse::<PrivateKeySigner>()
				.map_err(|_| AccountError::InvalidKey("Invalid private key format".to_string()))
		})?;

		Ok(Self {
			signer,
			private_key: private_key.clone(),
		})
	}
}

#[async_trait]
impl AccountInterface for LocalWallet {
	async fn address(&self) -> Result<Address, AccountError> {
		Ok(self.signer.address())
	}

	fn get_private_key(&self) -> SecretString {
		self.private_key.clone()
	}
}

/// Factory function to create a local account service from a private key.
pub fn create_account(
	private_key: &SecretString,
) -> Result<Box<dyn AccountInterface>, AccountError> {
	Ok(Box::new(LocalWallet::new(private_key)?))
}
