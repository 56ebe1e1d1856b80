//! Route handlers and the mapping from engine errors to API errors.

pub mod balances;
pub mod burn;
pub mod swap;

use axum::extract::rejection::JsonRejection;
use axum::response::Json;
use swapburn_core::SwapBurnError;
use swapburn_types::{APIError, AmountRequest};

/// Seconds a client should wait before retrying after a receipt timeout.
const TIMEOUT_RETRY_AFTER_SECONDS: u64 = 30;

/// Unwraps an amount request body, reporting a malformed body in the same
/// JSON shape as any other invalid amount.
pub fn amount_from(body: Result<Json<AmountRequest>, JsonRejection>) -> Result<String, APIError> {
	match body {
		Ok(Json(request)) => Ok(request.amount),
		Err(rejection) => {
			tracing::warn!("Rejected request body: {}", rejection.body_text());
			Err(APIError::BadRequest {
				error_type: "INVALID_AMOUNT".to_string(),
				message: rejection.body_text(),
			})
		},
	}
}

/// Maps an engine error to the API error returned to the client.
///
/// Configuration failures are reported with a fixed message so that internal
/// details never reach the client.
pub fn api_error(err: SwapBurnError) -> APIError {
	let message = err.to_string();
	match err {
		SwapBurnError::Validation(_) => APIError::BadRequest {
			error_type: "INVALID_AMOUNT".to_string(),
			message,
		},
		SwapBurnError::InsufficientBalance {
			symbol,
			available,
			required,
		} => APIError::UnprocessableEntity {
			error_type: "INSUFFICIENT_BALANCE".to_string(),
			message,
			details: Some(serde_json::json!({
				"token": symbol,
				"available": available,
				"required": required,
			})),
		},
		SwapBurnError::EventNotFound { tx_hash, .. } => APIError::UnprocessableEntity {
			error_type: "TRANSFER_NOT_FOUND".to_string(),
			message,
			details: Some(serde_json::json!({ "transactionHash": tx_hash })),
		},
		SwapBurnError::SwapFailed { tx_hash } => APIError::UnprocessableEntity {
			error_type: "SWAP_FAILED".to_string(),
			message,
			details: Some(serde_json::json!({ "transactionHash": tx_hash })),
		},
		SwapBurnError::Quote(_) => APIError::ServiceUnavailable {
			error_type: "QUOTE_UNAVAILABLE".to_string(),
			message,
			retry_after: None,
		},
		SwapBurnError::Rpc(_) => APIError::ServiceUnavailable {
			error_type: "RPC_ERROR".to_string(),
			message,
			retry_after: None,
		},
		SwapBurnError::Timeout { .. } => APIError::ServiceUnavailable {
			error_type: "TRANSACTION_TIMEOUT".to_string(),
			message,
			retry_after: Some(TIMEOUT_RETRY_AFTER_SECONDS),
		},
		SwapBurnError::Config(_) => APIError::InternalServerError {
			error_type: "INTERNAL_ERROR".to_string(),
			message: "Internal server error".to_string(),
		},
	}
}
