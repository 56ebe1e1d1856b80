//! Swap endpoints.

use crate::{
	apis::{amount_from, api_error},
	server::AppState,
};
use axum::{
	extract::{rejection::JsonRejection, State},
	response::Json,
};
use swapburn_types::{APIError, AmountRequest, SwapThenBurnResult, TransactionResult};

/// Handles POST /api/swap requests.
pub async fn handle_swap(
	State(state): State<AppState>,
	body: Result<Json<AmountRequest>, JsonRejection>,
) -> Result<Json<TransactionResult>, APIError> {
	let amount = amount_from(body)?;
	match state.engine.swap(&amount).await {
		Ok(result) => Ok(Json(result)),
		Err(e) => {
			tracing::warn!("Swap request failed: {}", e);
			Err(api_error(e))
		},
	}
}

/// Handles POST /api/swap-then-burn requests.
pub async fn handle_swap_then_burn(
	State(state): State<AppState>,
	body: Result<Json<AmountRequest>, JsonRejection>,
) -> Result<Json<SwapThenBurnResult>, APIError> {
	let amount = amount_from(body)?;
	match state.engine.swap_then_burn(&amount).await {
		Ok(result) => Ok(Json(result)),
		Err(e) => {
			tracing::warn!("Swap-then-burn request failed: {}", e);
			Err(api_error(e))
		},
	}
}
