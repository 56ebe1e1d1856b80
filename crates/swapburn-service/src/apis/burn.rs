//! Burn endpoint.

use crate::{
	apis::{amount_from, api_error},
	server::AppState,
};
use axum::{
	extract::{rejection::JsonRejection, State},
	response::Json,
};
use swapburn_types::{APIError, AmountRequest, BurnResult};

/// Handles POST /api/burn requests.
pub async fn handle_burn(
	State(state): State<AppState>,
	body: Result<Json<AmountRequest>, JsonRejection>,
) -> Result<Json<BurnResult>, APIError> {
	let amount = amount_from(body)?;
	match state.engine.burn(&amount).await {
		Ok(result) => Ok(Json(result)),
		Err(e) => {
			tracing::warn!("Burn request failed: {}", e);
			Err(api_error(e))
		},
	}
}
