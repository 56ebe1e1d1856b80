//! Balance endpoint.

use crate::{apis::api_error, server::AppState};
use axum::{extract::State, response::Json};
use swapburn_types::{APIError, BalancesResponse};

/// Handles GET /api/balances requests.
pub async fn handle_balances(
	State(state): State<AppState>,
) -> Result<Json<BalancesResponse>, APIError> {
	match state.engine.balances().await {
		Ok(balances) => Ok(Json(BalancesResponse {
			account: state.engine.account().to_string(),
			balances,
		})),
		Err(e) => {
			tracing::warn!("Balance request failed: {}", e);
			Err(api_error(e))
		},
	}
}
