//! HTTP server for the swap-and-burn API.

use axum::{
	routing::{get, post},
	Router,
};
use std::sync::Arc;
use swapburn_config::ApiConfig;
use swapburn_core::SwapBurnEngine;
use tokio::net::TcpListener;
use tower::ServiceBuilder;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

/// Shared application state for the API server.
#[derive(Clone)]
pub struct AppState {
	/// Engine executing every request.
	pub engine: Arc<SwapBurnEngine>,
}

/// Builds the router with every route under `/api`.
pub fn router(engine: Arc<SwapBurnEngine>) -> Router {
	Router::new()
		.nest(
			"/api",
			Router::new()
				.route("/swap", post(crate::apis::swap::handle_swap))
				.route(
					"/swap-then-burn",
					post(crate::apis::swap::handle_swap_then_burn),
				)
				.route("/burn", post(crate::apis::burn::handle_burn))
				.route("/balances", get(crate::apis::balances::handle_balances)),
		)
		.layer(
			ServiceBuilder::new()
				.layer(TraceLayer::new_for_http())
				.layer(CorsLayer::permissive()),
		)
		.with_state(AppState { engine })
}

/// Starts the HTTP server and runs it until the listener fails.
pub async fn start_server(
	api_config: ApiConfig,
	engine: Arc<SwapBurnEngine>,
) -> Result<(), Box<dyn std::error::Error>> {
	let app = router(engine);

	let bind_address = format!("{}:{}", api_config.host, api_config.port);
	let listener = TcpListener::bind(&bind_address).await?;

	tracing::info!("Swap-and-burn API server starting on {}", bind_address);

	axum::serve(listener, app).await?;

	Ok(())
}
