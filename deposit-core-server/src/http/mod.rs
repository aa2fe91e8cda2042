//! HTTP surface: routes, extractors and error mapping.

pub mod deposit_accounts;
pub mod error;
pub mod extract;
pub mod rate_types;
pub mod state;

use axum::routing::{get, post};
use axum::Router;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

pub use error::{HttpError, ResultExt};
pub use state::AppState;

/// Builds the application router with tracing and permissive CORS.
pub fn router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        // Deposit accounts
        .route(
            "/comptes-depots",
            get(deposit_accounts::list_deposit_accounts).post(deposit_accounts::create_deposit_account),
        )
        .route("/comptes-depots/{id}", get(deposit_accounts::get_deposit_account))
        .route(
            "/comptes-depots/user/{user_id}",
            get(deposit_accounts::list_deposit_accounts_by_user),
        )
        .route(
            "/comptes-depots/{id}/withdraw",
            post(deposit_accounts::withdraw_deposit_account),
        )
        .route(
            "/comptes-depots/{id}/interest",
            get(deposit_accounts::get_deposit_account_interest),
        )
        // Rate types
        .route(
            "/type-comptes-depots",
            get(rate_types::list_rate_types).post(rate_types::create_rate_type),
        )
        .route(
            "/type-comptes-depots/{id}",
            get(rate_types::get_rate_type)
                .put(rate_types::update_rate_type)
                .delete(rate_types::delete_rate_type),
        )
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}
