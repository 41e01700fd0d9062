//! HTTP route handlers for storefront.
//!
//! # Route Structure
//!
//! ```text
//! GET  /health                 - Liveness check
//!
//! # Customers
//! GET  /customers/sign-up      - Sign-up page
//! POST /customers/sign-up      - Sign-up action (303 to /products on success)
//! GET  /customers/current      - Customer signed up in this session (JSON, 204 if none)
//!
//! # Orders
//! POST /orders/pending         - Add a product to the guest's pending order (JSON summary)
//! ```
//!
//! The product listing that sign-up redirects to is served by the catalogue
//! frontend, not by this binary.

pub mod customers;
pub mod orders;

use axum::{
    Router,
    extract::Request,
    middleware,
    routing::{get, post},
};
use tower_http::trace::TraceLayer;

use crate::middleware::{create_session_layer, request_id_middleware};
use crate::state::AppState;

/// Create the customer routes router.
pub fn customer_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/sign-up",
            get(customers::sign_up_page).post(customers::sign_up),
        )
        .route("/current", get(customers::current))
}

/// Create the order routes router.
pub fn order_routes() -> Router<AppState> {
    Router::new().route("/pending", post(orders::add))
}

/// Create all routes for the storefront.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/health", get(health))
        .nest("/customers", customer_routes())
        .nest("/orders", order_routes())
}

/// Build the storefront application with its middleware stack.
pub fn app(state: AppState) -> Router {
    let session_layer = create_session_layer(state.config());

    routes()
        .layer(session_layer)
        .layer(middleware::from_fn(request_id_middleware))
        .layer(TraceLayer::new_for_http().make_span_with(|request: &Request| {
            tracing::info_span!(
                "http_request",
                method = %request.method(),
                uri = %request.uri(),
                request_id = tracing::field::Empty,
            )
        }))
        .with_state(state)
}

/// Liveness health check endpoint.
///
/// Returns "ok" if the server is running. Does not check the backend.
async fn health() -> &'static str {
    "ok"
}
