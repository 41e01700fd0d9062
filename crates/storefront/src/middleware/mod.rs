//! HTTP middleware stack for storefront.
//!
//! # Middleware Order (bottom to top in Router)
//!
//! 1. Sentry layers (capture errors, transactions)
//! 2. `TraceLayer` (request tracing)
//! 3. Request ID (add unique ID to each request)
//! 4. Session layer (tower-sessions with in-memory store)

pub mod customer;
pub mod request_id;
pub mod session;

pub use customer::{
    add_to_pending_order, clear_pending_order, current_customer, pending_order,
    set_current_customer, set_pending_order,
};
pub use request_id::request_id_middleware;
pub use session::create_session_layer;
