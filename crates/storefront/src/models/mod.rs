//! Domain models for storefront.
//!
//! Customer and order records live in `shopfront_core`; this module only
//! holds storefront-specific session types.

pub mod session;

pub use session::keys as session_keys;
