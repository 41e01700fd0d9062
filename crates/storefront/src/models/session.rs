//! Session-related types.
//!
//! Keys for the data the storefront keeps in the session across requests.

/// Session keys for customer data.
pub mod keys {
    /// Key for the customer registered (or signed in) in this session.
    pub const CURRENT_CUSTOMER: &str = "current_customer";

    /// Key for an order a guest assembled before signing up.
    pub const PENDING_ORDER: &str = "pending_order";
}
