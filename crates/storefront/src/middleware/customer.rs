//! Session helpers for customer state.
//!
//! The registered customer and any pending guest order are session state:
//! they outlive a single request and are shared with later pages. Handlers
//! and the sign-up component receive the [`Session`] explicitly rather than
//! reaching for globals.

use shopfront_core::{Customer, OrderLine, PendingOrder};
use tower_sessions::Session;

use crate::models::session_keys;

/// Helper to set the current customer in the session.
///
/// # Errors
///
/// Returns an error if the session cannot be modified.
pub async fn set_current_customer(
    session: &Session,
    customer: &Customer,
) -> Result<(), tower_sessions::session::Error> {
    session
        .insert(session_keys::CURRENT_CUSTOMER, customer)
        .await
}

/// Helper to read the current customer from the session.
///
/// # Errors
///
/// Returns an error if the session cannot be read.
pub async fn current_customer(
    session: &Session,
) -> Result<Option<Customer>, tower_sessions::session::Error> {
    session.get(session_keys::CURRENT_CUSTOMER).await
}

/// Helper to read the pending guest order, if any.
///
/// # Errors
///
/// Returns an error if the session cannot be read.
pub async fn pending_order(
    session: &Session,
) -> Result<Option<PendingOrder>, tower_sessions::session::Error> {
    session.get(session_keys::PENDING_ORDER).await
}

/// Helper to store a pending guest order.
///
/// # Errors
///
/// Returns an error if the session cannot be modified.
pub async fn set_pending_order(
    session: &Session,
    order: &PendingOrder,
) -> Result<(), tower_sessions::session::Error> {
    session.insert(session_keys::PENDING_ORDER, order).await
}

/// Add a line to the pending guest order, starting one if there is none.
///
/// Returns the order as stored.
///
/// # Errors
///
/// Returns an error if the session cannot be read or modified.
pub async fn add_to_pending_order(
    session: &Session,
    line: OrderLine,
) -> Result<PendingOrder, tower_sessions::session::Error> {
    let mut order = pending_order(session).await?.unwrap_or_default();
    order.add_line(line);
    set_pending_order(session, &order).await?;
    Ok(order)
}

/// Helper to drop the pending guest order once it has been placed.
///
/// # Errors
///
/// Returns an error if the session cannot be modified.
pub async fn clear_pending_order(session: &Session) -> Result<(), tower_sessions::session::Error> {
    session
        .remove::<PendingOrder>(session_keys::PENDING_ORDER)
        .await?;
    Ok(())
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use std::sync::Arc;

    use shopfront_core::{CustomerId, ProductId};
    use tower_sessions::MemoryStore;

    use super::*;

    fn session() -> Session {
        Session::new(None, Arc::new(MemoryStore::default()), None)
    }

    #[tokio::test]
    async fn test_current_customer_roundtrip() {
        let session = session();
        assert!(current_customer(&session).await.unwrap().is_none());

        let customer = Customer {
            id: CustomerId::new("5a1b2c3d4e5f6a7b8c9d0e1f"),
            email: "ada@example.com".to_string(),
            name: "Ada".to_string(),
            address: String::new(),
            mobile: String::new(),
            birth_date: "10/12/1990".to_string(),
            gender: String::new(),
        };
        set_current_customer(&session, &customer).await.unwrap();

        assert_eq!(current_customer(&session).await.unwrap(), Some(customer));
    }

    #[tokio::test]
    async fn test_pending_order_set_and_clear() {
        let session = session();
        let order = PendingOrder::new(vec![OrderLine {
            product_id: ProductId::new("p-1"),
            quantity: 1,
        }]);

        set_pending_order(&session, &order).await.unwrap();
        assert_eq!(pending_order(&session).await.unwrap(), Some(order));

        clear_pending_order(&session).await.unwrap();
        assert!(pending_order(&session).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_add_to_pending_order_starts_and_extends() {
        let session = session();
        let line = |product: &str, quantity| OrderLine {
            product_id: ProductId::new(product),
            quantity,
        };

        let order = add_to_pending_order(&session, line("p-1", 1)).await.unwrap();
        assert_eq!(order.item_count(), 1);

        add_to_pending_order(&session, line("p-2", 2)).await.unwrap();
        add_to_pending_order(&session, line("p-1", 1)).await.unwrap();

        let stored = pending_order(&session).await.unwrap().unwrap();
        assert_eq!(stored.lines, vec![line("p-1", 2), line("p-2", 2)]);
    }
}
