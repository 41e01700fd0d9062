//! Attaching a pending guest order to a customer.

use async_trait::async_trait;
use serde::Serialize;
use shopfront_core::{CustomerId, OrderLine, PendingOrder};

use super::{BackendClient, ServiceError};

/// Places orders on behalf of customers.
#[async_trait]
pub trait OrdersService: Send + Sync {
    /// Place `order` for `customer_id`.
    async fn post_order(
        &self,
        customer_id: &CustomerId,
        order: &PendingOrder,
    ) -> Result<(), ServiceError>;
}

/// Body of `POST {api}/orders`.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct OrderRequest<'a> {
    customer_id: &'a CustomerId,
    lines: &'a [OrderLine],
}

/// [`OrdersService`] backed by `POST {api}/orders`.
#[derive(Clone)]
pub struct HttpOrdersClient {
    backend: BackendClient,
}

impl HttpOrdersClient {
    #[must_use]
    pub const fn new(backend: BackendClient) -> Self {
        Self { backend }
    }
}

#[async_trait]
impl OrdersService for HttpOrdersClient {
    async fn post_order(
        &self,
        customer_id: &CustomerId,
        order: &PendingOrder,
    ) -> Result<(), ServiceError> {
        let request = OrderRequest {
            customer_id,
            lines: &order.lines,
        };
        self.backend.post_json_empty("orders", &request).await?;
        tracing::info!(%customer_id, items = order.item_count(), "Pending order attached");
        Ok(())
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use shopfront_core::ProductId;

    use super::*;

    #[test]
    fn test_order_request_shape() {
        let lines = [OrderLine {
            product_id: ProductId::new("p-3"),
            quantity: 2,
        }];
        let customer_id = CustomerId::new("5a1b2c3d4e5f6a7b8c9d0e1f");
        let request = OrderRequest {
            customer_id: &customer_id,
            lines: &lines,
        };

        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "customerId": "5a1b2c3d4e5f6a7b8c9d0e1f",
                "lines": [{ "productId": "p-3", "quantity": 2 }]
            })
        );
    }
}
