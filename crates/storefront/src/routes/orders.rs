//! Pending guest order route handlers.
//!
//! A guest can collect products before having an account. The lines are
//! kept in the session; signing up attaches them to the new customer.

use axum::{Form, Json};
use serde::{Deserialize, Serialize};
use shopfront_core::{OrderLine, ProductId};
use tower_sessions::Session;
use tracing::instrument;

use crate::error::{AppError, Result};
use crate::middleware::add_to_pending_order;

/// Add-to-order form data.
#[derive(Debug, Deserialize)]
pub struct AddToOrderForm {
    pub product_id: String,
    pub quantity: Option<u32>,
}

impl AddToOrderForm {
    /// The order line this form asks for. Quantity defaults to one.
    fn into_line(self) -> Result<OrderLine> {
        let product_id = self.product_id.trim();
        if product_id.is_empty() {
            return Err(AppError::BadRequest("product_id is required".to_string()));
        }

        let quantity = self.quantity.unwrap_or(1);
        if quantity == 0 {
            return Err(AppError::BadRequest(
                "quantity must be at least 1".to_string(),
            ));
        }

        Ok(OrderLine {
            product_id: ProductId::new(product_id),
            quantity,
        })
    }
}

/// What the pending order looks like after a change.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PendingOrderSummary {
    pub lines: usize,
    pub item_count: u32,
}

/// Add a product to the session's pending order.
#[instrument(skip(session))]
pub async fn add(
    session: Session,
    Form(form): Form<AddToOrderForm>,
) -> Result<Json<PendingOrderSummary>> {
    let line = form.into_line()?;
    let order = add_to_pending_order(&session, line).await?;

    tracing::debug!(items = order.item_count(), "Pending order updated");

    Ok(Json(PendingOrderSummary {
        lines: order.lines.len(),
        item_count: order.item_count(),
    }))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn form(product_id: &str, quantity: Option<u32>) -> AddToOrderForm {
        AddToOrderForm {
            product_id: product_id.to_string(),
            quantity,
        }
    }

    #[test]
    fn test_quantity_defaults_to_one() {
        let line = form(" p-1 ", None).into_line();
        assert!(matches!(
            line,
            Ok(OrderLine { ref product_id, quantity: 1 }) if product_id.as_str() == "p-1"
        ));
    }

    #[test]
    fn test_rejects_missing_product_and_zero_quantity() {
        assert!(matches!(
            form("  ", Some(1)).into_line(),
            Err(AppError::BadRequest(_))
        ));
        assert!(matches!(
            form("p-1", Some(0)).into_line(),
            Err(AppError::BadRequest(_))
        ));
    }
}
