//! Guest orders waiting for a customer account.

use serde::{Deserialize, Serialize};

use super::id::ProductId;

/// One product line of a pending order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderLine {
    pub product_id: ProductId,
    pub quantity: u32,
}

/// An order a guest assembled before having an account.
///
/// Its presence in the session is what tells sign-up to attach an order to
/// the newly registered customer.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PendingOrder {
    pub lines: Vec<OrderLine>,
}

impl PendingOrder {
    /// Create a pending order from its lines.
    #[must_use]
    pub const fn new(lines: Vec<OrderLine>) -> Self {
        Self { lines }
    }

    /// Add `line`, merging it into an existing line for the same product.
    pub fn add_line(&mut self, line: OrderLine) {
        match self
            .lines
            .iter_mut()
            .find(|existing| existing.product_id == line.product_id)
        {
            Some(existing) => existing.quantity = existing.quantity.saturating_add(line.quantity),
            None => self.lines.push(line),
        }
    }

    /// Total number of items across all lines.
    #[must_use]
    pub fn item_count(&self) -> u32 {
        self.lines
            .iter()
            .fold(0, |total, line| total.saturating_add(line.quantity))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_item_count() {
        let order = PendingOrder::new(vec![
            OrderLine {
                product_id: ProductId::new("p-1"),
                quantity: 2,
            },
            OrderLine {
                product_id: ProductId::new("p-9"),
                quantity: 3,
            },
        ]);
        assert_eq!(order.item_count(), 5);
        assert_eq!(PendingOrder::default().item_count(), 0);
    }

    #[test]
    fn test_add_line_merges_same_product() {
        let mut order = PendingOrder::default();
        order.add_line(OrderLine {
            product_id: ProductId::new("p-1"),
            quantity: 2,
        });
        order.add_line(OrderLine {
            product_id: ProductId::new("p-2"),
            quantity: 1,
        });
        order.add_line(OrderLine {
            product_id: ProductId::new("p-1"),
            quantity: 3,
        });

        assert_eq!(order.lines.len(), 2);
        assert_eq!(order.lines.first().map(|line| line.quantity), Some(5));
        assert_eq!(order.item_count(), 6);
    }

    #[test]
    fn test_add_line_saturates() {
        let mut order = PendingOrder::default();
        for _ in 0..2 {
            order.add_line(OrderLine {
                product_id: ProductId::new("p-1"),
                quantity: u32::MAX,
            });
        }
        assert_eq!(order.item_count(), u32::MAX);
    }
}
