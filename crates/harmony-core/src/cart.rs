//! # Cart
//!
//! The customer's in-progress, unconfirmed selection of services before
//! checkout.
//!
//! ## Cart Operations Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                     Cart Operations                                 │
//! │                                                                     │
//! │  Consumer Action          Store Operation        Cart Change        │
//! │  ───────────────          ───────────────        ───────────        │
//! │  Click "Add to Cart" ───► add_to_cart() ───────► items.push(item)   │
//! │  Click "Remove" ────────► remove_from_cart() ──► retain(≠ id)       │
//! │  Checkout success ──────► clear_cart() ────────► items.clear()      │
//! │                                                                     │
//! │  The cart is VOLATILE: it is never written to durable storage,      │
//! │  so a reload always starts with an empty cart.                      │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## No dedup here
//! Appending the same service twice is allowed at this layer. The view
//! layer may choose to grey out an "Add" button via [`Cart::contains_service`],
//! but that is a UI policy, not a cart rule.

use serde::{Deserialize, Serialize};

use crate::money::Money;
use crate::types::CartItem;

/// The shopping cart: an ordered sequence of frozen service snapshots.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Cart {
    pub items: Vec<CartItem>,
}

impl Cart {
    /// Creates a new empty cart.
    pub fn new() -> Self {
        Cart { items: Vec::new() }
    }

    /// Appends an item to the end of the cart. Pure append, never fails.
    pub fn add(&mut self, item: CartItem) {
        self.items.push(item);
    }

    /// Removes ALL entries whose service id matches.
    ///
    /// A no-op (not an error) when nothing matches. Survivors keep their
    /// original relative order.
    pub fn remove_by_service(&mut self, service_id: &str) {
        self.items.retain(|i| i.service.id != service_id);
    }

    /// Empties the cart. Idempotent.
    pub fn clear(&mut self) {
        self.items.clear();
    }

    /// Whether some entry references the given service id.
    pub fn contains_service(&self, service_id: &str) -> bool {
        self.items.iter().any(|i| i.service.id == service_id)
    }

    /// Number of line items.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Checks if the cart is empty.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Sum of line prices, before the platform fee.
    pub fn subtotal(&self) -> Money {
        self.items.iter().map(|i| i.service.price).sum()
    }

    /// Totals with the given flat platform fee applied.
    ///
    /// An empty cart totals zero: the fee is only charged when there is
    /// something to pay for.
    pub fn totals(&self, platform_fee: Money) -> CartTotals {
        let subtotal = self.subtotal();
        let total = if self.is_empty() {
            Money::zero()
        } else {
            subtotal + platform_fee
        };
        CartTotals {
            item_count: self.len(),
            subtotal,
            platform_fee,
            total,
        }
    }
}

/// Cart totals summary, the order-summary box of a checkout view.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CartTotals {
    pub item_count: usize,
    pub subtotal: Money,
    pub platform_fee: Money,
    pub total: Money,
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Service;

    fn item(service_id: &str, rupees: i64) -> CartItem {
        CartItem {
            provider_id: "p1".to_string(),
            provider_name: "Pandit Sharma".to_string(),
            service: Service {
                id: service_id.to_string(),
                name: format!("Service {}", service_id),
                price: Money::from_rupees(rupees),
                description: String::new(),
                items: None,
            },
        }
    }

    #[test]
    fn test_add_appends_in_order() {
        let mut cart = Cart::new();
        cart.add(item("s1", 100));
        cart.add(item("s2", 200));

        assert_eq!(cart.len(), 2);
        assert_eq!(cart.items[0].service.id, "s1");
        assert_eq!(cart.items[1].service.id, "s2");
    }

    #[test]
    fn test_duplicates_are_not_prevented() {
        let mut cart = Cart::new();
        cart.add(item("s1", 100));
        cart.add(item("s1", 100));

        assert_eq!(cart.len(), 2);
        assert!(cart.contains_service("s1"));
    }

    #[test]
    fn test_remove_by_service_removes_all_matches() {
        let mut cart = Cart::new();
        cart.add(item("s1", 100));
        cart.add(item("s2", 200));
        cart.add(item("s1", 100));
        cart.add(item("s3", 300));

        cart.remove_by_service("s1");

        // Survivors keep their relative order
        let ids: Vec<&str> = cart.items.iter().map(|i| i.service.id.as_str()).collect();
        assert_eq!(ids, vec!["s2", "s3"]);
    }

    #[test]
    fn test_remove_missing_service_is_noop() {
        let mut cart = Cart::new();
        cart.add(item("s1", 100));

        cart.remove_by_service("does-not-exist");

        assert_eq!(cart.len(), 1);
    }

    #[test]
    fn test_clear_is_idempotent() {
        let mut cart = Cart::new();
        cart.add(item("s1", 100));

        cart.clear();
        assert!(cart.is_empty());

        cart.clear();
        assert!(cart.is_empty());
    }

    #[test]
    fn test_subtotal_and_totals() {
        let mut cart = Cart::new();
        cart.add(item("s1", 2500));

        let totals = cart.totals(Money::from_rupees(49));
        assert_eq!(totals.subtotal, Money::from_rupees(2500));
        assert_eq!(totals.total, Money::from_rupees(2549));
        assert_eq!(totals.item_count, 1);
    }

    #[test]
    fn test_empty_cart_totals_zero() {
        let cart = Cart::new();
        let totals = cart.totals(Money::from_rupees(49));

        assert_eq!(totals.subtotal, Money::zero());
        assert_eq!(totals.total, Money::zero());
        assert_eq!(totals.item_count, 0);
    }
}
