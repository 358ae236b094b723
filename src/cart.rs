//! # Cart Engine
//!
//! Pure, synchronous bookkeeping for the shopping cart. The cart holds at most one
//! [`CartLine`] per menu item, in the order items were first added, and derives its
//! money figures on every read instead of caching them.
//!
//! ```rust
//! use quickbite::cart::Cart;
//! use quickbite::model::MenuItem;
//!
//! let mut cart = Cart::new(30.0);
//! let thali = MenuItem::new("a", "Thali", 100.0);
//! cart.add(&thali);
//! cart.add(&thali);
//! cart.add(&MenuItem::new("b", "Lassi", 50.0));
//!
//! assert_eq!(cart.subtotal(), 250.0);
//! assert_eq!(cart.total(), 280.0);
//! ```

use crate::model::{ItemId, MenuItem, OrderLine};

/// One aggregated cart entry. `qty` is always at least 1.
#[derive(Debug, Clone, PartialEq)]
pub struct CartLine {
    pub id: ItemId,
    pub name: String,
    /// Price captured when the item was first added.
    pub price: f64,
    pub qty: u32,
}

impl CartLine {
    pub fn line_total(&self) -> f64 {
        self.price * f64::from(self.qty)
    }

    pub fn to_order_line(&self) -> OrderLine {
        OrderLine {
            item_id: self.id.clone(),
            name: self.name.clone(),
            qty: self.qty,
            price: self.price,
        }
    }
}

/// Money figures derived from a cart at one point in time.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct CartSummary {
    pub lines: usize,
    pub item_count: u32,
    pub subtotal: f64,
    pub delivery_fee: f64,
    pub total: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Cart {
    lines: Vec<CartLine>,
    delivery_fee: f64,
    revision: u64,
}

impl Cart {
    /// Creates an empty cart that charges `delivery_fee` whenever it holds anything.
    pub fn new(delivery_fee: f64) -> Self {
        Self {
            lines: Vec::new(),
            delivery_fee,
            revision: 0,
        }
    }

    /// Adds one unit of `item`, creating a line on first add.
    pub fn add(&mut self, item: &MenuItem) {
        match self.position(&item.id) {
            Some(idx) => self.lines[idx].qty += 1,
            None => self.lines.push(CartLine {
                id: item.id.clone(),
                name: item.name.clone(),
                price: item.price,
                qty: 1,
            }),
        }
        self.revision += 1;
    }

    /// Returns `false` if no line matches `id`.
    pub fn increment(&mut self, id: &ItemId) -> bool {
        let Some(idx) = self.position(id) else {
            return false;
        };
        self.lines[idx].qty += 1;
        self.revision += 1;
        true
    }

    /// Removes one unit; a line at quantity 1 is dropped entirely.
    /// Returns `false` if no line matches `id`.
    pub fn decrement(&mut self, id: &ItemId) -> bool {
        let Some(idx) = self.position(id) else {
            return false;
        };
        if self.lines[idx].qty > 1 {
            self.lines[idx].qty -= 1;
        } else {
            self.lines.remove(idx);
        }
        self.revision += 1;
        true
    }

    pub fn clear(&mut self) {
        if !self.lines.is_empty() {
            self.lines.clear();
            self.revision += 1;
        }
    }

    pub fn subtotal(&self) -> f64 {
        self.lines.iter().map(CartLine::line_total).sum()
    }

    /// The configured fee, or zero for an empty cart.
    pub fn delivery_fee(&self) -> f64 {
        if self.lines.is_empty() {
            0.0
        } else {
            self.delivery_fee
        }
    }

    pub fn total(&self) -> f64 {
        self.subtotal() + self.delivery_fee()
    }

    /// Total number of units across all lines (the header badge count).
    pub fn item_count(&self) -> u32 {
        self.lines.iter().map(|line| line.qty).sum()
    }

    pub fn summary(&self) -> CartSummary {
        CartSummary {
            lines: self.lines.len(),
            item_count: self.item_count(),
            subtotal: self.subtotal(),
            delivery_fee: self.delivery_fee(),
            total: self.total(),
        }
    }

    pub fn lines(&self) -> &[CartLine] {
        &self.lines
    }

    pub fn line(&self, id: &ItemId) -> Option<&CartLine> {
        self.lines.iter().find(|line| &line.id == id)
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Bumped by every mutation that changed the cart.
    pub fn revision(&self) -> u64 {
        self.revision
    }

    fn position(&self, id: &ItemId) -> Option<usize> {
        self.lines.iter().position(|line| &line.id == id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    fn item(id: &str, price: f64) -> MenuItem {
        MenuItem::new(id, format!("Item {id}"), price)
    }

    fn sample_cart() -> Cart {
        let mut cart = Cart::new(30.0);
        let a = item("a", 100.0);
        cart.add(&a);
        cart.add(&a);
        cart.add(&item("b", 50.0));
        cart
    }

    #[test]
    fn add_aggregates_by_item_id() {
        let cart = sample_cart();
        assert_eq!(cart.len(), 2);
        assert_eq!(cart.line(&"a".into()).unwrap().qty, 2);
        assert_eq!(cart.line(&"b".into()).unwrap().qty, 1);
        assert_eq!(cart.item_count(), 3);
        assert_eq!(cart.subtotal(), 250.0);
        assert_eq!(cart.total(), 280.0);
    }

    #[test]
    fn decrement_to_zero_removes_line() {
        let mut cart = sample_cart();
        assert!(cart.decrement(&"a".into()));
        assert!(cart.decrement(&"a".into()));

        assert!(cart.line(&"a".into()).is_none());
        assert_eq!(cart.len(), 1);
        assert_eq!(cart.subtotal(), 50.0);
        assert_eq!(cart.total(), 80.0);
    }

    #[test]
    fn unknown_ids_are_noops() {
        let mut cart = sample_cart();
        let before = cart.clone();

        assert!(!cart.decrement(&"missing".into()));
        assert!(!cart.increment(&"missing".into()));
        assert_eq!(cart, before);
    }

    #[test]
    fn empty_cart_has_no_fee() {
        let mut cart = sample_cart();
        cart.clear();

        assert!(cart.is_empty());
        assert_eq!(cart.delivery_fee(), 0.0);
        assert_eq!(cart.total(), cart.subtotal());
        assert_eq!(cart.total(), 0.0);
    }

    #[test]
    fn price_is_snapshotted_on_first_add() {
        let mut cart = Cart::new(30.0);
        cart.add(&item("a", 100.0));
        // Catalog repriced the dish after it went into the cart.
        cart.add(&item("a", 120.0));

        assert_eq!(cart.line(&"a".into()).unwrap().price, 100.0);
        assert_eq!(cart.subtotal(), 200.0);
    }

    #[test]
    fn subtotal_tracks_lines_through_mixed_operations() {
        let mut cart = Cart::new(30.0);
        let items = [item("a", 12.5), item("b", 80.0), item("c", 3.25)];
        let ops: [(usize, u8); 12] = [
            (0, 0), (1, 0), (0, 1), (2, 0), (1, 2), (1, 2),
            (2, 1), (0, 2), (2, 2), (2, 2), (0, 0), (2, 2),
        ];

        for (idx, op) in ops {
            let id = items[idx].id.clone();
            match op {
                0 => cart.add(&items[idx]),
                1 => {
                    cart.increment(&id);
                }
                _ => {
                    cart.decrement(&id);
                }
            }

            let expected: f64 = cart
                .lines()
                .iter()
                .map(|l| l.price * f64::from(l.qty))
                .sum();
            assert_eq!(cart.subtotal(), expected);
            assert!(cart.lines().iter().all(|l| l.qty >= 1));
            let unique: HashSet<_> = cart.lines().iter().map(|l| &l.id).collect();
            assert_eq!(unique.len(), cart.len());
        }
    }

    #[test]
    fn revision_moves_only_on_effective_changes() {
        let mut cart = Cart::new(30.0);
        cart.clear();
        cart.decrement(&"a".into());
        assert_eq!(cart.revision(), 0);

        cart.add(&item("a", 1.0));
        cart.increment(&"a".into());
        assert_eq!(cart.revision(), 2);
    }
}
