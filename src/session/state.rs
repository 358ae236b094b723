//! The storefront's application state and every synchronous transition on it.
//!
//! [`SessionState`] is owned by the session actor; nothing else mutates it. The
//! methods here never perform I/O, so they are exercised directly by unit tests and
//! driven by [`SessionActor`](super::SessionActor) in production.

use crate::cart::{Cart, CartSummary};
use crate::model::{
    round_currency, CustomerDetails, ItemId, MenuItem, OrderId, OrderRequest, OrderSubmission,
    Restaurant, RestaurantId,
};
use uuid::Uuid;

/// Banner shown when the restaurant list could not be loaded.
pub const LOAD_FAILED_BANNER: &str = "Failed to load restaurants";
/// Banner shown when an order submission failed.
pub const ORDER_FAILED_BANNER: &str = "Failed to place order";

/// Tags a menu fetch with the selection it was started for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MenuTicket {
    pub restaurant_id: RestaurantId,
    pub generation: u64,
}

/// Why a checkout request did not produce a submission.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkipReason {
    NoRestaurant,
    EmptyCart,
    AlreadyPlacing,
}

/// Result of starting a checkout.
#[derive(Debug, Clone, PartialEq)]
pub enum Checkout {
    /// The order is ready to be posted; the session is now marked as placing.
    Ready(OrderSubmission),
    /// Preconditions did not hold; nothing changed.
    Skipped(SkipReason),
}

/// The key of the last submission, kept while the cart it described is unchanged.
#[derive(Debug, Clone, PartialEq)]
struct PendingKey {
    key: Uuid,
    restaurant_id: RestaurantId,
    cart_revision: u64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct SessionState {
    restaurants: Vec<Restaurant>,
    loading: bool,
    error: Option<String>,
    selected: Option<Restaurant>,
    menu: Vec<MenuItem>,
    menu_generation: u64,
    cart: Cart,
    placing: bool,
    last_order_id: Option<OrderId>,
    pending_key: Option<PendingKey>,
    customer: CustomerDetails,
}

impl SessionState {
    pub fn new(delivery_fee: f64, customer: CustomerDetails) -> Self {
        Self {
            restaurants: Vec::new(),
            loading: false,
            error: None,
            selected: None,
            menu: Vec::new(),
            menu_generation: 0,
            cart: Cart::new(delivery_fee),
            placing: false,
            last_order_id: None,
            pending_key: None,
            customer,
        }
    }

    // --- Accessors ---

    pub fn restaurants(&self) -> &[Restaurant] {
        &self.restaurants
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    /// The error banner, if one is showing.
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn selected(&self) -> Option<&Restaurant> {
        self.selected.as_ref()
    }

    pub fn menu(&self) -> &[MenuItem] {
        &self.menu
    }

    pub fn menu_generation(&self) -> u64 {
        self.menu_generation
    }

    pub fn cart(&self) -> &Cart {
        &self.cart
    }

    pub fn is_placing(&self) -> bool {
        self.placing
    }

    /// Identifier of the most recent successful order.
    pub fn last_order_id(&self) -> Option<&OrderId> {
        self.last_order_id.as_ref()
    }

    // --- Catalog ---

    pub fn begin_loading(&mut self) {
        self.loading = true;
        self.error = None;
    }

    pub fn restaurants_loaded(&mut self, restaurants: Vec<Restaurant>) {
        self.restaurants = restaurants;
        self.loading = false;
    }

    pub fn restaurants_failed(&mut self) {
        self.error = Some(LOAD_FAILED_BANNER.to_string());
        self.loading = false;
    }

    /// Selects `restaurant` and empties the menu until its own menu arrives.
    pub fn open_restaurant(&mut self, restaurant: Restaurant) -> MenuTicket {
        self.menu_generation += 1;
        self.menu.clear();
        let ticket = MenuTicket {
            restaurant_id: restaurant.id.clone(),
            generation: self.menu_generation,
        };
        self.selected = Some(restaurant);
        ticket
    }

    /// Returns to the restaurant list; menus still in flight become stale.
    pub fn close_restaurant(&mut self) {
        self.menu_generation += 1;
        self.menu.clear();
        self.selected = None;
    }

    /// Whether `ticket` still describes the current selection.
    pub fn is_current(&self, ticket: &MenuTicket) -> bool {
        ticket.generation == self.menu_generation
    }

    /// Installs `items` if `ticket` still describes the current selection.
    /// Returns `false` when the response was stale and discarded.
    pub fn apply_menu(&mut self, ticket: &MenuTicket, items: Vec<MenuItem>) -> bool {
        if !self.is_current(ticket) {
            return false;
        }
        self.menu = items;
        true
    }

    // --- Cart ---

    pub fn add_to_cart(&mut self, item: &MenuItem) -> CartSummary {
        self.cart.add(item);
        self.cart.summary()
    }

    pub fn increment(&mut self, id: &ItemId) -> CartSummary {
        self.cart.increment(id);
        self.cart.summary()
    }

    pub fn decrement(&mut self, id: &ItemId) -> CartSummary {
        self.cart.decrement(id);
        self.cart.summary()
    }

    pub fn clear_cart(&mut self) -> CartSummary {
        self.cart.clear();
        self.cart.summary()
    }

    // --- Checkout ---

    /// Snapshots the cart into an order and marks the session as placing.
    ///
    /// The idempotency key of a failed attempt is reused as long as neither the cart
    /// nor the selected restaurant changed since, so a retry can be deduplicated.
    pub fn begin_checkout(&mut self) -> Checkout {
        let Some(restaurant_id) = self.selected.as_ref().map(|r| r.id.clone()) else {
            return Checkout::Skipped(SkipReason::NoRestaurant);
        };
        if self.cart.is_empty() {
            return Checkout::Skipped(SkipReason::EmptyCart);
        }
        if self.placing {
            return Checkout::Skipped(SkipReason::AlreadyPlacing);
        }

        let cart_revision = self.cart.revision();
        let key = match &self.pending_key {
            Some(pending)
                if pending.cart_revision == cart_revision
                    && pending.restaurant_id == restaurant_id =>
            {
                pending.key
            }
            _ => Uuid::new_v4(),
        };
        self.pending_key = Some(PendingKey {
            key,
            restaurant_id: restaurant_id.clone(),
            cart_revision,
        });

        self.placing = true;
        self.last_order_id = None;
        self.error = None;

        let request = OrderRequest {
            restaurant_id,
            items: self.cart.lines().iter().map(|l| l.to_order_line()).collect(),
            subtotal: round_currency(self.cart.subtotal()),
            delivery_fee: round_currency(self.cart.delivery_fee()),
            total: round_currency(self.cart.total()),
            customer_name: self.customer.name.clone(),
            address: self.customer.address.clone(),
        };
        Checkout::Ready(OrderSubmission {
            idempotency_key: key,
            request,
        })
    }

    pub fn order_placed(&mut self, order_id: OrderId) {
        self.last_order_id = Some(order_id);
        self.cart.clear();
        self.pending_key = None;
        self.placing = false;
    }

    /// Leaves the cart as it was so the user can retry.
    pub fn order_failed(&mut self) {
        self.error = Some(ORDER_FAILED_BANNER.to_string());
        self.placing = false;
    }

    /// Releases the placing guard for a submission whose outcome will never be reported.
    ///
    /// Only the checkout that issued `key` can be aborted, and only while it is still
    /// in flight. The pending key is kept, so retrying the same cart reuses it.
    pub fn abort_checkout(&mut self, key: Uuid) -> bool {
        let owns_guard = self.placing
            && self
                .pending_key
                .as_ref()
                .is_some_and(|pending| pending.key == key);
        if owns_guard {
            self.placing = false;
        }
        owns_guard
    }
}
