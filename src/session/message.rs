//! # Session Messages
//!
//! Requests sent from a [`SessionHandle`](super::SessionHandle) to the
//! [`SessionActor`](super::SessionActor). Each carries a oneshot sender for the reply.

use crate::cart::CartSummary;
use crate::model::{MenuItem, OrderId, Restaurant};
use crate::session::{CartCommand, Checkout, MenuTicket, SessionState};
use tokio::sync::oneshot;
use uuid::Uuid;

/// Type alias for the one-shot response channel used by the session actor.
pub type Response<T> = oneshot::Sender<T>;

#[derive(Debug)]
pub enum SessionRequest {
    /// A copy of the whole state, for rendering.
    Snapshot { respond_to: Response<SessionState> },
    BeginLoading { respond_to: Response<()> },
    RestaurantsLoaded {
        restaurants: Vec<Restaurant>,
        respond_to: Response<()>,
    },
    RestaurantsFailed { respond_to: Response<()> },
    OpenRestaurant {
        restaurant: Restaurant,
        respond_to: Response<MenuTicket>,
    },
    CloseRestaurant { respond_to: Response<()> },
    /// Answers `false` when the menu arrived for a selection that is no longer current.
    ApplyMenu {
        ticket: MenuTicket,
        items: Vec<MenuItem>,
        respond_to: Response<bool>,
    },
    /// Whether a menu ticket still matches the current selection.
    IsCurrent {
        ticket: MenuTicket,
        respond_to: Response<bool>,
    },
    Cart {
        command: CartCommand,
        respond_to: Response<CartSummary>,
    },
    BeginCheckout { respond_to: Response<Checkout> },
    OrderPlaced {
        order_id: OrderId,
        respond_to: Response<()>,
    },
    OrderFailed { respond_to: Response<()> },
    /// Sent when a submission was abandoned before its outcome was known.
    AbortCheckout {
        key: Uuid,
        respond_to: Response<bool>,
    },
}
