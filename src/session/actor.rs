//! # Session Actor
//!
//! The "server" half of the session. It owns the [`SessionState`] and the receiver end
//! of the channel, and applies requests one at a time.
//!
//! **Concurrency Model**:
//! Requests are processed *sequentially* in a single Tokio task, so cart mutations are
//! atomic with respect to each other without a `Mutex`. The actor never awaits network
//! I/O itself; the [`StorefrontClient`](crate::clients::StorefrontClient) does that and
//! reports the outcome back as another request.

use crate::session::message::SessionRequest;
use crate::session::{CartCommand, Checkout, SessionState};
use tokio::sync::mpsc;
use tracing::{debug, info, warn};

pub struct SessionActor {
    receiver: mpsc::Receiver<SessionRequest>,
    state: SessionState,
}

impl SessionActor {
    pub fn new(receiver: mpsc::Receiver<SessionRequest>, state: SessionState) -> Self {
        Self { receiver, state }
    }

    /// Runs the actor's event loop, processing requests until every handle is dropped.
    pub async fn run(mut self) {
        info!("Session started");

        while let Some(msg) = self.receiver.recv().await {
            self.handle(msg);
        }

        info!(
            cart_lines = self.state.cart().len(),
            "Session shut down"
        );
    }

    fn handle(&mut self, msg: SessionRequest) {
        let state = &mut self.state;
        match msg {
            SessionRequest::Snapshot { respond_to } => {
                let _ = respond_to.send(state.clone());
            }
            SessionRequest::BeginLoading { respond_to } => {
                debug!("Loading restaurants");
                state.begin_loading();
                let _ = respond_to.send(());
            }
            SessionRequest::RestaurantsLoaded {
                restaurants,
                respond_to,
            } => {
                info!(count = restaurants.len(), "Restaurants ready");
                state.restaurants_loaded(restaurants);
                let _ = respond_to.send(());
            }
            SessionRequest::RestaurantsFailed { respond_to } => {
                warn!("Restaurant list unavailable");
                state.restaurants_failed();
                let _ = respond_to.send(());
            }
            SessionRequest::OpenRestaurant {
                restaurant,
                respond_to,
            } => {
                let ticket = state.open_restaurant(restaurant);
                info!(
                    restaurant_id = %ticket.restaurant_id,
                    generation = ticket.generation,
                    "Restaurant opened"
                );
                let _ = respond_to.send(ticket);
            }
            SessionRequest::CloseRestaurant { respond_to } => {
                state.close_restaurant();
                debug!(generation = state.menu_generation(), "Restaurant closed");
                let _ = respond_to.send(());
            }
            SessionRequest::ApplyMenu {
                ticket,
                items,
                respond_to,
            } => {
                let count = items.len();
                let applied = state.apply_menu(&ticket, items);
                if applied {
                    debug!(restaurant_id = %ticket.restaurant_id, count, "Menu applied");
                } else {
                    warn!(
                        restaurant_id = %ticket.restaurant_id,
                        generation = ticket.generation,
                        current = state.menu_generation(),
                        "Stale menu discarded"
                    );
                }
                let _ = respond_to.send(applied);
            }
            SessionRequest::IsCurrent { ticket, respond_to } => {
                let _ = respond_to.send(state.is_current(&ticket));
            }
            SessionRequest::Cart {
                command,
                respond_to,
            } => {
                debug!(?command, "Cart");
                let summary = match command {
                    CartCommand::Add(item) => state.add_to_cart(&item),
                    CartCommand::Increment(id) => state.increment(&id),
                    CartCommand::Decrement(id) => state.decrement(&id),
                    CartCommand::Clear => state.clear_cart(),
                };
                debug!(
                    lines = summary.lines,
                    items = summary.item_count,
                    total = summary.total,
                    "Cart updated"
                );
                let _ = respond_to.send(summary);
            }
            SessionRequest::BeginCheckout { respond_to } => {
                let checkout = state.begin_checkout();
                match &checkout {
                    Checkout::Ready(submission) => info!(
                        key = %submission.idempotency_key,
                        total = submission.request.total,
                        "Checkout started"
                    ),
                    Checkout::Skipped(reason) => debug!(?reason, "Checkout skipped"),
                }
                let _ = respond_to.send(checkout);
            }
            SessionRequest::OrderPlaced {
                order_id,
                respond_to,
            } => {
                info!(%order_id, "Order placed");
                state.order_placed(order_id);
                let _ = respond_to.send(());
            }
            SessionRequest::OrderFailed { respond_to } => {
                warn!(cart_lines = state.cart().len(), "Order failed, cart kept");
                state.order_failed();
                let _ = respond_to.send(());
            }
            SessionRequest::AbortCheckout { key, respond_to } => {
                let released = state.abort_checkout(key);
                if released {
                    warn!(%key, "Checkout abandoned, guard released");
                } else {
                    debug!(%key, "Abort ignored, checkout already settled");
                }
                let _ = respond_to.send(released);
            }
        }
    }
}
