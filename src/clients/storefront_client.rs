use crate::api::StorefrontApi;
use crate::cart::CartSummary;
use crate::catalog::Catalog;
use crate::clients::StorefrontError;
use crate::model::{ItemId, MenuItem, OrderId, Restaurant};
use crate::session::{Checkout, SessionHandle, SessionState, SkipReason};
use std::sync::Arc;
use tokio::runtime::Handle;
use tracing::{debug, info, instrument, warn};
use uuid::Uuid;

/// What happened to a menu fetched by [`StorefrontClient::open_restaurant`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuOutcome {
    /// The menu was shown; carries the number of items.
    Applied(usize),
    /// Another restaurant was opened (or the view closed) while the fetch was in flight.
    Discarded,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OrderOutcome {
    Placed(OrderId),
    /// No request was sent.
    Skipped(SkipReason),
}

/// Drives the session: user intents go in, backend calls happen here, and their
/// results are reported back to the session actor.
///
/// Network I/O is never awaited inside the actor, so a slow backend does not block
/// cart edits or snapshots.
#[derive(Clone)]
pub struct StorefrontClient {
    session: SessionHandle,
    catalog: Catalog,
    api: Arc<dyn StorefrontApi>,
}

impl StorefrontClient {
    pub fn new(session: SessionHandle, api: Arc<dyn StorefrontApi>) -> Self {
        Self {
            session,
            catalog: Catalog::new(api.clone()),
            api,
        }
    }

    pub fn session(&self) -> &SessionHandle {
        &self.session
    }

    /// Loads the restaurant list into the session, seeding an empty backend once.
    ///
    /// On failure the session shows the load banner and the error is returned.
    #[instrument(skip(self))]
    pub async fn load_restaurants(&self) -> Result<usize, StorefrontError> {
        self.session.begin_loading().await?;

        match self.catalog.list_restaurants().await {
            Ok(restaurants) => {
                let count = restaurants.len();
                self.session.restaurants_loaded(restaurants).await?;
                Ok(count)
            }
            Err(e) => {
                warn!(error = %e, "Failed to load restaurants");
                self.session.restaurants_failed().await?;
                Err(e.into())
            }
        }
    }

    /// Selects a restaurant and loads its menu.
    ///
    /// The cart is left alone. If a different restaurant is opened before this menu
    /// arrives, the result is dropped and [`MenuOutcome::Discarded`] is returned.
    #[instrument(skip(self, restaurant), fields(restaurant_id = %restaurant.id))]
    pub async fn open_restaurant(&self, restaurant: Restaurant) -> Result<MenuOutcome, StorefrontError> {
        let ticket = self.session.open_restaurant(restaurant).await?;
        let items = match self.catalog.menu(&ticket.restaurant_id).await {
            Ok(items) => items,
            Err(e) => {
                // A failure for a restaurant the user already left is as stale as a success.
                if !self.session.is_current(ticket).await? {
                    debug!(error = %e, "Stale menu failure discarded");
                    return Ok(MenuOutcome::Discarded);
                }
                return Err(e.into());
            }
        };
        let count = items.len();

        if self.session.apply_menu(ticket, items).await? {
            Ok(MenuOutcome::Applied(count))
        } else {
            Ok(MenuOutcome::Discarded)
        }
    }

    #[instrument(skip(self))]
    pub async fn close_restaurant(&self) -> Result<(), StorefrontError> {
        Ok(self.session.close_restaurant().await?)
    }

    #[instrument(skip(self, item), fields(item_id = %item.id))]
    pub async fn add_to_cart(&self, item: MenuItem) -> Result<CartSummary, StorefrontError> {
        debug!(?item, "add_to_cart called");
        Ok(self.session.add_to_cart(item).await?)
    }

    #[instrument(skip(self))]
    pub async fn increment(&self, id: ItemId) -> Result<CartSummary, StorefrontError> {
        Ok(self.session.increment(id).await?)
    }

    #[instrument(skip(self))]
    pub async fn decrement(&self, id: ItemId) -> Result<CartSummary, StorefrontError> {
        Ok(self.session.decrement(id).await?)
    }

    #[instrument(skip(self))]
    pub async fn clear_cart(&self) -> Result<CartSummary, StorefrontError> {
        Ok(self.session.clear_cart().await?)
    }

    pub async fn snapshot(&self) -> Result<SessionState, StorefrontError> {
        Ok(self.session.snapshot().await?)
    }

    /// Submits the cart as an order.
    ///
    /// At most one submission is in flight per session; a call made while one is
    /// pending (or with no restaurant or an empty cart) returns
    /// [`OrderOutcome::Skipped`] without contacting the backend. On success the cart
    /// is cleared. On failure the cart is kept, the order banner is shown and the
    /// error is returned; retrying the same cart reuses the idempotency key. If the
    /// returned future is dropped mid-submission the guard is released all the same.
    #[instrument(skip(self))]
    pub async fn place_order(&self) -> Result<OrderOutcome, StorefrontError> {
        let submission = match self.session.begin_checkout().await? {
            Checkout::Ready(submission) => submission,
            Checkout::Skipped(reason) => {
                debug!(?reason, "Nothing to submit");
                return Ok(OrderOutcome::Skipped(reason));
            }
        };

        info!(
            key = %submission.idempotency_key,
            restaurant_id = %submission.request.restaurant_id,
            total = submission.request.total,
            "Submitting order"
        );

        let guard = CheckoutGuard::new(self.session.clone(), submission.idempotency_key);
        let outcome = match self.api.place_order(&submission).await {
            Ok(receipt) => {
                self.session.order_placed(receipt.order_id.clone()).await?;
                Ok(OrderOutcome::Placed(receipt.order_id))
            }
            Err(e) => {
                warn!(error = %e, "Order submission failed");
                self.session.order_failed().await?;
                Err(e.into())
            }
        };
        guard.disarm();
        outcome
    }
}

/// Releases the session's placing guard if a submission is dropped before its
/// outcome reaches the actor (a timeout, a `select!` branch, a cancelled task).
struct CheckoutGuard {
    session: Option<SessionHandle>,
    key: Uuid,
}

impl CheckoutGuard {
    fn new(session: SessionHandle, key: Uuid) -> Self {
        Self {
            session: Some(session),
            key,
        }
    }

    fn disarm(mut self) {
        self.session = None;
    }
}

impl Drop for CheckoutGuard {
    fn drop(&mut self) {
        let Some(session) = self.session.take() else {
            return;
        };
        let key = self.key;
        match Handle::try_current() {
            Ok(runtime) => {
                warn!(%key, "Order submission abandoned, releasing checkout");
                runtime.spawn(async move {
                    if let Err(e) = session.abort_checkout(key).await {
                        warn!(%key, error = %e, "Could not release checkout");
                    }
                });
            }
            Err(_) => warn!(%key, "No runtime to release abandoned checkout"),
        }
    }
}
