//! # Session Handle
//!
//! The sending half of the session actor. Cheap to clone; every method is one
//! request/reply round trip over the actor's channel.

use crate::cart::CartSummary;
use crate::model::{ItemId, MenuItem, OrderId, Restaurant};
use crate::session::message::{Response, SessionRequest};
use crate::session::{CartCommand, Checkout, MenuTicket, SessionError, SessionState};
use tokio::sync::{mpsc, oneshot};
use uuid::Uuid;

#[derive(Clone, Debug)]
pub struct SessionHandle {
    sender: mpsc::Sender<SessionRequest>,
}

impl SessionHandle {
    pub fn new(sender: mpsc::Sender<SessionRequest>) -> Self {
        Self { sender }
    }

    async fn request<T>(
        &self,
        build: impl FnOnce(Response<T>) -> SessionRequest,
    ) -> Result<T, SessionError> {
        let (respond_to, response) = oneshot::channel();
        self.sender
            .send(build(respond_to))
            .await
            .map_err(|_| SessionError::ActorClosed)?;
        response.await.map_err(|_| SessionError::ActorDropped)
    }

    pub async fn snapshot(&self) -> Result<SessionState, SessionError> {
        self.request(|respond_to| SessionRequest::Snapshot { respond_to })
            .await
    }

    pub async fn begin_loading(&self) -> Result<(), SessionError> {
        self.request(|respond_to| SessionRequest::BeginLoading { respond_to })
            .await
    }

    pub async fn restaurants_loaded(&self, restaurants: Vec<Restaurant>) -> Result<(), SessionError> {
        self.request(|respond_to| SessionRequest::RestaurantsLoaded {
            restaurants,
            respond_to,
        })
        .await
    }

    pub async fn restaurants_failed(&self) -> Result<(), SessionError> {
        self.request(|respond_to| SessionRequest::RestaurantsFailed { respond_to })
            .await
    }

    pub async fn open_restaurant(&self, restaurant: Restaurant) -> Result<MenuTicket, SessionError> {
        self.request(|respond_to| SessionRequest::OpenRestaurant {
            restaurant,
            respond_to,
        })
        .await
    }

    pub async fn close_restaurant(&self) -> Result<(), SessionError> {
        self.request(|respond_to| SessionRequest::CloseRestaurant { respond_to })
            .await
    }

    pub async fn apply_menu(
        &self,
        ticket: MenuTicket,
        items: Vec<MenuItem>,
    ) -> Result<bool, SessionError> {
        self.request(|respond_to| SessionRequest::ApplyMenu {
            ticket,
            items,
            respond_to,
        })
        .await
    }

    pub async fn is_current(&self, ticket: MenuTicket) -> Result<bool, SessionError> {
        self.request(|respond_to| SessionRequest::IsCurrent { ticket, respond_to })
            .await
    }

    pub async fn cart(&self, command: CartCommand) -> Result<CartSummary, SessionError> {
        self.request(|respond_to| SessionRequest::Cart {
            command,
            respond_to,
        })
        .await
    }

    pub async fn add_to_cart(&self, item: MenuItem) -> Result<CartSummary, SessionError> {
        self.cart(CartCommand::Add(item)).await
    }

    pub async fn increment(&self, id: ItemId) -> Result<CartSummary, SessionError> {
        self.cart(CartCommand::Increment(id)).await
    }

    pub async fn decrement(&self, id: ItemId) -> Result<CartSummary, SessionError> {
        self.cart(CartCommand::Decrement(id)).await
    }

    pub async fn clear_cart(&self) -> Result<CartSummary, SessionError> {
        self.cart(CartCommand::Clear).await
    }

    pub async fn begin_checkout(&self) -> Result<Checkout, SessionError> {
        self.request(|respond_to| SessionRequest::BeginCheckout { respond_to })
            .await
    }

    pub async fn order_placed(&self, order_id: OrderId) -> Result<(), SessionError> {
        self.request(|respond_to| SessionRequest::OrderPlaced {
            order_id,
            respond_to,
        })
        .await
    }

    pub async fn order_failed(&self) -> Result<(), SessionError> {
        self.request(|respond_to| SessionRequest::OrderFailed { respond_to })
            .await
    }

    /// Releases the placing guard held by the checkout that issued `key`.
    /// Answers `false` if that checkout already settled.
    pub async fn abort_checkout(&self, key: Uuid) -> Result<bool, SessionError> {
        self.request(|respond_to| SessionRequest::AbortCheckout { key, respond_to })
            .await
    }
}
