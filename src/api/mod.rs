//! # Remote Storefront API
//!
//! The storefront consumes a small REST backend. [`StorefrontApi`] is the seam the rest
//! of the crate talks to; [`HttpApi`] speaks the real wire protocol with `reqwest`, and
//! [`mock::MockApi`] replays scripted responses in tests.
//!
//! | Method | Endpoint |
//! |--------|----------|
//! | [`restaurants`](StorefrontApi::restaurants) | `GET /api/restaurants` |
//! | [`seed`](StorefrontApi::seed) | `POST /api/seed` |
//! | [`menu`](StorefrontApi::menu) | `GET /api/restaurants/{id}/menu` |
//! | [`place_order`](StorefrontApi::place_order) | `POST /api/orders` |

pub mod error;
pub mod http;
pub mod mock;

pub use error::ApiError;
pub use http::HttpApi;

use crate::model::{MenuItem, OrderReceipt, OrderSubmission, Restaurant, RestaurantId};
use async_trait::async_trait;

/// Operations offered by the storefront backend.
///
/// Implementations must be shareable across tasks: the client fetches menus and submits
/// orders from whichever task drives the session.
#[async_trait]
pub trait StorefrontApi: Send + Sync {
    /// Fetches every restaurant. A `null` body is reported as an empty list.
    async fn restaurants(&self) -> Result<Vec<Restaurant>, ApiError>;

    /// Asks the backend to populate its demo catalog.
    async fn seed(&self) -> Result<(), ApiError>;

    /// Fetches the menu of one restaurant.
    async fn menu(&self, restaurant_id: &RestaurantId) -> Result<Vec<MenuItem>, ApiError>;

    /// Submits an order and returns the identifier the backend assigned to it.
    async fn place_order(&self, submission: &OrderSubmission) -> Result<OrderReceipt, ApiError>;
}
