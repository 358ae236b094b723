//! # Session
//!
//! The storefront's application state, owned by a single actor.
//!
//! ## Structure
//!
//! - [`state`] - [`SessionState`] and its synchronous transitions (cart, selection, checkout)
//! - [`actions`] - [`CartCommand`] for cart mutations
//! - [`message`] - [`SessionRequest`](message::SessionRequest), the actor's inbox
//! - [`actor`] - [`SessionActor`], the event loop that owns the state
//! - [`handle`] - [`SessionHandle`], the cloneable sending half
//! - [`error`] - [`SessionError`]
//! - [`new()`] - Factory function that creates the actor and its handle
//!
//! ## Usage
//!
//! ```rust
//! use quickbite::config::Config;
//! use quickbite::model::{MenuItem, Restaurant};
//! use quickbite::session;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let (actor, handle) = session::new(&Config::default());
//!     tokio::spawn(actor.run());
//!
//!     handle.open_restaurant(Restaurant::new("r1", "Spice Route")).await?;
//!     let summary = handle.add_to_cart(MenuItem::new("a", "Thali", 100.0)).await?;
//!     assert_eq!(summary.total, 130.0);
//!     Ok(())
//! }
//! ```

pub mod actions;
pub mod actor;
pub mod error;
pub mod handle;
pub mod message;
pub mod state;

pub use actions::*;
pub use actor::SessionActor;
pub use error::*;
pub use handle::SessionHandle;
pub use state::*;

use crate::config::Config;
use tokio::sync::mpsc;

/// Creates a new session actor and its handle.
pub fn new(config: &Config) -> (SessionActor, SessionHandle) {
    let (sender, receiver) = mpsc::channel(config.session_buffer);
    let state = SessionState::new(config.delivery_fee, config.customer.clone());
    (SessionActor::new(receiver, state), SessionHandle::new(sender))
}
