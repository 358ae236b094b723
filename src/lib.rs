//! # QuickBite
//!
//! > **A food-ordering storefront client: browse restaurants, fill a cart, place an order.**
//!
//! The storefront talks to a small REST backend and keeps all user-facing state in a
//! single session actor. Callers never touch that state directly; they go through a
//! [`StorefrontClient`](clients::StorefrontClient) and read snapshots back for rendering.
//!
//! ## Architecture Notes
//!
//! ### 1. One owner for the state
//! [`SessionState`](session::SessionState) lives inside a [`SessionActor`](session::SessionActor)
//! running in its own Tokio task. Requests are processed one at a time, so cart edits and
//! checkout guards need no locks.
//!
//! ### 2. I/O outside the actor
//! Backend calls are made by the client, never by the actor. The client asks the actor
//! to start an operation, awaits the network, then reports the outcome back. A slow menu
//! fetch therefore never blocks the cart.
//!
//! ### 3. Races are explicit
//! - Opening a restaurant bumps a generation counter; a menu that arrives for an older
//!   generation is dropped.
//! - Checkout sets a `placing` guard inside the actor, so two concurrent
//!   [`place_order`](clients::StorefrontClient::place_order) calls submit once.
//! - Each submission carries an `Idempotency-Key` header that is reused when the same
//!   cart is retried after a failure.
//!
//! ### 4. Typed errors
//! [`ApiError`](api::ApiError) for the backend, [`SessionError`](session::SessionError)
//! for the actor channel, both folded into [`StorefrontError`](clients::StorefrontError).
//!
//! ## Module Tour
//!
//! - [`model`]: wire DTOs and id newtypes.
//! - [`cart`]: the cart engine and price aggregation.
//! - [`api`]: the [`StorefrontApi`](api::StorefrontApi) seam, its `reqwest` implementation
//!   and a scriptable mock.
//! - [`catalog`]: restaurant listing with one-time seeding, and menus.
//! - [`session`]: the state, its transitions and the actor that owns it.
//! - [`clients`]: [`StorefrontClient`](clients::StorefrontClient), the public entry point.
//! - [`lifecycle`]: [`StorefrontSystem`](lifecycle::StorefrontSystem) startup/shutdown
//!   and [`setup_tracing`](lifecycle::tracing::setup_tracing).
//! - [`config`]: environment-driven settings.
//! - [`view`]: plain-text rendering of a snapshot.
//!
//! ## Running the Demo
//!
//! ```bash
//! QUICKBITE_BACKEND_URL=http://localhost:8000 RUST_LOG=info cargo run
//! ```

pub mod api;
pub mod cart;
pub mod catalog;
pub mod clients;
pub mod config;
pub mod lifecycle;
pub mod model;
pub mod session;
pub mod view;
