//! The public face of the storefront: [`StorefrontClient`] wraps the session handle and
//! the backend so callers never deal with messages or HTTP directly.

pub mod error;
pub mod storefront_client;

pub use error::*;
pub use storefront_client::*;
