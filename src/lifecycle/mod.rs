//! Startup and shutdown of the storefront, plus tracing setup.

pub mod storefront_system;
pub mod tracing;

pub use storefront_system::StorefrontSystem;
pub use self::tracing::setup_tracing;
