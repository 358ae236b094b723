//! # Tracing
//!
//! Structured logging for the storefront, filtered with `RUST_LOG`.
//!
//! ```bash
//! RUST_LOG=info cargo run     # one line per backend call and state change
//! RUST_LOG=debug cargo run    # adds cart payloads and skipped checkouts
//! RUST_LOG=quickbite::catalog=debug cargo run
//! ```
//!
//! Client methods open a span named after the operation, so a checkout reads as:
//!
//! ```text
//! INFO place_order: Checkout started key=6f1c... total=250.0
//! INFO place_order: Submitting order key=6f1c... restaurant_id=r1 total=250.0
//! INFO Order placed order_id=o-17
//! ```
//!
//! A stale menu shows up as a `WARN Stale menu discarded` line carrying both the
//! ticket's generation and the current one.

/// Installs the global subscriber. Call once, at the top of `main`.
pub fn setup_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_target(false)
        .compact()
        .init();
}
