//! # Mock API & Testing Guide
//!
//! [`MockApi`] implements [`StorefrontApi`] entirely in memory. Tests script the
//! responses up front, run the code under test, then call [`MockApi::verify`] to make
//! sure every scripted call actually happened.
//!
//! ## When to use the mock vs the HTTP client
//!
//! | Feature | MockApi | HttpApi |
//! |---------|---------|---------|
//! | **Speed** | Instant (in-memory) | Needs a listening backend |
//! | **Determinism** | Fully scripted | Subject to the backend |
//! | **Error Injection** | Easy (`return_err`) | Requires a misbehaving server |
//! | **Use Case** | Session and client logic | Wire format |
//!
//! ## Example
//!
//! ```rust
//! use quickbite::api::mock::MockApi;
//! use quickbite::api::{ApiError, StorefrontApi};
//!
//! #[tokio::main]
//! async fn main() {
//!     let mock = MockApi::new();
//!     mock.expect_restaurants().return_ok(vec![]);
//!     mock.expect_seed().return_err(ApiError::Status {
//!         endpoint: "POST /api/seed".into(),
//!         status: 500,
//!     });
//!
//!     assert!(mock.restaurants().await.unwrap().is_empty());
//!     assert!(mock.seed().await.is_err());
//!     mock.verify();
//! }
//! ```
//!
//! ## Ordering
//!
//! Each call consumes the oldest expectation that matches it (menu expectations also
//! match on the restaurant id), so concurrent tasks can each find their own scripted
//! reply. Attach a gate with [`ExpectationBuilder::wait_for`] to hold a reply back
//! until the test releases it, which is how out-of-order responses are simulated.

use crate::api::{ApiError, StorefrontApi};
use crate::model::{MenuItem, OrderReceipt, OrderSubmission, Restaurant, RestaurantId};
use async_trait::async_trait;
use std::collections::VecDeque;
use std::marker::PhantomData;
use std::sync::{Arc, Mutex};
use tokio::sync::Notify;

/// A call received by the mock, recorded in arrival order.
#[derive(Debug, Clone, PartialEq)]
pub enum ApiCall {
    Restaurants,
    Seed,
    Menu(RestaurantId),
    PlaceOrder(OrderSubmission),
}

#[derive(Debug, Clone, PartialEq)]
enum Expected {
    Restaurants,
    Seed,
    Menu(RestaurantId),
    PlaceOrder,
}

impl Expected {
    fn accepts(&self, call: &ApiCall) -> bool {
        match (self, call) {
            (Expected::Restaurants, ApiCall::Restaurants) => true,
            (Expected::Seed, ApiCall::Seed) => true,
            (Expected::Menu(expected), ApiCall::Menu(actual)) => expected == actual,
            (Expected::PlaceOrder, ApiCall::PlaceOrder(_)) => true,
            _ => false,
        }
    }
}

enum Reply {
    Restaurants(Result<Vec<Restaurant>, ApiError>),
    Seed(Result<(), ApiError>),
    Menu(Result<Vec<MenuItem>, ApiError>),
    PlaceOrder(Result<OrderReceipt, ApiError>),
}

/// Conversion from a scripted result into the matching reply slot.
pub trait MockReply: Sized {
    #[doc(hidden)]
    fn into_reply(result: Result<Self, ApiError>) -> ReplySlot;
}

#[doc(hidden)]
pub struct ReplySlot(Reply);

impl MockReply for Vec<Restaurant> {
    fn into_reply(result: Result<Self, ApiError>) -> ReplySlot {
        ReplySlot(Reply::Restaurants(result))
    }
}

impl MockReply for () {
    fn into_reply(result: Result<Self, ApiError>) -> ReplySlot {
        ReplySlot(Reply::Seed(result))
    }
}

impl MockReply for Vec<MenuItem> {
    fn into_reply(result: Result<Self, ApiError>) -> ReplySlot {
        ReplySlot(Reply::Menu(result))
    }
}

impl MockReply for OrderReceipt {
    fn into_reply(result: Result<Self, ApiError>) -> ReplySlot {
        ReplySlot(Reply::PlaceOrder(result))
    }
}

struct Expectation {
    expected: Expected,
    reply: Reply,
    gate: Option<Arc<Notify>>,
}

#[derive(Default)]
struct Shared {
    expectations: Mutex<VecDeque<Expectation>>,
    calls: Mutex<Vec<ApiCall>>,
}

/// A scripted [`StorefrontApi`]. Clones share the same script and call log.
#[derive(Clone, Default)]
pub struct MockApi {
    shared: Arc<Shared>,
}

impl MockApi {
    /// Creates a mock with no expectations.
    pub fn new() -> Self {
        Self::default()
    }

    /// Expects a `restaurants` call.
    pub fn expect_restaurants(&self) -> ExpectationBuilder<Vec<Restaurant>> {
        self.builder(Expected::Restaurants)
    }

    /// Expects a `seed` call.
    pub fn expect_seed(&self) -> ExpectationBuilder<()> {
        self.builder(Expected::Seed)
    }

    /// Expects a `menu` call for `restaurant_id`.
    pub fn expect_menu(&self, restaurant_id: impl Into<RestaurantId>) -> ExpectationBuilder<Vec<MenuItem>> {
        self.builder(Expected::Menu(restaurant_id.into()))
    }

    /// Expects a `place_order` call.
    pub fn expect_place_order(&self) -> ExpectationBuilder<OrderReceipt> {
        self.builder(Expected::PlaceOrder)
    }

    /// Every call received so far, in arrival order.
    pub fn calls(&self) -> Vec<ApiCall> {
        self.shared.calls.lock().unwrap().clone()
    }

    /// The order submissions received so far.
    pub fn submissions(&self) -> Vec<OrderSubmission> {
        self.calls()
            .into_iter()
            .filter_map(|call| match call {
                ApiCall::PlaceOrder(submission) => Some(submission),
                _ => None,
            })
            .collect()
    }

    /// Verifies that all expectations were met.
    pub fn verify(&self) {
        let remaining = self.shared.expectations.lock().unwrap().len();
        if remaining != 0 {
            panic!("Not all expectations were met. {} remaining", remaining);
        }
    }

    fn builder<T: MockReply>(&self, expected: Expected) -> ExpectationBuilder<T> {
        ExpectationBuilder {
            expected,
            gate: None,
            shared: self.shared.clone(),
            _reply: PhantomData,
        }
    }

    async fn take(&self, call: ApiCall) -> Reply {
        let expectation = {
            let mut exps = self.shared.expectations.lock().unwrap();
            exps.iter()
                .position(|e| e.expected.accepts(&call))
                .and_then(|pos| exps.remove(pos))
        };
        let Some(expectation) = expectation else {
            panic!("Unexpected call: {:?}", call);
        };
        self.shared.calls.lock().unwrap().push(call);

        if let Some(gate) = expectation.gate {
            gate.notified().await;
        }
        expectation.reply
    }
}

/// Builder for a single expectation.
pub struct ExpectationBuilder<T: MockReply> {
    expected: Expected,
    gate: Option<Arc<Notify>>,
    shared: Arc<Shared>,
    _reply: PhantomData<T>,
}

impl<T: MockReply> ExpectationBuilder<T> {
    /// Holds the reply back until `gate` is notified.
    pub fn wait_for(mut self, gate: Arc<Notify>) -> Self {
        self.gate = Some(gate);
        self
    }

    /// Sets the expectation to return a successful result.
    pub fn return_ok(self, value: T) {
        self.push(Ok(value));
    }

    /// Sets the expectation to return an error.
    pub fn return_err(self, error: ApiError) {
        self.push(Err(error));
    }

    fn push(self, result: Result<T, ApiError>) {
        let ReplySlot(reply) = T::into_reply(result);
        self.shared.expectations.lock().unwrap().push_back(Expectation {
            expected: self.expected,
            reply,
            gate: self.gate,
        });
    }
}

#[async_trait]
impl StorefrontApi for MockApi {
    async fn restaurants(&self) -> Result<Vec<Restaurant>, ApiError> {
        match self.take(ApiCall::Restaurants).await {
            Reply::Restaurants(result) => result,
            _ => unreachable!("restaurants expectation must carry a restaurants reply"),
        }
    }

    async fn seed(&self) -> Result<(), ApiError> {
        match self.take(ApiCall::Seed).await {
            Reply::Seed(result) => result,
            _ => unreachable!("seed expectation must carry a seed reply"),
        }
    }

    async fn menu(&self, restaurant_id: &RestaurantId) -> Result<Vec<MenuItem>, ApiError> {
        match self.take(ApiCall::Menu(restaurant_id.clone())).await {
            Reply::Menu(result) => result,
            _ => unreachable!("menu expectation must carry a menu reply"),
        }
    }

    async fn place_order(&self, submission: &OrderSubmission) -> Result<OrderReceipt, ApiError> {
        match self.take(ApiCall::PlaceOrder(submission.clone())).await {
            Reply::PlaceOrder(result) => result,
            _ => unreachable!("place_order expectation must carry a receipt reply"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn menu_expectations_match_by_restaurant() {
        let mock = MockApi::new();
        mock.expect_menu("r1").return_ok(vec![MenuItem::new("a", "Idli", 40.0)]);
        mock.expect_menu("r2").return_ok(vec![]);

        // Asked out of scripting order, each call still gets its own reply.
        assert!(mock.menu(&"r2".into()).await.unwrap().is_empty());
        assert_eq!(mock.menu(&"r1".into()).await.unwrap().len(), 1);

        assert_eq!(
            mock.calls(),
            vec![ApiCall::Menu("r2".into()), ApiCall::Menu("r1".into())]
        );
        mock.verify();
    }

    #[tokio::test]
    async fn gated_reply_waits_for_release() {
        let mock = MockApi::new();
        let gate = Arc::new(Notify::new());
        mock.expect_seed().wait_for(gate.clone()).return_ok(());

        let task = tokio::spawn({
            let mock = mock.clone();
            async move { mock.seed().await }
        });

        tokio::task::yield_now().await;
        assert!(!task.is_finished());

        gate.notify_one();
        assert_eq!(task.await.unwrap(), Ok(()));
    }

    #[test]
    #[should_panic(expected = "Not all expectations were met")]
    fn verify_reports_unused_expectations() {
        let mock = MockApi::new();
        mock.expect_restaurants().return_ok(vec![]);
        mock.verify();
    }
}
