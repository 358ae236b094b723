//! # Catalog
//!
//! Read side of the storefront: the restaurant list (seeding the backend's demo data the
//! first time it comes back empty) and per-restaurant menus.

use crate::api::{ApiError, StorefrontApi};
use crate::model::{MenuItem, Restaurant, RestaurantId};
use std::sync::Arc;
use tracing::{info, instrument, warn};

#[derive(Clone)]
pub struct Catalog {
    api: Arc<dyn StorefrontApi>,
}

impl Catalog {
    pub fn new(api: Arc<dyn StorefrontApi>) -> Self {
        Self { api }
    }

    /// Fetches the restaurant list, seeding the backend once if it is empty.
    ///
    /// A failed seed is logged and leaves the (empty) list as it was. Failures of
    /// the fetches themselves are returned.
    #[instrument(skip(self))]
    pub async fn list_restaurants(&self) -> Result<Vec<Restaurant>, ApiError> {
        let restaurants = self.api.restaurants().await?;
        if !restaurants.is_empty() {
            info!(count = restaurants.len(), "Restaurants loaded");
            return Ok(restaurants);
        }

        info!("Catalog is empty, requesting seed");
        if let Err(e) = self.api.seed().await {
            warn!(error = %e, "Seed failed, keeping empty catalog");
            return Ok(restaurants);
        }

        let restaurants = self.api.restaurants().await?;
        info!(count = restaurants.len(), "Restaurants loaded after seed");
        Ok(restaurants)
    }

    /// Fetches one restaurant's menu. Failures are logged and handed back to the caller.
    #[instrument(skip(self), fields(%restaurant_id))]
    pub async fn menu(&self, restaurant_id: &RestaurantId) -> Result<Vec<MenuItem>, ApiError> {
        match self.api.menu(restaurant_id).await {
            Ok(items) => {
                info!(count = items.len(), "Menu loaded");
                Ok(items)
            }
            Err(e) => {
                warn!(error = %e, "Menu load failed");
                Err(e)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::mock::{ApiCall, MockApi};

    fn catalog(mock: &MockApi) -> Catalog {
        Catalog::new(Arc::new(mock.clone()))
    }

    fn status(endpoint: &str, status: u16) -> ApiError {
        ApiError::Status {
            endpoint: endpoint.to_string(),
            status,
        }
    }

    #[tokio::test]
    async fn non_empty_catalog_skips_seed() {
        let mock = MockApi::new();
        mock.expect_restaurants()
            .return_ok(vec![Restaurant::new("r1", "Spice Route")]);

        let restaurants = catalog(&mock).list_restaurants().await.unwrap();

        assert_eq!(restaurants.len(), 1);
        assert_eq!(mock.calls(), vec![ApiCall::Restaurants]);
        mock.verify();
    }

    #[tokio::test]
    async fn empty_catalog_is_seeded_then_refetched_once() {
        let mock = MockApi::new();
        mock.expect_restaurants().return_ok(vec![]);
        mock.expect_seed().return_ok(());
        mock.expect_restaurants().return_ok(vec![
            Restaurant::new("r1", "Spice Route"),
            Restaurant::new("r2", "Dosa Hut"),
        ]);

        let restaurants = catalog(&mock).list_restaurants().await.unwrap();

        assert_eq!(restaurants.len(), 2);
        assert_eq!(
            mock.calls(),
            vec![ApiCall::Restaurants, ApiCall::Seed, ApiCall::Restaurants]
        );
        mock.verify();
    }

    #[tokio::test]
    async fn failed_seed_leaves_catalog_empty() {
        let mock = MockApi::new();
        mock.expect_restaurants().return_ok(vec![]);
        mock.expect_seed().return_err(status("POST /api/seed", 500));

        let restaurants = catalog(&mock).list_restaurants().await.unwrap();

        assert!(restaurants.is_empty());
        assert_eq!(mock.calls(), vec![ApiCall::Restaurants, ApiCall::Seed]);
        mock.verify();
    }

    #[tokio::test]
    async fn initial_fetch_failure_is_returned() {
        let mock = MockApi::new();
        mock.expect_restaurants()
            .return_err(ApiError::transport("GET /api/restaurants", "connection refused"));

        let result = catalog(&mock).list_restaurants().await;

        assert!(matches!(result, Err(ApiError::Transport { .. })));
        mock.verify();
    }

    #[tokio::test]
    async fn menu_failure_is_returned_not_swallowed() {
        let mock = MockApi::new();
        mock.expect_menu("r1")
            .return_err(status("GET /api/restaurants/{id}/menu", 404));

        let result = catalog(&mock).menu(&"r1".into()).await;

        assert_eq!(result, Err(status("GET /api/restaurants/{id}/menu", 404)));
        mock.verify();
    }
}
