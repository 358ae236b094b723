use crate::api::{HttpApi, StorefrontApi};
use crate::clients::{StorefrontClient, StorefrontError};
use crate::config::Config;
use crate::session::{self, SessionError};
use std::sync::Arc;
use tokio::task::JoinHandle;
use tracing::{error, info};

/// A running storefront: the session actor plus the client that drives it.
///
/// # Example
///
/// ```ignore
/// let system = StorefrontSystem::from_config(&Config::load()?)?;
/// system.client.load_restaurants().await?;
/// system.shutdown().await?;
/// ```
pub struct StorefrontSystem {
    pub client: StorefrontClient,

    /// The session actor's task, awaited on shutdown.
    handle: JoinHandle<()>,
}

impl StorefrontSystem {
    /// Spawns the session actor and wires a client to `api`.
    ///
    /// Must be called from within a Tokio runtime.
    pub fn new(config: &Config, api: Arc<dyn StorefrontApi>) -> Self {
        let (actor, session) = session::new(config);
        let handle = tokio::spawn(actor.run());

        info!(
            delivery_fee = config.delivery_fee,
            customer = %config.customer.name,
            "Storefront started"
        );

        Self {
            client: StorefrontClient::new(session, api),
            handle,
        }
    }

    /// Starts a storefront talking HTTP to `config.backend_url`.
    pub fn from_config(config: &Config) -> Result<Self, StorefrontError> {
        let api = HttpApi::from_config(config)?;
        info!(backend = api.base_url(), "Using HTTP backend");
        Ok(Self::new(config, Arc::new(api)))
    }

    /// Stops the session actor and waits for it to finish.
    ///
    /// Clones of the client held elsewhere keep the actor alive; drop them first.
    pub async fn shutdown(self) -> Result<(), SessionError> {
        info!("Shutting down storefront...");

        drop(self.client);

        if let Err(e) = self.handle.await {
            error!("Session task failed: {:?}", e);
            return Err(SessionError::TaskFailed(e.to_string()));
        }

        info!("Storefront shutdown complete.");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::mock::MockApi;
    use crate::model::MenuItem;

    #[tokio::test]
    async fn test_shutdown_after_use() {
        let mock = MockApi::new();
        let system = StorefrontSystem::new(&Config::default(), Arc::new(mock));

        system
            .client
            .add_to_cart(MenuItem::new("a", "Thali", 100.0))
            .await
            .unwrap();

        assert_eq!(system.shutdown().await, Ok(()));
    }

    #[tokio::test]
    async fn test_shutdown_waits_for_outstanding_handles() {
        let system = StorefrontSystem::new(&Config::default(), Arc::new(MockApi::new()));
        let session = system.client.session().clone();

        // The stray handle keeps the actor alive until it is dropped too.
        let shutdown = tokio::spawn(system.shutdown());
        tokio::task::yield_now().await;
        assert!(session.snapshot().await.is_ok());
        drop(session);

        assert_eq!(shutdown.await.unwrap(), Ok(()));
    }
}
