//! Scripted walk through the storefront against a live backend: load the catalog,
//! open the first restaurant, fill the cart and place an order.

use quickbite::clients::{MenuOutcome, OrderOutcome, StorefrontError};
use quickbite::config::Config;
use quickbite::lifecycle::{setup_tracing, StorefrontSystem};
use quickbite::view::Page;
use tracing::{error, info, warn, Instrument};

#[tokio::main]
async fn main() -> Result<(), StorefrontError> {
    setup_tracing();

    let config = Config::load()?;
    info!(backend = %config.backend_url, "Starting storefront");

    let system = StorefrontSystem::from_config(&config)?;
    let client = &system.client;

    let span = tracing::info_span!("browse");
    let loaded = async {
        info!("Loading restaurants");
        client.load_restaurants().await
    }
    .instrument(span)
    .await;

    if let Err(e) = loaded {
        error!(error = %e, "Could not reach the backend");
        println!("{}", Page(&client.snapshot().await?));
        system.shutdown().await?;
        return Err(e);
    }

    let state = client.snapshot().await?;
    println!("{}", Page(&state));

    let Some(restaurant) = state.restaurants().first().cloned() else {
        warn!("Backend has no restaurants");
        system.shutdown().await?;
        return Ok(());
    };

    let span = tracing::info_span!("menu", restaurant = %restaurant.name);
    match client.open_restaurant(restaurant).instrument(span).await {
        Ok(MenuOutcome::Applied(count)) => info!(count, "Menu ready"),
        Ok(MenuOutcome::Discarded) => warn!("Menu superseded"),
        Err(e) => warn!(error = %e, "Menu unavailable"),
    }

    // Two of the first dish and one of the second, if there are that many.
    let menu = client.snapshot().await?.menu().to_vec();
    for item in menu.iter().take(2) {
        client.add_to_cart(item.clone()).await?;
    }
    if let Some(first) = menu.first() {
        client.increment(first.id.clone()).await?;
    }
    println!("{}", Page(&client.snapshot().await?));

    let span = tracing::info_span!("checkout");
    match client.place_order().instrument(span).await {
        Ok(OrderOutcome::Placed(order_id)) => info!(%order_id, "Order processed successfully"),
        Ok(OrderOutcome::Skipped(reason)) => warn!(?reason, "Nothing ordered"),
        Err(e) => error!(error = %e, "Order processing failed"),
    }
    println!("{}", Page(&client.snapshot().await?));

    system.shutdown().await?;
    Ok(())
}
