//! Cart commands accepted by the session actor.

use crate::model::{ItemId, MenuItem};

/// Mutations of the cart. Every command answers with the resulting
/// [`CartSummary`](crate::cart::CartSummary).
#[derive(Debug, Clone)]
pub enum CartCommand {
    /// Adds one unit of a menu item, creating its line on first add.
    Add(MenuItem),
    /// Adds one unit to an existing line; ignored for unknown ids.
    Increment(ItemId),
    /// Removes one unit, dropping the line at zero; ignored for unknown ids.
    Decrement(ItemId),
    /// Empties the cart.
    Clear,
}
