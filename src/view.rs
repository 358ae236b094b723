//! Plain-text rendering of a [`SessionState`] snapshot.
//!
//! Each view borrows the state and implements [`Display`], so callers can print it,
//! format it into a larger string, or compare it in tests.
//!
//! ```rust
//! use quickbite::model::{CustomerDetails, MenuItem};
//! use quickbite::session::SessionState;
//! use quickbite::view::CartDrawer;
//!
//! let mut state = SessionState::new(30.0, CustomerDetails::default());
//! state.add_to_cart(&MenuItem::new("a", "Thali", 120.0));
//! assert!(CartDrawer(&state).to_string().contains("Total     ₹150.00"));
//! ```

use crate::model::{MenuItem, Restaurant};
use crate::session::SessionState;
use std::fmt::{self, Display, Formatter};

const CURRENCY: &str = "₹";

/// App bar with the cart badge (total quantity, not line count).
pub struct Header<'a>(pub &'a SessionState);

impl Display for Header<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "QuickBite  [cart: {}]", self.0.cart().item_count())
    }
}

/// Restaurant grid, or a loading placeholder.
pub struct RestaurantList<'a>(pub &'a SessionState);

impl Display for RestaurantList<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let state = self.0;
        writeln!(f, "Top restaurants near you")?;
        if state.is_loading() {
            return writeln!(f, "  Loading restaurants...");
        }
        if state.restaurants().is_empty() {
            return writeln!(f, "  No restaurants available");
        }
        for (index, restaurant) in state.restaurants().iter().enumerate() {
            writeln!(f, "{:>2}. {}", index + 1, RestaurantCard(restaurant))?;
        }
        Ok(())
    }
}

struct RestaurantCard<'a>(&'a Restaurant);

impl Display for RestaurantCard<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let r = self.0;
        write!(
            f,
            "{} ★ {:.1} | {} | {} mins | {}",
            r.name,
            r.rating,
            r.cuisine,
            r.delivery_time,
            r.location.as_deref().unwrap_or("Nearby")
        )
    }
}

/// The open restaurant and its menu.
pub struct MenuView<'a>(pub &'a SessionState);

impl Display for MenuView<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let Some(restaurant) = self.0.selected() else {
            return Ok(());
        };
        writeln!(f, "{}", restaurant.name)?;
        writeln!(
            f,
            "{} • {} mins • ★ {}",
            restaurant.cuisine, restaurant.delivery_time, restaurant.rating
        )?;
        writeln!(f, "Menu")?;
        if self.0.menu().is_empty() {
            return writeln!(f, "  (no items)");
        }
        for item in self.0.menu() {
            writeln!(f, "  {}", MenuLine(item))?;
        }
        Ok(())
    }
}

struct MenuLine<'a>(&'a MenuItem);

impl Display for MenuLine<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let item = self.0;
        write!(
            f,
            "{} {CURRENCY}{} [{}",
            item.name,
            item.price,
            if item.vegetarian { "Veg" } else { "Non-Veg" }
        )?;
        if let Some(category) = &item.category {
            write!(f, " • {category}")?;
        }
        write!(f, "]")
    }
}

/// Cart lines with quantities and the price breakdown.
pub struct CartDrawer<'a>(pub &'a SessionState);

impl Display for CartDrawer<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let cart = self.0.cart();
        writeln!(f, "Your Cart")?;
        if cart.is_empty() {
            writeln!(f, "  Your cart is empty")?;
        }
        for line in cart.lines() {
            writeln!(f, "  {} x{}  {CURRENCY}{}", line.name, line.qty, line.price)?;
        }
        writeln!(f, "Subtotal  {CURRENCY}{:.2}", cart.subtotal())?;
        writeln!(f, "Delivery  {CURRENCY}{:.2}", cart.delivery_fee())?;
        writeln!(f, "Total     {CURRENCY}{:.2}", cart.total())?;
        if self.0.is_placing() {
            writeln!(f, "Placing order...")?;
        }
        if let Some(order_id) = self.0.last_order_id() {
            writeln!(f, "Order placed! ID: {order_id}")?;
        }
        Ok(())
    }
}

/// The whole screen: header, error banner, then either the list or the open menu
/// alongside the cart.
pub struct Page<'a>(pub &'a SessionState);

impl Display for Page<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let state = self.0;
        writeln!(f, "{}", Header(state))?;
        if let Some(error) = state.error() {
            writeln!(f, "! {error}")?;
        }
        writeln!(f)?;
        if state.selected().is_some() {
            write!(f, "{}", MenuView(state))?;
            writeln!(f)?;
            write!(f, "{}", CartDrawer(state))
        } else {
            write!(f, "{}", RestaurantList(state))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{CustomerDetails, OrderId};
    use crate::session::{Checkout, LOAD_FAILED_BANNER};

    fn state() -> SessionState {
        SessionState::new(30.0, CustomerDetails::default())
    }

    fn paneer() -> MenuItem {
        let mut item = MenuItem::new("p", "Paneer Tikka", 180.0);
        item.vegetarian = true;
        item.category = Some("Starters".to_string());
        item
    }

    #[test]
    fn header_badge_counts_quantities() {
        let mut state = state();
        state.add_to_cart(&paneer());
        state.add_to_cart(&paneer());
        state.add_to_cart(&MenuItem::new("c", "Chicken Roll", 90.0));

        assert_eq!(Header(&state).to_string(), "QuickBite  [cart: 3]");
    }

    #[test]
    fn empty_cart_shows_zero_delivery() {
        let drawer = CartDrawer(&state()).to_string();
        assert!(drawer.contains("Your cart is empty"));
        assert!(drawer.contains("Delivery  ₹0.00"));
        assert!(drawer.contains("Total     ₹0.00"));
    }

    #[test]
    fn menu_lines_show_diet_and_category() {
        let mut state = state();
        let ticket = state.open_restaurant(Restaurant::new("r1", "Spice Route"));
        state.apply_menu(&ticket, vec![paneer(), MenuItem::new("c", "Chicken Roll", 90.0)]);

        let menu = MenuView(&state).to_string();
        assert!(menu.contains("Paneer Tikka ₹180 [Veg • Starters]"));
        assert!(menu.contains("Chicken Roll ₹90 [Non-Veg]"));
    }

    #[test]
    fn restaurant_card_falls_back_to_nearby() {
        let mut state = state();
        let mut r = Restaurant::new("r1", "Spice Route");
        r.rating = 4.3;
        state.restaurants_loaded(vec![r]);

        let list = RestaurantList(&state).to_string();
        assert!(list.contains(" 1. Spice Route ★ 4.3"));
        assert!(list.contains("| Nearby"));
    }

    #[test]
    fn page_shows_banner_and_loading() {
        let mut state = state();
        state.begin_loading();
        assert!(Page(&state).to_string().contains("Loading restaurants..."));

        state.restaurants_failed();
        let page = Page(&state).to_string();
        assert!(page.contains(&format!("! {LOAD_FAILED_BANNER}")));
        assert!(page.contains("No restaurants available"));
    }

    #[test]
    fn drawer_reports_order_id() {
        let mut state = state();
        state.open_restaurant(Restaurant::new("r1", "Spice Route"));
        state.add_to_cart(&paneer());
        assert!(matches!(state.begin_checkout(), Checkout::Ready(_)));
        assert!(CartDrawer(&state).to_string().contains("Placing order..."));

        state.order_placed(OrderId::from("o-9"));
        let drawer = CartDrawer(&state).to_string();
        assert!(drawer.contains("Order placed! ID: o-9"));
        assert!(!drawer.contains("Placing order..."));
    }
}
