use crate::model::ItemId;
use serde::{Deserialize, Serialize};

/// A dish on a restaurant's menu, as served by `GET /api/restaurants/{id}/menu`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MenuItem {
    #[serde(rename = "_id")]
    pub id: ItemId,
    pub name: String,
    pub price: f64,
    #[serde(default)]
    pub description: String,
    #[serde(rename = "veg", default)]
    pub vegetarian: bool,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub image_url: Option<String>,
}

impl MenuItem {
    /// Creates a MenuItem with only the fields the cart cares about.
    pub fn new(id: impl Into<ItemId>, name: impl Into<String>, price: f64) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            price,
            description: String::new(),
            vegetarian: false,
            category: None,
            image_url: None,
        }
    }
}
