use crate::model::RestaurantId;
use serde::{Deserialize, Serialize};

/// A restaurant tile as served by `GET /api/restaurants`.
///
/// Only the identifier and name are required on the wire; the backend's demo data
/// leaves the rest out now and then, so those fields fall back to their defaults.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Restaurant {
    #[serde(rename = "_id")]
    pub id: RestaurantId,
    pub name: String,
    #[serde(default)]
    pub cuisine: String,
    #[serde(default)]
    pub rating: f64,
    /// Estimated delivery time in minutes.
    #[serde(default)]
    pub delivery_time: u32,
    #[serde(default)]
    pub image_url: Option<String>,
    #[serde(default)]
    pub location: Option<String>,
}

impl Restaurant {
    /// Creates a Restaurant with only the required fields set.
    pub fn new(id: impl Into<RestaurantId>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            cuisine: String::new(),
            rating: 0.0,
            delivery_time: 0,
            image_url: None,
            location: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_backend_document() {
        let json = r#"{
            "_id": "65f0c1",
            "name": "Spice Route",
            "cuisine": "North Indian",
            "rating": 4.4,
            "delivery_time": 30,
            "image_url": "https://img.example/spice.jpg",
            "location": "Indiranagar"
        }"#;
        let r: Restaurant = serde_json::from_str(json).unwrap();
        assert_eq!(r.id, RestaurantId::from("65f0c1"));
        assert_eq!(r.delivery_time, 30);
        assert_eq!(r.location.as_deref(), Some("Indiranagar"));
    }

    #[test]
    fn missing_optional_fields_default() {
        let r: Restaurant = serde_json::from_str(r#"{"_id":"x","name":"Bare"}"#).unwrap();
        assert_eq!(r, Restaurant::new("x", "Bare"));
    }
}
