//! `HttpApi` against an in-process axum backend speaking the storefront's wire format.

use axum::extract::{Path, State};
use axum::http::{HeaderMap, StatusCode};
use axum::routing::{get, post};
use axum::{Json, Router};
use quickbite::api::http::IDEMPOTENCY_KEY_HEADER;
use quickbite::api::{ApiError, HttpApi, StorefrontApi};
use quickbite::model::{
    ItemId, OrderLine, OrderRequest, OrderSubmission, RestaurantId,
};
use serde_json::{json, Value};
use std::sync::{Arc, Mutex};
use uuid::Uuid;

type Received = Arc<Mutex<Vec<(Option<String>, Value)>>>;

async fn serve(router: Router) -> HttpApi {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, router).await.unwrap();
    });
    // Trailing slash is tolerated.
    HttpApi::new(format!("http://{addr}/"), None).unwrap()
}

async fn restaurants() -> Json<Value> {
    Json(json!([
        {
            "_id": "r1",
            "name": "Spice Route",
            "cuisine": "North Indian",
            "rating": 4.4,
            "delivery_time": 35,
            "image_url": "https://img.test/r1.jpg",
            "location": "Indiranagar"
        },
        { "_id": "r2", "name": "Dosa Corner" }
    ]))
}

async fn menu(Path(id): Path<String>) -> Result<Json<Value>, StatusCode> {
    if id != "r1" {
        return Err(StatusCode::NOT_FOUND);
    }
    Ok(Json(json!([
        { "_id": "m1", "name": "Paneer Tikka", "price": 180, "veg": true, "category": "Starters" },
        { "_id": "m2", "name": "Butter Chicken", "price": 320.5, "veg": false }
    ])))
}

async fn place_order(
    State(received): State<Received>,
    headers: HeaderMap,
    Json(body): Json<Value>,
) -> Json<Value> {
    let key = headers
        .get(IDEMPOTENCY_KEY_HEADER)
        .and_then(|v| v.to_str().ok())
        .map(str::to_string);
    received.lock().unwrap().push((key, body));
    Json(json!({ "order_id": "o-42" }))
}

fn submission() -> OrderSubmission {
    OrderSubmission {
        idempotency_key: Uuid::new_v4(),
        request: OrderRequest {
            restaurant_id: RestaurantId::from("r1"),
            items: vec![OrderLine {
                item_id: ItemId::from("m1"),
                name: "Paneer Tikka".to_string(),
                qty: 2,
                price: 180.0,
            }],
            subtotal: 360.0,
            delivery_fee: 30.0,
            total: 390.0,
            customer_name: "Guest".to_string(),
            address: "Demo Address".to_string(),
        },
    }
}

#[tokio::test]
async fn test_restaurants_and_menu_decode() {
    let api = serve(
        Router::new()
            .route("/api/restaurants", get(restaurants))
            .route("/api/restaurants/{id}/menu", get(menu)),
    )
    .await;

    let list = api.restaurants().await.unwrap();
    assert_eq!(list.len(), 2);
    assert_eq!(list[0].id.as_str(), "r1");
    assert_eq!(list[0].delivery_time, 35);
    assert_eq!(list[0].location.as_deref(), Some("Indiranagar"));
    assert_eq!(list[1].name, "Dosa Corner");
    assert_eq!(list[1].cuisine, "");

    let items = api.menu(&RestaurantId::from("r1")).await.unwrap();
    assert_eq!(items.len(), 2);
    assert!(items[0].vegetarian);
    assert_eq!(items[0].price, 180.0);
    assert_eq!(items[0].category.as_deref(), Some("Starters"));
    assert!(!items[1].vegetarian);
    assert_eq!(items[1].category, None);
}

#[tokio::test]
async fn test_null_list_is_empty() {
    let api = serve(Router::new().route("/api/restaurants", get(|| async { Json(Value::Null) })))
        .await;

    assert!(api.restaurants().await.unwrap().is_empty());
}

#[tokio::test]
async fn test_seed_posts() {
    let api = serve(Router::new().route("/api/seed", post(|| async { StatusCode::CREATED })))
        .await;

    assert_eq!(api.seed().await, Ok(()));
}

#[tokio::test]
async fn test_place_order_sends_body_and_key() {
    let received: Received = Arc::default();
    let api = serve(
        Router::new()
            .route("/api/orders", post(place_order))
            .with_state(received.clone()),
    )
    .await;

    let submission = submission();
    let receipt = api.place_order(&submission).await.unwrap();
    assert_eq!(receipt.order_id.as_str(), "o-42");

    let received = received.lock().unwrap();
    assert_eq!(received.len(), 1);
    let (key, body) = &received[0];
    assert_eq!(key.as_deref(), Some(submission.idempotency_key.to_string().as_str()));
    assert_eq!(
        body,
        &json!({
            "restaurant_id": "r1",
            "items": [{ "item_id": "m1", "name": "Paneer Tikka", "qty": 2, "price": 180.0 }],
            "subtotal": 360.0,
            "delivery_fee": 30.0,
            "total": 390.0,
            "customer_name": "Guest",
            "address": "Demo Address"
        })
    );
}

#[tokio::test]
async fn test_error_status_is_reported() {
    let api = serve(
        Router::new()
            .route(
                "/api/orders",
                post(|| async { StatusCode::INTERNAL_SERVER_ERROR }),
            )
            .route("/api/restaurants/{id}/menu", get(menu)),
    )
    .await;

    let err = api.place_order(&submission()).await.unwrap_err();
    assert_eq!(
        err,
        ApiError::Status {
            endpoint: "POST /api/orders".to_string(),
            status: 500,
        }
    );

    let err = api.menu(&RestaurantId::from("nope")).await.unwrap_err();
    assert!(matches!(err, ApiError::Status { status: 404, .. }));
}

#[tokio::test]
async fn test_malformed_body_is_decode_error() {
    let api = serve(Router::new().route("/api/restaurants", get(|| async { "<html>oops</html>" })))
        .await;

    let err = api.restaurants().await.unwrap_err();
    assert!(matches!(err, ApiError::Decode { .. }));
    assert_eq!(err.endpoint(), "GET /api/restaurants");
}

#[tokio::test]
async fn test_unreachable_backend_is_transport_error() {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let api = HttpApi::new(format!("http://{addr}"), None).unwrap();
    let err = api.restaurants().await.unwrap_err();
    assert!(matches!(err, ApiError::Transport { .. }));
}

#[tokio::test]
async fn test_menu_id_is_sent_as_one_segment() {
    let api = serve(Router::new().route(
        "/api/restaurants/{id}/menu",
        get(|Path(id): Path<String>| async move {
            Json(json!([{ "_id": "m1", "name": id, "price": 10 }]))
        }),
    ))
    .await;

    let items = api.menu(&RestaurantId::from("north/south?x#1")).await.unwrap();
    assert_eq!(items.len(), 1);
    assert_eq!(items[0].name, "north/south?x#1");
}
