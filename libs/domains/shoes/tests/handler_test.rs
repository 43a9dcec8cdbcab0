//! Handler tests for the Shoes domain
//!
//! These tests verify that HTTP handlers work correctly:
//! - Request deserialization (JSON → Rust structs)
//! - Response envelopes (success flag, data, count, filters, messages)
//! - HTTP status codes
//! - Error responses
//!
//! They exercise only the shoes domain router, not the full application
//! with docs routes and middleware.

use axum::body::Body;
use axum::http::{Request, StatusCode};
use domain_shoes::*;
use http_body_util::BodyExt;
use serde_json::{Value, json};
use tower::ServiceExt; // For oneshot()

fn seeded_app() -> axum::Router {
    let service = ShoeService::new(InMemoryShoeRepository::seeded());
    handlers::router(service)
}

// Helper to parse JSON response body
async fn json_body(body: Body) -> Value {
    let bytes = body.collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

fn valid_create_payload() -> Value {
    json!({
        "name": "Gel-Kayano 30",
        "brand": "Asics",
        "price": 160.0,
        "size": 11.0,
        "color": "Blue",
        "material": "Mesh",
        "description": "Stability running shoes",
        "inStock": true,
        "stockQuantity": 5,
        "category": "Running"
    })
}

#[tokio::test]
async fn test_list_shoes_returns_200_with_envelope() {
    let app = seeded_app();

    let request = Request::builder()
        .method("GET")
        .uri("/")
        .body(Body::empty())
        .unwrap();

    let response = app.oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);

    let body = json_body(response.into_body()).await;
    assert_eq!(body["success"], true);
    assert_eq!(body["count"], 4);
    assert_eq!(body["data"].as_array().unwrap().len(), 4);
    assert_eq!(body["filters"].as_array().unwrap().len(), 0);
}

#[tokio::test]
async fn test_list_shoes_applies_filters_and_reports_them() {
    let app = seeded_app();

    let request = Request::builder()
        .method("GET")
        .uri("/?brand=nike&minPrice=100&maxPrice=150")
        .body(Body::empty())
        .unwrap();

    let response = app.oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);

    let body = json_body(response.into_body()).await;
    assert_eq!(body["count"], 1);
    assert_eq!(body["data"][0]["name"], "Air Max 90");
    assert_eq!(body["filters"], json!(["brand", "minPrice", "maxPrice"]));
}

#[tokio::test]
async fn test_list_shoes_treats_empty_params_as_absent() {
    let app = seeded_app();

    let request = Request::builder()
        .method("GET")
        .uri("/?brand=&category=&minPrice=")
        .body(Body::empty())
        .unwrap();

    let response = app.oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);

    let body = json_body(response.into_body()).await;
    assert_eq!(body["count"], 4);
    assert_eq!(body["filters"].as_array().unwrap().len(), 0);
}

#[tokio::test]
async fn test_list_shoes_rejects_malformed_numeric_filter() {
    let app = seeded_app();

    let request = Request::builder()
        .method("GET")
        .uri("/?minPrice=cheap")
        .body(Body::empty())
        .unwrap();

    let response = app.oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let body = json_body(response.into_body()).await;
    assert_eq!(body["success"], false);
    assert_eq!(body["message"], "Validation failed");
    assert!(body["errors"].is_array());
}

#[tokio::test]
async fn test_create_shoe_returns_201_with_assigned_fields() {
    let app = seeded_app();

    let request = Request::builder()
        .method("POST")
        .uri("/")
        .header("content-type", "application/json")
        .body(Body::from(
            serde_json::to_string(&valid_create_payload()).unwrap(),
        ))
        .unwrap();

    let response = app.oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::CREATED);

    let body = json_body(response.into_body()).await;
    assert_eq!(body["success"], true);
    assert_eq!(body["message"], "Shoe created successfully");
    assert_eq!(body["data"]["name"], "Gel-Kayano 30");
    assert!(body["data"]["id"].is_string());
    assert!(body["data"]["createdAt"].is_string());
    assert!(body["data"]["updatedAt"].is_string());
}

#[tokio::test]
async fn test_create_shoe_validates_field_rules() {
    let app = seeded_app();

    let mut payload = valid_create_payload();
    payload["name"] = json!("");
    payload["price"] = json!(-10.0);

    let request = Request::builder()
        .method("POST")
        .uri("/")
        .header("content-type", "application/json")
        .body(Body::from(serde_json::to_string(&payload).unwrap()))
        .unwrap();

    let response = app.oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let body = json_body(response.into_body()).await;
    assert_eq!(body["success"], false);
    assert_eq!(body["message"], "Validation failed");
    let errors: Vec<String> = body["errors"]
        .as_array()
        .unwrap()
        .iter()
        .map(|e| e.as_str().unwrap().to_string())
        .collect();
    assert!(errors.iter().any(|e| e.starts_with("name:")));
    assert!(errors.iter().any(|e| e.starts_with("price:")));
}

#[tokio::test]
async fn test_create_shoe_rejects_missing_required_field() {
    let app = seeded_app();

    let mut payload = valid_create_payload();
    payload.as_object_mut().unwrap().remove("brand");

    let request = Request::builder()
        .method("POST")
        .uri("/")
        .header("content-type", "application/json")
        .body(Body::from(serde_json::to_string(&payload).unwrap()))
        .unwrap();

    let response = app.oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let body = json_body(response.into_body()).await;
    assert_eq!(body["message"], "Validation failed");
    assert!(body["errors"].is_array());
}

#[tokio::test]
async fn test_get_shoe_returns_200() {
    let service = ShoeService::new(InMemoryShoeRepository::seeded());
    let created = service
        .create_shoe(serde_json::from_value(valid_create_payload()).unwrap())
        .await
        .unwrap();
    let app = handlers::router(service);

    let request = Request::builder()
        .method("GET")
        .uri(format!("/{}", created.id))
        .body(Body::empty())
        .unwrap();

    let response = app.oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);

    let body = json_body(response.into_body()).await;
    assert_eq!(body["success"], true);
    assert_eq!(body["data"]["id"], created.id.to_string());
    // The single-record envelope carries no message
    assert!(body.get("message").is_none());
}

#[tokio::test]
async fn test_get_shoe_returns_404_for_missing() {
    let app = seeded_app();

    let request = Request::builder()
        .method("GET")
        .uri(format!("/{}", uuid::Uuid::new_v4()))
        .body(Body::empty())
        .unwrap();

    let response = app.oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let body = json_body(response.into_body()).await;
    assert_eq!(body["success"], false);
    assert_eq!(body["message"], "Shoe not found");
}

#[tokio::test]
async fn test_get_shoe_returns_400_for_malformed_id() {
    let app = seeded_app();

    let request = Request::builder()
        .method("GET")
        .uri("/not-a-uuid")
        .body(Body::empty())
        .unwrap();

    let response = app.oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_update_shoe_returns_200_and_merges() {
    let service = ShoeService::new(InMemoryShoeRepository::seeded());
    let created = service
        .create_shoe(serde_json::from_value(valid_create_payload()).unwrap())
        .await
        .unwrap();
    let app = handlers::router(service);

    let request = Request::builder()
        .method("PUT")
        .uri(format!("/{}", created.id))
        .header("content-type", "application/json")
        .body(Body::from(
            serde_json::to_string(&json!({"price": 140.0})).unwrap(),
        ))
        .unwrap();

    let response = app.oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);

    let body = json_body(response.into_body()).await;
    assert_eq!(body["success"], true);
    assert_eq!(body["message"], "Shoe updated successfully");
    assert_eq!(body["data"]["price"], 140.0);
    assert_eq!(body["data"]["name"], "Gel-Kayano 30");
}

#[tokio::test]
async fn test_update_shoe_rejects_conflicting_body_id() {
    let service = ShoeService::new(InMemoryShoeRepository::seeded());
    let created = service
        .create_shoe(serde_json::from_value(valid_create_payload()).unwrap())
        .await
        .unwrap();
    let app = handlers::router(service);

    let request = Request::builder()
        .method("PUT")
        .uri(format!("/{}", created.id))
        .header("content-type", "application/json")
        .body(Body::from(
            serde_json::to_string(&json!({
                "id": uuid::Uuid::new_v4(),
                "price": 140.0
            }))
            .unwrap(),
        ))
        .unwrap();

    let response = app.oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let body = json_body(response.into_body()).await;
    assert_eq!(body["success"], false);
    assert_eq!(body["message"], "ID in URL and body must match");
}

#[tokio::test]
async fn test_update_shoe_returns_404_for_missing() {
    let app = seeded_app();

    let request = Request::builder()
        .method("PUT")
        .uri(format!("/{}", uuid::Uuid::new_v4()))
        .header("content-type", "application/json")
        .body(Body::from(
            serde_json::to_string(&json!({"price": 140.0})).unwrap(),
        ))
        .unwrap();

    let response = app.oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_delete_shoe_returns_200_then_404() {
    let service = ShoeService::new(InMemoryShoeRepository::seeded());
    let created = service
        .create_shoe(serde_json::from_value(valid_create_payload()).unwrap())
        .await
        .unwrap();
    let app = handlers::router(service);

    let request = Request::builder()
        .method("DELETE")
        .uri(format!("/{}", created.id))
        .body(Body::empty())
        .unwrap();

    let response = app.clone().oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);

    let body = json_body(response.into_body()).await;
    assert_eq!(body["success"], true);
    assert_eq!(body["message"], "Shoe deleted successfully");

    // Deleting the same record again is a 404
    let request = Request::builder()
        .method("DELETE")
        .uri(format!("/{}", created.id))
        .body(Body::empty())
        .unwrap();

    let response = app.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_list_brands_returns_distinct_values() {
    let app = seeded_app();

    let request = Request::builder()
        .method("GET")
        .uri("/brands")
        .body(Body::empty())
        .unwrap();

    let response = app.oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);

    let body = json_body(response.into_body()).await;
    assert_eq!(body["success"], true);
    assert_eq!(body["count"], 4);
    assert_eq!(
        body["data"],
        json!(["Nike", "Adidas", "Converse", "Dr. Martens"])
    );
}

#[tokio::test]
async fn test_list_categories_returns_distinct_values() {
    let app = seeded_app();

    let request = Request::builder()
        .method("GET")
        .uri("/categories")
        .body(Body::empty())
        .unwrap();

    let response = app.oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);

    let body = json_body(response.into_body()).await;
    assert_eq!(body["count"], 3);
    assert_eq!(body["data"], json!(["Running", "Casual", "Boots"]));
}
