//! API integration tests
//!
//! These run against a live server with a reachable database:
//! `cargo run` in one terminal, then `cargo test -- --ignored`.

use reqwest::Client;
use serde_json::{json, Value};

const BASE_URL: &str = "http://localhost:8080/api/v1";

/// Create an item and return its id
async fn create_item(client: &Client, body: Value) -> Value {
    let response = client
        .post(format!("{}/items", BASE_URL))
        .json(&body)
        .send()
        .await
        .expect("Failed to send create request");

    assert_eq!(response.status(), 201);
    response.json().await.expect("Failed to parse create response")
}

async fn delete_item(client: &Client, id: &str) {
    let _ = client
        .delete(format!("{}/items/{}", BASE_URL, id))
        .send()
        .await;
}

#[tokio::test]
#[ignore] // Run with: cargo test -- --ignored
async fn test_health_check() {
    let client = Client::new();

    let response = client
        .get(format!("{}/health", BASE_URL))
        .send()
        .await
        .expect("Failed to send request");

    assert!(response.status().is_success());

    let body: Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["status"], "healthy");
}

#[tokio::test]
#[ignore]
async fn test_readiness_check() {
    let client = Client::new();

    let response = client
        .get(format!("{}/ready", BASE_URL))
        .send()
        .await
        .expect("Failed to send request");

    assert!(response.status().is_success());

    let body: Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["status"], "ready");
}

#[tokio::test]
#[ignore]
async fn test_list_items() {
    let client = Client::new();

    let response = client
        .get(format!("{}/items", BASE_URL))
        .send()
        .await
        .expect("Failed to send request");

    assert!(response.status().is_success());

    let body: Value = response.json().await.expect("Failed to parse response");
    assert!(body.is_array());
}

#[tokio::test]
#[ignore]
async fn test_item_round_trip() {
    let client = Client::new();

    // Create
    let body = create_item(
        &client,
        json!({
            "name": "Cable",
            "category": "AV",
            "quantity": 2,
            "location": { "floor": 1, "room": "Closet" }
        }),
    )
    .await;

    assert_eq!(body["message"], "Item added successfully!");
    let item = &body["item"];
    let id = item["id"].as_str().expect("No item id").to_string();
    assert_eq!(item["quantity"], 2);
    assert!(item["created_at"].is_string());
    assert!(item["updated_at"].is_string());

    // The collection now includes it
    let items: Value = client
        .get(format!("{}/items", BASE_URL))
        .send()
        .await
        .expect("Failed to send request")
        .json()
        .await
        .expect("Failed to parse response");
    assert!(items
        .as_array()
        .expect("array")
        .iter()
        .any(|i| i["id"] == id.as_str()));

    // Update the quantity
    let response = client
        .put(format!("{}/items/{}", BASE_URL, id))
        .json(&json!({ "quantity": 3 }))
        .send()
        .await
        .expect("Failed to send request");

    assert_eq!(response.status(), 200);
    let body: Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["message"], "Item updated!");
    assert_eq!(body["item"]["quantity"], 3);
    assert_eq!(body["item"]["name"], "Cable");

    // Delete
    let response = client
        .delete(format!("{}/items/{}", BASE_URL, id))
        .send()
        .await
        .expect("Failed to send request");

    assert_eq!(response.status(), 200);
    let body: Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["message"], "Item deleted successfully.");

    // The collection no longer includes it
    let items: Value = client
        .get(format!("{}/items", BASE_URL))
        .send()
        .await
        .expect("Failed to send request")
        .json()
        .await
        .expect("Failed to parse response");
    assert!(!items
        .as_array()
        .expect("array")
        .iter()
        .any(|i| i["id"] == id.as_str()));
}

#[tokio::test]
#[ignore]
async fn test_create_defaults_quantity() {
    let client = Client::new();

    let body = create_item(
        &client,
        json!({
            "name": "Lapel Mic",
            "category": "Uncategorized",
            "location": { "floor": 2, "room": "Pegasus Penthouse" }
        }),
    )
    .await;

    assert_eq!(body["item"]["quantity"], 1);

    let id = body["item"]["id"].as_str().expect("No item id");
    delete_item(&client, id).await;
}

#[tokio::test]
#[ignore]
async fn test_create_rejects_negative_quantity() {
    let client = Client::new();

    let response = client
        .post(format!("{}/items", BASE_URL))
        .json(&json!({
            "name": "Cable",
            "category": "AV",
            "quantity": -1,
            "location": { "floor": 1, "room": "Closet" }
        }))
        .send()
        .await
        .expect("Failed to send request");

    assert_eq!(response.status(), 400);

    let body: Value = response.json().await.expect("Failed to parse response");
    assert!(body["error"].is_string());
}

#[tokio::test]
#[ignore]
async fn test_create_rejects_missing_name() {
    let client = Client::new();

    let response = client
        .post(format!("{}/items", BASE_URL))
        .json(&json!({
            "name": "   ",
            "category": "AV",
            "location": { "floor": 1, "room": "Closet" }
        }))
        .send()
        .await
        .expect("Failed to send request");

    assert_eq!(response.status(), 400);
}

#[tokio::test]
#[ignore]
async fn test_update_unknown_item() {
    let client = Client::new();

    let response = client
        .put(format!(
            "{}/items/00000000-0000-4000-8000-000000000000",
            BASE_URL
        ))
        .json(&json!({ "quantity": 3 }))
        .send()
        .await
        .expect("Failed to send request");

    assert_eq!(response.status(), 404);
}

#[tokio::test]
#[ignore]
async fn test_delete_unknown_item() {
    let client = Client::new();

    let response = client
        .delete(format!(
            "{}/items/00000000-0000-4000-8000-000000000000",
            BASE_URL
        ))
        .send()
        .await
        .expect("Failed to send request");

    assert_eq!(response.status(), 404);
}

#[tokio::test]
#[ignore]
async fn test_zero_quantity_cannot_go_negative() {
    let client = Client::new();

    let body = create_item(
        &client,
        json!({
            "name": "Spare Lamp",
            "category": "Projection",
            "quantity": 0,
            "location": { "floor": 3, "room": "Third Floor Storage" }
        }),
    )
    .await;
    let id = body["item"]["id"].as_str().expect("No item id").to_string();

    // A decrement below zero must be rejected and nothing persisted
    let response = client
        .put(format!("{}/items/{}", BASE_URL, id))
        .json(&json!({ "quantity": -1 }))
        .send()
        .await
        .expect("Failed to send request");

    assert_eq!(response.status(), 400);

    let item: Value = client
        .get(format!("{}/items/{}", BASE_URL, id))
        .send()
        .await
        .expect("Failed to send request")
        .json()
        .await
        .expect("Failed to parse response");
    assert_eq!(item["quantity"], 0);

    delete_item(&client, &id).await;
}

#[tokio::test]
#[ignore]
async fn test_filter_by_floor_and_room() {
    let client = Client::new();

    let first = create_item(
        &client,
        json!({
            "name": "TV Cart",
            "category": "Display",
            "location": { "floor": 1, "room": "TV Cart Storage" }
        }),
    )
    .await;
    let second = create_item(
        &client,
        json!({
            "name": "Charging Brick",
            "category": "Power",
            "location": { "floor": 3, "room": "Charge on Chamber" }
        }),
    )
    .await;

    let first_id = first["item"]["id"].as_str().expect("No item id").to_string();
    let second_id = second["item"]["id"].as_str().expect("No item id").to_string();

    let items: Value = client
        .get(format!(
            "{}/items?floor=1&room=TV%20Cart%20Storage",
            BASE_URL
        ))
        .send()
        .await
        .expect("Failed to send request")
        .json()
        .await
        .expect("Failed to parse response");

    let items = items.as_array().expect("array");
    assert!(items.iter().any(|i| i["id"] == first_id.as_str()));
    assert!(!items.iter().any(|i| i["id"] == second_id.as_str()));
    assert!(items
        .iter()
        .all(|i| i["location"]["floor"] == 1 && i["location"]["room"] == "TV Cart Storage"));

    delete_item(&client, &first_id).await;
    delete_item(&client, &second_id).await;
}

#[tokio::test]
#[ignore]
async fn test_update_replaces_location_pair() {
    let client = Client::new();

    let body = create_item(
        &client,
        json!({
            "name": "Confidence Monitor",
            "category": "Display",
            "location": { "floor": 1, "room": "Atrium Closet" }
        }),
    )
    .await;
    let id = body["item"]["id"].as_str().expect("No item id").to_string();

    let response = client
        .put(format!("{}/items/{}", BASE_URL, id))
        .json(&json!({ "location": { "floor": 4, "room": "4th Floor Storage" } }))
        .send()
        .await
        .expect("Failed to send request");

    assert_eq!(response.status(), 200);
    let body: Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["item"]["location"]["floor"], 4);
    assert_eq!(body["item"]["location"]["room"], "4th Floor Storage");

    delete_item(&client, &id).await;
}

#[tokio::test]
#[ignore]
async fn test_list_locations() {
    let client = Client::new();

    let response = client
        .get(format!("{}/locations", BASE_URL))
        .send()
        .await
        .expect("Failed to send request");

    assert!(response.status().is_success());

    let body: Value = response.json().await.expect("Failed to parse response");
    let floors = body.as_array().expect("array");
    assert_eq!(floors.len(), 4);
    assert_eq!(floors[0]["floor"], 1);
    assert!(floors[0]["rooms"]
        .as_array()
        .expect("rooms")
        .iter()
        .any(|r| r == "Atrium Closet"));
}

#[tokio::test]
#[ignore]
async fn test_method_not_allowed() {
    let client = Client::new();

    let response = client
        .patch(format!("{}/items", BASE_URL))
        .send()
        .await
        .expect("Failed to send request");

    assert_eq!(response.status(), 405);
}
