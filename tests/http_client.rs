//! Integration tests: HttpProductSource against a one-shot local HTTP server.

mod common;

use common::serve_once;
use prodadmin::api::{HttpProductSource, ProductSource};
use prodadmin::model::{ApiError, ProductId, ProductPayload};
use serde_json::json;
use std::time::Duration;

fn source(url: &str) -> HttpProductSource {
    HttpProductSource::new(url, Duration::from_secs(5)).unwrap()
}

fn payload() -> ProductPayload {
    ProductPayload {
        title: "Boot".to_string(),
        price: 30.0,
        description: "Waterproof".to_string(),
        category_id: 4,
        images: vec!["https://placehold.co/600x400".to_string()],
    }
}

#[test]
fn fetch_all_decodes_product_list() {
    let body = json!([
        {
            "id": 1,
            "title": "Shoe",
            "price": 10,
            "description": "d",
            "category": {"id": 2, "name": "Shoes"},
            "images": ["https://img/1.png"]
        },
        {"id": 2, "title": "Hat", "price": 5.5, "slug": "hat"}
    ]);
    let (url, received) = serve_once("200 OK", body.to_string());

    let products = source(&url).fetch_all().unwrap();

    assert_eq!(products.len(), 2);
    assert_eq!(products[0].category_name(), Some("Shoes"));
    assert_eq!(products[1].price, 5.5);
    assert!(products[1].images.is_empty());

    let request = received.recv_timeout(Duration::from_secs(5)).unwrap();
    assert_eq!(request.request_line, "GET /api/v1/products HTTP/1.1");
}

#[test]
fn create_posts_camel_case_payload() {
    let body = json!({
        "id": 31,
        "title": "Boot",
        "price": 30,
        "description": "Waterproof",
        "category": {"id": 4, "name": "Shoes"},
        "images": ["https://placehold.co/600x400"]
    });
    let (url, received) = serve_once("201 Created", body.to_string());

    let created = source(&url).create(&payload()).unwrap();
    assert_eq!(created.id, ProductId::new(31));

    let request = received.recv_timeout(Duration::from_secs(5)).unwrap();
    assert_eq!(request.request_line, "POST /api/v1/products HTTP/1.1");
    let body: serde_json::Value = serde_json::from_str(&request.body).unwrap();
    assert_eq!(body["categoryId"], 4);
    assert_eq!(body["title"], "Boot");
    assert_eq!(body["images"][0], "https://placehold.co/600x400");
}

#[test]
fn update_puts_to_item_url_and_accepts_partial_echo() {
    let (url, received) = serve_once("200 OK", r#"{"id":7,"title":"Boot","price":30}"#);

    let patch = source(&url).update(ProductId::new(7), &payload()).unwrap();
    assert_eq!(patch.title.as_deref(), Some("Boot"));
    assert_eq!(patch.images, None);
    assert_eq!(patch.category, None);

    let request = received.recv_timeout(Duration::from_secs(5)).unwrap();
    assert_eq!(request.request_line, "PUT /api/v1/products/7 HTTP/1.1");
}

#[test]
fn rejection_carries_status_and_compact_body() {
    let (url, _received) = serve_once(
        "400 Bad Request",
        "{\n  \"message\": [\"price must be a positive number\"],\n  \"statusCode\": 400\n}",
    );

    let err = source(&url).create(&payload()).unwrap_err();
    let compact = r#"{"message":["price must be a positive number"],"statusCode":400}"#;
    assert_eq!(
        err,
        ApiError::Rejected {
            status: 400,
            body: compact.to_string(),
        }
    );
}

#[test]
fn undecodable_success_body_is_a_decode_error() {
    let (url, _received) = serve_once("200 OK", "not json");

    let err = source(&url).fetch_all().unwrap_err();
    assert!(matches!(err, ApiError::Decode(_)), "got {err:?}");
}
