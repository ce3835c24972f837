//! End-to-end tests for the tour CRUD endpoints.

use axum::http::{Method, StatusCode};
use serde_json::{Value, json};

use wayfarer_integration_tests::{send, send_json, test_app_without_gemini};

fn helsinki_tour() -> Value {
    json!({
        "name": "Helsinki in 5 Days Tour",
        "info": "Discover the charm of Helsinki in 5 days with our expert guides.",
        "image": "https://example.com/tours/tour-1.jpeg",
        "price": "1900",
        "duration": "5 days",
        "rating": 4.5,
        "season": "Summer",
        "specialOffer": "10% off for early bookings"
    })
}

fn london_tour() -> Value {
    json!({
        "name": "London in 7 Days Tour",
        "info": "Explore the best of London in 7 days with our expert guides.",
        "image": "https://example.com/tours/tour-2.jpeg",
        "price": "2195",
        "duration": "7 days",
        "rating": 4.8,
        "season": "Spring",
        "specialOffer": "Group discount available"
    })
}

#[tokio::test]
async fn get_tours_starts_empty() {
    let app = test_app_without_gemini();

    let (status, body) = send_json(&app, Method::GET, "/api/tours", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!([]));
}

#[tokio::test]
async fn post_tour_returns_201_with_created_record() {
    let app = test_app_without_gemini();

    let (status, body) = send_json(&app, Method::POST, "/api/tours", Some(&helsinki_tour())).await;

    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["id"], 1);
    assert_eq!(body["name"], "Helsinki in 5 Days Tour");
    assert_eq!(body["specialOffer"], "10% off for early bookings");
}

#[tokio::test]
async fn post_tour_assigns_increasing_ids() {
    let app = test_app_without_gemini();

    let (_, first) = send_json(&app, Method::POST, "/api/tours", Some(&helsinki_tour())).await;
    let (_, second) = send_json(&app, Method::POST, "/api/tours", Some(&london_tour())).await;

    assert_eq!(first["id"], 1);
    assert_eq!(second["id"], 2);

    let (status, listing) = send_json(&app, Method::GET, "/api/tours", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(listing.as_array().map(Vec::len), Some(2));
}

#[tokio::test]
async fn post_tour_missing_field_returns_400() {
    let app = test_app_without_gemini();

    let mut draft = helsinki_tour();
    draft.as_object_mut().expect("object").remove("price");

    let (status, body) = send_json(&app, Method::POST, "/api/tours", Some(&draft)).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(
        body["message"]
            .as_str()
            .is_some_and(|m| m.contains("price"))
    );

    // Failed create must not mutate the store
    let (_, listing) = send_json(&app, Method::GET, "/api/tours", None).await;
    assert_eq!(listing, json!([]));
}

#[tokio::test]
async fn post_tour_empty_field_returns_400() {
    let app = test_app_without_gemini();

    let mut draft = helsinki_tour();
    draft["season"] = json!("");

    let (status, _) = send_json(&app, Method::POST, "/api/tours", Some(&draft)).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn get_tour_by_id_returns_created_record() {
    let app = test_app_without_gemini();
    let (_, created) = send_json(&app, Method::POST, "/api/tours", Some(&helsinki_tour())).await;

    let (status, fetched) = send_json(&app, Method::GET, "/api/tours/1", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(fetched, created);
}

#[tokio::test]
async fn get_unknown_tour_returns_404() {
    let app = test_app_without_gemini();

    let (status, _) = send_json(&app, Method::GET, "/api/tours/9999", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn get_tour_with_malformed_id_returns_400() {
    let app = test_app_without_gemini();

    for bad in ["invalid-id", "4.2", "0", "-1"] {
        let (status, _) = send_json(&app, Method::GET, &format!("/api/tours/{bad}"), None).await;
        assert_eq!(status, StatusCode::BAD_REQUEST, "id {bad:?}");
    }
}

#[tokio::test]
async fn put_tour_merges_patch_and_keeps_other_fields() {
    let app = test_app_without_gemini();
    send_json(&app, Method::POST, "/api/tours", Some(&helsinki_tour())).await;

    let patch = json!({ "price": "1,350", "rating": 4.9, "season": "Autumn" });
    let (status, updated) = send_json(&app, Method::PUT, "/api/tours/1", Some(&patch)).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(updated["price"], "1,350");
    assert_eq!(updated["rating"], 4.9);
    assert_eq!(updated["season"], "Autumn");
    // Unpatched fields retained
    assert_eq!(updated["name"], "Helsinki in 5 Days Tour");
    assert_eq!(updated["duration"], "5 days");

    // The update is visible on a subsequent read
    let (_, fetched) = send_json(&app, Method::GET, "/api/tours/1", None).await;
    assert_eq!(fetched, updated);
}

#[tokio::test]
async fn put_unknown_tour_returns_404() {
    let app = test_app_without_gemini();

    let (status, _) =
        send_json(&app, Method::PUT, "/api/tours/42", Some(&json!({"price": "1"}))).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn put_tour_with_malformed_id_returns_400() {
    let app = test_app_without_gemini();

    let (status, _) = send_json(
        &app,
        Method::PUT,
        "/api/tours/invalid-id",
        Some(&json!({"price": "1"})),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn delete_tour_returns_204_then_404_on_get() {
    let app = test_app_without_gemini();
    send_json(&app, Method::POST, "/api/tours", Some(&helsinki_tour())).await;

    let (status, body) = send(&app, Method::DELETE, "/api/tours/1", None).await;
    assert_eq!(status, StatusCode::NO_CONTENT);
    assert!(body.is_empty());

    let (status, _) = send_json(&app, Method::GET, "/api/tours/1", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn delete_unknown_tour_returns_404() {
    let app = test_app_without_gemini();

    let (status, _) = send_json(&app, Method::DELETE, "/api/tours/7", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn deleted_tour_id_is_never_reassigned() {
    let app = test_app_without_gemini();

    send_json(&app, Method::POST, "/api/tours", Some(&helsinki_tour())).await;
    send(&app, Method::DELETE, "/api/tours/1", None).await;

    let (_, second) = send_json(&app, Method::POST, "/api/tours", Some(&london_tour())).await;
    assert_eq!(second["id"], 2);
}

#[tokio::test]
async fn root_returns_liveness_banner() {
    let app = test_app_without_gemini();

    let (status, body) = send(&app, Method::GET, "/", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, b"API is running");
}

#[tokio::test]
async fn unmatched_path_returns_unknown_endpoint() {
    let app = test_app_without_gemini();

    let (status, body) = send_json(&app, Method::GET, "/api/nope", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body, json!({ "error": "unknown endpoint" }));
}
