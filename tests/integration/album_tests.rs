//! Album endpoint integration tests.
//!
//! Tests verify:
//! - Listing returns the whole catalog in insertion order
//! - Lookup by ID hits and misses
//! - Creation, duplicate IDs and malformed bodies

use album_catalog_service::Album;
use axum::http::{StatusCode, header};
use serde_json::json;
use tower::ServiceExt;

use super::test_utils::{ADMIN_KEY, READ_KEY, body_json, get, post_json, seeded_app};

// =============================================================================
// Listing
// =============================================================================

#[tokio::test]
async fn test_list_returns_seed_catalog_in_order() {
    let (app, _) = seeded_app();

    let response = app
        .oneshot(get("/api/v1/albums", Some(READ_KEY)))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert!(
        response.headers()[header::CONTENT_TYPE]
            .to_str()
            .unwrap()
            .starts_with("application/json")
    );

    assert_eq!(
        body_json(response).await,
        json!([
            {"id": "1", "title": "Blue Train", "artist": "John Coltrane", "price": 56.99},
            {"id": "2", "title": "Jeru", "artist": "Gerry Mulligan", "price": 17.99},
            {"id": "3", "title": "Sarah Vaughan and Clifford Brown", "artist": "Sarah Vaughan", "price": 39.99}
        ])
    );
}

#[tokio::test]
async fn test_list_is_indented() {
    let (app, _) = seeded_app();

    let response = app
        .oneshot(get("/api/v1/albums", Some(READ_KEY)))
        .await
        .unwrap();
    let body = http_body_util::BodyExt::collect(response.into_body())
        .await
        .unwrap()
        .to_bytes();
    let text = std::str::from_utf8(&body).unwrap();

    assert!(text.starts_with("[\n"));
    assert!(text.contains("\n    \"id\": \"1\""));
}

#[tokio::test]
async fn test_repeated_reads_are_identical() {
    let (app, _) = seeded_app();

    for uri in ["/api/v1/albums", "/api/v1/albums/3"] {
        let first = body_json(app.clone().oneshot(get(uri, Some(READ_KEY))).await.unwrap()).await;
        let second = body_json(app.clone().oneshot(get(uri, Some(READ_KEY))).await.unwrap()).await;
        assert_eq!(first, second);
    }
}

// =============================================================================
// Lookup
// =============================================================================

#[tokio::test]
async fn test_get_existing_album() {
    let (app, _) = seeded_app();

    let response = app
        .oneshot(get("/api/v1/albums/2", Some(READ_KEY)))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        body_json(response).await,
        json!({"id": "2", "title": "Jeru", "artist": "Gerry Mulligan", "price": 17.99})
    );
}

#[tokio::test]
async fn test_get_missing_album() {
    let (app, _) = seeded_app();

    let response = app
        .oneshot(get("/api/v1/albums/999", Some(READ_KEY)))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert_eq!(
        body_json(response).await,
        json!({"error": "Not Found", "message": "Album not found"})
    );
}

// =============================================================================
// Creation
// =============================================================================

#[tokio::test]
async fn test_create_album_then_fetch_it() {
    let (app, store) = seeded_app();
    let album = json!({"id": "4", "title": "X", "artist": "Y", "price": 9.99});

    let response = app
        .clone()
        .oneshot(post_json("/api/v1/albums", Some(ADMIN_KEY), album.to_string()))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::CREATED);
    assert_eq!(body_json(response).await, album);

    let response = app
        .clone()
        .oneshot(get("/api/v1/albums/4", Some(READ_KEY)))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await, album);

    let listed = store.list().await;
    assert_eq!(listed.len(), 4);
    assert_eq!(listed[3], Album::new("4", "X", "Y", 9.99));
}

#[tokio::test]
async fn test_create_duplicate_id_rejected() {
    let (app, store) = seeded_app();

    let response = app
        .oneshot(post_json(
            "/api/v1/albums",
            Some(ADMIN_KEY),
            r#"{"id":"1","title":"Other","artist":"Someone","price":5.0}"#,
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(
        body_json(response).await,
        json!({"error": "Bad Request", "message": "Album ID already exists"})
    );
    assert_eq!(store.len().await, 3);
    assert_eq!(store.find_by_id("1").await.unwrap().title, "Blue Train");
}

#[tokio::test]
async fn test_create_with_malformed_body() {
    let (app, store) = seeded_app();

    let bodies = [
        "",
        "not json",
        r#"{"id":5,"title":"X","artist":"Y","price":1.0}"#,
        r#"{"id":"5","title":"X","artist":"Y","price":"cheap"}"#,
    ];

    for body in bodies {
        let response = app
            .clone()
            .oneshot(post_json("/api/v1/albums", Some(ADMIN_KEY), body))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST, "body {body:?}");

        let error = body_json(response).await;
        assert_eq!(error["error"], "Bad Request");
        assert!(
            error["message"]
                .as_str()
                .unwrap()
                .starts_with("Invalid request body")
        );
    }

    assert_eq!(store.len().await, 3);
}

#[tokio::test]
async fn test_create_with_missing_fields_uses_zero_values() {
    let (app, store) = seeded_app();

    let response = app
        .oneshot(post_json(
            "/api/v1/albums",
            Some(ADMIN_KEY),
            r#"{"id":"5","title":"X","artist":"Y"}"#,
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::CREATED);
    assert_eq!(
        body_json(response).await,
        json!({"id": "5", "title": "X", "artist": "Y", "price": 0.0})
    );
    assert_eq!(store.find_by_id("5").await.unwrap(), Album::new("5", "X", "Y", 0.0));
}

#[tokio::test]
async fn test_create_ignores_content_type() {
    let (app, store) = seeded_app();
    let album = json!({"id": "6", "title": "X", "artist": "Y", "price": 9.99});

    let content_types = [None, Some("application/x-www-form-urlencoded"), Some("text/plain")];

    for (i, content_type) in content_types.into_iter().enumerate() {
        let mut album = album.clone();
        album["id"] = json!(format!("6-{i}"));

        let mut builder = axum::http::Request::builder()
            .method("POST")
            .uri("/api/v1/albums")
            .header(header::AUTHORIZATION, ADMIN_KEY);
        if let Some(content_type) = content_type {
            builder = builder.header(header::CONTENT_TYPE, content_type);
        }
        let request = builder
            .body(axum::body::Body::from(album.to_string()))
            .unwrap();

        let response = app.clone().oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::CREATED, "{content_type:?}");
        assert_eq!(body_json(response).await, album);
    }

    assert_eq!(store.len().await, 6);
}
