mod common;

use axum::{
    Router,
    body::{Body, to_bytes},
    http::{Request, StatusCode, header},
};
use serde_json::{Value, json};
use tower::ServiceExt;

use common::setup_state;
use mystore_api::create_app;

async fn app() -> anyhow::Result<Router> {
    Ok(create_app(setup_state().await?))
}

async fn send(
    app: &Router,
    method: &str,
    uri: &str,
    body: Option<Value>,
) -> anyhow::Result<(StatusCode, Vec<u8>)> {
    let mut builder = Request::builder().method(method).uri(uri);
    let body = match body {
        Some(json) => {
            builder = builder.header(header::CONTENT_TYPE, "application/json");
            Body::from(serde_json::to_vec(&json)?)
        }
        None => Body::empty(),
    };
    let response = app.clone().oneshot(builder.body(body)?).await?;
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await?;
    Ok((status, bytes.to_vec()))
}

async fn send_json(
    app: &Router,
    method: &str,
    uri: &str,
    body: Option<Value>,
) -> anyhow::Result<(StatusCode, Value)> {
    let (status, bytes) = send(app, method, uri, body).await?;
    Ok((status, serde_json::from_slice(&bytes)?))
}

#[tokio::test]
async fn health_endpoint_responds() -> anyhow::Result<()> {
    let app = app().await?;
    let (status, body) = send_json(&app, "GET", "/health", None).await?;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["status"], "ok");
    Ok(())
}

#[tokio::test]
async fn client_address_lifecycle_over_http() -> anyhow::Result<()> {
    let app = app().await?;

    let (status, created) = send_json(
        &app,
        "POST",
        "/api/clients",
        Some(json!({ "name": "Pedro", "email": "p@x.com", "phone": "555" })),
    )
    .await?;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(created["addresses"], json!([]));
    let client_id = created["id"].as_i64().unwrap_or_default();

    let (status, with_address) = send_json(
        &app,
        "POST",
        &format!("/api/clients/{client_id}/addresses"),
        Some(json!({
            "street": "123 Main St",
            "city": "Anytown",
            "state": "CA",
            "zipCode": "12345"
        })),
    )
    .await?;
    assert_eq!(status, StatusCode::OK);
    let address = &with_address["addresses"][0];
    assert_eq!(address["street"], "123 Main St");
    assert_eq!(address["zipCode"], "12345");
    assert_eq!(address["clientId"], json!(client_id));
    let address_id = address["id"].as_i64().unwrap_or_default();

    let (status, fetched) =
        send_json(&app, "GET", &format!("/api/clients/{client_id}"), None).await?;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(fetched, with_address);

    let (status, unchanged) = send_json(
        &app,
        "DELETE",
        &format!("/api/clients/{client_id}/addresses/999"),
        None,
    )
    .await?;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(unchanged, with_address);

    let (status, without) = send_json(
        &app,
        "DELETE",
        &format!("/api/clients/{client_id}/addresses/{address_id}"),
        None,
    )
    .await?;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(without["addresses"], json!([]));

    let (status, body) =
        send(&app, "GET", &format!("/api/addresses/{address_id}"), None).await?;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert!(body.is_empty());

    let (status, body) = send(&app, "DELETE", &format!("/api/clients/{client_id}"), None).await?;
    assert_eq!(status, StatusCode::NO_CONTENT);
    assert!(body.is_empty());

    let (status, body) = send(&app, "GET", &format!("/api/clients/{client_id}"), None).await?;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert!(body.is_empty());
    Ok(())
}

#[tokio::test]
async fn unknown_client_address_routes_are_not_found() -> anyhow::Result<()> {
    let app = app().await?;

    let (status, body) = send(
        &app,
        "POST",
        "/api/clients/41/addresses",
        Some(json!({ "street": "s", "city": "c", "state": "st", "zipCode": "z" })),
    )
    .await?;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert!(body.is_empty());

    let (status, body) = send(&app, "DELETE", "/api/clients/41/addresses/1", None).await?;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert!(body.is_empty());
    Ok(())
}

#[tokio::test]
async fn catalog_hierarchy_over_http() -> anyhow::Result<()> {
    let app = app().await?;

    let (status, category) = send_json(
        &app,
        "POST",
        "/api/product-categories",
        Some(json!({ "name": "Electronics", "description": "Devices" })),
    )
    .await?;
    assert_eq!(status, StatusCode::CREATED);
    let category_id = category["id"].as_i64().unwrap_or_default();

    let (status, subcategory) = send_json(
        &app,
        "POST",
        "/api/subcategories",
        Some(json!({
            "name": "Smartphones",
            "description": "Phones",
            "category": { "id": category_id, "name": "ignored" }
        })),
    )
    .await?;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(subcategory["category"], category);
    let subcategory_id = subcategory["id"].as_i64().unwrap_or_default();

    let (status, product) = send_json(
        &app,
        "POST",
        "/api/products",
        Some(json!({
            "name": "Pixel",
            "description": "Phone",
            "unitPrice": "999.00",
            "stockQuantity": 150,
            "sku": "PX-1",
            "active": true,
            "subcategory": { "id": subcategory_id }
        })),
    )
    .await?;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(product["stockQuantity"], 150);
    assert_eq!(product["subcategory"], subcategory);
    assert_eq!(product["subcategory"]["category"]["name"], "Electronics");
    assert_eq!(product["unitPrice"], "999.00");
    assert!(product["createdAt"].is_string());
    let product_id = product["id"].as_i64().unwrap_or_default();

    let (status, listed) = send_json(&app, "GET", "/api/products", None).await?;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(listed, json!([product]));

    let (status, body) = send(&app, "DELETE", &format!("/api/products/{product_id}"), None).await?;
    assert_eq!(status, StatusCode::NO_CONTENT);
    assert!(body.is_empty());

    let (status, body) = send(&app, "GET", &format!("/api/products/{product_id}"), None).await?;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert!(body.is_empty());
    Ok(())
}

#[tokio::test]
async fn invalid_requests_are_bad_request() -> anyhow::Result<()> {
    let app = app().await?;

    let (status, body) = send_json(
        &app,
        "POST",
        "/api/subcategories",
        Some(json!({ "name": "Orphan", "description": null })),
    )
    .await?;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["data"]["error"].is_string());

    let (status, _) = send(
        &app,
        "POST",
        "/api/products",
        Some(json!({
            "name": "Broken",
            "unitPrice": "1.00",
            "stockQuantity": -1,
            "sku": "B-1",
            "subcategory": { "id": 1 }
        })),
    )
    .await?;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    Ok(())
}

#[tokio::test]
async fn unknown_route_falls_back_to_not_found() -> anyhow::Result<()> {
    let app = app().await?;
    let (status, body) = send_json(&app, "GET", "/api/nope", None).await?;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["data"]["path"], "/api/nope");
    Ok(())
}
