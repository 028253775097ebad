#![allow(dead_code)]

use axum::body::{to_bytes, Body};
use axum::http::{header, Method, Request, StatusCode};
use axum::response::Response;
use axum::Router;
use serde_json::Value;
use tower::ServiceExt;

pub use ucsb_api_rust::testing::{admin_auth_header, test_app, user_auth_header, TestStores};

/// Run one request through the router
pub async fn send(app: &Router, request: Request<Body>) -> Response {
    app.clone().oneshot(request).await.expect("infallible")
}

pub fn request(method: Method, uri: &str, auth: Option<&str>) -> Request<Body> {
    let mut builder = Request::builder().method(method).uri(uri);
    if let Some(auth) = auth {
        builder = builder.header(header::AUTHORIZATION, auth);
    }
    builder.body(Body::empty()).expect("request")
}

pub fn get(uri: &str, auth: Option<&str>) -> Request<Body> {
    request(Method::GET, uri, auth)
}

pub fn post(uri: &str, auth: Option<&str>) -> Request<Body> {
    request(Method::POST, uri, auth)
}

pub fn delete(uri: &str, auth: Option<&str>) -> Request<Body> {
    request(Method::DELETE, uri, auth)
}

pub fn put_json(uri: &str, auth: Option<&str>, body: &Value) -> Request<Body> {
    let mut builder = Request::builder()
        .method(Method::PUT)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json");
    if let Some(auth) = auth {
        builder = builder.header(header::AUTHORIZATION, auth);
    }
    builder
        .body(Body::from(serde_json::to_vec(body).expect("body")))
        .expect("request")
}

/// Collect a response body as JSON
pub async fn body_json(response: Response) -> Value {
    let bytes = to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("body");
    serde_json::from_slice(&bytes).expect("json body")
}

/// Assert status and return the JSON body
pub async fn expect_json(response: Response, status: StatusCode) -> Value {
    assert_eq!(response.status(), status);
    body_json(response).await
}

pub fn not_found_body(entity: &str, key: impl std::fmt::Display) -> Value {
    serde_json::json!({
        "type": "EntityNotFoundException",
        "message": format!("{} with id {} not found", entity, key),
    })
}
