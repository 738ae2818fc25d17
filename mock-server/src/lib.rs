//! Local stand-in for the Tixte REST API, used by the core integration
//! tests. Mirrors the upstream envelope: every JSON response carries a
//! top-level `success` flag, with payloads under `data` and failures under
//! `error`.

use std::collections::HashMap;

use axum::{
    extract::Query,
    http::{header, StatusCode, Uri},
    response::IntoResponse,
    routing::get,
    Json, Router,
};
use serde_json::{json, Value};
use tokio::net::TcpListener;
use uuid::Uuid;

pub fn app() -> Router {
    Router::new()
        .route("/ping", get(ping))
        .route("/account", get(account))
        .route("/search", get(search))
        .route("/maintenance", get(maintenance))
        .route("/raw", get(raw))
        .fallback(not_found)
}

pub async fn run(listener: TcpListener) -> Result<(), std::io::Error> {
    axum::serve(listener, app()).await
}

async fn ping() -> Json<Value> {
    Json(json!({ "success": true, "data": { "message": "pong" } }))
}

async fn account() -> Json<Value> {
    Json(json!({
        "success": true,
        "data": {
            "id": Uuid::new_v4(),
            "username": "mock",
            "pro": false
        }
    }))
}

/// Echoes the request's query parameters back so clients can verify what
/// actually reached the wire.
async fn search(Query(params): Query<HashMap<String, String>>) -> Json<Value> {
    Json(json!({ "success": true, "data": { "query": params } }))
}

async fn maintenance() -> (StatusCode, Json<Value>) {
    (
        StatusCode::SERVICE_UNAVAILABLE,
        Json(json!({
            "success": false,
            "error": { "code": "service_unavailable", "message": "down for maintenance" }
        })),
    )
}

/// Deliberately non-JSON 200 body.
async fn raw() -> impl IntoResponse {
    ([(header::CONTENT_TYPE, "text/plain")], "pong")
}

async fn not_found(uri: Uri) -> (StatusCode, Json<Value>) {
    (
        StatusCode::NOT_FOUND,
        Json(json!({
            "success": false,
            "error": { "code": "not_found", "message": format!("no route for {uri}") }
        })),
    )
}
