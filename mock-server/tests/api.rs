use axum::http::{Request, StatusCode};
use http_body_util::BodyExt;
use mock_server::app;
use tower::ServiceExt;

async fn body_json(response: axum::response::Response) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

async fn body_bytes(response: axum::response::Response) -> bytes::Bytes {
    response.into_body().collect().await.unwrap().to_bytes()
}

fn get(uri: &str) -> Request<String> {
    Request::builder().uri(uri).body(String::new()).unwrap()
}

#[tokio::test]
async fn ping_returns_success_envelope() {
    let resp = app().oneshot(get("/ping")).await.unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
    let body = body_json(resp).await;
    assert_eq!(body["success"], true);
    assert_eq!(body["data"]["message"], "pong");
}

#[tokio::test]
async fn account_carries_a_uuid_id() {
    let resp = app().oneshot(get("/account")).await.unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
    let body = body_json(resp).await;
    assert_eq!(body["success"], true);
    let id = body["data"]["id"].as_str().unwrap();
    assert!(id.parse::<uuid::Uuid>().is_ok());
}

#[tokio::test]
async fn search_echoes_query_parameters() {
    let resp = app()
        .oneshot(get("/search?album=cats&page=2"))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
    let body = body_json(resp).await;
    assert_eq!(body["data"]["query"]["album"], "cats");
    assert_eq!(body["data"]["query"]["page"], "2");
}

#[tokio::test]
async fn search_without_parameters_echoes_empty_map() {
    let resp = app().oneshot(get("/search")).await.unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
    let body = body_json(resp).await;
    assert!(body["data"]["query"].as_object().unwrap().is_empty());
}

#[tokio::test]
async fn maintenance_returns_503_with_error_envelope() {
    let resp = app().oneshot(get("/maintenance")).await.unwrap();

    assert_eq!(resp.status(), StatusCode::SERVICE_UNAVAILABLE);
    let body = body_json(resp).await;
    assert_eq!(body["success"], false);
    assert_eq!(body["error"]["code"], "service_unavailable");
}

#[tokio::test]
async fn raw_returns_plain_text() {
    let resp = app().oneshot(get("/raw")).await.unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
    let body = body_bytes(resp).await;
    assert_eq!(&body[..], b"pong");
}

#[tokio::test]
async fn unknown_route_returns_404_with_error_envelope() {
    let resp = app().oneshot(get("/no/such/route")).await.unwrap();

    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    let body = body_json(resp).await;
    assert_eq!(body["success"], false);
    assert_eq!(body["error"]["code"], "not_found");
}
