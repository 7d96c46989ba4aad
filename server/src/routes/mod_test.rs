use super::*;
use axum::body::Body;
use axum::http::{Request, header};
use tower::ServiceExt;

async fn get_path(path: &str) -> axum::response::Response {
    let request = Request::builder().uri(path).body(Body::empty()).unwrap();
    api_routes().oneshot(request).await.unwrap()
}

#[tokio::test]
async fn healthz_returns_ok() {
    let response = get_path("/healthz").await;
    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn admin_root_redirects_to_dashboard() {
    let response = get_path("/admin").await;
    assert_eq!(response.status(), StatusCode::TEMPORARY_REDIRECT);
    assert_eq!(response.headers().get(header::LOCATION).unwrap(), "/admin/dashboard");
}

#[tokio::test]
async fn legacy_dashboard_login_redirects_to_admin_login() {
    let response = get_path("/dashboard/login").await;
    assert_eq!(response.status(), StatusCode::TEMPORARY_REDIRECT);
    assert_eq!(response.headers().get(header::LOCATION).unwrap(), "/admin/login");
}

#[tokio::test]
async fn unknown_path_is_not_found_without_leptos() {
    let response = get_path("/admin/dashboard").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn healthz_rejects_post() {
    let request = Request::builder().method("POST").uri("/healthz").body(Body::empty()).unwrap();
    let response = api_routes().oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::METHOD_NOT_ALLOWED);
}
