use crate::app_router;
use crate::tests::api_persons_router::{body_string, setup_api_test_state, MockProductsProbe};
use axum::{
    body::Body,
    http::{Request, StatusCode},
    Router,
};
use tower::ServiceExt;

async fn setup_app(outcome: Result<String, String>) -> Router {
    let (state, _repo) = setup_api_test_state(MockProductsProbe { outcome }).await;
    app_router(state)
}

fn get(uri: &str) -> Request<Body> {
    Request::builder().uri(uri).body(Body::empty()).unwrap()
}

#[tokio::test]
async fn test_home_page() {
    let app = setup_app(Ok(String::new())).await;

    let response = app.oneshot(get("/")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert!(body_string(response).await.contains(r#"href="/persons""#));
}

#[tokio::test]
async fn test_about_page() {
    let app = setup_app(Ok(String::new())).await;

    let response = app.oneshot(get("/about")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_string(response).await, "About");
}

#[tokio::test]
async fn test_probe_success() {
    let app = setup_app(Ok(r#"[{"id":1}]"#.to_string())).await;

    let response = app.oneshot(get("/test_supa")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        body_string(response).await,
        r#"Database connection successful![{"id":1}]"#
    );
}

#[tokio::test]
async fn test_probe_failure() {
    let app = setup_app(Err("connection refused".to_string())).await;

    let response = app.oneshot(get("/test_supa")).await.unwrap();
    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(
        body_string(response).await,
        "Database connection failed: connection refused"
    );
}

// without credentials the real probe fails before any network traffic
#[tokio::test]
async fn test_supabase_probe_requires_credentials() {
    use crate::services::{ProductsProbe, SupabaseProbe};

    let probe = SupabaseProbe::new(None, Some("key".to_string()), "Products".to_string());
    let err = probe.fetch_products().await.unwrap_err();
    assert!(err.to_string().contains("SUPABASE_URL"));

    assert_eq!(
        probe.endpoint("https://example.supabase.co/"),
        "https://example.supabase.co/rest/v1/Products?select=*"
    );
}
