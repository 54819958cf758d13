use crate::features::persons::views;
use crate::AppState;
use axum::{
    extract::State,
    http::StatusCode,
    response::{Html, IntoResponse, Response},
    routing::get,
    Router,
};

pub fn site_router() -> Router<AppState> {
    Router::new()
        .route("/", get(home_handler))
        .route("/about", get(about_handler))
        .route("/test_supa", get(test_supa_handler))
}

async fn home_handler() -> Html<String> {
    views::layout(
        "Home",
        None,
        r#"<h1>Persons</h1>
<p>A small address book of names and ages.</p>
<ul>
<li><a href="/persons">Browse persons</a></li>
<li><a href="/persons/add">Add a person</a></li>
<li><a href="/api/persons">JSON API</a></li>
</ul>
"#,
    )
}

async fn about_handler() -> &'static str {
    "About"
}

async fn test_supa_handler(State(state): State<AppState>) -> Response {
    match state.probe.fetch_products().await {
        Ok(body) => format!("Database connection successful!{}", body).into_response(),
        Err(e) => {
            tracing::warn!("products probe failed: {:#}", e);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                format!("Database connection failed: {:#}", e),
            )
                .into_response()
        }
    }
}
