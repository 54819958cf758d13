use crate::error::AppError;
use crate::features::persons::model::JsonPerson;
use crate::AppState;
use axum::{
    extract::{Path, State},
    routing::get,
    Json, Router,
};

pub fn persons_api_router() -> Router<AppState> {
    Router::new()
        .route("/", get(list_persons_handler))
        .route("/{id}", get(get_person_handler))
}

async fn list_persons_handler(
    State(state): State<AppState>,
) -> Result<Json<Vec<JsonPerson>>, AppError> {
    let persons = state.repo.list_persons().await?;
    Ok(Json(persons.iter().map(JsonPerson::from).collect()))
}

async fn get_person_handler(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<JsonPerson>, AppError> {
    match state.repo.get_person(id).await? {
        Some(person) => Ok(Json(JsonPerson::from(&person))),
        None => Err(AppError::NotFound("Person not found")),
    }
}
