pub mod api;
pub mod model;
pub mod views;

use crate::error::AppError;
use crate::features::flash::{self, Flash};
use crate::AppState;
use axum::{
    extract::{Path, State},
    response::{Html, IntoResponse, Redirect, Response},
    routing::{get, post},
    Form, Router,
};
use axum_extra::extract::cookie::CookieJar;
use model::PersonForm;

const LIST_PATH: &str = "/persons";

pub fn persons_router() -> Router<AppState> {
    Router::new()
        .route("/", get(list_persons_handler))
        .route("/add", get(add_person_form_handler).post(add_person_handler))
        .route(
            "/edit/{id}",
            get(edit_person_form_handler).post(edit_person_handler),
        )
        .route("/delete/{id}", post(delete_person_handler))
}

// flash the notice onto the jar, then send the browser back to the list
fn redirect_to_list(jar: CookieJar, notice: Flash) -> Response {
    (flash::push(jar, notice), Redirect::to(LIST_PATH)).into_response()
}

async fn list_persons_handler(
    State(state): State<AppState>,
    jar: CookieJar,
) -> Result<(CookieJar, Html<String>), AppError> {
    let persons = state.repo.list_persons().await?;
    let (jar, notice) = flash::take(jar);
    Ok((jar, views::persons_page(&persons, notice.as_ref())))
}

async fn add_person_form_handler(jar: CookieJar) -> (CookieJar, Html<String>) {
    let (jar, notice) = flash::take(jar);
    (jar, views::add_person_page(notice.as_ref()))
}

async fn add_person_handler(
    State(state): State<AppState>,
    jar: CookieJar,
    Form(form): Form<PersonForm>,
) -> Result<Response, AppError> {
    let new_person = match form.validate() {
        Ok(new_person) => new_person,
        Err(e) => {
            let notice = Flash::error(e.to_string());
            return Ok(views::add_person_page(Some(&notice)).into_response());
        }
    };

    let id = state.repo.insert_person(&new_person).await?;
    tracing::info!(id, name = %new_person.name, "person added");

    Ok(redirect_to_list(jar, Flash::success("Person added successfully!")))
}

async fn edit_person_form_handler(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    jar: CookieJar,
) -> Result<Response, AppError> {
    let Some(person) = state.repo.get_person(id).await? else {
        return Ok(redirect_to_list(jar, Flash::error("Person not found.")));
    };

    let (jar, notice) = flash::take(jar);
    Ok((jar, views::edit_person_page(&person, notice.as_ref())).into_response())
}

async fn edit_person_handler(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    jar: CookieJar,
    Form(form): Form<PersonForm>,
) -> Result<Response, AppError> {
    let Some(person) = state.repo.get_person(id).await? else {
        return Ok(redirect_to_list(jar, Flash::error("Person not found.")));
    };

    let update = match form.validate() {
        Ok(update) => update,
        Err(e) => {
            // re-render with the stored values, not the rejected input
            let notice = Flash::error(e.to_string());
            return Ok(views::edit_person_page(&person, Some(&notice)).into_response());
        }
    };

    state.repo.update_person(id, &update).await?;
    tracing::info!(id, "person updated");

    Ok(redirect_to_list(jar, Flash::success("Person updated successfully!")))
}

async fn delete_person_handler(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    jar: CookieJar,
) -> Result<Response, AppError> {
    let removed = state.repo.delete_person(id).await?;
    tracing::info!(id, removed, "person deleted");

    Ok(redirect_to_list(jar, Flash::success("Person deleted successfully!")))
}
