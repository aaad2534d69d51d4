use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    model::{api::ErrorDto, person::PersonDto},
    server::{error::AppError, service::person::PersonService, state::AppState},
};

/// Tag for grouping people endpoints in OpenAPI documentation
pub static PEOPLE_TAG: &str = "people";

/// Get all people.
///
/// Returns every person in the catalog. An empty catalog is reported as
/// 404 rather than an empty array.
///
/// # Arguments
/// - `state` - Application state containing the database connection
///
/// # Returns
/// - `200 OK` - List of people
/// - `404 Not Found` - The people table is empty
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/people",
    tag = PEOPLE_TAG,
    responses(
        (status = 200, description = "Successfully retrieved people", body = Vec<PersonDto>),
        (status = 404, description = "No people exist", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_all_people(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let service = PersonService::new(&state.db);

    let people = service.get_all().await?;

    if people.is_empty() {
        return Err(AppError::NotFound("People not found".to_string()));
    }

    Ok((
        StatusCode::OK,
        Json(people.into_iter().map(|p| p.into_dto()).collect::<Vec<_>>()),
    ))
}

/// Get a specific person by id.
///
/// # Arguments
/// - `state` - Application state containing the database connection
/// - `people_id` - Id of the person to fetch
///
/// # Returns
/// - `200 OK` - Person details
/// - `404 Not Found` - No person with the given id
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/get_people/{people_id}",
    tag = PEOPLE_TAG,
    params(
        ("people_id" = i32, Path, description = "Person id")
    ),
    responses(
        (status = 200, description = "Successfully retrieved person", body = PersonDto),
        (status = 404, description = "Person not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_person_by_id(
    State(state): State<AppState>,
    Path(people_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let service = PersonService::new(&state.db);

    let person = service.get_by_id(people_id).await?;

    match person {
        Some(person) => Ok((StatusCode::OK, Json(person.into_dto()))),
        None => Err(AppError::NotFound("Person not found".to_string())),
    }
}
