use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};

use crate::{
    model::{api::ErrorDto, favorites::UserFavoritesDto, user::UserDto},
    server::{error::AppError, service::user::UserService, state::AppState},
};

/// Tag for grouping user endpoints in OpenAPI documentation
pub static USER_TAG: &str = "user";

/// Get all users.
///
/// Returns every user with their favorite planets and characters embedded.
/// The password column is never part of the serialization. An empty user
/// table is reported as 404 rather than an empty array.
///
/// # Arguments
/// - `state` - Application state containing the database connection
///
/// # Returns
/// - `200 OK` - List of users with embedded favorites
/// - `404 Not Found` - The user table is empty
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/users",
    tag = USER_TAG,
    responses(
        (status = 200, description = "Successfully retrieved users", body = Vec<UserDto>),
        (status = 404, description = "No users exist", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_all_users(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let service = UserService::new(&state.db);

    let users = service.get_all().await?;

    if users.is_empty() {
        return Err(AppError::NotFound("Users not found".to_string()));
    }

    Ok((
        StatusCode::OK,
        Json(users.into_iter().map(|u| u.into_dto()).collect::<Vec<_>>()),
    ))
}

/// Get the active user's favorites.
///
/// Returns the favorite planets and characters of the first user flagged
/// active.
///
/// # Arguments
/// - `state` - Application state containing the database connection
///
/// # Returns
/// - `200 OK` - The active user's favorites
/// - `404 Not Found` - No user is flagged active
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/users/favorites",
    tag = USER_TAG,
    responses(
        (status = 200, description = "Successfully retrieved favorites", body = UserFavoritesDto),
        (status = 404, description = "No active user", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_user_favorites(
    State(state): State<AppState>,
) -> Result<impl IntoResponse, AppError> {
    let service = UserService::new(&state.db);

    let favorites = service.get_active_user_favorites().await?;

    match favorites {
        Some(favorites) => Ok((StatusCode::OK, Json(favorites.into_dto()))),
        None => Err(AppError::NotFound("Active user not found".to_string())),
    }
}
