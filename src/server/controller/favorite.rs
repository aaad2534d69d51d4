use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    model::api::{ErrorDto, MessageDto},
    server::{error::AppError, service::favorite::FavoriteService, state::AppState},
};

/// Tag for grouping favorite endpoints in OpenAPI documentation
pub static FAVORITE_TAG: &str = "favorite";

/// Add a planet to the active user's favorites.
///
/// # Arguments
/// - `state` - Application state containing the database connection
/// - `planet_id` - Id of the planet to favorite
///
/// # Returns
/// - `200 OK` - Planet added to favorites
/// - `400 Bad Request` - No active user, or planet already in favorites
/// - `404 Not Found` - No planet with the given id
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    post,
    path = "/favorite/planet/{planet_id}",
    tag = FAVORITE_TAG,
    params(
        ("planet_id" = i32, Path, description = "Planet id")
    ),
    responses(
        (status = 200, description = "Planet added to favorites", body = MessageDto),
        (status = 400, description = "No active user or planet already in favorites", body = ErrorDto),
        (status = 404, description = "Planet not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn add_favorite_planet(
    State(state): State<AppState>,
    Path(planet_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let service = FavoriteService::new(&state.db);

    service.add_planet(planet_id).await?;

    Ok((
        StatusCode::OK,
        Json(MessageDto {
            message: "Planet added to favorites".to_string(),
        }),
    ))
}

/// Remove a planet from the favorites of every active user holding it.
///
/// Removal is not scoped to a single user: every user currently flagged
/// active loses the favorite.
///
/// # Arguments
/// - `state` - Application state containing the database connection
/// - `planet_id` - Id of the planet to remove from favorites
///
/// # Returns
/// - `200 OK` - Favorite removed (also when no active user held it)
/// - `404 Not Found` - No planet with the given id
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    delete,
    path = "/favorite/planet/{planet_id}",
    tag = FAVORITE_TAG,
    params(
        ("planet_id" = i32, Path, description = "Planet id")
    ),
    responses(
        (status = 200, description = "Planet removed from favorites", body = MessageDto),
        (status = 404, description = "Planet not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn remove_favorite_planet(
    State(state): State<AppState>,
    Path(planet_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let service = FavoriteService::new(&state.db);

    service.remove_planet(planet_id).await?;

    Ok((
        StatusCode::OK,
        Json(MessageDto {
            message: format!("Planet {} removed from favorites", planet_id),
        }),
    ))
}

/// Add a character to the active user's favorites.
///
/// # Arguments
/// - `state` - Application state containing the database connection
/// - `character_id` - Id of the person to favorite
///
/// # Returns
/// - `200 OK` - Character added to favorites
/// - `400 Bad Request` - No active user, or character already in favorites
/// - `404 Not Found` - No person with the given id
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    post,
    path = "/favorite/character/{character_id}",
    tag = FAVORITE_TAG,
    params(
        ("character_id" = i32, Path, description = "Person id")
    ),
    responses(
        (status = 200, description = "Character added to favorites", body = MessageDto),
        (status = 400, description = "No active user or character already in favorites", body = ErrorDto),
        (status = 404, description = "Character not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn add_favorite_character(
    State(state): State<AppState>,
    Path(character_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let service = FavoriteService::new(&state.db);

    service.add_character(character_id).await?;

    Ok((
        StatusCode::OK,
        Json(MessageDto {
            message: "Character added to favorites".to_string(),
        }),
    ))
}

/// Remove a character from the favorites of every active user holding them.
///
/// Removal is not scoped to a single user: every user currently flagged
/// active loses the favorite.
///
/// # Arguments
/// - `state` - Application state containing the database connection
/// - `people_id` - Id of the person to remove from favorites
///
/// # Returns
/// - `200 OK` - Favorite removed (also when no active user held it)
/// - `404 Not Found` - No person with the given id
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    delete,
    path = "/favorite/people/{people_id}",
    tag = FAVORITE_TAG,
    params(
        ("people_id" = i32, Path, description = "Person id")
    ),
    responses(
        (status = 200, description = "Character removed from favorites", body = MessageDto),
        (status = 404, description = "Character not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn remove_favorite_character(
    State(state): State<AppState>,
    Path(people_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let service = FavoriteService::new(&state.db);

    service.remove_character(people_id).await?;

    Ok((
        StatusCode::OK,
        Json(MessageDto {
            message: format!("Character {} removed from favorites", people_id),
        }),
    ))
}
