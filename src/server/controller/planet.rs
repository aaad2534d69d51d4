use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    model::{api::ErrorDto, planet::PlanetDto},
    server::{error::AppError, service::planet::PlanetService, state::AppState},
};

/// Tag for grouping planet endpoints in OpenAPI documentation
pub static PLANET_TAG: &str = "planet";

/// Get all planets.
///
/// Returns every planet in the catalog. An empty catalog is reported as
/// 404 rather than an empty array.
///
/// # Arguments
/// - `state` - Application state containing the database connection
///
/// # Returns
/// - `200 OK` - List of planets
/// - `404 Not Found` - The planet table is empty
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/planet",
    tag = PLANET_TAG,
    responses(
        (status = 200, description = "Successfully retrieved planets", body = Vec<PlanetDto>),
        (status = 404, description = "No planets exist", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_all_planets(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let service = PlanetService::new(&state.db);

    let planets = service.get_all().await?;

    if planets.is_empty() {
        return Err(AppError::NotFound("Planets not found".to_string()));
    }

    Ok((
        StatusCode::OK,
        Json(
            planets
                .into_iter()
                .map(|p| p.into_dto())
                .collect::<Vec<_>>(),
        ),
    ))
}

/// Get a specific planet by id.
///
/// # Arguments
/// - `state` - Application state containing the database connection
/// - `planet_id` - Id of the planet to fetch
///
/// # Returns
/// - `200 OK` - Planet details
/// - `404 Not Found` - No planet with the given id
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/get_planet/{planet_id}",
    tag = PLANET_TAG,
    params(
        ("planet_id" = i32, Path, description = "Planet id")
    ),
    responses(
        (status = 200, description = "Successfully retrieved planet", body = PlanetDto),
        (status = 404, description = "Planet not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_planet_by_id(
    State(state): State<AppState>,
    Path(planet_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let service = PlanetService::new(&state.db);

    let planet = service.get_by_id(planet_id).await?;

    match planet {
        Some(planet) => Ok((StatusCode::OK, Json(planet.into_dto()))),
        None => Err(AppError::NotFound("Planet not found".to_string())),
    }
}
