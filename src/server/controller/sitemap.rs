use axum::{http::StatusCode, response::IntoResponse, Json};

use crate::model::api::RouteDto;

/// Tag for grouping the sitemap endpoint in OpenAPI documentation
pub static SITEMAP_TAG: &str = "sitemap";

/// Routes listed by the sitemap, as (method, path) pairs.
pub const ROUTES: &[(&str, &str)] = &[
    ("GET", "/people"),
    ("GET", "/get_people/{people_id}"),
    ("GET", "/planet"),
    ("GET", "/get_planet/{planet_id}"),
    ("GET", "/users"),
    ("GET", "/users/favorites"),
    ("POST", "/favorite/planet/{planet_id}"),
    ("DELETE", "/favorite/planet/{planet_id}"),
    ("POST", "/favorite/character/{character_id}"),
    ("DELETE", "/favorite/people/{people_id}"),
];

/// Get a machine-readable sitemap of the API.
///
/// Returns every route as a (method, path) descriptor. The full OpenAPI
/// document is served separately at `/docs/openapi.json`.
///
/// # Returns
/// - `200 OK` - List of route descriptors
#[utoipa::path(
    get,
    path = "/",
    tag = SITEMAP_TAG,
    responses(
        (status = 200, description = "Successfully retrieved sitemap", body = Vec<RouteDto>),
    ),
)]
pub async fn get_sitemap() -> impl IntoResponse {
    let routes: Vec<RouteDto> = ROUTES
        .iter()
        .map(|(method, path)| RouteDto {
            method: method.to_string(),
            path: path.to_string(),
        })
        .collect();

    (StatusCode::OK, Json(routes))
}
