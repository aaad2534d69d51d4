//! HTTP routing and OpenAPI documentation configuration.
//!
//! This module defines the application's HTTP routes and generates OpenAPI documentation
//! using utoipa. All API endpoints are registered here with their OpenAPI specifications,
//! and Swagger UI is configured to provide interactive API documentation at `/docs`.

use axum::Router;
use tower_http::cors::CorsLayer;
use utoipa::OpenApi;
use utoipa_axum::{router::OpenApiRouter, routes};
use utoipa_swagger_ui::SwaggerUi;

use crate::server::{controller, state::AppState};

/// Builds the application's HTTP router with all API endpoints and Swagger UI documentation.
///
/// Constructs an Axum router with the catalog and favorites endpoints registered. Each
/// endpoint is annotated with OpenAPI specifications via utoipa, which are collected into
/// a unified OpenAPI document. The router includes Swagger UI at `/docs` for interactive
/// API exploration, and a permissive CORS layer so the API can be exercised from browsers.
///
/// # Registered Endpoints
/// - `GET /` - Machine-readable sitemap
/// - `GET /people` - List all people
/// - `GET /get_people/{people_id}` - Get a person by id
/// - `GET /planet` - List all planets
/// - `GET /get_planet/{planet_id}` - Get a planet by id
/// - `GET /users` - List all users with favorites
/// - `GET /users/favorites` - Get the active user's favorites
/// - `POST /favorite/planet/{planet_id}` - Add a planet to the active user's favorites
/// - `DELETE /favorite/planet/{planet_id}` - Remove a planet favorite from all active users
/// - `POST /favorite/character/{character_id}` - Add a character to the active user's favorites
/// - `DELETE /favorite/people/{people_id}` - Remove a character favorite from all active users
///
/// # Returns
/// An Axum `Router<AppState>` configured with all routes and middleware, ready to be
/// served once state is attached.
pub fn router() -> Router<AppState> {
    #[derive(OpenApi)]
    #[openapi(info(title = "Starchart", description = "Starchart API"), tags(
        (name = controller::sitemap::SITEMAP_TAG, description = "API route listing"),
        (name = controller::person::PEOPLE_TAG, description = "People catalog routes"),
        (name = controller::planet::PLANET_TAG, description = "Planet catalog routes"),
        (name = controller::user::USER_TAG, description = "User routes"),
        (name = controller::favorite::FAVORITE_TAG, description = "Favorite mutation routes"),
    ))]
    struct ApiDoc;

    let (routes, api) = OpenApiRouter::with_openapi(ApiDoc::openapi())
        .routes(routes!(controller::sitemap::get_sitemap))
        .routes(routes!(controller::person::get_all_people))
        .routes(routes!(controller::person::get_person_by_id))
        .routes(routes!(controller::planet::get_all_planets))
        .routes(routes!(controller::planet::get_planet_by_id))
        .routes(routes!(controller::user::get_all_users))
        .routes(routes!(controller::user::get_user_favorites))
        .routes(routes!(
            controller::favorite::add_favorite_planet,
            controller::favorite::remove_favorite_planet
        ))
        .routes(routes!(controller::favorite::add_favorite_character))
        .routes(routes!(controller::favorite::remove_favorite_character))
        .split_for_parts();

    routes
        .merge(SwaggerUi::new("/docs").url("/docs/openapi.json", api))
        .layer(CorsLayer::permissive())
}
