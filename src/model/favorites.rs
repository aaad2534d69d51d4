use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::model::{person::PersonDto, planet::PlanetDto};

/// The active user's favorites as returned by `GET /users/favorites`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct UserFavoritesDto {
    pub favorite_planets: Vec<PlanetDto>,
    pub favorite_characters: Vec<PersonDto>,
}
