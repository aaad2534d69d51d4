use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::model::{person::PersonDto, planet::PlanetDto};

/// Serialized user with embedded favorites.
///
/// The password column is deliberately absent; it never leaves the data layer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct UserDto {
    pub id: i32,
    pub username: String,
    pub email: String,
    pub is_active: bool,
    pub favorite_planets: Vec<PlanetDto>,
    pub favorite_characters: Vec<PersonDto>,
}
