//! Favorites domain model.

use crate::server::model::{person::Person, planet::Planet};

/// The favorites held by the active user.
#[derive(Debug, Clone, PartialEq)]
pub struct UserFavorites {
    pub favorite_planets: Vec<Planet>,
    pub favorite_characters: Vec<Person>,
}

impl UserFavorites {
    /// Converts domain model to DTO for API responses.
    pub fn into_dto(self) -> crate::model::favorites::UserFavoritesDto {
        crate::model::favorites::UserFavoritesDto {
            favorite_planets: self
                .favorite_planets
                .into_iter()
                .map(|p| p.into_dto())
                .collect(),
            favorite_characters: self
                .favorite_characters
                .into_iter()
                .map(|c| c.into_dto())
                .collect(),
        }
    }
}
