//! User domain models.
//!
//! The conversion from the entity model drops the password column; no domain
//! or DTO type ever carries it.

use crate::server::model::{person::Person, planet::Planet};

/// A user account without relationship data.
#[derive(Debug, Clone, PartialEq)]
pub struct User {
    pub id: i32,
    pub username: String,
    pub email: String,
    pub is_active: bool,
}

impl User {
    /// Converts an entity model to a domain model at the repository boundary.
    ///
    /// The entity's password field is discarded here.
    pub fn from_entity(entity: entity::user::Model) -> Self {
        Self {
            id: entity.id,
            username: entity.username,
            email: entity.email,
            is_active: entity.is_active,
        }
    }
}

/// A user together with their favorite planets and characters.
///
/// Used for the full user serialization where favorites are embedded.
#[derive(Debug, Clone, PartialEq)]
pub struct UserWithFavorites {
    pub user: User,
    pub favorite_planets: Vec<Planet>,
    pub favorite_characters: Vec<Person>,
}

impl UserWithFavorites {
    /// Converts domain model to DTO for API responses.
    pub fn into_dto(self) -> crate::model::user::UserDto {
        crate::model::user::UserDto {
            id: self.user.id,
            username: self.user.username,
            email: self.user.email,
            is_active: self.user.is_active,
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
