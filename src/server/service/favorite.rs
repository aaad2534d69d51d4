//! Favorite mutation logic.
//!
//! Adds are scoped to the single active user; removals apply to every active
//! user holding the favorite. The asymmetry is inherited from the product
//! behavior and covered by tests.

use sea_orm::DatabaseConnection;

use crate::server::{
    data::{
        favorite::FavoriteRepository, person::PersonRepository, planet::PlanetRepository,
        user::UserRepository,
    },
    error::AppError,
};

pub struct FavoriteService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> FavoriteService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Adds a planet to the active user's favorites.
    ///
    /// # Errors
    /// - `PreconditionFailed` - No user is flagged active
    /// - `NotFound` - No planet with the given id exists
    /// - `Conflict` - The planet is already among the user's favorites
    pub async fn add_planet(&self, planet_id: i32) -> Result<(), AppError> {
        let user = UserRepository::new(self.db)
            .find_active()
            .await?
            .ok_or_else(|| AppError::PreconditionFailed("No active user found".to_string()))?;

        if !PlanetRepository::new(self.db).exists(planet_id).await? {
            return Err(AppError::NotFound("Planet not found".to_string()));
        }

        let inserted = FavoriteRepository::new(self.db)
            .add_planet(user.id, planet_id)
            .await?;

        if !inserted {
            return Err(AppError::Conflict(
                "Planet already in favorites".to_string(),
            ));
        }

        Ok(())
    }

    /// Adds a character to the active user's favorites.
    ///
    /// # Errors
    /// - `PreconditionFailed` - No user is flagged active
    /// - `NotFound` - No person with the given id exists
    /// - `Conflict` - The character is already among the user's favorites
    pub async fn add_character(&self, people_id: i32) -> Result<(), AppError> {
        let user = UserRepository::new(self.db)
            .find_active()
            .await?
            .ok_or_else(|| AppError::PreconditionFailed("No active user found".to_string()))?;

        if !PersonRepository::new(self.db).exists(people_id).await? {
            return Err(AppError::NotFound("Character not found".to_string()));
        }

        let inserted = FavoriteRepository::new(self.db)
            .add_character(user.id, people_id)
            .await?;

        if !inserted {
            return Err(AppError::Conflict(
                "Character already in favorites".to_string(),
            ));
        }

        Ok(())
    }

    /// Removes a planet from the favorites of every active user holding it.
    ///
    /// Succeeds even when no active user held the favorite.
    ///
    /// # Errors
    /// - `NotFound` - No planet with the given id exists
    pub async fn remove_planet(&self, planet_id: i32) -> Result<(), AppError> {
        if !PlanetRepository::new(self.db).exists(planet_id).await? {
            return Err(AppError::NotFound("Planet not found".to_string()));
        }

        FavoriteRepository::new(self.db)
            .remove_planet_from_active_users(planet_id)
            .await?;

        Ok(())
    }

    /// Removes a character from the favorites of every active user holding them.
    ///
    /// Succeeds even when no active user held the favorite.
    ///
    /// # Errors
    /// - `NotFound` - No person with the given id exists
    pub async fn remove_character(&self, people_id: i32) -> Result<(), AppError> {
        if !PersonRepository::new(self.db).exists(people_id).await? {
            return Err(AppError::NotFound("Character not found".to_string()));
        }

        FavoriteRepository::new(self.db)
            .remove_character_from_active_users(people_id)
            .await?;

        Ok(())
    }
}
