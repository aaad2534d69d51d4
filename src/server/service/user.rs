use sea_orm::DatabaseConnection;

use crate::server::{
    data::{favorite::FavoriteRepository, user::UserRepository},
    error::AppError,
    model::{favorites::UserFavorites, user::UserWithFavorites},
};

pub struct UserService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> UserService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Gets all users with their favorites embedded.
    pub async fn get_all(&self) -> Result<Vec<UserWithFavorites>, AppError> {
        let user_repo = UserRepository::new(self.db);
        let favorite_repo = FavoriteRepository::new(self.db);

        let users = user_repo.get_all().await?;

        let mut results = Vec::new();
        for user in users {
            let favorite_planets = favorite_repo.planets_for_user(user.id).await?;
            let favorite_characters = favorite_repo.characters_for_user(user.id).await?;

            results.push(UserWithFavorites {
                user,
                favorite_planets,
                favorite_characters,
            });
        }

        Ok(results)
    }

    /// Gets the favorites of the active user.
    ///
    /// Returns `None` when no user is flagged active.
    pub async fn get_active_user_favorites(&self) -> Result<Option<UserFavorites>, AppError> {
        let user_repo = UserRepository::new(self.db);
        let favorite_repo = FavoriteRepository::new(self.db);

        let user = match user_repo.find_active().await? {
            Some(user) => user,
            None => return Ok(None),
        };

        let favorite_planets = favorite_repo.planets_for_user(user.id).await?;
        let favorite_characters = favorite_repo.characters_for_user(user.id).await?;

        Ok(Some(UserFavorites {
            favorite_planets,
            favorite_characters,
        }))
    }
}
