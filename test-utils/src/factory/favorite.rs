//! Factories for creating user-favorite association rows.

use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Creates a user-favorite-planet association row.
///
/// The referenced user and planet must already exist; use the `user` and
/// `planet` factories to create them first.
///
/// # Arguments
/// - `db` - Database connection
/// - `user_id` - Id of an existing user
/// - `planet_id` - Id of an existing planet
///
/// # Returns
/// - `Ok(entity::user_favorite_planet::Model)` - Created association row
/// - `Err(DbErr)` - Database error during insert
pub async fn create_favorite_planet(
    db: &DatabaseConnection,
    user_id: i32,
    planet_id: i32,
) -> Result<entity::user_favorite_planet::Model, DbErr> {
    entity::user_favorite_planet::ActiveModel {
        user_id: ActiveValue::Set(user_id),
        planet_id: ActiveValue::Set(planet_id),
    }
    .insert(db)
    .await
}

/// Creates a user-favorite-character association row.
///
/// The referenced user and person must already exist; use the `user` and
/// `person` factories to create them first.
///
/// # Arguments
/// - `db` - Database connection
/// - `user_id` - Id of an existing user
/// - `people_id` - Id of an existing person
///
/// # Returns
/// - `Ok(entity::user_favorite_character::Model)` - Created association row
/// - `Err(DbErr)` - Database error during insert
pub async fn create_favorite_character(
    db: &DatabaseConnection,
    user_id: i32,
    people_id: i32,
) -> Result<entity::user_favorite_character::Model, DbErr> {
    entity::user_favorite_character::ActiveModel {
        user_id: ActiveValue::Set(user_id),
        people_id: ActiveValue::Set(people_id),
    }
    .insert(db)
    .await
}
