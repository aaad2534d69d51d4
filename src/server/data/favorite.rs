//! Favorites data repository for the user-planet and user-people association tables.
//!
//! Adds rely on the composite primary keys of the association tables: the
//! insert carries `ON CONFLICT DO NOTHING`, so duplicate detection is atomic
//! and concurrent adds of the same pair can never produce two rows.

use migration::OnConflict;
use sea_orm::{
    ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait, JoinType, QueryFilter,
    QueryOrder, QuerySelect, RelationTrait,
};

use crate::server::model::{person::Person, planet::Planet};

pub struct FavoriteRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> FavoriteRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Gets the planets a user has favorited, via a join through the association table.
    pub async fn planets_for_user(&self, user_id: i32) -> Result<Vec<Planet>, DbErr> {
        let planets = entity::prelude::Planet::find()
            .join(
                JoinType::InnerJoin,
                entity::planet::Relation::UserFavoritePlanet.def(),
            )
            .filter(entity::user_favorite_planet::Column::UserId.eq(user_id))
            .order_by_asc(entity::planet::Column::Id)
            .all(self.db)
            .await?;

        Ok(planets.into_iter().map(Planet::from_entity).collect())
    }

    /// Gets the people a user has favorited, via a join through the association table.
    pub async fn characters_for_user(&self, user_id: i32) -> Result<Vec<Person>, DbErr> {
        let people = entity::prelude::Person::find()
            .join(
                JoinType::InnerJoin,
                entity::person::Relation::UserFavoriteCharacter.def(),
            )
            .filter(entity::user_favorite_character::Column::UserId.eq(user_id))
            .order_by_asc(entity::person::Column::Id)
            .all(self.db)
            .await?;

        Ok(people.into_iter().map(Person::from_entity).collect())
    }

    /// Adds a planet to a user's favorites.
    ///
    /// Returns `Ok(false)` when the pair already exists; the conflict check is
    /// part of the insert itself, not a separate query.
    pub async fn add_planet(&self, user_id: i32, planet_id: i32) -> Result<bool, DbErr> {
        let rows = entity::prelude::UserFavoritePlanet::insert(
            entity::user_favorite_planet::ActiveModel {
                user_id: ActiveValue::Set(user_id),
                planet_id: ActiveValue::Set(planet_id),
            },
        )
        .on_conflict(
            OnConflict::columns([
                entity::user_favorite_planet::Column::UserId,
                entity::user_favorite_planet::Column::PlanetId,
            ])
            .do_nothing()
            .to_owned(),
        )
        .exec_without_returning(self.db)
        .await?;

        Ok(rows > 0)
    }

    /// Adds a person to a user's favorite characters.
    ///
    /// Returns `Ok(false)` when the pair already exists.
    pub async fn add_character(&self, user_id: i32, people_id: i32) -> Result<bool, DbErr> {
        let rows = entity::prelude::UserFavoriteCharacter::insert(
            entity::user_favorite_character::ActiveModel {
                user_id: ActiveValue::Set(user_id),
                people_id: ActiveValue::Set(people_id),
            },
        )
        .on_conflict(
            OnConflict::columns([
                entity::user_favorite_character::Column::UserId,
                entity::user_favorite_character::Column::PeopleId,
            ])
            .do_nothing()
            .to_owned(),
        )
        .exec_without_returning(self.db)
        .await?;

        Ok(rows > 0)
    }

    /// Removes a planet from the favorites of every active user holding it.
    ///
    /// Returns the number of association rows deleted.
    pub async fn remove_planet_from_active_users(&self, planet_id: i32) -> Result<u64, DbErr> {
        let active_user_ids = self.active_user_ids().await?;

        let result = entity::prelude::UserFavoritePlanet::delete_many()
            .filter(entity::user_favorite_planet::Column::PlanetId.eq(planet_id))
            .filter(entity::user_favorite_planet::Column::UserId.is_in(active_user_ids))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected)
    }

    /// Removes a person from the favorite characters of every active user holding them.
    ///
    /// Returns the number of association rows deleted.
    pub async fn remove_character_from_active_users(&self, people_id: i32) -> Result<u64, DbErr> {
        let active_user_ids = self.active_user_ids().await?;

        let result = entity::prelude::UserFavoriteCharacter::delete_many()
            .filter(entity::user_favorite_character::Column::PeopleId.eq(people_id))
            .filter(entity::user_favorite_character::Column::UserId.is_in(active_user_ids))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected)
    }

    /// Ids of all users currently flagged active.
    async fn active_user_ids(&self) -> Result<Vec<i32>, DbErr> {
        let ids = entity::prelude::User::find()
            .select_only()
            .column(entity::user::Column::Id)
            .filter(entity::user::Column::IsActive.eq(true))
            .into_tuple::<i32>()
            .all(self.db)
            .await?;

        Ok(ids)
    }
}
