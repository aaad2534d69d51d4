//! Planet data repository for database operations.

use sea_orm::{DatabaseConnection, DbErr, EntityTrait, PaginatorTrait, QueryOrder};

use crate::server::model::planet::Planet;

pub struct PlanetRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> PlanetRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Gets all planets ordered by id.
    pub async fn get_all(&self) -> Result<Vec<Planet>, DbErr> {
        let planets = entity::prelude::Planet::find()
            .order_by_asc(entity::planet::Column::Id)
            .all(self.db)
            .await?;

        Ok(planets.into_iter().map(Planet::from_entity).collect())
    }

    /// Gets a planet by id.
    pub async fn get_by_id(&self, id: i32) -> Result<Option<Planet>, DbErr> {
        let planet = entity::prelude::Planet::find_by_id(id).one(self.db).await?;

        Ok(planet.map(Planet::from_entity))
    }

    /// Checks whether a planet with the given id exists.
    pub async fn exists(&self, id: i32) -> Result<bool, DbErr> {
        let count = entity::prelude::Planet::find_by_id(id)
            .count(self.db)
            .await?;

        Ok(count > 0)
    }
}
