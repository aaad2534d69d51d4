use sea_orm::DatabaseConnection;

use crate::server::{data::planet::PlanetRepository, error::AppError, model::planet::Planet};

pub struct PlanetService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> PlanetService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Gets all planets in the catalog.
    pub async fn get_all(&self) -> Result<Vec<Planet>, AppError> {
        let repo = PlanetRepository::new(self.db);

        let planets = repo.get_all().await?;

        Ok(planets)
    }

    /// Gets a specific planet by id.
    pub async fn get_by_id(&self, id: i32) -> Result<Option<Planet>, AppError> {
        let repo = PlanetRepository::new(self.db);

        let planet = repo.get_by_id(id).await?;

        Ok(planet)
    }
}
