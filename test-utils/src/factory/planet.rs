//! Planet factory for creating test planet entities.

use crate::factory::helpers::next_id;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test planets with customizable fields.
///
/// Provides a builder pattern for creating planet entities with default values
/// that can be overridden as needed for specific test scenarios.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::factory::planet::PlanetFactory;
///
/// let planet = PlanetFactory::new(&db)
///     .name("Tatooine")
///     .climate("arid")
///     .build()
///     .await?;
/// ```
pub struct PlanetFactory<'a> {
    db: &'a DatabaseConnection,
    name: String,
    climate: String,
    terrain: String,
    population: i32,
}

impl<'a> PlanetFactory<'a> {
    /// Creates a new PlanetFactory with default values.
    ///
    /// Defaults:
    /// - name: `"Planet {id}"` where id is auto-incremented
    /// - climate: `"temperate"`
    /// - terrain: `"grasslands"`
    /// - population: `2000000`
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        Self {
            db,
            name: format!("Planet {}", id),
            climate: "temperate".to_string(),
            terrain: "grasslands".to_string(),
            population: 2_000_000,
        }
    }

    /// Sets the name for the planet.
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Sets the climate for the planet.
    pub fn climate(mut self, climate: impl Into<String>) -> Self {
        self.climate = climate.into();
        self
    }

    /// Sets the terrain for the planet.
    pub fn terrain(mut self, terrain: impl Into<String>) -> Self {
        self.terrain = terrain.into();
        self
    }

    /// Sets the population for the planet.
    pub fn population(mut self, population: i32) -> Self {
        self.population = population;
        self
    }

    /// Builds and inserts the planet entity into the database.
    ///
    /// # Returns
    /// - `Ok(entity::planet::Model)` - Created planet entity
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::planet::Model, DbErr> {
        entity::planet::ActiveModel {
            name: ActiveValue::Set(self.name),
            climate: ActiveValue::Set(self.climate),
            terrain: ActiveValue::Set(self.terrain),
            population: ActiveValue::Set(self.population),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a planet with default values.
///
/// Shorthand for `PlanetFactory::new(db).build().await`.
pub async fn create_planet(db: &DatabaseConnection) -> Result<entity::planet::Model, DbErr> {
    PlanetFactory::new(db).build().await
}
