//! Planet domain model.

/// A planet from the catalog.
#[derive(Debug, Clone, PartialEq)]
pub struct Planet {
    pub id: i32,
    pub name: String,
    pub climate: String,
    pub terrain: String,
    pub population: i32,
}

impl Planet {
    /// Converts an entity model to a domain model at the repository boundary.
    pub fn from_entity(entity: entity::planet::Model) -> Self {
        Self {
            id: entity.id,
            name: entity.name,
            climate: entity.climate,
            terrain: entity.terrain,
            population: entity.population,
        }
    }

    /// Converts domain model to DTO for API responses.
    pub fn into_dto(self) -> crate::model::planet::PlanetDto {
        crate::model::planet::PlanetDto {
            id: self.id,
            name: self.name,
            climate: self.climate,
            terrain: self.terrain,
            population: self.population,
        }
    }
}
