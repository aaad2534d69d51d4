//! Person domain model.

/// A person from the catalog.
#[derive(Debug, Clone, PartialEq)]
pub struct Person {
    pub id: i32,
    pub name: String,
    pub birth_year: String,
    pub gender: String,
    /// Height in centimeters.
    pub height: i32,
    /// Mass in kilograms.
    pub mass: i32,
}

impl Person {
    /// Converts an entity model to a domain model at the repository boundary.
    pub fn from_entity(entity: entity::person::Model) -> Self {
        Self {
            id: entity.id,
            name: entity.name,
            birth_year: entity.birth_year,
            gender: entity.gender,
            height: entity.height,
            mass: entity.mass,
        }
    }

    /// Converts domain model to DTO for API responses.
    pub fn into_dto(self) -> crate::model::person::PersonDto {
        crate::model::person::PersonDto {
            id: self.id,
            name: self.name,
            birth_year: self.birth_year,
            gender: self.gender,
            height: self.height,
            mass: self.mass,
        }
    }
}
