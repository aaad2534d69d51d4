//! Person factory for creating test people entities.

use crate::factory::helpers::next_id;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test people with customizable fields.
///
/// Provides a builder pattern for creating person entities with default values
/// that can be overridden as needed for specific test scenarios.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::factory::person::PersonFactory;
///
/// let person = PersonFactory::new(&db)
///     .name("Luke Skywalker")
///     .birth_year("19BBY")
///     .build()
///     .await?;
/// ```
pub struct PersonFactory<'a> {
    db: &'a DatabaseConnection,
    name: String,
    birth_year: String,
    gender: String,
    height: i32,
    mass: i32,
}

impl<'a> PersonFactory<'a> {
    /// Creates a new PersonFactory with default values.
    ///
    /// Defaults:
    /// - name: `"Person {id}"` where id is auto-incremented
    /// - birth_year: `"19BBY"`
    /// - gender: `"male"`
    /// - height: `172`
    /// - mass: `77`
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        Self {
            db,
            name: format!("Person {}", id),
            birth_year: "19BBY".to_string(),
            gender: "male".to_string(),
            height: 172,
            mass: 77,
        }
    }

    /// Sets the name for the person.
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Sets the birth year for the person.
    pub fn birth_year(mut self, birth_year: impl Into<String>) -> Self {
        self.birth_year = birth_year.into();
        self
    }

    /// Sets the gender for the person.
    pub fn gender(mut self, gender: impl Into<String>) -> Self {
        self.gender = gender.into();
        self
    }

    /// Sets the height in centimeters for the person.
    pub fn height(mut self, height: i32) -> Self {
        self.height = height;
        self
    }

    /// Sets the mass in kilograms for the person.
    pub fn mass(mut self, mass: i32) -> Self {
        self.mass = mass;
        self
    }

    /// Builds and inserts the person entity into the database.
    ///
    /// # Returns
    /// - `Ok(entity::person::Model)` - Created person entity
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::person::Model, DbErr> {
        entity::person::ActiveModel {
            name: ActiveValue::Set(self.name),
            birth_year: ActiveValue::Set(self.birth_year),
            gender: ActiveValue::Set(self.gender),
            height: ActiveValue::Set(self.height),
            mass: ActiveValue::Set(self.mass),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a person with default values.
///
/// Shorthand for `PersonFactory::new(db).build().await`.
pub async fn create_person(db: &DatabaseConnection) -> Result<entity::person::Model, DbErr> {
    PersonFactory::new(db).build().await
}
