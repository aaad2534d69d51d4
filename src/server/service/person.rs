use sea_orm::DatabaseConnection;

use crate::server::{data::person::PersonRepository, error::AppError, model::person::Person};

pub struct PersonService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> PersonService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Gets all people in the catalog.
    pub async fn get_all(&self) -> Result<Vec<Person>, AppError> {
        let repo = PersonRepository::new(self.db);

        let people = repo.get_all().await?;

        Ok(people)
    }

    /// Gets a specific person by id.
    pub async fn get_by_id(&self, id: i32) -> Result<Option<Person>, AppError> {
        let repo = PersonRepository::new(self.db);

        let person = repo.get_by_id(id).await?;

        Ok(person)
    }
}
