//! People data repository for database operations.

use sea_orm::{DatabaseConnection, DbErr, EntityTrait, PaginatorTrait, QueryOrder};

use crate::server::model::person::Person;

pub struct PersonRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> PersonRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Gets all people ordered by id.
    pub async fn get_all(&self) -> Result<Vec<Person>, DbErr> {
        let people = entity::prelude::Person::find()
            .order_by_asc(entity::person::Column::Id)
            .all(self.db)
            .await?;

        Ok(people.into_iter().map(Person::from_entity).collect())
    }

    /// Gets a person by id.
    pub async fn get_by_id(&self, id: i32) -> Result<Option<Person>, DbErr> {
        let person = entity::prelude::Person::find_by_id(id).one(self.db).await?;

        Ok(person.map(Person::from_entity))
    }

    /// Checks whether a person with the given id exists.
    pub async fn exists(&self, id: i32) -> Result<bool, DbErr> {
        let count = entity::prelude::Person::find_by_id(id)
            .count(self.db)
            .await?;

        Ok(count > 0)
    }
}
