//! User data repository for database operations.
//!
//! Entity models are converted to domain models at this boundary, which also
//! strips the password column from everything that leaves the data layer.

use sea_orm::{ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter, QueryOrder};

use crate::server::model::user::User;

pub struct UserRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> UserRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Gets all users ordered by id.
    pub async fn get_all(&self) -> Result<Vec<User>, DbErr> {
        let users = entity::prelude::User::find()
            .order_by_asc(entity::user::Column::Id)
            .all(self.db)
            .await?;

        Ok(users.into_iter().map(User::from_entity).collect())
    }

    /// Finds the first user flagged as active.
    ///
    /// The schema does not constrain how many users may be active at once;
    /// ordering by id makes "first" deterministic.
    pub async fn find_active(&self) -> Result<Option<User>, DbErr> {
        let user = entity::prelude::User::find()
            .filter(entity::user::Column::IsActive.eq(true))
            .order_by_asc(entity::user::Column::Id)
            .one(self.db)
            .await?;

        Ok(user.map(User::from_entity))
    }
}
