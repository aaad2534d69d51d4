pub use sea_orm_migration::prelude::*;

mod m20260715_000001_create_people_table;
mod m20260715_000002_create_planet_table;
mod m20260715_000003_create_user_table;
mod m20260715_000004_create_user_favorite_planets_table;
mod m20260715_000005_create_user_favorite_characters_table;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20260715_000001_create_people_table::Migration),
            Box::new(m20260715_000002_create_planet_table::Migration),
            Box::new(m20260715_000003_create_user_table::Migration),
            Box::new(m20260715_000004_create_user_favorite_planets_table::Migration),
            Box::new(m20260715_000005_create_user_favorite_characters_table::Migration),
        ]
    }
}
