use sea_orm_migration::{prelude::*, schema::*};

use super::m20260715_000002_create_planet_table::Planet;
use super::m20260715_000003_create_user_table::User;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(UserFavoritePlanets::Table)
                    .if_not_exists()
                    .col(integer(UserFavoritePlanets::UserId))
                    .col(integer(UserFavoritePlanets::PlanetId))
                    // Composite primary key doubles as the uniqueness
                    // constraint for concurrent duplicate inserts.
                    .primary_key(
                        Index::create()
                            .name("pk_user_favorite_planets")
                            .col(UserFavoritePlanets::UserId)
                            .col(UserFavoritePlanets::PlanetId),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_user_favorite_planets_user_id")
                            .from(UserFavoritePlanets::Table, UserFavoritePlanets::UserId)
                            .to(User::Table, User::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_user_favorite_planets_planet_id")
                            .from(UserFavoritePlanets::Table, UserFavoritePlanets::PlanetId)
                            .to(Planet::Table, Planet::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(UserFavoritePlanets::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum UserFavoritePlanets {
    Table,
    UserId,
    PlanetId,
}
