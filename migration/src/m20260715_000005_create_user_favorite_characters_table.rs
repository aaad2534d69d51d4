use sea_orm_migration::{prelude::*, schema::*};

use super::m20260715_000001_create_people_table::People;
use super::m20260715_000003_create_user_table::User;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(UserFavoriteCharacters::Table)
                    .if_not_exists()
                    .col(integer(UserFavoriteCharacters::UserId))
                    .col(integer(UserFavoriteCharacters::PeopleId))
                    .primary_key(
                        Index::create()
                            .name("pk_user_favorite_characters")
                            .col(UserFavoriteCharacters::UserId)
                            .col(UserFavoriteCharacters::PeopleId),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_user_favorite_characters_user_id")
                            .from(UserFavoriteCharacters::Table, UserFavoriteCharacters::UserId)
                            .to(User::Table, User::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_user_favorite_characters_people_id")
                            .from(
                                UserFavoriteCharacters::Table,
                                UserFavoriteCharacters::PeopleId,
                            )
                            .to(People::Table, People::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(UserFavoriteCharacters::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum UserFavoriteCharacters {
    Table,
    UserId,
    PeopleId,
}
