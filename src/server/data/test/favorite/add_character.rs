use sea_orm::{EntityTrait, PaginatorTrait};

use super::*;

/// Tests adding a new character favorite.
///
/// Expected: Ok(true) with exactly one association row
#[tokio::test]
async fn inserts_new_favorite() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_active_user(db).await?;
    let person = factory::create_person(db).await?;

    let repo = FavoriteRepository::new(db);
    let inserted = repo.add_character(user.id, person.id).await?;

    assert!(inserted);

    let count = entity::prelude::UserFavoriteCharacter::find()
        .count(db)
        .await?;
    assert_eq!(count, 1);

    Ok(())
}

/// Tests adding the same character favorite twice.
///
/// Expected: Ok(false) on the second add, row count still one
#[tokio::test]
async fn returns_false_on_duplicate() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_active_user(db).await?;
    let person = factory::create_person(db).await?;

    let repo = FavoriteRepository::new(db);

    assert!(repo.add_character(user.id, person.id).await?);
    assert!(!repo.add_character(user.id, person.id).await?);

    let count = entity::prelude::UserFavoriteCharacter::find()
        .count(db)
        .await?;
    assert_eq!(count, 1);

    Ok(())
}
