use sea_orm::{EntityTrait, PaginatorTrait};

use super::*;

/// Tests adding a new planet favorite.
///
/// Expected: Ok(true) with exactly one association row
#[tokio::test]
async fn inserts_new_favorite() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_active_user(db).await?;
    let planet = factory::create_planet(db).await?;

    let repo = FavoriteRepository::new(db);
    let inserted = repo.add_planet(user.id, planet.id).await?;

    assert!(inserted);

    let count = entity::prelude::UserFavoritePlanet::find().count(db).await?;
    assert_eq!(count, 1);

    Ok(())
}

/// Tests adding the same planet favorite twice.
///
/// The composite primary key makes the second insert a no-op, so duplicate
/// adds can never produce two rows no matter how they interleave.
///
/// Expected: Ok(false) on the second add, row count still one
#[tokio::test]
async fn returns_false_on_duplicate() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_active_user(db).await?;
    let planet = factory::create_planet(db).await?;

    let repo = FavoriteRepository::new(db);

    assert!(repo.add_planet(user.id, planet.id).await?);
    assert!(!repo.add_planet(user.id, planet.id).await?);

    let count = entity::prelude::UserFavoritePlanet::find().count(db).await?;
    assert_eq!(count, 1);

    Ok(())
}

/// Tests that the same planet can be favorited by different users.
///
/// Expected: Ok(true) for both users
#[tokio::test]
async fn allows_same_planet_for_different_users() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let first = factory::create_active_user(db).await?;
    let second = factory::create_active_user(db).await?;
    let planet = factory::create_planet(db).await?;

    let repo = FavoriteRepository::new(db);

    assert!(repo.add_planet(first.id, planet.id).await?);
    assert!(repo.add_planet(second.id, planet.id).await?);

    Ok(())
}
