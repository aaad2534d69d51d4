use super::*;

/// Tests removing a planet favorite held by several active users.
///
/// Removal applies to every active user holding the favorite, while an
/// inactive user's association is left untouched.
///
/// Expected: Ok(2) and only the inactive user's row remains
#[tokio::test]
async fn removes_from_all_active_users() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let first = factory::create_active_user(db).await?;
    let second = factory::create_active_user(db).await?;
    let inactive = factory::create_user(db).await?;
    let planet = factory::create_planet(db).await?;

    factory::create_favorite_planet(db, first.id, planet.id).await?;
    factory::create_favorite_planet(db, second.id, planet.id).await?;
    factory::create_favorite_planet(db, inactive.id, planet.id).await?;

    let repo = FavoriteRepository::new(db);
    let removed = repo.remove_planet_from_active_users(planet.id).await?;

    assert_eq!(removed, 2);
    assert!(repo.planets_for_user(first.id).await?.is_empty());
    assert!(repo.planets_for_user(second.id).await?.is_empty());
    assert_eq!(repo.planets_for_user(inactive.id).await?.len(), 1);

    Ok(())
}

/// Tests removing a planet favorite nobody holds.
///
/// Expected: Ok(0)
#[tokio::test]
async fn returns_zero_when_no_active_user_holds_it() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    factory::create_active_user(db).await?;
    let planet = factory::create_planet(db).await?;

    let repo = FavoriteRepository::new(db);
    let removed = repo.remove_planet_from_active_users(planet.id).await?;

    assert_eq!(removed, 0);

    Ok(())
}

/// Tests that removal only touches the targeted planet.
///
/// Expected: Ok(1) and the other favorite remains
#[tokio::test]
async fn leaves_other_planets_untouched() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_active_user(db).await?;
    let removed_planet = factory::create_planet(db).await?;
    let kept_planet = factory::create_planet(db).await?;

    factory::create_favorite_planet(db, user.id, removed_planet.id).await?;
    factory::create_favorite_planet(db, user.id, kept_planet.id).await?;

    let repo = FavoriteRepository::new(db);
    let removed = repo
        .remove_planet_from_active_users(removed_planet.id)
        .await?;

    assert_eq!(removed, 1);
    let remaining = repo.planets_for_user(user.id).await?;
    assert_eq!(remaining.len(), 1);
    assert_eq!(remaining[0].id, kept_planet.id);

    Ok(())
}
