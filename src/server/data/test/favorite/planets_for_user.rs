use super::*;

/// Tests listing favorite planets for a user with none.
///
/// Expected: Ok with an empty vector
#[tokio::test]
async fn returns_empty_without_favorites() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_active_user(db).await?;
    factory::create_planet(db).await?;

    let repo = FavoriteRepository::new(db);
    let planets = repo.planets_for_user(user.id).await?;

    assert!(planets.is_empty());

    Ok(())
}

/// Tests listing favorite planets scoped to one user.
///
/// Another user's favorites must not leak into the result.
///
/// Expected: Ok with only the user's own favorites, in id order
#[tokio::test]
async fn returns_only_the_users_favorites() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_active_user(db).await?;
    let other = factory::create_user(db).await?;
    let first = factory::create_planet(db).await?;
    let second = factory::create_planet(db).await?;
    let theirs = factory::create_planet(db).await?;

    factory::create_favorite_planet(db, user.id, first.id).await?;
    factory::create_favorite_planet(db, user.id, second.id).await?;
    factory::create_favorite_planet(db, other.id, theirs.id).await?;

    let repo = FavoriteRepository::new(db);
    let planets = repo.planets_for_user(user.id).await?;

    assert_eq!(planets.len(), 2);
    assert_eq!(planets[0].id, first.id);
    assert_eq!(planets[1].id, second.id);

    Ok(())
}
