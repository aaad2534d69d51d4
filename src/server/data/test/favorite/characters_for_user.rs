use super::*;

/// Tests listing favorite characters for a user with none.
///
/// Expected: Ok with an empty vector
#[tokio::test]
async fn returns_empty_without_favorites() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_active_user(db).await?;
    factory::create_person(db).await?;

    let repo = FavoriteRepository::new(db);
    let people = repo.characters_for_user(user.id).await?;

    assert!(people.is_empty());

    Ok(())
}

/// Tests listing favorite characters scoped to one user.
///
/// Expected: Ok with only the user's own favorites
#[tokio::test]
async fn returns_only_the_users_favorites() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_active_user(db).await?;
    let other = factory::create_user(db).await?;
    let mine = factory::create_person(db).await?;
    let theirs = factory::create_person(db).await?;

    factory::create_favorite_character(db, user.id, mine.id).await?;
    factory::create_favorite_character(db, other.id, theirs.id).await?;

    let repo = FavoriteRepository::new(db);
    let people = repo.characters_for_user(user.id).await?;

    assert_eq!(people.len(), 1);
    assert_eq!(people[0].id, mine.id);

    Ok(())
}
