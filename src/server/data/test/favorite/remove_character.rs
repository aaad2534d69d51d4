use super::*;

/// Tests removing a character favorite held by several active users.
///
/// Expected: Ok(2) and only the inactive user's row remains
#[tokio::test]
async fn removes_from_all_active_users() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let first = factory::create_active_user(db).await?;
    let second = factory::create_active_user(db).await?;
    let inactive = factory::create_user(db).await?;
    let person = factory::create_person(db).await?;

    factory::create_favorite_character(db, first.id, person.id).await?;
    factory::create_favorite_character(db, second.id, person.id).await?;
    factory::create_favorite_character(db, inactive.id, person.id).await?;

    let repo = FavoriteRepository::new(db);
    let removed = repo.remove_character_from_active_users(person.id).await?;

    assert_eq!(removed, 2);
    assert!(repo.characters_for_user(first.id).await?.is_empty());
    assert!(repo.characters_for_user(second.id).await?.is_empty());
    assert_eq!(repo.characters_for_user(inactive.id).await?.len(), 1);

    Ok(())
}

/// Tests removing a character favorite nobody holds.
///
/// Expected: Ok(0)
#[tokio::test]
async fn returns_zero_when_no_active_user_holds_them() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    factory::create_active_user(db).await?;
    let person = factory::create_person(db).await?;

    let repo = FavoriteRepository::new(db);
    let removed = repo.remove_character_from_active_users(person.id).await?;

    assert_eq!(removed, 0);

    Ok(())
}
