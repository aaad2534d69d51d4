use super::*;

/// Tests the active-user lookup with no users present.
///
/// Expected: Ok with None
#[tokio::test]
async fn returns_none_when_no_users() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = UserRepository::new(db);
    let result = repo.find_active().await?;

    assert!(result.is_none());

    Ok(())
}

/// Tests the active-user lookup when only inactive users exist.
///
/// Expected: Ok with None
#[tokio::test]
async fn ignores_inactive_users() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::create_user(db).await?;

    let repo = UserRepository::new(db);
    let result = repo.find_active().await?;

    assert!(result.is_none());

    Ok(())
}

/// Tests the active-user lookup with one active user.
///
/// Expected: Ok with the active user
#[tokio::test]
async fn returns_active_user() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::create_user(db).await?;
    let active = factory::create_active_user(db).await?;

    let repo = UserRepository::new(db);
    let result = repo.find_active().await?;

    assert!(result.is_some());
    assert_eq!(result.unwrap().id, active.id);

    Ok(())
}

/// Tests the active-user lookup with several active users.
///
/// The schema does not constrain the number of active users; the lookup
/// must deterministically return the one with the lowest id.
///
/// Expected: Ok with the first active user by id
#[tokio::test]
async fn returns_first_active_user_by_id() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let first = factory::create_active_user(db).await?;
    factory::create_active_user(db).await?;

    let repo = UserRepository::new(db);
    let result = repo.find_active().await?;

    assert_eq!(result.unwrap().id, first.id);

    Ok(())
}
