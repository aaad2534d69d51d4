use super::*;

/// Tests listing users from an empty table.
///
/// Expected: Ok with an empty vector
#[tokio::test]
async fn returns_empty_when_no_users() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = UserRepository::new(db);
    let result = repo.get_all().await;

    assert!(result.is_ok());
    assert!(result.unwrap().is_empty());

    Ok(())
}

/// Tests listing all users.
///
/// Verifies that the domain model carries the account fields; the password
/// column never crosses the repository boundary.
///
/// Expected: Ok with all users in id order
#[tokio::test]
async fn returns_all_users_in_id_order() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let first = factory::user::UserFactory::new(db)
        .username("luke")
        .email("luke@rebellion.example")
        .is_active(true)
        .build()
        .await?;
    let second = factory::create_user(db).await?;

    let repo = UserRepository::new(db);
    let users = repo.get_all().await?;

    assert_eq!(users.len(), 2);
    assert_eq!(users[0].id, first.id);
    assert_eq!(users[0].username, "luke");
    assert_eq!(users[0].email, "luke@rebellion.example");
    assert!(users[0].is_active);
    assert_eq!(users[1].id, second.id);

    Ok(())
}
