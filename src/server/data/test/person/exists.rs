use super::*;

/// Tests the existence check for a present person.
///
/// Expected: Ok(true)
#[tokio::test]
async fn returns_true_for_existing_person() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Person)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let person = factory::create_person(db).await?;

    let repo = PersonRepository::new(db);

    assert!(repo.exists(person.id).await?);

    Ok(())
}

/// Tests the existence check for an absent person.
///
/// Expected: Ok(false)
#[tokio::test]
async fn returns_false_for_missing_person() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Person)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = PersonRepository::new(db);

    assert!(!repo.exists(42).await?);

    Ok(())
}
