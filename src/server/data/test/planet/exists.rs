use super::*;

/// Tests the existence check for a present planet.
///
/// Expected: Ok(true)
#[tokio::test]
async fn returns_true_for_existing_planet() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Planet)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let planet = factory::create_planet(db).await?;

    let repo = PlanetRepository::new(db);

    assert!(repo.exists(planet.id).await?);

    Ok(())
}

/// Tests the existence check for an absent planet.
///
/// Expected: Ok(false)
#[tokio::test]
async fn returns_false_for_missing_planet() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Planet)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = PlanetRepository::new(db);

    assert!(!repo.exists(42).await?);

    Ok(())
}
