use super::*;

/// Tests listing planets from an empty table.
///
/// Expected: Ok with an empty vector
#[tokio::test]
async fn returns_empty_when_no_planets() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Planet)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = PlanetRepository::new(db);
    let result = repo.get_all().await;

    assert!(result.is_ok());
    assert!(result.unwrap().is_empty());

    Ok(())
}

/// Tests listing all planets.
///
/// Expected: Ok with all planets in id order
#[tokio::test]
async fn returns_all_planets_in_id_order() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Planet)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let first = factory::create_planet(db).await?;
    let second = factory::create_planet(db).await?;

    let repo = PlanetRepository::new(db);
    let planets = repo.get_all().await?;

    assert_eq!(planets.len(), 2);
    assert_eq!(planets[0].id, first.id);
    assert_eq!(planets[1].id, second.id);

    Ok(())
}
