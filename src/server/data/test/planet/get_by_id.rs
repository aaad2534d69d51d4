use super::*;

/// Tests fetching a planet by id.
///
/// Verifies that the domain model carries the same field values the row
/// was created with.
///
/// Expected: Ok with the matching planet
#[tokio::test]
async fn returns_planet_for_existing_id() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Planet)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let planet = factory::planet::PlanetFactory::new(db)
        .name("Tatooine")
        .climate("arid")
        .terrain("desert")
        .population(200_000)
        .build()
        .await?;

    let repo = PlanetRepository::new(db);
    let result = repo.get_by_id(planet.id).await?;

    assert!(result.is_some());
    let found = result.unwrap();
    assert_eq!(found.id, planet.id);
    assert_eq!(found.name, "Tatooine");
    assert_eq!(found.climate, "arid");
    assert_eq!(found.terrain, "desert");
    assert_eq!(found.population, 200_000);

    Ok(())
}

/// Tests fetching a planet that does not exist.
///
/// Expected: Ok with None
#[tokio::test]
async fn returns_none_for_missing_id() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Planet)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = PlanetRepository::new(db);
    let result = repo.get_by_id(42).await?;

    assert!(result.is_none());

    Ok(())
}
