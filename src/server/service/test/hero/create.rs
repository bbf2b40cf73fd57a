use super::*;

/// Tests creating a hero through the service.
///
/// Verifies that the response carries the detail shape with an empty
/// association list, since a new hero holds no powers yet.
///
/// Expected: Ok with detail and no associations
#[tokio::test]
async fn returns_detail_with_empty_associations() -> Result<(), AppError> {
    let test = TestBuilder::new().with_hero_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let service = HeroService::new(db);
    let hero = service
        .create(CreateHeroParams {
            name: "Bruce Wayne".to_string(),
            super_name: "Batman".to_string(),
        })
        .await?;

    assert!(hero.id > 0);
    assert_eq!(hero.name, "Bruce Wayne");
    assert_eq!(hero.super_name, "Batman");
    assert!(hero.hero_powers.is_empty());

    Ok(())
}

/// Tests that a created hero can be fetched back.
///
/// Verifies that a fetch after create returns the same field values.
///
/// Expected: Ok with matching values
#[tokio::test]
async fn created_hero_is_fetchable() -> Result<(), AppError> {
    let test = TestBuilder::new().with_hero_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let service = HeroService::new(db);
    let created = service
        .create(CreateHeroParams {
            name: "Kate Kane".to_string(),
            super_name: "Batwoman".to_string(),
        })
        .await?;

    let fetched = service.get_by_id(created.id).await?;

    assert!(fetched.is_some());
    let fetched = fetched.unwrap();
    assert_eq!(fetched.id, created.id);
    assert_eq!(fetched.name, "Kate Kane");
    assert_eq!(fetched.super_name, "Batwoman");

    Ok(())
}
