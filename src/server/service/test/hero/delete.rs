use super::*;

/// Tests deleting a hero through the service.
///
/// Verifies that the hero and all of its associations are removed, and that
/// a subsequent power listing for the hero reports it as missing.
///
/// Expected: Ok(true), then NotFound on the follow-up listing
#[tokio::test]
async fn removes_hero_and_associations() -> Result<(), AppError> {
    let test = TestBuilder::new().with_hero_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let hero = factory::hero::create_hero(db).await?;
    factory::helpers::create_power_for_hero(db, &hero).await?;
    factory::helpers::create_power_for_hero(db, &hero).await?;

    let service = HeroService::new(db);
    let deleted = service.delete(hero.id).await?;

    assert!(deleted);

    let db_hero = entity::prelude::Hero::find_by_id(hero.id).one(db).await?;
    assert!(db_hero.is_none());

    let association_count = entity::prelude::HeroPower::find().count(db).await?;
    assert_eq!(association_count, 0);

    // Listing powers for the deleted hero now reports it as missing
    let hero_power_service = HeroPowerService::new(db);
    let result = hero_power_service.get_powers_by_hero(hero.id).await;

    assert!(result.is_err());
    let error = result.unwrap_err();
    match error {
        AppError::NotFound(message) => {
            assert_eq!(message, "Hero not found");
        }
        _ => panic!("Expected NotFound error, got: {:?}", error),
    }

    Ok(())
}

/// Tests deleting a nonexistent hero through the service.
///
/// Expected: Ok(false)
#[tokio::test]
async fn returns_false_for_unknown_id() -> Result<(), AppError> {
    let test = TestBuilder::new().with_hero_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let service = HeroService::new(db);
    let deleted = service.delete(9999).await?;

    assert!(!deleted);

    Ok(())
}
