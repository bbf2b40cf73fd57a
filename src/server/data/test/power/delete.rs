use super::*;

/// Tests deleting a power.
///
/// Verifies that the power row is removed and the existence check reflects
/// the deletion.
///
/// Expected: Ok(true) with power removed
#[tokio::test]
async fn deletes_power() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_hero_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let created = factory::power::create_power(db).await?;

    let repo = PowerRepository::new(db);
    assert!(repo.exists(created.id).await?);

    let deleted = repo.delete(created.id).await?;

    assert!(deleted);
    assert!(!repo.exists(created.id).await?);

    let db_power = entity::prelude::Power::find_by_id(created.id).one(db).await?;
    assert!(db_power.is_none());

    Ok(())
}

/// Tests deleting a power that is associated with heroes.
///
/// Verifies that every association row referencing the power is removed with
/// it while the heroes themselves survive.
///
/// Expected: Ok(true) with associations removed and heroes kept
#[tokio::test]
async fn deletes_power_associations_but_keeps_heroes() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_hero_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let hero = factory::hero::create_hero(db).await?;
    let power = factory::power::create_power(db).await?;
    factory::hero_power::create_hero_power(db, hero.id, power.id).await?;

    let repo = PowerRepository::new(db);
    let deleted = repo.delete(power.id).await?;

    assert!(deleted);

    let association_count = entity::prelude::HeroPower::find()
        .filter(entity::hero_power::Column::PowerId.eq(power.id))
        .count(db)
        .await?;
    assert_eq!(association_count, 0);

    assert!(entity::prelude::Hero::find_by_id(hero.id)
        .one(db)
        .await?
        .is_some());

    Ok(())
}

/// Tests deleting a nonexistent power.
///
/// Expected: Ok(false)
#[tokio::test]
async fn returns_false_for_unknown_id() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_hero_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = PowerRepository::new(db);
    let deleted = repo.delete(9999).await?;

    assert!(!deleted);

    Ok(())
}
