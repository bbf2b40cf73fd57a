use super::*;

/// Tests updating the strength of an association.
///
/// Verifies that the new rating is stored and the other fields are untouched.
///
/// Expected: Ok with updated association
#[tokio::test]
async fn updates_strength() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_hero_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (hero, power, created) = factory::helpers::create_hero_power_with_dependencies(db).await?;

    let repo = HeroPowerRepository::new(db);
    let hero_power = repo.update_strength(created.id, Strength::Strong).await?;

    assert!(hero_power.is_some());
    let hero_power = hero_power.unwrap();
    assert_eq!(hero_power.id, created.id);
    assert_eq!(hero_power.strength, Strength::Strong);
    assert_eq!(hero_power.hero_id, hero.id);
    assert_eq!(hero_power.power_id, power.id);

    // Verify the stored rating text
    let db_hero_power = entity::prelude::HeroPower::find_by_id(created.id)
        .one(db)
        .await?
        .unwrap();
    assert_eq!(db_hero_power.strength, "Strong");

    Ok(())
}

/// Tests updating a nonexistent association.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_unknown_id() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_hero_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = HeroPowerRepository::new(db);
    let hero_power = repo.update_strength(9999, Strength::Average).await?;

    assert!(hero_power.is_none());

    Ok(())
}
