use super::*;

/// Tests listing powers for a hero without associations.
///
/// Expected: Ok with empty vector
#[tokio::test]
async fn returns_empty_for_hero_without_powers() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_hero_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let hero = factory::hero::create_hero(db).await?;

    let repo = HeroPowerRepository::new(db);
    let powers = repo.get_powers_by_hero(hero.id).await?;

    assert!(powers.is_empty());

    Ok(())
}

/// Tests listing a hero's powers through the join.
///
/// Verifies that the powers behind the hero's associations are returned with
/// their full field values, in association order.
///
/// Expected: Ok with the hero's powers
#[tokio::test]
async fn returns_powers_for_hero() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_hero_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let hero = factory::hero::create_hero(db).await?;
    let (first_power, _) = factory::helpers::create_power_for_hero(db, &hero).await?;
    let (second_power, _) = factory::helpers::create_power_for_hero(db, &hero).await?;

    let repo = HeroPowerRepository::new(db);
    let powers = repo.get_powers_by_hero(hero.id).await?;

    assert_eq!(powers.len(), 2);
    assert_eq!(powers[0].id, first_power.id);
    assert_eq!(powers[0].name, first_power.name);
    assert_eq!(powers[0].description, first_power.description);
    assert_eq!(powers[1].id, second_power.id);

    Ok(())
}

/// Tests that the listing is scoped to the requested hero.
///
/// Expected: Ok with only the hero's own powers
#[tokio::test]
async fn does_not_return_other_heroes_powers() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_hero_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (hero, own_power, _) = factory::helpers::create_hero_power_with_dependencies(db).await?;
    factory::helpers::create_hero_power_with_dependencies(db).await?;

    let repo = HeroPowerRepository::new(db);
    let powers = repo.get_powers_by_hero(hero.id).await?;

    assert_eq!(powers.len(), 1);
    assert_eq!(powers[0].id, own_power.id);

    Ok(())
}
