use super::*;

/// Tests finding the association for a pair.
///
/// Expected: Ok with the matching association
#[tokio::test]
async fn returns_association_when_found() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_hero_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let hero = factory::hero::create_hero(db).await?;
    let power = factory::power::create_power(db).await?;
    let created =
        factory::hero_power::create_hero_power_with_strength(db, hero.id, power.id, "Weak").await?;

    let repo = HeroPowerRepository::new(db);
    let hero_power = repo.find_by_hero_and_power(hero.id, power.id).await?;

    assert!(hero_power.is_some());
    let hero_power = hero_power.unwrap();
    assert_eq!(hero_power.id, created.id);
    assert_eq!(hero_power.strength, Strength::Weak);

    Ok(())
}

/// Tests finding a pair that has no association.
///
/// The hero and power both exist but no row joins them.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_when_pair_not_associated() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_hero_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let hero = factory::hero::create_hero(db).await?;
    let power = factory::power::create_power(db).await?;

    let repo = HeroPowerRepository::new(db);
    let hero_power = repo.find_by_hero_and_power(hero.id, power.id).await?;

    assert!(hero_power.is_none());

    Ok(())
}

/// Tests finding a pair with duplicate associations.
///
/// Verifies that the first row wins when the pair appears more than once.
///
/// Expected: Ok with the earliest association
#[tokio::test]
async fn returns_first_row_for_duplicate_pairs() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_hero_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let hero = factory::hero::create_hero(db).await?;
    let power = factory::power::create_power(db).await?;
    let first =
        factory::hero_power::create_hero_power_with_strength(db, hero.id, power.id, "Strong")
            .await?;
    factory::hero_power::create_hero_power_with_strength(db, hero.id, power.id, "Weak").await?;

    let repo = HeroPowerRepository::new(db);
    let hero_power = repo.find_by_hero_and_power(hero.id, power.id).await?.unwrap();

    assert_eq!(hero_power.id, first.id);
    assert_eq!(hero_power.strength, Strength::Strong);

    Ok(())
}
