use super::*;

/// Tests fetching a hero that has no power associations.
///
/// Verifies that the hero is returned with an empty association list rather
/// than being treated as missing.
///
/// Expected: Ok with hero and empty associations
#[tokio::test]
async fn returns_hero_with_empty_associations() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_hero_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let created = factory::hero::create_hero(db).await?;

    let repo = HeroRepository::new(db);
    let hero = repo.get_with_powers(created.id).await?;

    assert!(hero.is_some());
    let hero = hero.unwrap();
    assert_eq!(hero.id, created.id);
    assert!(hero.hero_powers.is_empty());

    Ok(())
}

/// Tests fetching a hero with an association.
///
/// Verifies that the association is returned with the full power it refers
/// to joined in.
///
/// Expected: Ok with hero, association, and nested power
#[tokio::test]
async fn returns_hero_with_association_and_nested_power() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_hero_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (created_hero, created_power, created_hero_power) =
        factory::helpers::create_hero_power_with_dependencies(db).await?;

    let repo = HeroRepository::new(db);
    let hero = repo.get_with_powers(created_hero.id).await?.unwrap();

    assert_eq!(hero.hero_powers.len(), 1);
    let association = &hero.hero_powers[0];
    assert_eq!(association.id, created_hero_power.id);
    assert_eq!(association.hero_id, created_hero.id);
    assert_eq!(association.power_id, created_power.id);
    assert_eq!(association.power.id, created_power.id);
    assert_eq!(association.power.name, created_power.name);
    assert_eq!(association.power.description, created_power.description);

    Ok(())
}

/// Tests fetching a hero with several associations.
///
/// Verifies that all associations are returned ordered by ascending
/// association id.
///
/// Expected: Ok with associations in id order
#[tokio::test]
async fn returns_associations_ordered_by_id() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_hero_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let created_hero = factory::hero::create_hero(db).await?;
    let (_, first) = factory::helpers::create_power_for_hero(db, &created_hero).await?;
    let (_, second) = factory::helpers::create_power_for_hero(db, &created_hero).await?;

    let repo = HeroRepository::new(db);
    let hero = repo.get_with_powers(created_hero.id).await?.unwrap();

    assert_eq!(hero.hero_powers.len(), 2);
    assert_eq!(hero.hero_powers[0].id, first.id);
    assert_eq!(hero.hero_powers[1].id, second.id);

    Ok(())
}

/// Tests fetching a nonexistent hero with associations.
///
/// Verifies that the repository returns None rather than an error for an
/// unknown id.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_unknown_id() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_hero_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = HeroRepository::new(db);
    let hero = repo.get_with_powers(9999).await?;

    assert!(hero.is_none());

    Ok(())
}
