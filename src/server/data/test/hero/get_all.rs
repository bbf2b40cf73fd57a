use super::*;

/// Tests listing heroes when none exist.
///
/// Verifies that the repository returns an empty vector rather than an error
/// for an empty table.
///
/// Expected: Ok with empty vector
#[tokio::test]
async fn returns_empty_when_no_heroes_exist() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_hero_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = HeroRepository::new(db);
    let heroes = repo.get_all().await?;

    assert!(heroes.is_empty());

    Ok(())
}

/// Tests listing all heroes.
///
/// Verifies that every stored hero is returned and the results are ordered
/// by ascending id.
///
/// Expected: Ok with all heroes in id order
#[tokio::test]
async fn returns_all_heroes_ordered_by_id() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_hero_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let first = factory::hero::create_hero(db).await?;
    let second = factory::hero::create_hero(db).await?;
    let third = factory::hero::create_hero(db).await?;

    let repo = HeroRepository::new(db);
    let heroes = repo.get_all().await?;

    assert_eq!(heroes.len(), 3);
    assert_eq!(heroes[0].id, first.id);
    assert_eq!(heroes[1].id, second.id);
    assert_eq!(heroes[2].id, third.id);
    assert_eq!(heroes[0].name, first.name);

    Ok(())
}
