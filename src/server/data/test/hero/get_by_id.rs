use super::*;

/// Tests fetching a hero by id.
///
/// Verifies that the repository returns the hero matching the id with its
/// stored field values.
///
/// Expected: Ok with the matching hero
#[tokio::test]
async fn returns_hero_when_found() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_hero_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let created = factory::hero::HeroFactory::new(db)
        .name("Peter Parker")
        .super_name("Spider-Man")
        .build()
        .await?;

    let repo = HeroRepository::new(db);
    let hero = repo.get_by_id(created.id).await?;

    assert!(hero.is_some());
    let hero = hero.unwrap();
    assert_eq!(hero.id, created.id);
    assert_eq!(hero.name, "Peter Parker");
    assert_eq!(hero.super_name, "Spider-Man");

    Ok(())
}

/// Tests fetching a nonexistent hero.
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
    let hero = repo.get_by_id(9999).await?;

    assert!(hero.is_none());

    Ok(())
}
