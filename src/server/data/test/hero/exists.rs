use super::*;

/// Tests the existence check for a stored hero.
///
/// Expected: Ok(true)
#[tokio::test]
async fn returns_true_for_existing_hero() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_hero_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let created = factory::hero::create_hero(db).await?;

    let repo = HeroRepository::new(db);
    assert!(repo.exists(created.id).await?);

    Ok(())
}

/// Tests the existence check for an unknown id.
///
/// Expected: Ok(false)
#[tokio::test]
async fn returns_false_for_unknown_id() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_hero_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = HeroRepository::new(db);
    assert!(!repo.exists(9999).await?);

    Ok(())
}
