use super::*;

/// Tests fetching a power by id.
///
/// Expected: Ok with the matching power
#[tokio::test]
async fn returns_power_when_found() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_hero_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let created = factory::power::PowerFactory::new(db)
        .name("x-ray vision")
        .description("allows the wielder to see through solid objects")
        .build()
        .await?;

    let repo = PowerRepository::new(db);
    let power = repo.get_by_id(created.id).await?;

    assert!(power.is_some());
    let power = power.unwrap();
    assert_eq!(power.id, created.id);
    assert_eq!(power.name, "x-ray vision");
    assert_eq!(
        power.description,
        "allows the wielder to see through solid objects"
    );

    Ok(())
}

/// Tests fetching a nonexistent power.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_unknown_id() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_hero_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = PowerRepository::new(db);
    let power = repo.get_by_id(9999).await?;

    assert!(power.is_none());

    Ok(())
}
