use super::*;

use crate::server::{
    model::{hero::CreateHeroParams, power::CreatePowerParams},
    service::{hero::HeroService, power::PowerService},
};

/// Tests creating an association through the service.
///
/// Expected: Ok with association created
#[tokio::test]
async fn creates_association() -> Result<(), AppError> {
    let test = TestBuilder::new().with_hero_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let hero = factory::hero::create_hero(db).await?;
    let power = factory::power::create_power(db).await?;

    let service = HeroPowerService::new(db);
    let hero_power = service
        .create(CreateHeroPowerParams {
            hero_id: hero.id,
            power_id: power.id,
            strength: "Average".to_string(),
        })
        .await?;

    assert!(hero_power.id > 0);
    assert_eq!(hero_power.hero_id, hero.id);
    assert_eq!(hero_power.power_id, power.id);
    assert_eq!(hero_power.strength, Strength::Average);

    Ok(())
}

/// Tests creating an association for an unknown hero.
///
/// The hero lookup runs first, so the hero is reported missing even though
/// the power id is unknown as well.
///
/// Expected: Err(NotFound) naming the hero
#[tokio::test]
async fn reports_missing_hero_first() -> Result<(), AppError> {
    let test = TestBuilder::new().with_hero_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let service = HeroPowerService::new(db);
    let result = service
        .create(CreateHeroPowerParams {
            hero_id: 9999,
            power_id: 9999,
            strength: "Average".to_string(),
        })
        .await;

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

/// Tests creating an association for an unknown power.
///
/// Expected: Err(NotFound) naming the power
#[tokio::test]
async fn reports_missing_power() -> Result<(), AppError> {
    let test = TestBuilder::new().with_hero_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let hero = factory::hero::create_hero(db).await?;

    let service = HeroPowerService::new(db);
    let result = service
        .create(CreateHeroPowerParams {
            hero_id: hero.id,
            power_id: 9999,
            strength: "Average".to_string(),
        })
        .await;

    assert!(result.is_err());
    let error = result.unwrap_err();
    match error {
        AppError::NotFound(message) => {
            assert_eq!(message, "Power not found");
        }
        _ => panic!("Expected NotFound error, got: {:?}", error),
    }

    Ok(())
}

/// Tests creating an association with an invalid strength rating.
///
/// Verifies that validation rejects the request and nothing is stored.
///
/// Expected: Err(Validation) with nothing persisted
#[tokio::test]
async fn rejects_invalid_strength() -> Result<(), AppError> {
    let test = TestBuilder::new().with_hero_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let hero = factory::hero::create_hero(db).await?;
    let power = factory::power::create_power(db).await?;

    let service = HeroPowerService::new(db);
    let result = service
        .create(CreateHeroPowerParams {
            hero_id: hero.id,
            power_id: power.id,
            strength: "Mediocre".to_string(),
        })
        .await;

    assert!(result.is_err());
    let error = result.unwrap_err();
    match error {
        AppError::Validation(message) => {
            assert_eq!(message, "Strength must be \"Strong\", \"Weak\", or \"Average\".");
        }
        _ => panic!("Expected Validation error, got: {:?}", error),
    }

    let count = entity::prelude::HeroPower::find().count(db).await?;
    assert_eq!(count, 0);

    Ok(())
}

/// Tests the full create-and-associate flow across services.
///
/// Creates a hero and a power, associates them, and verifies the association
/// shows up both on the hero detail and in the hero's power listing.
///
/// Expected: Ok at every step with consistent data
#[tokio::test]
async fn associates_created_hero_and_power_end_to_end() -> Result<(), AppError> {
    let test = TestBuilder::new().with_hero_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let hero_service = HeroService::new(db);
    let hero = hero_service
        .create(CreateHeroParams {
            name: "Bruce Wayne".to_string(),
            super_name: "Batman".to_string(),
        })
        .await?;

    let power_service = PowerService::new(db);
    let power = power_service
        .create(CreatePowerParams {
            name: "martial arts mastery".to_string(),
            description: "peak human combat training across every discipline".to_string(),
        })
        .await?;

    let service = HeroPowerService::new(db);
    let hero_power = service
        .create(CreateHeroPowerParams {
            hero_id: hero.id,
            power_id: power.id,
            strength: "Strong".to_string(),
        })
        .await?;

    assert_eq!(hero_power.strength, Strength::Strong);

    let detail = hero_service.get_by_id(hero.id).await?.unwrap();
    assert_eq!(detail.name, "Bruce Wayne");
    assert_eq!(detail.hero_powers.len(), 1);
    assert_eq!(detail.hero_powers[0].id, hero_power.id);
    assert_eq!(detail.hero_powers[0].power.name, "martial arts mastery");

    let powers = service.get_powers_by_hero(hero.id).await?;
    assert_eq!(powers.len(), 1);
    assert_eq!(powers[0].id, power.id);

    Ok(())
}
