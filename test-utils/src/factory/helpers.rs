//! Shared helper utilities for factory methods.
//!
//! This module provides common utilities used across all factory modules,
//! including ID generation and convenience methods for creating entities
//! with their dependencies.

use sea_orm::{DatabaseConnection, DbErr};

/// Counter for generating unique IDs in tests.
///
/// This atomic counter ensures each factory-created entity gets a unique
/// identifier to prevent collisions in tests.
static COUNTER: std::sync::atomic::AtomicU64 = std::sync::atomic::AtomicU64::new(1);

/// Gets the next unique counter value for test data.
///
/// This function provides monotonically increasing values for use in
/// generating unique test identifiers across all factories.
///
/// # Returns
/// - `u64` - Next unique counter value
pub fn next_id() -> u64 {
    COUNTER.fetch_add(1, std::sync::atomic::Ordering::SeqCst)
}

/// Creates a hero-power association with all dependencies.
///
/// This is a convenience method that creates:
/// 1. Hero
/// 2. Power
/// 3. Hero power joining the two
///
/// All entities are created with default values. Use the individual
/// factories if you need to customize specific entities.
///
/// # Arguments
/// - `db` - Database connection
///
/// # Returns
/// - `Ok((hero, power, hero_power))` - Tuple of all created entities
/// - `Err(DbErr)` - Database error during creation
pub async fn create_hero_power_with_dependencies(
    db: &DatabaseConnection,
) -> Result<
    (
        entity::hero::Model,
        entity::power::Model,
        entity::hero_power::Model,
    ),
    DbErr,
> {
    let hero = crate::factory::hero::create_hero(db).await?;
    let power = crate::factory::power::create_power(db).await?;
    let hero_power = crate::factory::hero_power::create_hero_power(db, hero.id, power.id).await?;

    Ok((hero, power, hero_power))
}

/// Creates a power and an association for a specific hero.
///
/// This creates a new power with default values, then joins it to the
/// provided hero. Useful when you need a hero holding several powers.
///
/// # Arguments
/// - `db` - Database connection
/// - `hero` - Hero entity to associate the power with
///
/// # Returns
/// - `Ok((power, hero_power))` - Tuple of created entities
/// - `Err(DbErr)` - Database error during creation
pub async fn create_power_for_hero(
    db: &DatabaseConnection,
    hero: &entity::hero::Model,
) -> Result<(entity::power::Model, entity::hero_power::Model), DbErr> {
    let power = crate::factory::power::create_power(db).await?;
    let hero_power = crate::factory::hero_power::create_hero_power(db, hero.id, power.id).await?;

    Ok((power, hero_power))
}
