//! Hero power factory for creating test hero-power associations.
//!
//! This module provides factory methods for creating hero_power entities that
//! join heroes to powers with a strength rating. Callers supply the hero and
//! power ids; the factory defaults the strength to "Average".

use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test hero-power associations with customizable fields.
///
/// Requires existing hero and power ids since the join table carries foreign
/// keys to both. Use [`crate::factory::helpers::create_hero_power_with_dependencies`]
/// to create the full object graph in one call.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::factory::hero_power::HeroPowerFactory;
///
/// let hero_power = HeroPowerFactory::new(&db, hero.id, power.id)
///     .strength("Strong")
///     .build()
///     .await?;
/// ```
pub struct HeroPowerFactory<'a> {
    db: &'a DatabaseConnection,
    hero_id: i32,
    power_id: i32,
    strength: String,
}

impl<'a> HeroPowerFactory<'a> {
    /// Creates a new HeroPowerFactory with default values.
    ///
    /// Defaults:
    /// - strength: `"Average"`
    ///
    /// # Arguments
    /// - `db` - Database connection for inserting the entity
    /// - `hero_id` - Id of an existing hero
    /// - `power_id` - Id of an existing power
    ///
    /// # Returns
    /// - `HeroPowerFactory` - New factory instance with defaults
    pub fn new(db: &'a DatabaseConnection, hero_id: i32, power_id: i32) -> Self {
        Self {
            db,
            hero_id,
            power_id,
            strength: String::from("Average"),
        }
    }

    /// Sets the strength rating for the association.
    ///
    /// The factory performs no validation; pass an invalid rating to test
    /// rejection paths in the domain layer.
    ///
    /// # Arguments
    /// - `strength` - Strength rating, normally one of "Strong", "Weak", or "Average"
    ///
    /// # Returns
    /// - `Self` - Factory instance for method chaining
    pub fn strength(mut self, strength: impl Into<String>) -> Self {
        self.strength = strength.into();
        self
    }

    /// Builds and inserts the hero_power entity into the database.
    ///
    /// # Returns
    /// - `Ok(entity::hero_power::Model)` - Created hero_power entity
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::hero_power::Model, DbErr> {
        entity::hero_power::ActiveModel {
            id: ActiveValue::NotSet,
            strength: ActiveValue::Set(self.strength),
            hero_id: ActiveValue::Set(self.hero_id),
            power_id: ActiveValue::Set(self.power_id),
        }
        .insert(self.db)
        .await
    }
}

/// Creates a hero-power association with default values.
///
/// Shorthand for `HeroPowerFactory::new(db, hero_id, power_id).build().await`.
///
/// # Arguments
/// - `db` - Database connection
/// - `hero_id` - Id of an existing hero
/// - `power_id` - Id of an existing power
///
/// # Returns
/// - `Ok(entity::hero_power::Model)` - Created hero_power entity
/// - `Err(DbErr)` - Database error during insert
pub async fn create_hero_power(
    db: &DatabaseConnection,
    hero_id: i32,
    power_id: i32,
) -> Result<entity::hero_power::Model, DbErr> {
    HeroPowerFactory::new(db, hero_id, power_id).build().await
}

/// Creates a hero-power association with the given strength.
///
/// # Arguments
/// - `db` - Database connection
/// - `hero_id` - Id of an existing hero
/// - `power_id` - Id of an existing power
/// - `strength` - Strength rating for the association
///
/// # Returns
/// - `Ok(entity::hero_power::Model)` - Created hero_power entity
/// - `Err(DbErr)` - Database error during insert
pub async fn create_hero_power_with_strength(
    db: &DatabaseConnection,
    hero_id: i32,
    power_id: i32,
    strength: impl Into<String>,
) -> Result<entity::hero_power::Model, DbErr> {
    HeroPowerFactory::new(db, hero_id, power_id)
        .strength(strength)
        .build()
        .await
}
