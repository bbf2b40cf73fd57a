//! Hero factory for creating test hero entities.
//!
//! This module provides factory methods for creating hero entities with sensible
//! defaults, reducing boilerplate in tests. The factory supports customization
//! through a builder pattern.

use crate::factory::helpers::next_id;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test heroes with customizable fields.
///
/// Provides a builder pattern for creating hero entities with default values
/// that can be overridden as needed for specific test scenarios.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::factory::hero::HeroFactory;
///
/// let hero = HeroFactory::new(&db)
///     .name("Bruce Wayne")
///     .super_name("Batman")
///     .build()
///     .await?;
/// ```
pub struct HeroFactory<'a> {
    db: &'a DatabaseConnection,
    name: String,
    super_name: String,
}

impl<'a> HeroFactory<'a> {
    /// Creates a new HeroFactory with default values.
    ///
    /// Defaults:
    /// - name: `"Hero {id}"` where id is auto-incremented
    /// - super_name: `"Super Hero {id}"`
    ///
    /// # Arguments
    /// - `db` - Database connection for inserting the entity
    ///
    /// # Returns
    /// - `HeroFactory` - New factory instance with defaults
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        Self {
            db,
            name: format!("Hero {}", id),
            super_name: format!("Super Hero {}", id),
        }
    }

    /// Sets the name for the hero.
    ///
    /// # Arguments
    /// - `name` - Civilian name for the hero
    ///
    /// # Returns
    /// - `Self` - Factory instance for method chaining
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Sets the super name for the hero.
    ///
    /// # Arguments
    /// - `super_name` - Alias the hero operates under
    ///
    /// # Returns
    /// - `Self` - Factory instance for method chaining
    pub fn super_name(mut self, super_name: impl Into<String>) -> Self {
        self.super_name = super_name.into();
        self
    }

    /// Builds and inserts the hero entity into the database.
    ///
    /// # Returns
    /// - `Ok(entity::hero::Model)` - Created hero entity
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::hero::Model, DbErr> {
        entity::hero::ActiveModel {
            id: ActiveValue::NotSet,
            name: ActiveValue::Set(self.name),
            super_name: ActiveValue::Set(self.super_name),
        }
        .insert(self.db)
        .await
    }
}

/// Creates a hero with default values.
///
/// Shorthand for `HeroFactory::new(db).build().await`.
///
/// # Arguments
/// - `db` - Database connection
///
/// # Returns
/// - `Ok(entity::hero::Model)` - Created hero entity
/// - `Err(DbErr)` - Database error during insert
///
/// # Example
///
/// ```rust,ignore
/// let hero = create_hero(&db).await?;
/// ```
pub async fn create_hero(db: &DatabaseConnection) -> Result<entity::hero::Model, DbErr> {
    HeroFactory::new(db).build().await
}
