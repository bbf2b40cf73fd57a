//! Power factory for creating test power entities.
//!
//! This module provides factory methods for creating power entities with sensible
//! defaults, reducing boilerplate in tests. The factory supports customization
//! through a builder pattern.

use crate::factory::helpers::next_id;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test powers with customizable fields.
///
/// Provides a builder pattern for creating power entities with default values
/// that can be overridden as needed for specific test scenarios. The default
/// description satisfies the 20-character minimum enforced by the domain layer.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::factory::power::PowerFactory;
///
/// let power = PowerFactory::new(&db)
///     .name("flight")
///     .description("gives the wielder the ability to fly")
///     .build()
///     .await?;
/// ```
pub struct PowerFactory<'a> {
    db: &'a DatabaseConnection,
    name: String,
    description: String,
}

impl<'a> PowerFactory<'a> {
    /// Creates a new PowerFactory with default values.
    ///
    /// Defaults:
    /// - name: `"Power {id}"` where id is auto-incremented
    /// - description: a sentence comfortably over 20 characters
    ///
    /// # Arguments
    /// - `db` - Database connection for inserting the entity
    ///
    /// # Returns
    /// - `PowerFactory` - New factory instance with defaults
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        Self {
            db,
            name: format!("Power {}", id),
            description: format!("Test power {} with a sufficiently long description", id),
        }
    }

    /// Sets the name for the power.
    ///
    /// # Arguments
    /// - `name` - Display name for the power
    ///
    /// # Returns
    /// - `Self` - Factory instance for method chaining
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Sets the description for the power.
    ///
    /// The factory performs no validation; pass a short description to test
    /// rejection paths in the domain layer.
    ///
    /// # Arguments
    /// - `description` - Description text for the power
    ///
    /// # Returns
    /// - `Self` - Factory instance for method chaining
    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Builds and inserts the power entity into the database.
    ///
    /// # Returns
    /// - `Ok(entity::power::Model)` - Created power entity
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::power::Model, DbErr> {
        entity::power::ActiveModel {
            id: ActiveValue::NotSet,
            name: ActiveValue::Set(self.name),
            description: ActiveValue::Set(self.description),
        }
        .insert(self.db)
        .await
    }
}

/// Creates a power with default values.
///
/// Shorthand for `PowerFactory::new(db).build().await`.
///
/// # Arguments
/// - `db` - Database connection
///
/// # Returns
/// - `Ok(entity::power::Model)` - Created power entity
/// - `Err(DbErr)` - Database error during insert
///
/// # Example
///
/// ```rust,ignore
/// let power = create_power(&db).await?;
/// ```
pub async fn create_power(db: &DatabaseConnection) -> Result<entity::power::Model, DbErr> {
    PowerFactory::new(db).build().await
}
