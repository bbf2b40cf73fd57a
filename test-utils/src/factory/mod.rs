//! Factory methods for creating test data.
//!
//! This module provides factory methods for creating test entities with sensible defaults,
//! reducing boilerplate in tests. Factories automatically handle dependencies and foreign
//! key relationships, making tests more concise and maintainable.
//!
//! # Overview
//!
//! Each entity has its own factory module with both a `Factory` struct for customization
//! and a `create_*` convenience function for quick default creation.
//!
//! # Basic Usage
//!
//! ```rust,ignore
//! use test_utils::factory;
//!
//! #[tokio::test]
//! async fn test_example() -> Result<(), sea_orm::DbErr> {
//!     let db = /* ... */;
//!
//!     // Create with defaults
//!     let hero = factory::hero::create_hero(&db).await?;
//!     let power = factory::power::create_power(&db).await?;
//!
//!     // Create with all dependencies
//!     let (hero, power, hero_power) =
//!         factory::helpers::create_hero_power_with_dependencies(&db).await?;
//!
//!     Ok(())
//! }
//! ```
//!
//! # Customization
//!
//! Use the factory builders for custom values:
//!
//! ```rust,ignore
//! use test_utils::factory;
//!
//! // Using builder pattern for customization
//! let hero = factory::hero::HeroFactory::new(&db)
//!     .name("Bruce Wayne")
//!     .super_name("Batman")
//!     .build()
//!     .await?;
//!
//! // Using convenience functions with custom values
//! let hero_power = factory::create_hero_power_with_strength(&db, hero.id, power.id, "Strong").await?;
//! ```
//!
//! # Available Factories
//!
//! - `hero` - Create hero entities
//! - `power` - Create power entities
//! - `hero_power` - Create hero-power association entities
//! - `helpers` - Convenience methods for creating entities with dependencies

pub mod helpers;
pub mod hero;
pub mod hero_power;
pub mod power;

// Re-export commonly used factory functions for concise usage
pub use hero::create_hero;
pub use hero_power::{create_hero_power, create_hero_power_with_strength};
pub use power::create_power;
