//! Hero data repository for database operations.
//!
//! This module provides the `HeroRepository` for managing hero records in the database.
//! It handles hero creation, updates, queries, and deletion with proper conversion
//! between entity models and domain models at the infrastructure boundary. Deleting a
//! hero removes its hero-power associations in the same operation.

use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder,
};

use crate::server::model::hero::{CreateHeroParams, Hero, HeroWithPowers, UpdateHeroParams};
use crate::server::model::hero_power::HeroPowerWithPower;

/// Repository providing database operations for hero management.
///
/// This struct holds a reference to the database connection and provides methods
/// for creating, reading, updating, and deleting hero records.
pub struct HeroRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> HeroRepository<'a> {
    /// Creates a new HeroRepository instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    ///
    /// # Returns
    /// - `HeroRepository` - New repository instance
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Gets all heroes ordered by id.
    ///
    /// # Returns
    /// - `Ok(Vec<Hero>)` - All heroes (empty if none exist)
    /// - `Err(DbErr)` - Database error during query
    pub async fn get_all(&self) -> Result<Vec<Hero>, DbErr> {
        let entities = entity::prelude::Hero::find()
            .order_by_asc(entity::hero::Column::Id)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(Hero::from_entity).collect())
    }

    /// Gets a hero by id without association data.
    ///
    /// # Arguments
    /// - `id` - Hero id to look up
    ///
    /// # Returns
    /// - `Ok(Some(Hero))` - Hero found
    /// - `Ok(None)` - No hero with that id
    /// - `Err(DbErr)` - Database error during query
    pub async fn get_by_id(&self, id: i32) -> Result<Option<Hero>, DbErr> {
        let entity = entity::prelude::Hero::find_by_id(id).one(self.db).await?;

        Ok(entity.map(Hero::from_entity))
    }

    /// Gets a hero by id with its power associations loaded.
    ///
    /// Performs an explicit join from the hero's associations to their powers,
    /// ordered by association id.
    ///
    /// # Arguments
    /// - `id` - Hero id to look up
    ///
    /// # Returns
    /// - `Ok(Some(HeroWithPowers))` - Hero found with all associations
    /// - `Ok(None)` - No hero with that id
    /// - `Err(DbErr)` - Database error during query or corrupt association data
    pub async fn get_with_powers(&self, id: i32) -> Result<Option<HeroWithPowers>, DbErr> {
        let hero = entity::prelude::Hero::find_by_id(id).one(self.db).await?;

        if let Some(hero) = hero {
            let rows = entity::prelude::HeroPower::find()
                .filter(entity::hero_power::Column::HeroId.eq(id))
                .find_also_related(entity::prelude::Power)
                .order_by_asc(entity::hero_power::Column::Id)
                .all(self.db)
                .await?;

            let hero_powers = rows
                .into_iter()
                .map(|(hero_power, power)| HeroPowerWithPower::from_entity(hero_power, power))
                .collect::<Result<Vec<_>, DbErr>>()?;

            Ok(Some(HeroWithPowers {
                id: hero.id,
                name: hero.name,
                super_name: hero.super_name,
                hero_powers,
            }))
        } else {
            Ok(None)
        }
    }

    /// Creates a new hero from parameters.
    ///
    /// # Arguments
    /// - `params` - Hero creation parameters (name and super name)
    ///
    /// # Returns
    /// - `Ok(Hero)` - The created hero with its assigned id
    /// - `Err(DbErr)` - Database error during insert
    pub async fn create(&self, params: CreateHeroParams) -> Result<Hero, DbErr> {
        let entity = entity::hero::ActiveModel {
            name: ActiveValue::Set(params.name),
            super_name: ActiveValue::Set(params.super_name),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(Hero::from_entity(entity))
    }

    /// Updates a hero's fields, applying only those supplied.
    ///
    /// Fields left as `None` in the parameters keep their stored value.
    ///
    /// # Arguments
    /// - `params` - Update parameters with the hero id and optional fields
    ///
    /// # Returns
    /// - `Ok(Some(Hero))` - The updated hero
    /// - `Ok(None)` - No hero with that id
    /// - `Err(DbErr)` - Database error during query or update
    pub async fn update(&self, params: UpdateHeroParams) -> Result<Option<Hero>, DbErr> {
        let hero = entity::prelude::Hero::find_by_id(params.id)
            .one(self.db)
            .await?;

        if let Some(hero) = hero {
            let mut active_model: entity::hero::ActiveModel = hero.into();
            if let Some(name) = params.name {
                active_model.name = ActiveValue::Set(name);
            }
            if let Some(super_name) = params.super_name {
                active_model.super_name = ActiveValue::Set(super_name);
            }

            let entity = active_model.update(self.db).await?;

            Ok(Some(Hero::from_entity(entity)))
        } else {
            Ok(None)
        }
    }

    /// Deletes a hero and all of its hero-power associations.
    ///
    /// # Arguments
    /// - `id` - Hero id to delete
    ///
    /// # Returns
    /// - `Ok(true)` - Hero and its associations deleted
    /// - `Ok(false)` - No hero with that id
    /// - `Err(DbErr)` - Database error during delete
    pub async fn delete(&self, id: i32) -> Result<bool, DbErr> {
        let hero = entity::prelude::Hero::find_by_id(id).one(self.db).await?;

        if hero.is_none() {
            return Ok(false);
        }

        // Delete associations before the owning row
        entity::prelude::HeroPower::delete_many()
            .filter(entity::hero_power::Column::HeroId.eq(id))
            .exec(self.db)
            .await?;

        entity::prelude::Hero::delete_by_id(id).exec(self.db).await?;

        Ok(true)
    }

    /// Checks whether a hero with the given id exists.
    ///
    /// # Arguments
    /// - `id` - Hero id to check
    ///
    /// # Returns
    /// - `Ok(true)` - Hero exists
    /// - `Ok(false)` - No hero with that id
    /// - `Err(DbErr)` - Database error during count query
    pub async fn exists(&self, id: i32) -> Result<bool, DbErr> {
        let count = entity::prelude::Hero::find()
            .filter(entity::hero::Column::Id.eq(id))
            .count(self.db)
            .await?;

        Ok(count > 0)
    }
}
