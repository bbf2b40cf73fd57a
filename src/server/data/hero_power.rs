//! Hero power data repository for database operations.
//!
//! This module provides the `HeroPowerRepository` for managing the join records
//! linking heroes to powers. Queries that need the power side of an association
//! use explicit joins; there is no implicit traversal from hero to power. A
//! hero/power pair may be associated more than once, so pair lookups operate on
//! the first matching row.

use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    QueryFilter, QueryOrder,
};

use crate::server::model::hero_power::{HeroPower, Strength};
use crate::server::model::power::Power;

/// Repository providing database operations for hero-power associations.
///
/// This struct holds a reference to the database connection and provides methods
/// for creating, reading, updating, and deleting association records.
pub struct HeroPowerRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> HeroPowerRepository<'a> {
    /// Creates a new HeroPowerRepository instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    ///
    /// # Returns
    /// - `HeroPowerRepository` - New repository instance
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a new association between a hero and a power.
    ///
    /// Both ids must reference existing rows; the service layer verifies this
    /// before calling. The strength arrives already validated as an enum, so
    /// only canonical values reach storage.
    ///
    /// # Arguments
    /// - `hero_id` - Id of the hero side of the association
    /// - `power_id` - Id of the power side of the association
    /// - `strength` - Validated strength rating
    ///
    /// # Returns
    /// - `Ok(HeroPower)` - The created association with its assigned id
    /// - `Err(DbErr)` - Database error during insert
    pub async fn create(
        &self,
        hero_id: i32,
        power_id: i32,
        strength: Strength,
    ) -> Result<HeroPower, DbErr> {
        let entity = entity::hero_power::ActiveModel {
            strength: ActiveValue::Set(strength.to_string()),
            hero_id: ActiveValue::Set(hero_id),
            power_id: ActiveValue::Set(power_id),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        HeroPower::from_entity(entity)
    }

    /// Gets the powers associated with a hero, ordered by association id.
    ///
    /// Joins from the association rows to their powers explicitly. The caller
    /// is responsible for checking that the hero itself exists.
    ///
    /// # Arguments
    /// - `hero_id` - Hero id to collect powers for
    ///
    /// # Returns
    /// - `Ok(Vec<Power>)` - Powers held by the hero (empty if none)
    /// - `Err(DbErr)` - Database error during query or corrupt association data
    pub async fn get_powers_by_hero(&self, hero_id: i32) -> Result<Vec<Power>, DbErr> {
        let rows = entity::prelude::HeroPower::find()
            .filter(entity::hero_power::Column::HeroId.eq(hero_id))
            .find_also_related(entity::prelude::Power)
            .order_by_asc(entity::hero_power::Column::Id)
            .all(self.db)
            .await?;

        rows.into_iter()
            .map(|(hero_power, power)| {
                power.map(Power::from_entity).ok_or_else(|| {
                    DbErr::Custom(format!(
                        "Hero power {} references missing power {}",
                        hero_power.id, hero_power.power_id
                    ))
                })
            })
            .collect()
    }

    /// Finds the first association matching a hero/power pair.
    ///
    /// # Arguments
    /// - `hero_id` - Hero side of the pair
    /// - `power_id` - Power side of the pair
    ///
    /// # Returns
    /// - `Ok(Some(HeroPower))` - First matching association
    /// - `Ok(None)` - No association for that pair
    /// - `Err(DbErr)` - Database error during query or corrupt stored strength
    pub async fn find_by_hero_and_power(
        &self,
        hero_id: i32,
        power_id: i32,
    ) -> Result<Option<HeroPower>, DbErr> {
        let entity = entity::prelude::HeroPower::find()
            .filter(entity::hero_power::Column::HeroId.eq(hero_id))
            .filter(entity::hero_power::Column::PowerId.eq(power_id))
            .order_by_asc(entity::hero_power::Column::Id)
            .one(self.db)
            .await?;

        entity.map(HeroPower::from_entity).transpose()
    }

    /// Updates the strength of an association by its id.
    ///
    /// # Arguments
    /// - `id` - Association id to update
    /// - `strength` - Validated strength rating to store
    ///
    /// # Returns
    /// - `Ok(Some(HeroPower))` - The updated association
    /// - `Ok(None)` - No association with that id
    /// - `Err(DbErr)` - Database error during query or update
    pub async fn update_strength(
        &self,
        id: i32,
        strength: Strength,
    ) -> Result<Option<HeroPower>, DbErr> {
        let hero_power = entity::prelude::HeroPower::find_by_id(id)
            .one(self.db)
            .await?;

        if let Some(hero_power) = hero_power {
            let mut active_model: entity::hero_power::ActiveModel = hero_power.into();
            active_model.strength = ActiveValue::Set(strength.to_string());

            let entity = active_model.update(self.db).await?;

            Ok(Some(HeroPower::from_entity(entity)?))
        } else {
            Ok(None)
        }
    }

    /// Deletes the first association matching a hero/power pair.
    ///
    /// Duplicate pairs are possible; only the first matching row is removed.
    ///
    /// # Arguments
    /// - `hero_id` - Hero side of the pair
    /// - `power_id` - Power side of the pair
    ///
    /// # Returns
    /// - `Ok(true)` - Association deleted
    /// - `Ok(false)` - No association for that pair
    /// - `Err(DbErr)` - Database error during delete
    pub async fn delete_by_hero_and_power(
        &self,
        hero_id: i32,
        power_id: i32,
    ) -> Result<bool, DbErr> {
        let entity = entity::prelude::HeroPower::find()
            .filter(entity::hero_power::Column::HeroId.eq(hero_id))
            .filter(entity::hero_power::Column::PowerId.eq(power_id))
            .order_by_asc(entity::hero_power::Column::Id)
            .one(self.db)
            .await?;

        if let Some(entity) = entity {
            entity::prelude::HeroPower::delete_by_id(entity.id)
                .exec(self.db)
                .await?;

            Ok(true)
        } else {
            Ok(false)
        }
    }
}
