//! Power data repository for database operations.
//!
//! This module provides the `PowerRepository` for managing power records in the
//! database. Deleting a power removes its hero-power associations in the same
//! operation, mirroring the hero deletion policy.

use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder,
};

use crate::server::model::power::{CreatePowerParams, Power, UpdatePowerParams};

/// Repository providing database operations for power management.
pub struct PowerRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> PowerRepository<'a> {
    /// Creates a new PowerRepository instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    ///
    /// # Returns
    /// - `PowerRepository` - New repository instance
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Gets all powers ordered by id.
    pub async fn get_all(&self) -> Result<Vec<Power>, DbErr> {
        let entities = entity::prelude::Power::find()
            .order_by_asc(entity::power::Column::Id)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(Power::from_entity).collect())
    }

    /// Gets a power by id.
    pub async fn get_by_id(&self, id: i32) -> Result<Option<Power>, DbErr> {
        let entity = entity::prelude::Power::find_by_id(id).one(self.db).await?;

        Ok(entity.map(Power::from_entity))
    }

    /// Creates a new power from parameters.
    ///
    /// The description invariant is enforced by the service layer before this
    /// method is called.
    ///
    /// # Arguments
    /// - `params` - Power creation parameters (name and description)
    ///
    /// # Returns
    /// - `Ok(Power)` - The created power with its assigned id
    /// - `Err(DbErr)` - Database error during insert
    pub async fn create(&self, params: CreatePowerParams) -> Result<Power, DbErr> {
        let entity = entity::power::ActiveModel {
            name: ActiveValue::Set(params.name),
            description: ActiveValue::Set(params.description),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(Power::from_entity(entity))
    }

    /// Updates a power's fields, applying only those supplied.
    ///
    /// Fields left as `None` in the parameters keep their stored value.
    ///
    /// # Arguments
    /// - `params` - Update parameters with the power id and optional fields
    ///
    /// # Returns
    /// - `Ok(Some(Power))` - The updated power
    /// - `Ok(None)` - No power with that id
    /// - `Err(DbErr)` - Database error during query or update
    pub async fn update(&self, params: UpdatePowerParams) -> Result<Option<Power>, DbErr> {
        let power = entity::prelude::Power::find_by_id(params.id)
            .one(self.db)
            .await?;

        if let Some(power) = power {
            let mut active_model: entity::power::ActiveModel = power.into();
            if let Some(name) = params.name {
                active_model.name = ActiveValue::Set(name);
            }
            if let Some(description) = params.description {
                active_model.description = ActiveValue::Set(description);
            }

            let entity = active_model.update(self.db).await?;

            Ok(Some(Power::from_entity(entity)))
        } else {
            Ok(None)
        }
    }

    /// Deletes a power and all of its hero-power associations.
    ///
    /// # Arguments
    /// - `id` - Power id to delete
    ///
    /// # Returns
    /// - `Ok(true)` - Power and its associations deleted
    /// - `Ok(false)` - No power with that id
    /// - `Err(DbErr)` - Database error during delete
    pub async fn delete(&self, id: i32) -> Result<bool, DbErr> {
        let power = entity::prelude::Power::find_by_id(id).one(self.db).await?;

        if power.is_none() {
            return Ok(false);
        }

        // Delete associations before the owning row
        entity::prelude::HeroPower::delete_many()
            .filter(entity::hero_power::Column::PowerId.eq(id))
            .exec(self.db)
            .await?;

        entity::prelude::Power::delete_by_id(id).exec(self.db).await?;

        Ok(true)
    }

    /// Checks whether a power with the given id exists.
    pub async fn exists(&self, id: i32) -> Result<bool, DbErr> {
        let count = entity::prelude::Power::find()
            .filter(entity::power::Column::Id.eq(id))
            .count(self.db)
            .await?;

        Ok(count > 0)
    }
}
