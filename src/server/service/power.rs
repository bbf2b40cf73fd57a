use sea_orm::DatabaseConnection;

use crate::server::{
    data::power::PowerRepository,
    error::AppError,
    model::power::{validate_description, CreatePowerParams, Power, UpdatePowerParams},
};

pub struct PowerService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> PowerService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Gets all powers
    pub async fn get_all(&self) -> Result<Vec<Power>, AppError> {
        let repo = PowerRepository::new(self.db);

        Ok(repo.get_all().await?)
    }

    /// Gets a power by id
    pub async fn get_by_id(&self, id: i32) -> Result<Option<Power>, AppError> {
        let repo = PowerRepository::new(self.db);

        Ok(repo.get_by_id(id).await?)
    }

    /// Creates a new power
    ///
    /// The description is validated before the insert; an invalid description
    /// rejects the request with no row persisted.
    pub async fn create(&self, params: CreatePowerParams) -> Result<Power, AppError> {
        validate_description(&params.description)?;

        let repo = PowerRepository::new(self.db);

        Ok(repo.create(params).await?)
    }

    /// Updates a power, applying only the supplied fields
    ///
    /// The effective description after merging the supplied fields with the
    /// stored row is validated before anything is written; an invalid
    /// description leaves the power unchanged. Returns None if the power
    /// doesn't exist.
    pub async fn update(&self, params: UpdatePowerParams) -> Result<Option<Power>, AppError> {
        let repo = PowerRepository::new(self.db);

        let Some(power) = repo.get_by_id(params.id).await? else {
            return Ok(None);
        };

        let effective_description = params.description.as_deref().unwrap_or(&power.description);
        validate_description(effective_description)?;

        Ok(repo.update(params).await?)
    }

    /// Deletes a power and all of its associations
    /// Returns true if deleted, false if not found
    pub async fn delete(&self, id: i32) -> Result<bool, AppError> {
        let repo = PowerRepository::new(self.db);

        Ok(repo.delete(id).await?)
    }
}
