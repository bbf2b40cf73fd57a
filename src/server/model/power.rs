//! Power domain models, parameters, and the description invariant.
//!
//! Provides domain models for powers and the validation rule constraining their
//! descriptions. Powers never carry association data; they serialize the same
//! way in list and detail contexts.

use crate::model::power::{CreatePowerDto, PowerDto, UpdatePowerDto};
use crate::server::error::AppError;

/// Minimum description length in characters.
pub const MIN_DESCRIPTION_LENGTH: usize = 20;

/// Validates a power description against the length invariant.
///
/// Length is counted in characters, not bytes, so multibyte text is not
/// penalized.
///
/// # Arguments
/// - `description` - The description text to validate
///
/// # Returns
/// - `Ok(())` - Description satisfies the invariant
/// - `Err(AppError::Validation)` - Description is shorter than 20 characters
pub fn validate_description(description: &str) -> Result<(), AppError> {
    if description.chars().count() >= MIN_DESCRIPTION_LENGTH {
        Ok(())
    } else {
        Err(AppError::Validation(
            "Description must be at least 20 characters long.".to_string(),
        ))
    }
}

/// Power with name and description.
#[derive(Debug, Clone, PartialEq)]
pub struct Power {
    pub id: i32,
    pub name: String,
    pub description: String,
}

impl Power {
    /// Converts an entity model to a power domain model at the repository boundary.
    ///
    /// # Arguments
    /// - `entity` - The power entity from the database
    ///
    /// # Returns
    /// - `Power` - The converted power domain model
    pub fn from_entity(entity: entity::power::Model) -> Self {
        Self {
            id: entity.id,
            name: entity.name,
            description: entity.description,
        }
    }

    /// Converts domain model to DTO for API responses.
    ///
    /// # Returns
    /// - `PowerDto` - DTO with all power fields for serialization
    pub fn into_dto(self) -> PowerDto {
        PowerDto {
            id: self.id,
            name: self.name,
            description: self.description,
        }
    }
}

/// Parameters for creating a new power.
#[derive(Debug, Clone)]
pub struct CreatePowerParams {
    pub name: String,
    pub description: String,
}

impl CreatePowerParams {
    pub fn from_dto(dto: CreatePowerDto) -> Self {
        Self {
            name: dto.name,
            description: dto.description,
        }
    }
}

/// Parameters for partially updating a power.
///
/// Fields left as `None` retain their stored value. The effective description
/// after merging is validated before anything is persisted.
#[derive(Debug, Clone)]
pub struct UpdatePowerParams {
    pub id: i32,
    pub name: Option<String>,
    pub description: Option<String>,
}

impl UpdatePowerParams {
    pub fn from_dto(id: i32, dto: UpdatePowerDto) -> Self {
        Self {
            id,
            name: dto.name,
            description: dto.description,
        }
    }
}
