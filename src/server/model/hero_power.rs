//! Hero power domain models, parameters, and the strength invariant.
//!
//! Provides domain models for the join entity linking heroes to powers. The
//! `strength` attribute is modeled as an enum so only the three allowed ratings
//! can reach the data layer; raw strings are parsed at the service boundary
//! before any persistence call.

use std::fmt;
use std::str::FromStr;

use sea_orm::DbErr;

use crate::model::hero_power::{
    CreateHeroPowerDto, HeroPowerDto, HeroPowerWithPowerDto, UpdateHeroPowerDto,
};
use crate::server::model::power::Power;

/// Strength rating of a hero-power association.
///
/// Stored as its canonical string form (`"Strong"`, `"Weak"`, `"Average"`).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Strength {
    Strong,
    Weak,
    Average,
}

impl Strength {
    /// Returns the canonical string form used in storage and API responses.
    pub fn as_str(&self) -> &'static str {
        match self {
            Strength::Strong => "Strong",
            Strength::Weak => "Weak",
            Strength::Average => "Average",
        }
    }
}

impl FromStr for Strength {
    type Err = String;

    /// Parses a strength rating, rejecting anything outside the three allowed
    /// values. Matching is case-sensitive; the error carries the message shown
    /// to API clients.
    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "Strong" => Ok(Strength::Strong),
            "Weak" => Ok(Strength::Weak),
            "Average" => Ok(Strength::Average),
            _ => Err("Strength must be \"Strong\", \"Weak\", or \"Average\".".to_string()),
        }
    }
}

impl fmt::Display for Strength {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Hero-power association with its strength rating.
#[derive(Debug, Clone, PartialEq)]
pub struct HeroPower {
    pub id: i32,
    pub strength: Strength,
    pub hero_id: i32,
    pub power_id: i32,
}

impl HeroPower {
    /// Converts an entity model to a domain model at the repository boundary.
    ///
    /// # Arguments
    /// - `entity` - The hero power entity from the database
    ///
    /// # Returns
    /// - `Ok(HeroPower)` - The converted domain model
    /// - `Err(DbErr::Custom)` - The stored strength is not one of the allowed values
    pub fn from_entity(entity: entity::hero_power::Model) -> Result<Self, DbErr> {
        let strength = entity
            .strength
            .parse::<Strength>()
            .map_err(|_| DbErr::Custom(format!("Invalid stored strength: {}", entity.strength)))?;

        Ok(Self {
            id: entity.id,
            strength,
            hero_id: entity.hero_id,
            power_id: entity.power_id,
        })
    }

    /// Converts domain model to DTO for API responses.
    ///
    /// # Returns
    /// - `HeroPowerDto` - DTO with all association fields for serialization
    pub fn into_dto(self) -> HeroPowerDto {
        HeroPowerDto {
            id: self.id,
            strength: self.strength.to_string(),
            hero_id: self.hero_id,
            power_id: self.power_id,
        }
    }
}

/// Hero-power association with its power loaded.
///
/// Used inside hero detail views; the hero side is never re-nested.
#[derive(Debug, Clone, PartialEq)]
pub struct HeroPowerWithPower {
    pub id: i32,
    pub strength: Strength,
    pub hero_id: i32,
    pub power_id: i32,
    pub power: Power,
}

impl HeroPowerWithPower {
    /// Converts entity models to a domain model at the repository boundary.
    ///
    /// The power side comes from a join query; a missing power means the row
    /// violates its foreign key and is surfaced as corrupt data rather than
    /// silently skipped.
    ///
    /// # Arguments
    /// - `entity` - The hero power entity from the database
    /// - `power` - The joined power entity, if the join matched
    ///
    /// # Returns
    /// - `Ok(HeroPowerWithPower)` - The converted domain model
    /// - `Err(DbErr::Custom)` - Invalid stored strength or missing power row
    pub fn from_entity(
        entity: entity::hero_power::Model,
        power: Option<entity::power::Model>,
    ) -> Result<Self, DbErr> {
        let strength = entity
            .strength
            .parse::<Strength>()
            .map_err(|_| DbErr::Custom(format!("Invalid stored strength: {}", entity.strength)))?;

        let power = power.ok_or_else(|| {
            DbErr::Custom(format!(
                "Hero power {} references missing power {}",
                entity.id, entity.power_id
            ))
        })?;

        Ok(Self {
            id: entity.id,
            strength,
            hero_id: entity.hero_id,
            power_id: entity.power_id,
            power: Power::from_entity(power),
        })
    }

    /// Converts domain model to DTO for API responses.
    ///
    /// # Returns
    /// - `HeroPowerWithPowerDto` - DTO with the nested power for serialization
    pub fn into_dto(self) -> HeroPowerWithPowerDto {
        HeroPowerWithPowerDto {
            id: self.id,
            strength: self.strength.to_string(),
            hero_id: self.hero_id,
            power_id: self.power_id,
            power: self.power.into_dto(),
        }
    }
}

/// Parameters for creating a new hero-power association.
///
/// Carries the raw strength string; the service parses it into [`Strength`]
/// before the repository is involved.
#[derive(Debug, Clone)]
pub struct CreateHeroPowerParams {
    pub hero_id: i32,
    pub power_id: i32,
    pub strength: String,
}

impl CreateHeroPowerParams {
    pub fn from_dto(dto: CreateHeroPowerDto) -> Self {
        Self {
            hero_id: dto.hero_id,
            power_id: dto.power_id,
            strength: dto.strength,
        }
    }
}

/// Parameters for updating a hero-power association's strength.
///
/// A `None` strength retains the stored rating; the effective value is
/// re-validated before anything is persisted.
#[derive(Debug, Clone)]
pub struct UpdateHeroPowerParams {
    pub hero_id: i32,
    pub power_id: i32,
    pub strength: Option<String>,
}

impl UpdateHeroPowerParams {
    pub fn from_dto(hero_id: i32, power_id: i32, dto: UpdateHeroPowerDto) -> Self {
        Self {
            hero_id,
            power_id,
            strength: dto.strength,
        }
    }
}
