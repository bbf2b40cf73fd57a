//! Hero domain models and parameters.
//!
//! Provides domain models for heroes, the owning side of hero-power associations.
//! Includes parameter types for create/update operations and a detail model
//! carrying the hero's associations for single-hero views.

use crate::model::hero::{CreateHeroDto, HeroDto, HeroListItemDto, UpdateHeroDto};
use crate::server::model::hero_power::HeroPowerWithPower;

/// Hero with name and alter ego.
#[derive(Debug, Clone, PartialEq)]
pub struct Hero {
    pub id: i32,
    pub name: String,
    pub super_name: String,
}

impl Hero {
    /// Converts an entity model to a hero domain model at the repository boundary.
    ///
    /// # Arguments
    /// - `entity` - The hero entity from the database
    ///
    /// # Returns
    /// - `Hero` - The converted hero domain model
    pub fn from_entity(entity: entity::hero::Model) -> Self {
        Self {
            id: entity.id,
            name: entity.name,
            super_name: entity.super_name,
        }
    }

    /// Converts domain model to a summary DTO for list responses.
    ///
    /// # Returns
    /// - `HeroListItemDto` - DTO without association data for serialization
    pub fn into_list_item_dto(self) -> HeroListItemDto {
        HeroListItemDto {
            id: self.id,
            name: self.name,
            super_name: self.super_name,
        }
    }
}

/// Hero with its power associations loaded.
///
/// Used for single-hero views, where each association carries its power but
/// never re-nests the hero.
#[derive(Debug, Clone, PartialEq)]
pub struct HeroWithPowers {
    pub id: i32,
    pub name: String,
    pub super_name: String,
    pub hero_powers: Vec<HeroPowerWithPower>,
}

impl HeroWithPowers {
    /// Builds a detail model from a hero with no associations loaded.
    ///
    /// Used after creation, before any associations can exist.
    ///
    /// # Arguments
    /// - `hero` - The hero domain model
    ///
    /// # Returns
    /// - `HeroWithPowers` - Detail model with an empty association list
    pub fn from_hero(hero: Hero) -> Self {
        Self {
            id: hero.id,
            name: hero.name,
            super_name: hero.super_name,
            hero_powers: Vec::new(),
        }
    }

    /// Converts domain model to DTO for API responses.
    ///
    /// # Returns
    /// - `HeroDto` - DTO with nested associations for serialization
    pub fn into_dto(self) -> HeroDto {
        HeroDto {
            id: self.id,
            name: self.name,
            super_name: self.super_name,
            hero_powers: self
                .hero_powers
                .into_iter()
                .map(|hp| hp.into_dto())
                .collect(),
        }
    }
}

/// Parameters for creating a new hero.
#[derive(Debug, Clone)]
pub struct CreateHeroParams {
    pub name: String,
    pub super_name: String,
}

impl CreateHeroParams {
    pub fn from_dto(dto: CreateHeroDto) -> Self {
        Self {
            name: dto.name,
            super_name: dto.super_name,
        }
    }
}

/// Parameters for partially updating a hero.
///
/// Fields left as `None` retain their stored value.
#[derive(Debug, Clone)]
pub struct UpdateHeroParams {
    pub id: i32,
    pub name: Option<String>,
    pub super_name: Option<String>,
}

impl UpdateHeroParams {
    pub fn from_dto(id: i32, dto: UpdateHeroDto) -> Self {
        Self {
            id,
            name: dto.name,
            super_name: dto.super_name,
        }
    }
}
