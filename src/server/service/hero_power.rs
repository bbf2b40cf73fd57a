use sea_orm::DatabaseConnection;

use crate::server::{
    data::{hero::HeroRepository, hero_power::HeroPowerRepository, power::PowerRepository},
    error::AppError,
    model::{
        hero_power::{CreateHeroPowerParams, HeroPower, Strength, UpdateHeroPowerParams},
        power::Power,
    },
};

pub struct HeroPowerService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> HeroPowerService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Gets the powers associated with a hero
    ///
    /// The hero is checked first; an unknown hero id is reported as not found
    /// rather than returning an empty list.
    pub async fn get_powers_by_hero(&self, hero_id: i32) -> Result<Vec<Power>, AppError> {
        let hero_repo = HeroRepository::new(self.db);

        if !hero_repo.exists(hero_id).await? {
            return Err(AppError::NotFound("Hero not found".to_string()));
        }

        let repo = HeroPowerRepository::new(self.db);

        Ok(repo.get_powers_by_hero(hero_id).await?)
    }

    /// Creates a new hero-power association
    ///
    /// Lookups are staged: the hero is checked first, then the power, so the
    /// error names the first missing side. The strength is validated before
    /// the insert; an invalid rating rejects the request with nothing stored.
    pub async fn create(&self, params: CreateHeroPowerParams) -> Result<HeroPower, AppError> {
        let hero_repo = HeroRepository::new(self.db);
        if !hero_repo.exists(params.hero_id).await? {
            return Err(AppError::NotFound("Hero not found".to_string()));
        }

        let power_repo = PowerRepository::new(self.db);
        if !power_repo.exists(params.power_id).await? {
            return Err(AppError::NotFound("Power not found".to_string()));
        }

        let strength = params
            .strength
            .parse::<Strength>()
            .map_err(AppError::Validation)?;

        let repo = HeroPowerRepository::new(self.db);

        Ok(repo.create(params.hero_id, params.power_id, strength).await?)
    }

    /// Gets the association for a hero/power pair
    ///
    /// Lookups are staged: hero, then power, then the association row, so the
    /// error names the first missing piece.
    pub async fn find_by_hero_and_power(
        &self,
        hero_id: i32,
        power_id: i32,
    ) -> Result<HeroPower, AppError> {
        let hero_repo = HeroRepository::new(self.db);
        if !hero_repo.exists(hero_id).await? {
            return Err(AppError::NotFound("Hero not found".to_string()));
        }

        let power_repo = PowerRepository::new(self.db);
        if !power_repo.exists(power_id).await? {
            return Err(AppError::NotFound("Power not found".to_string()));
        }

        let repo = HeroPowerRepository::new(self.db);

        repo.find_by_hero_and_power(hero_id, power_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Hero power not found".to_string()))
    }

    /// Updates the strength of a hero/power association
    ///
    /// The effective strength (the supplied value, or the stored one when the
    /// field is omitted) is validated before anything is written; an invalid
    /// rating leaves the association unchanged.
    pub async fn update(&self, params: UpdateHeroPowerParams) -> Result<HeroPower, AppError> {
        let repo = HeroPowerRepository::new(self.db);

        let Some(hero_power) = repo
            .find_by_hero_and_power(params.hero_id, params.power_id)
            .await?
        else {
            return Err(AppError::NotFound("Hero power not found".to_string()));
        };

        let strength = match params.strength {
            Some(value) => value.parse::<Strength>().map_err(AppError::Validation)?,
            None => hero_power.strength,
        };

        repo.update_strength(hero_power.id, strength)
            .await?
            .ok_or_else(|| AppError::NotFound("Hero power not found".to_string()))
    }

    /// Deletes the association for a hero/power pair
    /// Returns true if deleted, false if no association exists
    pub async fn delete(&self, hero_id: i32, power_id: i32) -> Result<bool, AppError> {
        let repo = HeroPowerRepository::new(self.db);

        Ok(repo.delete_by_hero_and_power(hero_id, power_id).await?)
    }
}
