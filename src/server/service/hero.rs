use sea_orm::DatabaseConnection;

use crate::server::{
    data::hero::HeroRepository,
    error::AppError,
    model::hero::{CreateHeroParams, Hero, HeroWithPowers, UpdateHeroParams},
};

pub struct HeroService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> HeroService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Gets all heroes as summaries without association data
    pub async fn get_all(&self) -> Result<Vec<Hero>, AppError> {
        let repo = HeroRepository::new(self.db);

        Ok(repo.get_all().await?)
    }

    /// Gets a hero by id with its power associations loaded
    pub async fn get_by_id(&self, id: i32) -> Result<Option<HeroWithPowers>, AppError> {
        let repo = HeroRepository::new(self.db);

        Ok(repo.get_with_powers(id).await?)
    }

    /// Creates a new hero
    ///
    /// Returns the detail representation; a freshly created hero has no
    /// associations yet.
    pub async fn create(&self, params: CreateHeroParams) -> Result<HeroWithPowers, AppError> {
        let repo = HeroRepository::new(self.db);

        let hero = repo.create(params).await?;

        Ok(HeroWithPowers::from_hero(hero))
    }

    /// Updates a hero, applying only the supplied fields
    /// Returns None if the hero doesn't exist
    pub async fn update(&self, params: UpdateHeroParams) -> Result<Option<HeroWithPowers>, AppError> {
        let repo = HeroRepository::new(self.db);

        let id = params.id;
        if repo.update(params).await?.is_none() {
            return Ok(None);
        }

        // Re-fetch with associations for the detail response
        Ok(repo.get_with_powers(id).await?)
    }

    /// Deletes a hero and all of its associations
    /// Returns true if deleted, false if not found
    pub async fn delete(&self, id: i32) -> Result<bool, AppError> {
        let repo = HeroRepository::new(self.db);

        Ok(repo.delete(id).await?)
    }
}
