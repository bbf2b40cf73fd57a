use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::model::hero_power::HeroPowerWithPowerDto;

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct HeroListItemDto {
    pub id: i32,
    pub name: String,
    pub super_name: String,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct HeroDto {
    pub id: i32,
    pub name: String,
    pub super_name: String,
    pub hero_powers: Vec<HeroPowerWithPowerDto>,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct CreateHeroDto {
    pub name: String,
    pub super_name: String,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct UpdateHeroDto {
    pub name: Option<String>,
    pub super_name: Option<String>,
}
