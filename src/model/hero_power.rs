use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::model::power::PowerDto;

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct HeroPowerDto {
    pub id: i32,
    pub strength: String,
    pub hero_id: i32,
    pub power_id: i32,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct HeroPowerWithPowerDto {
    pub id: i32,
    pub strength: String,
    pub hero_id: i32,
    pub power_id: i32,
    pub power: PowerDto,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct CreateHeroPowerDto {
    pub strength: String,
    pub hero_id: i32,
    pub power_id: i32,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct UpdateHeroPowerDto {
    pub strength: Option<String>,
}
