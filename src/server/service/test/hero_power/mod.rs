use crate::server::{
    error::AppError,
    model::hero_power::{CreateHeroPowerParams, Strength, UpdateHeroPowerParams},
    service::hero_power::HeroPowerService,
};
use sea_orm::{EntityTrait, PaginatorTrait};
use test_utils::{builder::TestBuilder, factory};

mod create;
