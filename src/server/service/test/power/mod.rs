use crate::server::{
    error::AppError,
    model::power::{CreatePowerParams, UpdatePowerParams},
    service::power::PowerService,
};
use sea_orm::{EntityTrait, PaginatorTrait};
use test_utils::{builder::TestBuilder, factory};
