use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::{ErrorDto, MessageDto, ValidationErrorsDto},
        hero_power::{CreateHeroPowerDto, HeroPowerDto, UpdateHeroPowerDto},
        power::PowerDto,
    },
    server::{
        error::AppError,
        model::hero_power::{CreateHeroPowerParams, UpdateHeroPowerParams},
        service::hero_power::HeroPowerService,
        state::AppState,
    },
};

/// Tag for grouping hero power endpoints in OpenAPI documentation
pub static HERO_POWER_TAG: &str = "hero_power";

/// Get the powers associated with a hero.
///
/// Returns every power the hero holds an association for. The hero itself is
/// looked up first; an unknown hero id is a not-found error, not an empty
/// list.
///
/// # Arguments
/// - `state` - Application state containing the database connection
/// - `hero_id` - Hero ID to fetch powers for
///
/// # Returns
/// - `200 OK` - List of the hero's powers
/// - `404 Not Found` - Hero not found
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/hero_powers/{hero_id}",
    tag = HERO_POWER_TAG,
    params(
        ("hero_id" = i32, Path, description = "Hero ID")
    ),
    responses(
        (status = 200, description = "Successfully retrieved the hero's powers", body = Vec<PowerDto>),
        (status = 404, description = "Hero not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_hero_powers(
    State(state): State<AppState>,
    Path(hero_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let service = HeroPowerService::new(&state.db);

    let powers = service.get_powers_by_hero(hero_id).await?;

    Ok((
        StatusCode::OK,
        Json(powers.into_iter().map(|p| p.into_dto()).collect::<Vec<_>>()),
    ))
}

/// Create a new hero-power association.
///
/// Associates an existing hero with an existing power at the given strength.
/// The hero is checked first, then the power, then the strength rating; the
/// first failing check determines the error.
///
/// # Arguments
/// - `state` - Application state containing the database connection
/// - `payload` - Association data (hero ID, power ID, and strength)
///
/// # Returns
/// - `201 Created` - Successfully created association
/// - `404 Not Found` - Hero or power not found
/// - `422 Unprocessable Entity` - Invalid strength rating
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    post,
    path = "/hero_powers",
    tag = HERO_POWER_TAG,
    request_body = CreateHeroPowerDto,
    responses(
        (status = 201, description = "Successfully created hero power", body = HeroPowerDto),
        (status = 404, description = "Hero or power not found", body = ErrorDto),
        (status = 422, description = "Invalid strength rating", body = ValidationErrorsDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_hero_power(
    State(state): State<AppState>,
    Json(payload): Json<CreateHeroPowerDto>,
) -> Result<impl IntoResponse, AppError> {
    let service = HeroPowerService::new(&state.db);

    // Convert DTO to server model
    let params = CreateHeroPowerParams::from_dto(payload);

    let hero_power = service.create(params).await?;

    Ok((StatusCode::CREATED, Json(hero_power.into_dto())))
}

/// Get the association for a hero/power pair.
///
/// Looks up the hero, then the power, then the association between them; the
/// first missing piece determines the error. When duplicate associations
/// exist for the pair, the first one is returned.
///
/// # Arguments
/// - `state` - Application state containing the database connection
/// - `hero_id` - Hero ID of the pair
/// - `power_id` - Power ID of the pair
///
/// # Returns
/// - `200 OK` - Association details
/// - `404 Not Found` - Hero, power, or association not found
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/heroes/{hero_id}/powers/{power_id}",
    tag = HERO_POWER_TAG,
    params(
        ("hero_id" = i32, Path, description = "Hero ID"),
        ("power_id" = i32, Path, description = "Power ID")
    ),
    responses(
        (status = 200, description = "Successfully retrieved hero power", body = HeroPowerDto),
        (status = 404, description = "Hero, power, or association not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_hero_power(
    State(state): State<AppState>,
    Path((hero_id, power_id)): Path<(i32, i32)>,
) -> Result<impl IntoResponse, AppError> {
    let service = HeroPowerService::new(&state.db);

    let hero_power = service.find_by_hero_and_power(hero_id, power_id).await?;

    Ok((StatusCode::OK, Json(hero_power.into_dto())))
}

/// Update the strength of a hero/power association.
///
/// Updates the association identified by the pair; when the strength field is
/// omitted the stored rating is kept. When duplicate associations exist for
/// the pair, the first one is updated.
///
/// # Arguments
/// - `state` - Application state containing the database connection
/// - `hero_id` - Hero ID of the pair
/// - `power_id` - Power ID of the pair
/// - `payload` - Updated association data (strength)
///
/// # Returns
/// - `200 OK` - Successfully updated association
/// - `404 Not Found` - Association not found
/// - `422 Unprocessable Entity` - Invalid strength rating
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    post,
    path = "/heroes/{hero_id}/powers/{power_id}",
    tag = HERO_POWER_TAG,
    params(
        ("hero_id" = i32, Path, description = "Hero ID"),
        ("power_id" = i32, Path, description = "Power ID")
    ),
    request_body = UpdateHeroPowerDto,
    responses(
        (status = 200, description = "Successfully updated hero power", body = HeroPowerDto),
        (status = 404, description = "Association not found", body = ErrorDto),
        (status = 422, description = "Invalid strength rating", body = ValidationErrorsDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_hero_power(
    State(state): State<AppState>,
    Path((hero_id, power_id)): Path<(i32, i32)>,
    Json(payload): Json<UpdateHeroPowerDto>,
) -> Result<impl IntoResponse, AppError> {
    let service = HeroPowerService::new(&state.db);

    // Convert DTO to server model
    let params = UpdateHeroPowerParams::from_dto(hero_id, power_id, payload);

    let hero_power = service.update(params).await?;

    Ok((StatusCode::OK, Json(hero_power.into_dto())))
}

/// Delete the association for a hero/power pair.
///
/// Removes the association identified by the pair; the hero and power
/// themselves are untouched. When duplicate associations exist for the pair,
/// only the first one is removed.
///
/// # Arguments
/// - `state` - Application state containing the database connection
/// - `hero_id` - Hero ID of the pair
/// - `power_id` - Power ID of the pair
///
/// # Returns
/// - `200 OK` - Successfully deleted association
/// - `404 Not Found` - Association not found
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    delete,
    path = "/heroes/{hero_id}/powers/{power_id}",
    tag = HERO_POWER_TAG,
    params(
        ("hero_id" = i32, Path, description = "Hero ID"),
        ("power_id" = i32, Path, description = "Power ID")
    ),
    responses(
        (status = 200, description = "Successfully deleted hero power", body = MessageDto),
        (status = 404, description = "Association not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_hero_power(
    State(state): State<AppState>,
    Path((hero_id, power_id)): Path<(i32, i32)>,
) -> Result<impl IntoResponse, AppError> {
    let service = HeroPowerService::new(&state.db);

    let deleted = service.delete(hero_id, power_id).await?;

    if deleted {
        Ok((
            StatusCode::OK,
            Json(MessageDto {
                message: "Hero power deleted".to_string(),
            }),
        ))
    } else {
        Err(AppError::NotFound("Hero power not found".to_string()))
    }
}
