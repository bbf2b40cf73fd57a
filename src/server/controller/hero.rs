use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::{ErrorDto, MessageDto},
        hero::{CreateHeroDto, HeroDto, HeroListItemDto, UpdateHeroDto},
    },
    server::{
        error::AppError,
        model::hero::{CreateHeroParams, UpdateHeroParams},
        service::hero::HeroService,
        state::AppState,
    },
};

/// Tag for grouping hero endpoints in OpenAPI documentation
pub static HERO_TAG: &str = "hero";

/// Get all heroes.
///
/// Returns every hero as a summary without its power associations.
///
/// # Arguments
/// - `state` - Application state containing the database connection
///
/// # Returns
/// - `200 OK` - List of hero summaries
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/heroes",
    tag = HERO_TAG,
    responses(
        (status = 200, description = "Successfully retrieved heroes", body = Vec<HeroListItemDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_heroes(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let service = HeroService::new(&state.db);

    let heroes = service.get_all().await?;

    Ok((
        StatusCode::OK,
        Json(
            heroes
                .into_iter()
                .map(|h| h.into_list_item_dto())
                .collect::<Vec<_>>(),
        ),
    ))
}

/// Create a new hero.
///
/// Creates a hero with the provided name and super name. The response carries
/// the hero detail representation; a freshly created hero has no power
/// associations yet.
///
/// # Arguments
/// - `state` - Application state containing the database connection
/// - `payload` - Hero creation data (name and super name)
///
/// # Returns
/// - `201 Created` - Successfully created hero
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    post,
    path = "/heroes",
    tag = HERO_TAG,
    request_body = CreateHeroDto,
    responses(
        (status = 201, description = "Successfully created hero", body = HeroDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_hero(
    State(state): State<AppState>,
    Json(payload): Json<CreateHeroDto>,
) -> Result<impl IntoResponse, AppError> {
    let service = HeroService::new(&state.db);

    // Convert DTO to server model
    let params = CreateHeroParams::from_dto(payload);

    let hero = service.create(params).await?;

    Ok((StatusCode::CREATED, Json(hero.into_dto())))
}

/// Get a specific hero by ID.
///
/// Returns the hero detail representation including its power associations,
/// each carrying the full power it refers to.
///
/// # Arguments
/// - `state` - Application state containing the database connection
/// - `id` - Hero ID to fetch
///
/// # Returns
/// - `200 OK` - Hero details with power associations
/// - `404 Not Found` - Hero not found
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/heroes/{id}",
    tag = HERO_TAG,
    params(
        ("id" = i32, Path, description = "Hero ID")
    ),
    responses(
        (status = 200, description = "Successfully retrieved hero", body = HeroDto),
        (status = 404, description = "Hero not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_hero_by_id(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let service = HeroService::new(&state.db);

    let hero = service.get_by_id(id).await?;

    match hero {
        Some(hero) => Ok((StatusCode::OK, Json(hero.into_dto()))),
        None => Err(AppError::NotFound("Hero not found".to_string())),
    }
}

/// Update a hero.
///
/// Updates an existing hero with the supplied fields; omitted fields keep
/// their stored values. The response carries the hero detail representation
/// including its power associations.
///
/// # Arguments
/// - `state` - Application state containing the database connection
/// - `id` - Hero ID to update
/// - `payload` - Updated hero data (name and/or super name)
///
/// # Returns
/// - `200 OK` - Successfully updated hero
/// - `404 Not Found` - Hero not found
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    patch,
    path = "/heroes/{id}",
    tag = HERO_TAG,
    params(
        ("id" = i32, Path, description = "Hero ID")
    ),
    request_body = UpdateHeroDto,
    responses(
        (status = 200, description = "Successfully updated hero", body = HeroDto),
        (status = 404, description = "Hero not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_hero(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Json(payload): Json<UpdateHeroDto>,
) -> Result<impl IntoResponse, AppError> {
    let service = HeroService::new(&state.db);

    // Convert DTO to server model
    let params = UpdateHeroParams::from_dto(id, payload);

    let hero = service.update(params).await?;

    match hero {
        Some(hero) => Ok((StatusCode::OK, Json(hero.into_dto()))),
        None => Err(AppError::NotFound("Hero not found".to_string())),
    }
}

/// Delete a hero.
///
/// Deletes an existing hero along with all of its power associations.
///
/// # Arguments
/// - `state` - Application state containing the database connection
/// - `id` - Hero ID to delete
///
/// # Returns
/// - `200 OK` - Successfully deleted hero
/// - `404 Not Found` - Hero not found
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    delete,
    path = "/heroes/{id}",
    tag = HERO_TAG,
    params(
        ("id" = i32, Path, description = "Hero ID")
    ),
    responses(
        (status = 200, description = "Successfully deleted hero", body = MessageDto),
        (status = 404, description = "Hero not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_hero(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let service = HeroService::new(&state.db);

    let deleted = service.delete(id).await?;

    if deleted {
        Ok((
            StatusCode::OK,
            Json(MessageDto {
                message: "Hero deleted".to_string(),
            }),
        ))
    } else {
        Err(AppError::NotFound("Hero not found".to_string()))
    }
}
