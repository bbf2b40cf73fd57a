use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::{ErrorDto, MessageDto, ValidationErrorsDto},
        power::{CreatePowerDto, PowerDto, UpdatePowerDto},
    },
    server::{
        error::AppError,
        model::power::{CreatePowerParams, UpdatePowerParams},
        service::power::PowerService,
        state::AppState,
    },
};

/// Tag for grouping power endpoints in OpenAPI documentation
pub static POWER_TAG: &str = "power";

/// Get all powers.
///
/// # Arguments
/// - `state` - Application state containing the database connection
///
/// # Returns
/// - `200 OK` - List of powers
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/powers",
    tag = POWER_TAG,
    responses(
        (status = 200, description = "Successfully retrieved powers", body = Vec<PowerDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_powers(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let service = PowerService::new(&state.db);

    let powers = service.get_all().await?;

    Ok((
        StatusCode::OK,
        Json(powers.into_iter().map(|p| p.into_dto()).collect::<Vec<_>>()),
    ))
}

/// Create a new power.
///
/// Creates a power with the provided name and description. The description is
/// validated before anything is stored; descriptions shorter than 20
/// characters are rejected.
///
/// # Arguments
/// - `state` - Application state containing the database connection
/// - `payload` - Power creation data (name and description)
///
/// # Returns
/// - `201 Created` - Successfully created power
/// - `422 Unprocessable Entity` - Description too short
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    patch,
    path = "/powers",
    tag = POWER_TAG,
    request_body = CreatePowerDto,
    responses(
        (status = 201, description = "Successfully created power", body = PowerDto),
        (status = 422, description = "Description too short", body = ValidationErrorsDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_power(
    State(state): State<AppState>,
    Json(payload): Json<CreatePowerDto>,
) -> Result<impl IntoResponse, AppError> {
    let service = PowerService::new(&state.db);

    // Convert DTO to server model
    let params = CreatePowerParams::from_dto(payload);

    let power = service.create(params).await?;

    Ok((StatusCode::CREATED, Json(power.into_dto())))
}

/// Get a specific power by ID.
///
/// # Arguments
/// - `state` - Application state containing the database connection
/// - `id` - Power ID to fetch
///
/// # Returns
/// - `200 OK` - Power details
/// - `404 Not Found` - Power not found
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/powers/{id}",
    tag = POWER_TAG,
    params(
        ("id" = i32, Path, description = "Power ID")
    ),
    responses(
        (status = 200, description = "Successfully retrieved power", body = PowerDto),
        (status = 404, description = "Power not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_power_by_id(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let service = PowerService::new(&state.db);

    let power = service.get_by_id(id).await?;

    match power {
        Some(power) => Ok((StatusCode::OK, Json(power.into_dto()))),
        None => Err(AppError::NotFound("Power not found".to_string())),
    }
}

/// Update a power.
///
/// Updates an existing power with the supplied fields; omitted fields keep
/// their stored values. The description that would result from the update is
/// validated before anything is written.
///
/// # Arguments
/// - `state` - Application state containing the database connection
/// - `id` - Power ID to update
/// - `payload` - Updated power data (name and/or description)
///
/// # Returns
/// - `200 OK` - Successfully updated power
/// - `404 Not Found` - Power not found
/// - `422 Unprocessable Entity` - Description too short
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    patch,
    path = "/powers/{id}",
    tag = POWER_TAG,
    params(
        ("id" = i32, Path, description = "Power ID")
    ),
    request_body = UpdatePowerDto,
    responses(
        (status = 200, description = "Successfully updated power", body = PowerDto),
        (status = 404, description = "Power not found", body = ErrorDto),
        (status = 422, description = "Description too short", body = ValidationErrorsDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_power(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Json(payload): Json<UpdatePowerDto>,
) -> Result<impl IntoResponse, AppError> {
    let service = PowerService::new(&state.db);

    // Convert DTO to server model
    let params = UpdatePowerParams::from_dto(id, payload);

    let power = service.update(params).await?;

    match power {
        Some(power) => Ok((StatusCode::OK, Json(power.into_dto()))),
        None => Err(AppError::NotFound("Power not found".to_string())),
    }
}

/// Delete a power.
///
/// Deletes an existing power along with all of its hero associations.
///
/// # Arguments
/// - `state` - Application state containing the database connection
/// - `id` - Power ID to delete
///
/// # Returns
/// - `200 OK` - Successfully deleted power
/// - `404 Not Found` - Power not found
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    delete,
    path = "/powers/{id}",
    tag = POWER_TAG,
    params(
        ("id" = i32, Path, description = "Power ID")
    ),
    responses(
        (status = 200, description = "Successfully deleted power", body = MessageDto),
        (status = 404, description = "Power not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_power(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let service = PowerService::new(&state.db);

    let deleted = service.delete(id).await?;

    if deleted {
        Ok((
            StatusCode::OK,
            Json(MessageDto {
                message: "Power deleted".to_string(),
            }),
        ))
    } else {
        Err(AppError::NotFound("Power not found".to_string()))
    }
}
