use axum::Router;
use tower_http::cors::CorsLayer;
use utoipa::OpenApi;
use utoipa_axum::{router::OpenApiRouter, routes};
use utoipa_swagger_ui::SwaggerUi;

use crate::server::{
    controller::{
        hero::{
            create_hero, delete_hero, get_hero_by_id, get_heroes, update_hero, __path_create_hero,
            __path_delete_hero, __path_get_hero_by_id, __path_get_heroes, __path_update_hero,
            HERO_TAG,
        },
        hero_power::{
            create_hero_power, delete_hero_power, get_hero_power, get_hero_powers,
            update_hero_power, __path_create_hero_power, __path_delete_hero_power,
            __path_get_hero_power, __path_get_hero_powers, __path_update_hero_power,
            HERO_POWER_TAG,
        },
        index,
        power::{
            create_power, delete_power, get_power_by_id, get_powers, update_power,
            __path_create_power, __path_delete_power, __path_get_power_by_id, __path_get_powers,
            __path_update_power, POWER_TAG,
        },
        __path_index,
    },
    state::AppState,
};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Herodex API",
        description = "A JSON API for tracking superheroes and the powers they hold."
    ),
    tags(
        (name = HERO_TAG, description = "Hero management endpoints"),
        (name = POWER_TAG, description = "Power management endpoints"),
        (name = HERO_POWER_TAG, description = "Hero-power association endpoints")
    )
)]
struct ApiDoc;

/// Builds the application router with every API route registered.
///
/// Routes are registered through `OpenApiRouter` so the OpenAPI document is
/// assembled from the same handler annotations that serve the requests. The
/// Swagger UI is mounted at `/swagger-ui` with the document itself at
/// `/api-docs/openapi.json`.
pub fn router() -> Router<AppState> {
    let (router, api) = OpenApiRouter::with_openapi(ApiDoc::openapi())
        .routes(routes!(index))
        .routes(routes!(get_heroes, create_hero))
        .routes(routes!(get_hero_by_id, update_hero, delete_hero))
        .routes(routes!(get_powers, create_power))
        .routes(routes!(get_power_by_id, update_power, delete_power))
        .routes(routes!(get_hero_powers))
        .routes(routes!(create_hero_power))
        .routes(routes!(get_hero_power, update_hero_power, delete_hero_power))
        .split_for_parts();

    router
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", api))
        .layer(CorsLayer::permissive())
}
