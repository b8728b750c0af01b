//! Ingredient type handlers.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::Json,
    routing::get,
    Router,
};
use serde::Deserialize;
use utoipa::ToSchema;
use validator::Validate;

use common::AppResult;
use domain::{
    deserialize_present, IngredientType, IngredientTypeChanges, NewIngredientType, RawNumber,
};

use crate::extractors::ValidatedJson;
use crate::state::AppState;

/// Ingredient type creation request.
///
/// `repeatable` accepts a number or numeric text; it is coerced by the service.
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct CreateIngredientTypeRequest {
    #[validate(length(min = 1, max = 100, message = "Name must be between 1 and 100 characters"))]
    #[schema(example = "Tempero")]
    pub name: String,
    #[serde(default)]
    #[schema(value_type = i32, example = 3)]
    pub repeatable: RawNumber,
}

impl From<CreateIngredientTypeRequest> for NewIngredientType {
    fn from(req: CreateIngredientTypeRequest) -> Self {
        NewIngredientType {
            name: req.name,
            repeatable: req.repeatable,
        }
    }
}

/// Partial ingredient type update
#[derive(Debug, Default, Deserialize, Validate, ToSchema)]
pub struct UpdateIngredientTypeRequest {
    #[validate(length(min = 1, max = 100, message = "Name must be between 1 and 100 characters"))]
    pub name: Option<String>,
    /// Checked whenever present, including an explicit `null`
    #[serde(default, deserialize_with = "deserialize_present")]
    #[schema(value_type = Option<i32>, example = 1)]
    pub repeatable: Option<RawNumber>,
}

impl From<UpdateIngredientTypeRequest> for IngredientTypeChanges {
    fn from(req: UpdateIngredientTypeRequest) -> Self {
        IngredientTypeChanges {
            name: req.name,
            repeatable: req.repeatable,
        }
    }
}

/// Create ingredient type routes
pub fn ingredient_type_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(list_ingredient_types).post(create_ingredient_type))
        .route(
            "/:id",
            get(get_ingredient_type)
                .patch(update_ingredient_type)
                .delete(remove_ingredient_type),
        )
}

/// Create an ingredient type
#[utoipa::path(
    post,
    path = "/ingredient-types",
    tag = "Ingredient Types",
    security(("bearer_auth" = [])),
    request_body = CreateIngredientTypeRequest,
    responses(
        (status = 201, description = "Ingredient type created", body = IngredientType),
        (status = 400, description = "Invalid name or repeatable")
    )
)]
pub async fn create_ingredient_type(
    State(state): State<AppState>,
    ValidatedJson(payload): ValidatedJson<CreateIngredientTypeRequest>,
) -> AppResult<(StatusCode, Json<IngredientType>)> {
    let created = state
        .ingredient_type_service
        .create(payload.into())
        .await?;
    Ok((StatusCode::CREATED, Json(created)))
}

/// List ingredient types
#[utoipa::path(
    get,
    path = "/ingredient-types",
    tag = "Ingredient Types",
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "Every ingredient type", body = Vec<IngredientType>)
    )
)]
pub async fn list_ingredient_types(
    State(state): State<AppState>,
) -> AppResult<Json<Vec<IngredientType>>> {
    Ok(Json(state.ingredient_type_service.find_all().await?))
}

/// Get ingredient type by ID
#[utoipa::path(
    get,
    path = "/ingredient-types/{id}",
    tag = "Ingredient Types",
    security(("bearer_auth" = [])),
    params(
        ("id" = String, Path, description = "Ingredient type ID")
    ),
    responses(
        (status = 200, description = "Ingredient type", body = IngredientType),
        (status = 404, description = "Ingredient type not found")
    )
)]
pub async fn get_ingredient_type(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<Json<IngredientType>> {
    let found = state
        .ingredient_type_service
        .find_one(RawNumber::from(id))
        .await?;
    Ok(Json(found))
}

/// Update ingredient type
#[utoipa::path(
    patch,
    path = "/ingredient-types/{id}",
    tag = "Ingredient Types",
    security(("bearer_auth" = [])),
    params(
        ("id" = String, Path, description = "Ingredient type ID")
    ),
    request_body = UpdateIngredientTypeRequest,
    responses(
        (status = 200, description = "Ingredient type updated", body = IngredientType),
        (status = 400, description = "Invalid repeatable"),
        (status = 404, description = "Ingredient type not found")
    )
)]
pub async fn update_ingredient_type(
    State(state): State<AppState>,
    Path(id): Path<String>,
    ValidatedJson(payload): ValidatedJson<UpdateIngredientTypeRequest>,
) -> AppResult<Json<IngredientType>> {
    let updated = state
        .ingredient_type_service
        .update(RawNumber::from(id), payload.into())
        .await?;
    Ok(Json(updated))
}

/// Delete ingredient type
#[utoipa::path(
    delete,
    path = "/ingredient-types/{id}",
    tag = "Ingredient Types",
    security(("bearer_auth" = [])),
    params(
        ("id" = String, Path, description = "Ingredient type ID")
    ),
    responses(
        (status = 200, description = "Deleted ingredient type", body = IngredientType),
        (status = 404, description = "Ingredient type not found")
    )
)]
pub async fn remove_ingredient_type(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<Json<IngredientType>> {
    let removed = state
        .ingredient_type_service
        .remove(RawNumber::from(id))
        .await?;
    Ok(Json(removed))
}
