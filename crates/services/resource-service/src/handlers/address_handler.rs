//! Address handlers.

use axum::{
    extract::{Extension, Path, State},
    http::StatusCode,
    response::Json,
    routing::get,
    Router,
};
use serde::Deserialize;
use utoipa::ToSchema;
use validator::Validate;

use common::AppResult;
use domain::{deserialize_present, Address, AddressChanges, NewAddress, RawNumber};

use crate::extractors::ValidatedJson;
use crate::middleware::CurrentUser;
use crate::state::AppState;

/// Address creation request
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct CreateAddressRequest {
    #[validate(length(min = 1, message = "Street cannot be empty"))]
    #[schema(example = "Avenida Paulista")]
    pub street: String,
    #[validate(length(min = 1, message = "Number cannot be empty"))]
    #[schema(example = "1578")]
    pub number: String,
    #[schema(example = "Apto 12")]
    pub complement: Option<String>,
    #[validate(length(min = 1, message = "District cannot be empty"))]
    #[schema(example = "Bela Vista")]
    pub district: String,
    #[validate(length(min = 1, message = "City cannot be empty"))]
    #[schema(example = "São Paulo")]
    pub city: String,
    #[validate(length(min = 1, message = "State cannot be empty"))]
    #[schema(example = "SP")]
    pub state: String,
    #[validate(length(min = 1, message = "Country cannot be empty"))]
    #[schema(example = "Brasil")]
    pub country: String,
    #[validate(length(min = 1, max = 16, message = "Invalid zip code"))]
    #[schema(example = "01310-200")]
    pub zip_code: String,
}

impl From<CreateAddressRequest> for NewAddress {
    fn from(req: CreateAddressRequest) -> Self {
        NewAddress {
            street: req.street,
            number: req.number,
            complement: req.complement,
            district: req.district,
            city: req.city,
            state: req.state,
            country: req.country,
            zip_code: req.zip_code,
        }
    }
}

/// Partial address update; omitted fields are left unchanged.
///
/// `complement: null` clears the complement.
#[derive(Debug, Default, Deserialize, Validate, ToSchema)]
pub struct UpdateAddressRequest {
    #[validate(length(min = 1, message = "Street cannot be empty"))]
    pub street: Option<String>,
    #[validate(length(min = 1, message = "Number cannot be empty"))]
    pub number: Option<String>,
    #[serde(default, deserialize_with = "deserialize_present")]
    #[schema(value_type = Option<String>)]
    pub complement: Option<Option<String>>,
    #[validate(length(min = 1, message = "District cannot be empty"))]
    pub district: Option<String>,
    #[validate(length(min = 1, message = "City cannot be empty"))]
    pub city: Option<String>,
    #[validate(length(min = 1, message = "State cannot be empty"))]
    pub state: Option<String>,
    #[validate(length(min = 1, message = "Country cannot be empty"))]
    pub country: Option<String>,
    #[validate(length(min = 1, max = 16, message = "Invalid zip code"))]
    pub zip_code: Option<String>,
}

impl From<UpdateAddressRequest> for AddressChanges {
    fn from(req: UpdateAddressRequest) -> Self {
        AddressChanges {
            street: req.street,
            number: req.number,
            complement: req.complement,
            district: req.district,
            city: req.city,
            state: req.state,
            country: req.country,
            zip_code: req.zip_code,
        }
    }
}

/// Create address routes
pub fn address_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(list_addresses).post(create_address))
        .route("/me", get(list_my_addresses))
        .route("/me/:id", get(get_my_address))
        .route(
            "/:id",
            get(get_address).patch(update_address).delete(delete_address),
        )
}

/// List all addresses
#[utoipa::path(
    get,
    path = "/addresses",
    tag = "Addresses",
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "Every address", body = Vec<Address>),
        (status = 401, description = "Unauthorized")
    )
)]
pub async fn list_addresses(State(state): State<AppState>) -> AppResult<Json<Vec<Address>>> {
    Ok(Json(state.address_service.find_all().await?))
}

/// List the current user's addresses
#[utoipa::path(
    get,
    path = "/addresses/me",
    tag = "Addresses",
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "Addresses of the current user", body = Vec<Address>),
        (status = 401, description = "Unauthorized")
    )
)]
pub async fn list_my_addresses(
    Extension(current_user): Extension<CurrentUser>,
    State(state): State<AppState>,
) -> AppResult<Json<Vec<Address>>> {
    let addresses = state
        .address_service
        .find_by_person(current_user.id)
        .await?;
    Ok(Json(addresses))
}

/// Get one of the current user's addresses
#[utoipa::path(
    get,
    path = "/addresses/me/{id}",
    tag = "Addresses",
    security(("bearer_auth" = [])),
    params(
        ("id" = String, Path, description = "Address ID")
    ),
    responses(
        (status = 200, description = "Address", body = Address),
        (status = 400, description = "Invalid ID"),
        (status = 403, description = "Address belongs to someone else"),
        (status = 404, description = "Address not found")
    )
)]
pub async fn get_my_address(
    Extension(current_user): Extension<CurrentUser>,
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<Json<Address>> {
    let address = state
        .address_service
        .find_my_address(RawNumber::from(id), current_user.id)
        .await?;
    Ok(Json(address))
}

/// Get address by ID
#[utoipa::path(
    get,
    path = "/addresses/{id}",
    tag = "Addresses",
    security(("bearer_auth" = [])),
    params(
        ("id" = String, Path, description = "Address ID")
    ),
    responses(
        (status = 200, description = "Address", body = Address),
        (status = 400, description = "Invalid ID"),
        (status = 404, description = "Address not found")
    )
)]
pub async fn get_address(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<Json<Address>> {
    Ok(Json(state.address_service.find_one(RawNumber::from(id)).await?))
}

/// Create an address for the current user
#[utoipa::path(
    post,
    path = "/addresses",
    tag = "Addresses",
    security(("bearer_auth" = [])),
    request_body = CreateAddressRequest,
    responses(
        (status = 201, description = "Address created", body = Address),
        (status = 400, description = "Validation error"),
        (status = 404, description = "User has no person")
    )
)]
pub async fn create_address(
    Extension(current_user): Extension<CurrentUser>,
    State(state): State<AppState>,
    ValidatedJson(payload): ValidatedJson<CreateAddressRequest>,
) -> AppResult<(StatusCode, Json<Address>)> {
    let address = state
        .address_service
        .create(current_user.id, payload.into())
        .await?;
    Ok((StatusCode::CREATED, Json(address)))
}

/// Update one of the current user's addresses
#[utoipa::path(
    patch,
    path = "/addresses/{id}",
    tag = "Addresses",
    security(("bearer_auth" = [])),
    params(
        ("id" = String, Path, description = "Address ID")
    ),
    request_body = UpdateAddressRequest,
    responses(
        (status = 200, description = "Address updated", body = Address),
        (status = 400, description = "Invalid ID or payload"),
        (status = 403, description = "Address belongs to someone else"),
        (status = 404, description = "Address not found")
    )
)]
pub async fn update_address(
    Extension(current_user): Extension<CurrentUser>,
    State(state): State<AppState>,
    Path(id): Path<String>,
    ValidatedJson(payload): ValidatedJson<UpdateAddressRequest>,
) -> AppResult<Json<Address>> {
    let address = state
        .address_service
        .update(RawNumber::from(id), current_user.id, payload.into())
        .await?;
    Ok(Json(address))
}

/// Delete one of the current user's addresses
#[utoipa::path(
    delete,
    path = "/addresses/{id}",
    tag = "Addresses",
    security(("bearer_auth" = [])),
    params(
        ("id" = String, Path, description = "Address ID")
    ),
    responses(
        (status = 200, description = "Deleted address", body = Address),
        (status = 400, description = "Invalid ID"),
        (status = 403, description = "Address belongs to someone else"),
        (status = 404, description = "Address not found")
    )
)]
pub async fn delete_address(
    Extension(current_user): Extension<CurrentUser>,
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<Json<Address>> {
    let address = state
        .address_service
        .delete(RawNumber::from(id), current_user.id)
        .await?;
    Ok(Json(address))
}
