//! OpenAPI documentation.

use utoipa::{
    openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme},
    Modify, OpenApi,
};

use crate::handlers::address_handler::{CreateAddressRequest, UpdateAddressRequest};
use crate::handlers::ingredient_type_handler::{
    CreateIngredientTypeRequest, UpdateIngredientTypeRequest,
};
use domain::{Address, IngredientType};

/// API documentation struct.
#[derive(OpenApi)]
#[openapi(
    paths(
        crate::handlers::address_handler::list_addresses,
        crate::handlers::address_handler::list_my_addresses,
        crate::handlers::address_handler::get_my_address,
        crate::handlers::address_handler::get_address,
        crate::handlers::address_handler::create_address,
        crate::handlers::address_handler::update_address,
        crate::handlers::address_handler::delete_address,
        crate::handlers::ingredient_type_handler::create_ingredient_type,
        crate::handlers::ingredient_type_handler::list_ingredient_types,
        crate::handlers::ingredient_type_handler::get_ingredient_type,
        crate::handlers::ingredient_type_handler::update_ingredient_type,
        crate::handlers::ingredient_type_handler::remove_ingredient_type,
    ),
    components(
        schemas(
            Address,
            CreateAddressRequest,
            UpdateAddressRequest,
            IngredientType,
            CreateIngredientTypeRequest,
            UpdateIngredientTypeRequest,
        )
    ),
    modifiers(&SecurityAddon),
    tags(
        (name = "Addresses", description = "Postal addresses owned by people"),
        (name = "Ingredient Types", description = "Ingredient category catalogue"),
    )
)]
pub struct ApiDoc;

/// Security scheme modifier.
struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "bearer_auth",
                SecurityScheme::Http(
                    HttpBuilder::new()
                        .scheme(HttpAuthScheme::Bearer)
                        .bearer_format("JWT")
                        .build(),
                ),
            );
        }
    }
}
