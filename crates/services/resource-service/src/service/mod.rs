//! Application services layer - use cases and business logic.

mod address_service;
mod auth_service;
mod ingredient_type_service;
mod login_service;

pub use address_service::{AddressManager, AddressService};
pub use auth_service::{AuthService, Claims, JwtAuthenticator};
pub use ingredient_type_service::{IngredientTypeManager, IngredientTypeService};
pub use login_service::{LoginManager, LoginService};

#[cfg(any(test, feature = "test-utils"))]
pub use login_service::MockLoginService;
