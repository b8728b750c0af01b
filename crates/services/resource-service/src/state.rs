//! Application state for dependency injection.

use std::sync::Arc;

use crate::config::ResourceServiceConfig;
use crate::infra::Database;
use crate::repository::{AddressStore, IngredientTypeStore, UserStore};
use crate::service::{
    AddressManager, AddressService, AuthService, IngredientTypeManager, IngredientTypeService,
    JwtAuthenticator, LoginManager,
};

/// Application state shared across handlers.
#[derive(Clone)]
pub struct AppState {
    pub address_service: Arc<dyn AddressService>,
    pub ingredient_type_service: Arc<dyn IngredientTypeService>,
    pub auth_service: Arc<dyn AuthService>,
    pub database: Arc<Database>,
}

impl AppState {
    /// Create new app state with manually injected services.
    pub fn new(
        address_service: Arc<dyn AddressService>,
        ingredient_type_service: Arc<dyn IngredientTypeService>,
        auth_service: Arc<dyn AuthService>,
        database: Arc<Database>,
    ) -> Self {
        Self {
            address_service,
            ingredient_type_service,
            auth_service,
            database,
        }
    }

    /// Wire the SeaORM-backed services over one connection pool.
    pub fn from_database(database: Arc<Database>, config: &ResourceServiceConfig) -> Self {
        let conn = database.get_connection();

        let login = Arc::new(LoginManager::new(Arc::new(UserStore::new(conn.clone()))));
        let address_service = Arc::new(AddressManager::new(
            Arc::new(AddressStore::new(conn.clone())),
            login,
        ));
        let ingredient_type_service =
            Arc::new(IngredientTypeManager::new(Arc::new(IngredientTypeStore::new(conn))));
        let auth_service = Arc::new(JwtAuthenticator::new(&config.jwt));

        Self::new(address_service, ingredient_type_service, auth_service, database)
    }
}
