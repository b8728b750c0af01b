//! Repository layer for data access.

pub mod entities;
mod address_repository;
mod ingredient_type_repository;
mod user_repository;

pub use address_repository::{AddressRepository, AddressStore};
pub use ingredient_type_repository::{IngredientTypeRepository, IngredientTypeStore};
pub use user_repository::{UserRepository, UserStore};

#[cfg(any(test, feature = "test-utils"))]
pub use address_repository::MockAddressRepository;
#[cfg(any(test, feature = "test-utils"))]
pub use ingredient_type_repository::MockIngredientTypeRepository;
#[cfg(any(test, feature = "test-utils"))]
pub use user_repository::MockUserRepository;
