//! Domain layer - Core business entities and value objects.
//!
//! This crate contains pure domain logic with no infrastructure dependencies.

pub mod address;
pub mod constants;
pub mod error;
pub mod ingredient_type;
pub mod numeric;

pub use address::{Address, AddressChanges, NewAddress};
pub use constants::*;
pub use error::{DomainError, DomainResult};
pub use ingredient_type::{IngredientType, IngredientTypeChanges, NewIngredientType};
pub use numeric::{
    check_labeled_number, check_number, coerce_number, deserialize_present, RawNumber,
};
