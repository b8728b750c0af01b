//! SeaORM entity definitions.

pub mod address;
pub mod ingredient_type;
pub mod user;
