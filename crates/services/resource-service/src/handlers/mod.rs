//! HTTP request handlers.

pub mod address_handler;
pub mod health_handler;
pub mod ingredient_type_handler;

pub use address_handler::address_routes;
pub use health_handler::health_routes;
pub use ingredient_type_handler::ingredient_type_routes;
