//! Domain-level constants.
//!
//! User-facing messages are kept in the locale the product ships with.

// =============================================================================
// Validation messages
// =============================================================================

/// Raised when a loosely-typed value does not coerce to a number
pub const MSG_INVALID_NUMBER: &str = "Número inválido.";

/// Suffix of labeled numeric validation errors (`"{label} Inválido"`)
pub const MSG_INVALID_SUFFIX: &str = "Inválido";

// =============================================================================
// Address messages
// =============================================================================

/// Address lookup by id found no row
pub const MSG_ADDRESS_NOT_FOUND: &str = "Não existe o endereço solicitado.";

/// Address does not belong to the requesting person
pub const MSG_INVALID_OPERATION: &str = "Operação inválida.";

/// Authenticated user has no person attached
pub const MSG_USER_NOT_FOUND: &str = "User not found.";

// =============================================================================
// Ingredient type messages
// =============================================================================

/// Uniform error for every ingredient type lookup failure
pub const MSG_INGREDIENT_TYPE_NOT_FOUND: &str = "Ingredient Type Não Encontrado";

/// Label used when coercing the `repeatable` field
pub const REPEATABLE_LABEL: &str = "Repeatable";

// =============================================================================
// Authentication
// =============================================================================

/// Minimum JWT secret length (security requirement)
pub const MIN_JWT_SECRET_LENGTH: usize = 32;

/// Authorization header prefix for Bearer tokens
pub const BEARER_TOKEN_PREFIX: &str = "Bearer ";
