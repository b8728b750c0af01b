//! Ingredient type domain entity and related types.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::numeric::{deserialize_present, RawNumber};

/// A category of ingredient, e.g. "Vegetal" or "Laticínio".
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct IngredientType {
    pub id: i32,
    pub name: String,
    /// How many times the type may repeat in a recipe
    pub repeatable: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Ingredient type creation input, `repeatable` not yet coerced.
#[derive(Debug, Clone, Deserialize)]
pub struct NewIngredientType {
    pub name: String,
    #[serde(default)]
    pub repeatable: RawNumber,
}

/// Partial ingredient type update.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct IngredientTypeChanges {
    pub name: Option<String>,
    /// `Some(RawNumber::Null)` when the client sent an explicit `null`
    #[serde(default, deserialize_with = "deserialize_present")]
    pub repeatable: Option<RawNumber>,
}
