//! Address domain entity and related types.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::numeric::deserialize_present;

/// A postal address owned by exactly one person.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct Address {
    pub id: i32,
    /// Owning person
    pub person_id: i32,
    pub street: String,
    pub number: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub complement: Option<String>,
    pub district: String,
    pub city: String,
    pub state: String,
    pub country: String,
    pub zip_code: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Address {
    /// Check if the address belongs to the given person
    pub fn is_owned_by(&self, person_id: i32) -> bool {
        self.person_id == person_id
    }
}

/// Fields of a new address. The owner is attached by the service.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct NewAddress {
    pub street: String,
    pub number: String,
    pub complement: Option<String>,
    pub district: String,
    pub city: String,
    pub state: String,
    pub country: String,
    pub zip_code: String,
}

/// Partial address update; `None` leaves the column untouched.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct AddressChanges {
    pub street: Option<String>,
    pub number: Option<String>,
    /// `Some(None)` clears the complement
    #[serde(default, deserialize_with = "deserialize_present")]
    pub complement: Option<Option<String>>,
    pub district: Option<String>,
    pub city: Option<String>,
    pub state: Option<String>,
    pub country: Option<String>,
    pub zip_code: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ownership_compares_person_id() {
        let now = Utc::now();
        let address = Address {
            id: 1,
            person_id: 10,
            street: "Rua das Flores".to_string(),
            number: "12".to_string(),
            complement: None,
            district: "Centro".to_string(),
            city: "Curitiba".to_string(),
            state: "PR".to_string(),
            country: "Brasil".to_string(),
            zip_code: "80000-000".to_string(),
            created_at: now,
            updated_at: now,
        };

        assert!(address.is_owned_by(10));
        assert!(!address.is_owned_by(11));
    }

    #[test]
    fn null_complement_clears_while_absent_keeps() {
        let keep: AddressChanges = serde_json::from_str(r#"{"city": "Recife"}"#).unwrap();
        assert_eq!(keep.complement, None);
        assert_eq!(keep.city.as_deref(), Some("Recife"));

        let clear: AddressChanges = serde_json::from_str(r#"{"complement": null}"#).unwrap();
        assert_eq!(clear.complement, Some(None));

        let set: AddressChanges = serde_json::from_str(r#"{"complement": "Fundos"}"#).unwrap();
        assert_eq!(set.complement, Some(Some("Fundos".to_string())));
    }
}
