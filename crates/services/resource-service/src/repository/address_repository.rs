//! Address repository implementation.

use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue::NotSet, ColumnTrait, DatabaseConnection, EntityTrait,
    QueryFilter, QueryOrder, Set,
};

use super::entities::address::{self, ActiveModel, Entity as AddressEntity};
use common::{AppError, AppResult, OptionExt};
use domain::{Address, AddressChanges, NewAddress, MSG_ADDRESS_NOT_FOUND};

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

/// Address repository trait for dependency injection.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait AddressRepository: Send + Sync {
    /// List every address
    async fn find_all(&self) -> AppResult<Vec<Address>>;

    /// Find address by ID
    async fn find_by_id(&self, id: i32) -> AppResult<Option<Address>>;

    /// Find address by ID, restricted to one owner
    async fn find_by_id_and_person(&self, id: i32, person_id: i32) -> AppResult<Option<Address>>;

    /// List addresses owned by a person
    async fn find_by_person(&self, person_id: i32) -> AppResult<Vec<Address>>;

    /// Insert a new address for a person
    async fn create(&self, person_id: i32, data: NewAddress) -> AppResult<Address>;

    /// Apply a partial update
    async fn update(&self, id: i32, changes: AddressChanges) -> AppResult<Address>;

    /// Delete an address, returning the removed row
    async fn delete(&self, id: i32) -> AppResult<Address>;
}

/// Concrete implementation of AddressRepository
pub struct AddressStore {
    db: Arc<DatabaseConnection>,
}

impl AddressStore {
    /// Create new repository instance
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl AddressRepository for AddressStore {
    async fn find_all(&self) -> AppResult<Vec<Address>> {
        let models = AddressEntity::find()
            .order_by_asc(address::Column::Id)
            .all(self.db.as_ref())
            .await?;

        Ok(models.into_iter().map(Address::from).collect())
    }

    async fn find_by_id(&self, id: i32) -> AppResult<Option<Address>> {
        let result = AddressEntity::find_by_id(id).one(self.db.as_ref()).await?;
        Ok(result.map(Address::from))
    }

    async fn find_by_id_and_person(&self, id: i32, person_id: i32) -> AppResult<Option<Address>> {
        let result = AddressEntity::find()
            .filter(address::Column::Id.eq(id))
            .filter(address::Column::PersonId.eq(person_id))
            .one(self.db.as_ref())
            .await?;

        Ok(result.map(Address::from))
    }

    async fn find_by_person(&self, person_id: i32) -> AppResult<Vec<Address>> {
        let models = AddressEntity::find()
            .filter(address::Column::PersonId.eq(person_id))
            .order_by_asc(address::Column::Id)
            .all(self.db.as_ref())
            .await?;

        Ok(models.into_iter().map(Address::from).collect())
    }

    async fn create(&self, person_id: i32, data: NewAddress) -> AppResult<Address> {
        let now = Utc::now();
        let active_model = ActiveModel {
            id: NotSet,
            person_id: Set(person_id),
            street: Set(data.street),
            number: Set(data.number),
            complement: Set(data.complement),
            district: Set(data.district),
            city: Set(data.city),
            state: Set(data.state),
            country: Set(data.country),
            zip_code: Set(data.zip_code),
            created_at: Set(now),
            updated_at: Set(now),
        };

        let model = active_model.insert(self.db.as_ref()).await?;
        Ok(Address::from(model))
    }

    async fn update(&self, id: i32, changes: AddressChanges) -> AppResult<Address> {
        let address = AddressEntity::find_by_id(id)
            .one(self.db.as_ref())
            .await?
            .ok_or_not_found(MSG_ADDRESS_NOT_FOUND)?;

        let mut active: ActiveModel = address.into();

        if let Some(street) = changes.street {
            active.street = Set(street);
        }
        if let Some(number) = changes.number {
            active.number = Set(number);
        }
        if let Some(complement) = changes.complement {
            active.complement = Set(complement);
        }
        if let Some(district) = changes.district {
            active.district = Set(district);
        }
        if let Some(city) = changes.city {
            active.city = Set(city);
        }
        if let Some(state) = changes.state {
            active.state = Set(state);
        }
        if let Some(country) = changes.country {
            active.country = Set(country);
        }
        if let Some(zip_code) = changes.zip_code {
            active.zip_code = Set(zip_code);
        }
        active.updated_at = Set(Utc::now());

        let model = active.update(self.db.as_ref()).await?;
        Ok(Address::from(model))
    }

    async fn delete(&self, id: i32) -> AppResult<Address> {
        let address = AddressEntity::find_by_id(id)
            .one(self.db.as_ref())
            .await?
            .ok_or_not_found(MSG_ADDRESS_NOT_FOUND)?;

        let result = AddressEntity::delete_by_id(id).exec(self.db.as_ref()).await?;

        if result.rows_affected == 0 {
            return Err(AppError::not_found(MSG_ADDRESS_NOT_FOUND));
        }

        Ok(Address::from(address))
    }
}
