//! Address service - addresses owned by the authenticated person.
//!
//! Reads by id are open; every mutation first resolves the caller's person
//! through the login collaborator and checks it owns the address.

use std::sync::Arc;

use async_trait::async_trait;

use common::{AppError, AppResult, OptionExt};
use domain::{
    check_number, Address, AddressChanges, NewAddress, RawNumber, MSG_ADDRESS_NOT_FOUND,
    MSG_INVALID_OPERATION, MSG_USER_NOT_FOUND,
};

use crate::repository::AddressRepository;
use crate::service::LoginService;

/// Address service trait for dependency injection.
#[async_trait]
pub trait AddressService: Send + Sync {
    /// List every address
    async fn find_all(&self) -> AppResult<Vec<Address>>;

    /// Get address by ID
    async fn find_one(&self, id: RawNumber) -> AppResult<Address>;

    /// Succeeds only if the address belongs to the person
    async fn is_valid_person(&self, address_id: RawNumber, person_id: RawNumber) -> AppResult<()>;

    /// Get one of the caller's addresses
    async fn find_my_address(&self, address_id: RawNumber, user_id: i32) -> AppResult<Address>;

    /// List the caller's addresses
    async fn find_by_person(&self, user_id: i32) -> AppResult<Vec<Address>>;

    /// Create an address owned by the caller
    async fn create(&self, user_id: i32, data: NewAddress) -> AppResult<Address>;

    /// Partially update one of the caller's addresses
    async fn update(&self, id: RawNumber, user_id: i32, changes: AddressChanges)
        -> AppResult<Address>;

    /// Delete one of the caller's addresses
    async fn delete(&self, id: RawNumber, user_id: i32) -> AppResult<Address>;
}

/// Concrete implementation of AddressService using repository.
pub struct AddressManager {
    repo: Arc<dyn AddressRepository>,
    login: Arc<dyn LoginService>,
}

impl AddressManager {
    /// Create new address service instance
    pub fn new(repo: Arc<dyn AddressRepository>, login: Arc<dyn LoginService>) -> Self {
        Self { repo, login }
    }

    /// Person of the caller; a user without one cannot pass ownership checks.
    async fn resolve_person(&self, user_id: i32) -> AppResult<i32> {
        let person_id = self.login.get_person_id(user_id).await?;
        Ok(check_number(&RawNumber::from(person_id))?)
    }
}

#[async_trait]
impl AddressService for AddressManager {
    async fn find_all(&self) -> AppResult<Vec<Address>> {
        self.repo.find_all().await
    }

    async fn find_one(&self, id: RawNumber) -> AppResult<Address> {
        let id = check_number(&id)?;

        self.repo
            .find_by_id(id)
            .await?
            .ok_or_not_found(MSG_ADDRESS_NOT_FOUND)
    }

    async fn is_valid_person(&self, address_id: RawNumber, person_id: RawNumber) -> AppResult<()> {
        let person_id = check_number(&person_id)?;
        let address = self.find_one(address_id).await?;

        if !address.is_owned_by(person_id) {
            tracing::debug!(
                address_id = address.id,
                owner = address.person_id,
                person_id,
                "Address ownership mismatch"
            );
            return Err(AppError::forbidden(MSG_INVALID_OPERATION));
        }

        Ok(())
    }

    async fn find_my_address(&self, address_id: RawNumber, user_id: i32) -> AppResult<Address> {
        let id = check_number(&address_id)?;
        let person_id = self.resolve_person(user_id).await?;

        self.is_valid_person(id.into(), person_id.into()).await?;

        self.repo
            .find_by_id_and_person(id, person_id)
            .await?
            .ok_or_not_found(MSG_ADDRESS_NOT_FOUND)
    }

    async fn find_by_person(&self, user_id: i32) -> AppResult<Vec<Address>> {
        match self.login.get_person_id(user_id).await? {
            Some(person_id) => self.repo.find_by_person(person_id).await,
            None => Ok(Vec::new()),
        }
    }

    async fn create(&self, user_id: i32, data: NewAddress) -> AppResult<Address> {
        let person_id = self
            .login
            .get_person_id(user_id)
            .await?
            .ok_or_not_found(MSG_USER_NOT_FOUND)?;

        let address = self.repo.create(person_id, data).await?;
        tracing::info!(address_id = address.id, person_id, "Address created");
        Ok(address)
    }

    async fn update(
        &self,
        id: RawNumber,
        user_id: i32,
        changes: AddressChanges,
    ) -> AppResult<Address> {
        let id = check_number(&id)?;
        let person_id = self.resolve_person(user_id).await?;

        self.is_valid_person(id.into(), person_id.into()).await?;

        let address = self.repo.update(id, changes).await?;
        tracing::info!(address_id = id, person_id, "Address updated");
        Ok(address)
    }

    async fn delete(&self, id: RawNumber, user_id: i32) -> AppResult<Address> {
        let id = check_number(&id)?;
        let person_id = self.resolve_person(user_id).await?;

        self.is_valid_person(id.into(), person_id.into()).await?;

        let address = self.repo.delete(id).await?;
        tracing::info!(address_id = id, person_id, "Address deleted");
        Ok(address)
    }
}
