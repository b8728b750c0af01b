//! Ingredient type service - catalogue of ingredient categories.
//!
//! There is no ownership here; any authenticated caller may mutate any row.
//! Every lookup by id reports a single NotFound, whatever made the guard fail.

use std::sync::Arc;

use async_trait::async_trait;

use common::{AppError, AppResult, OptionExt};
use domain::{
    check_labeled_number, check_number, IngredientType, IngredientTypeChanges, NewIngredientType,
    RawNumber, MSG_INGREDIENT_TYPE_NOT_FOUND, REPEATABLE_LABEL,
};

use crate::repository::IngredientTypeRepository;

/// Ingredient type service trait for dependency injection.
#[async_trait]
pub trait IngredientTypeService: Send + Sync {
    /// Coerce `value` to a number, naming `label` in the error
    fn is_valid_number(&self, value: &RawNumber, label: &str) -> AppResult<i32>;

    /// Validate the id and check the row exists, returning the coerced id
    async fn is_there_id(&self, id: RawNumber) -> AppResult<i32>;

    /// Create an ingredient type
    async fn create(&self, data: NewIngredientType) -> AppResult<IngredientType>;

    /// List every ingredient type
    async fn find_all(&self) -> AppResult<Vec<IngredientType>>;

    /// Get ingredient type by ID
    async fn find_one(&self, id: RawNumber) -> AppResult<IngredientType>;

    /// Partially update an ingredient type
    async fn update(&self, id: RawNumber, data: IngredientTypeChanges)
        -> AppResult<IngredientType>;

    /// Delete an ingredient type
    async fn remove(&self, id: RawNumber) -> AppResult<IngredientType>;
}

/// Concrete implementation of IngredientTypeService using repository.
pub struct IngredientTypeManager {
    repo: Arc<dyn IngredientTypeRepository>,
}

impl IngredientTypeManager {
    /// Create new ingredient type service instance with repository
    pub fn new(repo: Arc<dyn IngredientTypeRepository>) -> Self {
        Self { repo }
    }

    /// Existence guard with every failure collapsed into NotFound.
    async fn existing_id(&self, id: RawNumber) -> AppResult<i32> {
        self.is_there_id(id).await.map_err(|e| {
            tracing::debug!(error = ?e, "Ingredient type guard failed");
            AppError::not_found(MSG_INGREDIENT_TYPE_NOT_FOUND)
        })
    }
}

#[async_trait]
impl IngredientTypeService for IngredientTypeManager {
    fn is_valid_number(&self, value: &RawNumber, label: &str) -> AppResult<i32> {
        Ok(check_labeled_number(value, label)?)
    }

    async fn is_there_id(&self, id: RawNumber) -> AppResult<i32> {
        let id = check_number(&id)?;

        self.repo
            .find_by_id(id)
            .await?
            .ok_or_not_found(MSG_INGREDIENT_TYPE_NOT_FOUND)?;

        Ok(id)
    }

    async fn create(&self, data: NewIngredientType) -> AppResult<IngredientType> {
        let repeatable = self.is_valid_number(&data.repeatable, REPEATABLE_LABEL)?;

        let ingredient_type = self.repo.create(data.name, repeatable).await?;
        tracing::info!(id = ingredient_type.id, "Ingredient type created");
        Ok(ingredient_type)
    }

    async fn find_all(&self) -> AppResult<Vec<IngredientType>> {
        self.repo.find_all().await
    }

    async fn find_one(&self, id: RawNumber) -> AppResult<IngredientType> {
        let id = self.existing_id(id).await?;

        self.repo
            .find_by_id(id)
            .await?
            .ok_or_not_found(MSG_INGREDIENT_TYPE_NOT_FOUND)
    }

    async fn update(
        &self,
        id: RawNumber,
        data: IngredientTypeChanges,
    ) -> AppResult<IngredientType> {
        let id = self.existing_id(id).await?;

        let repeatable = data
            .repeatable
            .as_ref()
            .map(|value| self.is_valid_number(value, REPEATABLE_LABEL))
            .transpose()?;

        let ingredient_type = self.repo.update(id, data.name, repeatable).await?;
        tracing::info!(id, "Ingredient type updated");
        Ok(ingredient_type)
    }

    async fn remove(&self, id: RawNumber) -> AppResult<IngredientType> {
        let id = self.existing_id(id).await?;

        let ingredient_type = self.repo.delete(id).await?;
        tracing::info!(id, "Ingredient type removed");
        Ok(ingredient_type)
    }
}
