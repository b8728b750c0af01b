//! Ingredient type repository implementation.

use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue::NotSet, DatabaseConnection, EntityTrait, QueryOrder, Set,
};

use super::entities::ingredient_type::{self, ActiveModel, Entity as IngredientTypeEntity};
use common::{AppError, AppResult, OptionExt};
use domain::{IngredientType, MSG_INGREDIENT_TYPE_NOT_FOUND};

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

/// Ingredient type repository trait for dependency injection.
///
/// Values reaching this layer are already coerced.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait IngredientTypeRepository: Send + Sync {
    /// List every ingredient type
    async fn find_all(&self) -> AppResult<Vec<IngredientType>>;

    /// Find ingredient type by ID
    async fn find_by_id(&self, id: i32) -> AppResult<Option<IngredientType>>;

    /// Insert a new ingredient type
    async fn create(&self, name: String, repeatable: i32) -> AppResult<IngredientType>;

    /// Update the given fields
    async fn update(
        &self,
        id: i32,
        name: Option<String>,
        repeatable: Option<i32>,
    ) -> AppResult<IngredientType>;

    /// Delete an ingredient type, returning the removed row
    async fn delete(&self, id: i32) -> AppResult<IngredientType>;
}

/// Concrete implementation of IngredientTypeRepository
pub struct IngredientTypeStore {
    db: Arc<DatabaseConnection>,
}

impl IngredientTypeStore {
    /// Create new repository instance
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl IngredientTypeRepository for IngredientTypeStore {
    async fn find_all(&self) -> AppResult<Vec<IngredientType>> {
        let models = IngredientTypeEntity::find()
            .order_by_asc(ingredient_type::Column::Id)
            .all(self.db.as_ref())
            .await?;

        Ok(models.into_iter().map(IngredientType::from).collect())
    }

    async fn find_by_id(&self, id: i32) -> AppResult<Option<IngredientType>> {
        let result = IngredientTypeEntity::find_by_id(id).one(self.db.as_ref()).await?;
        Ok(result.map(IngredientType::from))
    }

    async fn create(&self, name: String, repeatable: i32) -> AppResult<IngredientType> {
        let now = Utc::now();
        let active_model = ActiveModel {
            id: NotSet,
            name: Set(name),
            repeatable: Set(repeatable),
            created_at: Set(now),
            updated_at: Set(now),
        };

        let model = active_model.insert(self.db.as_ref()).await?;
        Ok(IngredientType::from(model))
    }

    async fn update(
        &self,
        id: i32,
        name: Option<String>,
        repeatable: Option<i32>,
    ) -> AppResult<IngredientType> {
        let ingredient_type = IngredientTypeEntity::find_by_id(id)
            .one(self.db.as_ref())
            .await?
            .ok_or_not_found(MSG_INGREDIENT_TYPE_NOT_FOUND)?;

        let mut active: ActiveModel = ingredient_type.into();

        if let Some(name) = name {
            active.name = Set(name);
        }
        if let Some(repeatable) = repeatable {
            active.repeatable = Set(repeatable);
        }
        active.updated_at = Set(Utc::now());

        let model = active.update(self.db.as_ref()).await?;
        Ok(IngredientType::from(model))
    }

    async fn delete(&self, id: i32) -> AppResult<IngredientType> {
        let ingredient_type = IngredientTypeEntity::find_by_id(id)
            .one(self.db.as_ref())
            .await?
            .ok_or_not_found(MSG_INGREDIENT_TYPE_NOT_FOUND)?;

        let result = IngredientTypeEntity::delete_by_id(id)
            .exec(self.db.as_ref())
            .await?;

        if result.rows_affected == 0 {
            return Err(AppError::not_found(MSG_INGREDIENT_TYPE_NOT_FOUND));
        }

        Ok(IngredientType::from(ingredient_type))
    }
}
