//! Read-only access to the login component's users.

use std::sync::Arc;

use async_trait::async_trait;
use sea_orm::{DatabaseConnection, EntityTrait};

use super::entities::user::Entity as UserEntity;
use common::AppResult;

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

/// User lookup trait for dependency injection.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Person attached to a user; `None` for unknown users or users without a person
    async fn find_person_id(&self, user_id: i32) -> AppResult<Option<i32>>;
}

/// Concrete implementation of UserRepository
pub struct UserStore {
    db: Arc<DatabaseConnection>,
}

impl UserStore {
    /// Create new repository instance
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl UserRepository for UserStore {
    async fn find_person_id(&self, user_id: i32) -> AppResult<Option<i32>> {
        let user = UserEntity::find_by_id(user_id).one(self.db.as_ref()).await?;
        Ok(user.and_then(|u| u.person_id))
    }
}
