//! Login collaborator - maps authenticated users to their person.

use std::sync::Arc;

use async_trait::async_trait;

use common::AppResult;

use crate::repository::UserRepository;

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

/// Resolves the person that owns a user account.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait LoginService: Send + Sync {
    /// Person id of a user, `None` when the user has no person
    async fn get_person_id(&self, user_id: i32) -> AppResult<Option<i32>>;
}

/// Concrete implementation of LoginService using repository.
pub struct LoginManager {
    repo: Arc<dyn UserRepository>,
}

impl LoginManager {
    /// Create new login service instance with repository
    pub fn new(repo: Arc<dyn UserRepository>) -> Self {
        Self { repo }
    }
}

#[async_trait]
impl LoginService for LoginManager {
    async fn get_person_id(&self, user_id: i32) -> AppResult<Option<i32>> {
        let person_id = self.repo.find_person_id(user_id).await?;
        if person_id.is_none() {
            tracing::debug!(user_id, "User has no person attached");
        }
        Ok(person_id)
    }
}
