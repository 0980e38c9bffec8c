use async_trait::async_trait;

use crate::auth::application::domain::entities::UserId;

#[derive(Debug, Clone, thiserror::Error)]
pub enum UserRepositoryError {
    #[error("User not found")]
    UserNotFound,

    #[error("Database error: {0}")]
    DatabaseError(String),
}

/// Read access to forum members. Callers pass ids they got from stored
/// content, so existence is assumed rather than checked up front.
#[async_trait]
pub trait UserRepository: Send + Sync {
    async fn get_username_by_id(&self, user_id: &UserId) -> Result<String, UserRepositoryError>;
}
