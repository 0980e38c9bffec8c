use super::sea_orm_entity::users::Entity as UserEntity;
use crate::auth::application::domain::entities::UserId;
use crate::auth::application::ports::outgoing::{UserRepository, UserRepositoryError};
use async_trait::async_trait;
use sea_orm::{DatabaseConnection, EntityTrait};
use std::sync::Arc;

#[derive(Clone, Debug)]
pub struct UserRepositoryPostgres {
    db: Arc<DatabaseConnection>,
}

impl UserRepositoryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl UserRepository for UserRepositoryPostgres {
    async fn get_username_by_id(&self, user_id: &UserId) -> Result<String, UserRepositoryError> {
        let user = UserEntity::find_by_id(user_id.value().to_string())
            .one(&*self.db)
            .await
            .map_err(|e| UserRepositoryError::DatabaseError(e.to_string()))?;

        user.map(|model| model.username)
            .ok_or(UserRepositoryError::UserNotFound)
    }
}
