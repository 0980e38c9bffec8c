use async_trait::async_trait;
use chrono::Utc;
use sea_orm::{ActiveModelTrait, DatabaseConnection, EntityTrait, Set};
use std::sync::Arc;

use crate::auth::application::domain::entities::UserId;
use crate::shared::id_generator::IdGenerator;
use crate::thread::application::{
    domain::entities::{AddedThread, CreateThread, Thread},
    ports::outgoing::{ThreadRepository, ThreadRepositoryError},
};

use super::sea_orm_entity::{
    ActiveModel as ThreadActiveModel, Entity as ThreadEntity, Model as ThreadModel,
};

#[derive(Clone)]
pub struct ThreadRepositoryPostgres {
    db: Arc<DatabaseConnection>,
    id_generator: Arc<dyn IdGenerator>,
}

impl ThreadRepositoryPostgres {
    pub fn new(db: Arc<DatabaseConnection>, id_generator: Arc<dyn IdGenerator>) -> Self {
        Self { db, id_generator }
    }

    async fn find(&self, thread_id: &str) -> Result<Option<ThreadModel>, ThreadRepositoryError> {
        ThreadEntity::find_by_id(thread_id.to_string())
            .one(&*self.db)
            .await
            .map_err(|e| ThreadRepositoryError::DatabaseError(e.to_string()))
    }
}

#[async_trait]
impl ThreadRepository for ThreadRepositoryPostgres {
    async fn add_thread(
        &self,
        owner: &UserId,
        data: CreateThread,
    ) -> Result<AddedThread, ThreadRepositoryError> {
        let active = ThreadActiveModel {
            id: Set(format!("thread-{}", self.id_generator.generate())),
            title: Set(data.title().to_string()),
            body: Set(data.body().to_string()),
            owner: Set(owner.value().to_string()),
            created_at: Set(Utc::now().fixed_offset()),
        };

        let inserted: ThreadModel = active
            .insert(&*self.db)
            .await
            .map_err(|e| ThreadRepositoryError::DatabaseError(e.to_string()))?;

        Ok(inserted.to_added_thread())
    }

    async fn get_thread_by_id(&self, thread_id: &str) -> Result<Thread, ThreadRepositoryError> {
        self.find(thread_id)
            .await?
            .map(ThreadModel::into_thread)
            .ok_or(ThreadRepositoryError::ThreadNotFound)
    }

    async fn verify_thread_availability(&self, thread_id: &str) -> Result<(), ThreadRepositoryError> {
        match self.find(thread_id).await? {
            Some(_) => Ok(()),
            None => Err(ThreadRepositoryError::ThreadNotFound),
        }
    }
}
