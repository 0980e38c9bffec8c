use async_trait::async_trait;
use chrono::Utc;
use sea_orm::{
    sea_query::Expr, ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter,
    QueryOrder, Set,
};
use std::sync::Arc;

use crate::auth::application::domain::entities::UserId;
use crate::comment::application::{
    domain::entities::{AddedComment, CreateComment, ThreadComment},
    ports::outgoing::{CommentRepository, CommentRepositoryError},
};
use crate::shared::id_generator::IdGenerator;

use super::sea_orm_entity::{
    ActiveModel as CommentActiveModel, Column as CommentColumn, Entity as CommentEntity,
    Model as CommentModel,
};

#[derive(Clone)]
pub struct CommentRepositoryPostgres {
    db: Arc<DatabaseConnection>,
    id_generator: Arc<dyn IdGenerator>,
}

impl CommentRepositoryPostgres {
    pub fn new(db: Arc<DatabaseConnection>, id_generator: Arc<dyn IdGenerator>) -> Self {
        Self { db, id_generator }
    }
}

fn db_error(e: sea_orm::DbErr) -> CommentRepositoryError {
    CommentRepositoryError::DatabaseError(e.to_string())
}

#[async_trait]
impl CommentRepository for CommentRepositoryPostgres {
    async fn add_comment(
        &self,
        owner: &UserId,
        thread_id: &str,
        data: CreateComment,
    ) -> Result<AddedComment, CommentRepositoryError> {
        let active = CommentActiveModel {
            id: Set(format!("comment-{}", self.id_generator.generate())),
            thread_id: Set(thread_id.to_string()),
            content: Set(data.content().to_string()),
            owner: Set(owner.value().to_string()),
            is_deleted: Set(false),
            created_at: Set(Utc::now().fixed_offset()),
        };

        let inserted: CommentModel = active.insert(&*self.db).await.map_err(db_error)?;

        Ok(inserted.to_added_comment())
    }

    async fn delete_comment(&self, comment_id: &str) -> Result<(), CommentRepositoryError> {
        let result = CommentEntity::update_many()
            .col_expr(CommentColumn::IsDeleted, Expr::value(true))
            .filter(CommentColumn::Id.eq(comment_id))
            .exec(&*self.db)
            .await
            .map_err(db_error)?;

        if result.rows_affected == 0 {
            return Err(CommentRepositoryError::CommentNotFound);
        }

        Ok(())
    }

    async fn verify_comment_availability(
        &self,
        comment_id: &str,
    ) -> Result<(), CommentRepositoryError> {
        let found = CommentEntity::find()
            .filter(CommentColumn::Id.eq(comment_id))
            .filter(CommentColumn::IsDeleted.eq(false))
            .one(&*self.db)
            .await
            .map_err(db_error)?;

        match found {
            Some(_) => Ok(()),
            None => Err(CommentRepositoryError::CommentNotFound),
        }
    }

    async fn verify_comment_owner(&self, comment_id: &str) -> Result<UserId, CommentRepositoryError> {
        CommentEntity::find_by_id(comment_id.to_string())
            .one(&*self.db)
            .await
            .map_err(db_error)?
            .map(|m| UserId::from(m.owner))
            .ok_or(CommentRepositoryError::CommentNotFound)
    }

    async fn get_thread_comments(
        &self,
        thread_id: &str,
    ) -> Result<Vec<ThreadComment>, CommentRepositoryError> {
        let models: Vec<CommentModel> = CommentEntity::find()
            .filter(CommentColumn::ThreadId.eq(thread_id))
            .order_by_asc(CommentColumn::CreatedAt)
            .all(&*self.db)
            .await
            .map_err(db_error)?;

        Ok(models
            .into_iter()
            .map(CommentModel::into_thread_comment)
            .collect())
    }
}
