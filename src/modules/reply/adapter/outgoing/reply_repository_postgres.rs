use async_trait::async_trait;
use chrono::Utc;
use sea_orm::{
    sea_query::Expr, ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter,
    QueryOrder, Set,
};
use std::sync::Arc;

use crate::auth::application::domain::entities::UserId;
use crate::reply::application::{
    domain::entities::{AddedReply, CreateReply, ThreadReply},
    ports::outgoing::{ReplyRepository, ReplyRepositoryError},
};
use crate::shared::id_generator::IdGenerator;

use super::sea_orm_entity::{
    ActiveModel as ReplyActiveModel, Column as ReplyColumn, Entity as ReplyEntity,
    Model as ReplyModel,
};

#[derive(Clone)]
pub struct ReplyRepositoryPostgres {
    db: Arc<DatabaseConnection>,
    id_generator: Arc<dyn IdGenerator>,
}

impl ReplyRepositoryPostgres {
    pub fn new(db: Arc<DatabaseConnection>, id_generator: Arc<dyn IdGenerator>) -> Self {
        Self { db, id_generator }
    }
}

fn db_error(e: sea_orm::DbErr) -> ReplyRepositoryError {
    ReplyRepositoryError::DatabaseError(e.to_string())
}

#[async_trait]
impl ReplyRepository for ReplyRepositoryPostgres {
    async fn add_reply(
        &self,
        owner: &UserId,
        thread_id: &str,
        comment_id: &str,
        data: CreateReply,
    ) -> Result<AddedReply, ReplyRepositoryError> {
        let active = ReplyActiveModel {
            id: Set(format!("reply-{}", self.id_generator.generate())),
            comment_id: Set(comment_id.to_string()),
            thread_id: Set(thread_id.to_string()),
            content: Set(data.content().to_string()),
            owner: Set(owner.value().to_string()),
            is_deleted: Set(false),
            created_at: Set(Utc::now().fixed_offset()),
        };

        let inserted: ReplyModel = active.insert(&*self.db).await.map_err(db_error)?;

        Ok(inserted.to_added_reply())
    }

    async fn delete_reply(&self, reply_id: &str) -> Result<(), ReplyRepositoryError> {
        let result = ReplyEntity::update_many()
            .col_expr(ReplyColumn::IsDeleted, Expr::value(true))
            .filter(ReplyColumn::Id.eq(reply_id))
            .exec(&*self.db)
            .await
            .map_err(db_error)?;

        if result.rows_affected == 0 {
            return Err(ReplyRepositoryError::ReplyNotFound);
        }

        Ok(())
    }

    async fn verify_reply_availability(&self, reply_id: &str) -> Result<(), ReplyRepositoryError> {
        let found = ReplyEntity::find()
            .filter(ReplyColumn::Id.eq(reply_id))
            .filter(ReplyColumn::IsDeleted.eq(false))
            .one(&*self.db)
            .await
            .map_err(db_error)?;

        match found {
            Some(_) => Ok(()),
            None => Err(ReplyRepositoryError::ReplyNotFound),
        }
    }

    async fn verify_reply_owner(&self, reply_id: &str) -> Result<UserId, ReplyRepositoryError> {
        ReplyEntity::find_by_id(reply_id.to_string())
            .one(&*self.db)
            .await
            .map_err(db_error)?
            .map(|m| UserId::from(m.owner))
            .ok_or(ReplyRepositoryError::ReplyNotFound)
    }

    async fn get_thread_replies(
        &self,
        thread_id: &str,
    ) -> Result<Vec<ThreadReply>, ReplyRepositoryError> {
        let models: Vec<ReplyModel> = ReplyEntity::find()
            .filter(ReplyColumn::ThreadId.eq(thread_id))
            .order_by_asc(ReplyColumn::CreatedAt)
            .all(&*self.db)
            .await
            .map_err(db_error)?;

        Ok(models.into_iter().map(ReplyModel::into_thread_reply).collect())
    }
}
