use sea_orm::entity::prelude::*;

use crate::auth::application::domain::entities::UserId;
use crate::reply::application::domain::entities::{AddedReply, ThreadReply};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "replies")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: String,

    pub comment_id: String,

    /// Denormalized so a thread's replies can be listed without a join.
    pub thread_id: String,

    pub content: String,

    pub owner: String,

    pub is_deleted: bool,

    pub created_at: DateTimeWithTimeZone,
}

impl Model {
    pub fn to_added_reply(&self) -> AddedReply {
        AddedReply {
            id: self.id.clone(),
            content: self.content.clone(),
            owner: UserId::from(self.owner.as_str()),
        }
    }

    pub fn into_thread_reply(self) -> ThreadReply {
        ThreadReply {
            id: self.id,
            comment_id: self.comment_id,
            content: self.content,
            date: self.created_at.into(),
            owner: UserId::from(self.owner),
            is_deleted: self.is_deleted,
        }
    }
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "crate::comment::adapter::outgoing::sea_orm_entity::Entity",
        from = "Column::CommentId",
        to = "crate::comment::adapter::outgoing::sea_orm_entity::Column::Id"
    )]
    Comment,
    #[sea_orm(
        belongs_to = "crate::thread::adapter::outgoing::sea_orm_entity::Entity",
        from = "Column::ThreadId",
        to = "crate::thread::adapter::outgoing::sea_orm_entity::Column::Id"
    )]
    Thread,
}

impl Related<crate::comment::adapter::outgoing::sea_orm_entity::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Comment.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
