use sea_orm::entity::prelude::*;

use crate::auth::application::domain::entities::UserId;
use crate::comment::application::domain::entities::{AddedComment, ThreadComment};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "comments")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: String,

    pub thread_id: String,

    pub content: String,

    pub owner: String,

    pub is_deleted: bool,

    pub created_at: DateTimeWithTimeZone,
}

impl Model {
    pub fn to_added_comment(&self) -> AddedComment {
        AddedComment {
            id: self.id.clone(),
            content: self.content.clone(),
            owner: UserId::from(self.owner.as_str()),
        }
    }

    pub fn into_thread_comment(self) -> ThreadComment {
        ThreadComment {
            id: self.id,
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
        belongs_to = "crate::thread::adapter::outgoing::sea_orm_entity::Entity",
        from = "Column::ThreadId",
        to = "crate::thread::adapter::outgoing::sea_orm_entity::Column::Id"
    )]
    Thread,
    #[sea_orm(
        belongs_to = "crate::auth::adapter::outgoing::sea_orm_entity::users::Entity",
        from = "Column::Owner",
        to = "crate::auth::adapter::outgoing::sea_orm_entity::users::Column::Id"
    )]
    User,
}

impl Related<crate::thread::adapter::outgoing::sea_orm_entity::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Thread.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
