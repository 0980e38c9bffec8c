use sea_orm::entity::prelude::*;

use crate::auth::application::domain::entities::UserId;
use crate::thread::application::domain::entities::{AddedThread, Thread};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "threads")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: String,

    pub title: String,

    pub body: String,

    pub owner: String,

    pub created_at: DateTimeWithTimeZone,
}

impl Model {
    pub fn to_added_thread(&self) -> AddedThread {
        AddedThread {
            id: self.id.clone(),
            title: self.title.clone(),
            owner: UserId::from(self.owner.as_str()),
        }
    }

    pub fn into_thread(self) -> Thread {
        Thread {
            id: self.id,
            title: self.title,
            body: self.body,
            date: self.created_at.into(),
            owner: UserId::from(self.owner),
        }
    }
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "crate::auth::adapter::outgoing::sea_orm_entity::users::Entity",
        from = "Column::Owner",
        to = "crate::auth::adapter::outgoing::sea_orm_entity::users::Column::Id"
    )]
    User,
}

impl Related<crate::auth::adapter::outgoing::sea_orm_entity::users::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::User.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
