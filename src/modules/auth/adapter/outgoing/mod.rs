pub mod jwt;
pub mod sea_orm_entity;
mod user_repository_postgres;

pub use user_repository_postgres::UserRepositoryPostgres;
