pub mod sea_orm_entity;
mod thread_repository_postgres;

pub use thread_repository_postgres::ThreadRepositoryPostgres;
