mod reply_repository;

pub use reply_repository::{ReplyRepository, ReplyRepositoryError};
