use async_trait::async_trait;

use crate::thread::application::domain::thread_detail::{ThreadDetailError, ThreadDetailView};

#[derive(Debug, Clone, thiserror::Error)]
pub enum GetThreadDetailError {
    #[error("Thread not found")]
    ThreadNotFound,

    #[error(transparent)]
    InvalidDetail(#[from] ThreadDetailError),

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

impl GetThreadDetailError {
    pub fn code(&self) -> &'static str {
        match self {
            GetThreadDetailError::ThreadNotFound => "THREAD.NOT_FOUND",
            GetThreadDetailError::InvalidDetail(e) => e.code(),
            GetThreadDetailError::RepositoryError(_) => "INTERNAL_ERROR",
        }
    }
}

#[async_trait]
pub trait GetThreadDetailUseCase: Send + Sync {
    async fn execute(&self, thread_id: &str) -> Result<ThreadDetailView, GetThreadDetailError>;
}
