use std::sync::Arc;

use crate::reply::application::ports::incoming::use_cases::{AddReplyUseCase, DeleteReplyUseCase};

#[derive(Clone)]
pub struct ReplyUseCases {
    pub add: Arc<dyn AddReplyUseCase + Send + Sync>,
    pub delete: Arc<dyn DeleteReplyUseCase + Send + Sync>,
}
