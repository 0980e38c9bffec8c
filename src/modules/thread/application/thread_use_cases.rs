use std::sync::Arc;

use crate::thread::application::ports::incoming::use_cases::{
    AddThreadUseCase, GetThreadDetailUseCase,
};

#[derive(Clone)]
pub struct ThreadUseCases {
    pub add: Arc<dyn AddThreadUseCase + Send + Sync>,
    pub get_detail: Arc<dyn GetThreadDetailUseCase + Send + Sync>,
}
