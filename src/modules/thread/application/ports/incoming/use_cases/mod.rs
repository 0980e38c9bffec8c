mod add_thread;
mod get_thread_detail;

pub use add_thread::{AddThreadError, AddThreadUseCase};
pub use get_thread_detail::{GetThreadDetailError, GetThreadDetailUseCase};
