mod add_reply;
mod delete_reply;

pub use add_reply::{AddReplyError, AddReplyUseCase};
pub use delete_reply::{DeleteReplyError, DeleteReplyUseCase};
