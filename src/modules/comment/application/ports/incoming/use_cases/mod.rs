mod add_comment;
mod delete_comment;

pub use add_comment::{AddCommentError, AddCommentUseCase};
pub use delete_comment::{DeleteCommentError, DeleteCommentUseCase};
