mod create_comment;
mod delete_comment;

pub use create_comment::create_comment_handler;
pub use delete_comment::delete_comment_handler;
