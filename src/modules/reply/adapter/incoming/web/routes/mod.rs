mod create_reply;
mod delete_reply;

pub use create_reply::create_reply_handler;
pub use delete_reply::delete_reply_handler;
