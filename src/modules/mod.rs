pub mod auth;
pub mod comment;
pub mod reply;
pub mod thread;
