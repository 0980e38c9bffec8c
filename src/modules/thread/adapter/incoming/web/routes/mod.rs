mod create_thread;
mod get_thread_detail;

pub use create_thread::create_thread_handler;
pub use get_thread_detail::get_thread_detail_handler;
