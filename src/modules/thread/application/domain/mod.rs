pub mod entities;
pub mod thread_detail;
