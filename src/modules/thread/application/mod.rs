pub mod domain;
pub mod ports;
pub mod services;
pub mod thread_use_cases;
