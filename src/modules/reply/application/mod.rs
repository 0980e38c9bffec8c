pub mod domain;
pub mod ports;
pub mod reply_use_cases;
pub mod services;
