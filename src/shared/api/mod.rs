pub mod error_translator;
mod json_config;
mod response;

pub use error_translator::{translate, ErrorKind, TranslatedError};
pub use json_config::custom_json_config;
pub use response::{ApiError, ApiResponse};
