pub mod api;
pub mod id_generator;
pub mod payload;
