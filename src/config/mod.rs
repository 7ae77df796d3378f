// src/config/mod.rs

//! Layout configuration: serde model, TOML loader and semantic validation.

pub mod loader;
pub mod model;
pub mod validate;

pub use loader::{load_and_validate, load_from_path};
pub use model::LayoutConfig;
pub use validate::validate_config;
