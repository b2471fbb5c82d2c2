//! Configuration loading and validation.
//!
//! The config file is optional; every field falls back to its default.

mod service;
mod types;
mod validation;

pub use service::{config_dir, config_path, init_config, load_config_from, load_or_default};
pub use types::AppConfig;
pub use validation::{MAX_PRECISION, ValidationWarning, validate_config};
