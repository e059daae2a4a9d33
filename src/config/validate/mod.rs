//! Configuration validation
//!
//! Rejects configurations that would produce unusable artifact paths.

mod error;
mod validator;


pub use error::ValidationError;
pub use validator::validate_config;
