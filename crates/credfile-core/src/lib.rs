//! Credfile Core Library
//!
//! Reads and validates the project-local `credentials.json` descriptor that
//! supplies signing material for mobile app builds: an Android keystore, an
//! iOS provisioning profile and distribution certificate, and optional
//! secret environment values.

pub mod error;
pub mod keystore;
pub mod loader;
pub mod models;
pub mod schema;

pub use error::{CredentialsError, Result};

pub const VERSION: &str = env!("CARGO_PKG_VERSION");
