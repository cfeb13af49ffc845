//! Error types for the credfile core library.

use std::path::PathBuf;

use thiserror::Error;

use crate::models::Platform;

/// Core error type for credentials loading.
#[derive(Error, Debug)]
pub enum CredentialsError {
    /// `credentials.json` is absent, unreadable, or not valid JSON.
    ///
    /// The underlying read/parse error is logged at debug level and not
    /// carried here.
    #[error("credentials.json must exist and be a valid JSON file")]
    MissingOrInvalidFile,

    /// The parsed document does not match the descriptor shape. Every
    /// violation found is listed, not just the first.
    #[error("credentials.json is not valid: {}", .0.join("; "))]
    SchemaValidation(Vec<String>),

    /// The requested platform section is absent from an otherwise valid
    /// document.
    #[error("no {0} credentials are configured in credentials.json")]
    MissingSection(Platform),

    /// The keystore tool ran and rejected the keystore/alias/password
    /// combination. Carries the tool's captured output.
    #[error("keystore validation failed: {0}")]
    KeystoreValidationFailed(String),

    /// A file referenced by the document could not be read.
    #[error("failed to read {}: {}", path.display(), source)]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Result type alias for credentials operations.
pub type Result<T> = std::result::Result<T, CredentialsError>;
