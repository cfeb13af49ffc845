//! Reading `credentials.json` and deriving per-platform credential bundles.
//!
//! Every operation reads the descriptor fresh from disk; nothing is cached
//! between calls and the caller owns all returned structures.

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use base64::{engine::general_purpose::STANDARD as BASE64, Engine};

use crate::error::{CredentialsError, Result};
use crate::keystore;
use crate::models::{
    AndroidCredentials, AndroidKeystore, CredentialsDocument, DistributionCertificate,
    IosCredentials, Platform,
};
use crate::schema;

/// File name of the descriptor inside a project directory.
pub const CREDENTIALS_FILE: &str = "credentials.json";

/// Options for [`read_android_credentials`].
#[derive(Debug, Clone, Copy, Default)]
pub struct ReadOptions {
    /// Skip the external keystore validation step.
    pub skip_credentials_check: bool,
}

/// Checks whether `credentials.json` exists directly under `project_dir`.
pub async fn exists(project_dir: &Path) -> bool {
    credentials_path(project_dir).exists()
}

/// Reads and parses `credentials.json` without validating its shape.
///
/// An absent, unreadable, or syntactically invalid file collapses into
/// [`CredentialsError::MissingOrInvalidFile`]; the underlying cause goes to
/// the debug log only.
pub async fn read_raw(project_dir: &Path) -> Result<serde_json::Value> {
    let path = credentials_path(project_dir);
    let content = match tokio::fs::read_to_string(&path).await {
        Ok(content) => content,
        Err(e) => {
            tracing::debug!("failed to read {}: {}", path.display(), e);
            return Err(CredentialsError::MissingOrInvalidFile);
        }
    };

    match serde_json::from_str(&content) {
        Ok(value) => Ok(value),
        Err(e) => {
            tracing::debug!("failed to parse {}: {}", path.display(), e);
            Err(CredentialsError::MissingOrInvalidFile)
        }
    }
}

/// Reads `credentials.json` and validates it against the descriptor shape.
pub async fn read_document(project_dir: &Path) -> Result<CredentialsDocument> {
    let raw = read_raw(project_dir).await?;
    schema::validate_document(&raw)
}

/// Reads the Android credentials bundle, inlining the keystore as base64.
///
/// Fails with [`CredentialsError::MissingSection`] when the document has no
/// `android` section. Unless `options.skip_credentials_check` is set, the
/// keystore is verified with `keytool` before the bundle is returned; a
/// missing `keytool` downgrades to a warning.
pub async fn read_android_credentials(
    project_dir: &Path,
    options: ReadOptions,
) -> Result<AndroidCredentials> {
    let document = read_document(project_dir).await?;
    let Some(android) = document.android else {
        return Err(CredentialsError::MissingSection(Platform::Android));
    };

    let config = android.keystore;
    let keystore_path = resolve_path(project_dir, &config.keystore_path);

    if !options.skip_credentials_check {
        keystore::validate_keystore(&keystore_path, &config.keystore_password, &config.key_alias)
            .await?;
    }

    Ok(AndroidCredentials {
        keystore: AndroidKeystore {
            keystore_base64: read_base64(&keystore_path).await?,
            keystore_password: config.keystore_password,
            key_alias: config.key_alias,
            key_password: config.key_password,
        },
    })
}

/// Reads the iOS credentials bundle, inlining the provisioning profile and
/// distribution certificate as base64.
///
/// Fails with [`CredentialsError::MissingSection`] when the document has no
/// `ios` section. There is no external validation step for iOS credentials.
pub async fn read_ios_credentials(project_dir: &Path) -> Result<IosCredentials> {
    let document = read_document(project_dir).await?;
    let Some(ios) = document.ios else {
        return Err(CredentialsError::MissingSection(Platform::Ios));
    };

    let profile_path = resolve_path(project_dir, &ios.provisioning_profile_path);
    let cert_path = resolve_path(project_dir, &ios.distribution_certificate.path);

    Ok(IosCredentials {
        provisioning_profile_base64: read_base64(&profile_path).await?,
        distribution_certificate: DistributionCertificate {
            cert_p12_base64: read_base64(&cert_path).await?,
            cert_password: ios.distribution_certificate.password,
        },
    })
}

/// Returns the secret environment values contributed by the descriptor.
///
/// `None` when `credentials.json` does not exist at all, which is distinct
/// from the file existing without an `experimental.npmToken` entry.
pub async fn read_secret_envs(project_dir: &Path) -> Result<Option<HashMap<String, String>>> {
    if !exists(project_dir).await {
        return Ok(None);
    }

    let document = read_document(project_dir).await?;
    let token = document
        .experimental
        .and_then(|experimental| experimental.npm_token)
        .filter(|token| !token.is_empty());

    Ok(token.map(|token| HashMap::from([("NPM_TOKEN".to_string(), token)])))
}

/// Resolves a path from the descriptor: absolute paths are used verbatim,
/// relative paths are joined to the project directory.
pub fn resolve_path(project_dir: &Path, file_path: &str) -> PathBuf {
    let path = Path::new(file_path);
    if path.is_absolute() {
        path.to_path_buf()
    } else {
        project_dir.join(path)
    }
}

fn credentials_path(project_dir: &Path) -> PathBuf {
    project_dir.join(CREDENTIALS_FILE)
}

async fn read_base64(path: &Path) -> Result<String> {
    let bytes = tokio::fs::read(path)
        .await
        .map_err(|source| CredentialsError::FileRead {
            path: path.to_path_buf(),
            source,
        })?;

    Ok(BASE64.encode(bytes))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_path_relative() {
        let resolved = resolve_path(Path::new("/project"), "k.jks");
        assert_eq!(resolved, PathBuf::from("/project/k.jks"));
    }

    #[test]
    fn test_resolve_path_absolute() {
        let resolved = resolve_path(Path::new("/project"), "/secrets/k.jks");
        assert_eq!(resolved, PathBuf::from("/secrets/k.jks"));
    }

    #[test]
    fn test_resolve_path_nested_relative() {
        let resolved = resolve_path(Path::new("/project"), "signing/k.jks");
        assert_eq!(resolved, PathBuf::from("/project/signing/k.jks"));
    }
}
