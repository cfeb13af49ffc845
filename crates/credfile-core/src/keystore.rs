//! Android keystore validation via the `keytool` CLI.

use std::path::Path;
use std::process::Stdio;

use tokio::process::Command;

use crate::error::{CredentialsError, Result};
use crate::models::KeystoreType;

/// Checks whether the `keytool` binary is discoverable on the PATH.
pub fn keytool_available() -> bool {
    which::which("keytool").is_ok()
}

/// Validates that the keystore can be opened and the alias exists.
///
/// Uses `keytool -list` with the supplied store password, filtered to the
/// alias. When `keytool` is not discoverable the check is skipped with a
/// warning and the build proceeds with unverified credentials.
pub async fn validate_keystore(
    keystore_path: &Path,
    keystore_password: &str,
    key_alias: &str,
) -> Result<()> {
    if !keytool_available() {
        tracing::warn!(
            "keytool not found on PATH, skipping validation of keystore {}",
            keystore_path.display()
        );
        return Ok(());
    }

    let output = Command::new("keytool")
        .arg("-list")
        .arg("-keystore")
        .arg(keystore_path)
        .arg("-storepass")
        .arg(keystore_password)
        .arg("-alias")
        .arg(key_alias)
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .output()
        .await
        .map_err(|e| {
            CredentialsError::KeystoreValidationFailed(format!("failed to run keytool: {}", e))
        })?;

    if !output.status.success() {
        return Err(CredentialsError::KeystoreValidationFailed(captured_output(
            &output.stdout,
            &output.stderr,
        )));
    }

    Ok(())
}

/// Detects the keystore container format from its magic bytes.
pub fn detect_keystore_type(data: &[u8]) -> KeystoreType {
    // JKS files start with magic bytes 0xFEEDFEED; PKCS12 is ASN.1 and
    // starts with a 0x30 SEQUENCE tag
    if data.len() >= 4 && data[0..4] == [0xFE, 0xED, 0xFE, 0xED] {
        return KeystoreType::Jks;
    }

    KeystoreType::Pkcs12
}

fn captured_output(stdout: &[u8], stderr: &[u8]) -> String {
    let stdout = String::from_utf8_lossy(stdout);
    let stderr = String::from_utf8_lossy(stderr);
    let combined = [stdout.trim(), stderr.trim()]
        .iter()
        .filter(|s| !s.is_empty())
        .cloned()
        .collect::<Vec<_>>()
        .join("\n");

    if combined.is_empty() {
        "keytool reported a failure without output".to_string()
    } else {
        combined
    }
}
