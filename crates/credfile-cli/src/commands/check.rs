//! Credentials validation command.

use std::path::Path;

use anyhow::{bail, Context, Result};
use base64::{engine::general_purpose::STANDARD as BASE64, Engine};
use credfile_core::keystore::detect_keystore_type;
use credfile_core::loader::{self, ReadOptions};

pub async fn handle_check_command(project_dir: &Path, skip_keystore_check: bool) -> Result<()> {
    if !loader::exists(project_dir).await {
        bail!("No credentials.json found in {}", project_dir.display());
    }

    let document = loader::read_document(project_dir).await?;
    if document.android.is_none() && document.ios.is_none() {
        println!("credentials.json is valid but configures no platforms");
        return Ok(());
    }

    if document.android.is_some() {
        let options = ReadOptions {
            skip_credentials_check: skip_keystore_check,
        };
        let credentials = loader::read_android_credentials(project_dir, options).await?;
        let keystore = BASE64
            .decode(&credentials.keystore.keystore_base64)
            .context("Keystore payload is not valid base64")?;

        let verified = if skip_keystore_check {
            "not verified"
        } else {
            "verified"
        };
        println!(
            "android: ok ({} keystore, alias '{}', {})",
            detect_keystore_type(&keystore),
            credentials.keystore.key_alias,
            verified
        );
    }

    if document.ios.is_some() {
        let credentials = loader::read_ios_credentials(project_dir).await?;
        let profile = BASE64
            .decode(&credentials.provisioning_profile_base64)
            .context("Provisioning profile payload is not valid base64")?;
        let certificate = BASE64
            .decode(&credentials.distribution_certificate.cert_p12_base64)
            .context("Certificate payload is not valid base64")?;

        println!(
            "ios: ok (provisioning profile {} bytes, distribution certificate {} bytes)",
            profile.len(),
            certificate.len()
        );
    }

    Ok(())
}
