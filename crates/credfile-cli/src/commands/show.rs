//! Masked credentials display command.

use std::path::Path;

use anyhow::{Context, Result};
use credfile_core::loader;
use credfile_core::models::CredentialsDocument;

pub async fn handle_show_command(project_dir: &Path) -> Result<()> {
    let mut document = loader::read_document(project_dir).await?;
    mask_document(&mut document);

    let rendered =
        serde_json::to_string_pretty(&document).context("Failed to render document")?;
    println!("{}", rendered);

    Ok(())
}

fn mask_document(document: &mut CredentialsDocument) {
    if let Some(android) = &mut document.android {
        android.keystore.keystore_password = mask(&android.keystore.keystore_password);
        android.keystore.key_password = mask(&android.keystore.key_password);
    }
    if let Some(ios) = &mut document.ios {
        ios.distribution_certificate.password = mask(&ios.distribution_certificate.password);
    }
    if let Some(experimental) = &mut document.experimental {
        if let Some(token) = &experimental.npm_token {
            experimental.npm_token = Some(mask(token));
        }
    }
}

/// Masks a secret for display (shows at most the first two characters).
fn mask(secret: &str) -> String {
    if secret.chars().count() > 4 {
        let head: String = secret.chars().take(2).collect();
        format!("{}...", head)
    } else {
        "****".to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mask_long_secret() {
        assert_eq!(mask("supersecret"), "su...");
    }

    #[test]
    fn test_mask_short_secret() {
        assert_eq!(mask("pw"), "****");
        assert_eq!(mask(""), "****");
    }
}
