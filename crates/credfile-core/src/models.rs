//! Data model for the `credentials.json` descriptor and the credential
//! bundles derived from it.

use serde::{Deserialize, Serialize};

/// Mobile platform a credentials section belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Platform {
    Android,
    Ios,
}

impl Platform {
    pub fn as_str(&self) -> &'static str {
        match self {
            Platform::Android => "android",
            Platform::Ios => "ios",
        }
    }
}

impl std::str::FromStr for Platform {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "android" => Ok(Platform::Android),
            "ios" => Ok(Platform::Ios),
            _ => Err(format!("Unknown platform: {}", s)),
        }
    }
}

impl std::fmt::Display for Platform {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Validated in-memory form of `credentials.json`.
///
/// A valid document may configure zero, one, or both platforms; a missing
/// section only becomes an error when that platform's credentials are
/// requested.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CredentialsDocument {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub android: Option<AndroidSection>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ios: Option<IosSection>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub experimental: Option<ExperimentalSection>,
}

/// Android half of the descriptor.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AndroidSection {
    pub keystore: KeystoreConfig,
}

/// Keystore entry as written in the descriptor. All fields are required
/// together.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct KeystoreConfig {
    /// Path to the keystore file, absolute or relative to the project
    /// directory.
    pub keystore_path: String,
    pub keystore_password: String,
    pub key_alias: String,
    pub key_password: String,
}

/// iOS half of the descriptor.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IosSection {
    /// Path to the mobileprovision file, absolute or relative to the
    /// project directory.
    pub provisioning_profile_path: String,
    pub distribution_certificate: DistributionCertificateConfig,
}

/// Distribution certificate entry as written in the descriptor.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DistributionCertificateConfig {
    /// Path to the p12 file, absolute or relative to the project directory.
    pub path: String,
    pub password: String,
}

/// Experimental descriptor entries.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExperimentalSection {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub npm_token: Option<String>,
}

/// Android credentials ready for a build, keystore content inlined.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AndroidCredentials {
    pub keystore: AndroidKeystore,
}

/// Keystore bundle with the file content encoded as base64.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AndroidKeystore {
    /// Base64-encoded content of the keystore file.
    pub keystore_base64: String,
    pub keystore_password: String,
    pub key_alias: String,
    pub key_password: String,
}

/// iOS credentials ready for a build, file contents inlined.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IosCredentials {
    /// Base64-encoded content of the provisioning profile.
    pub provisioning_profile_base64: String,
    pub distribution_certificate: DistributionCertificate,
}

/// Distribution certificate bundle with the p12 content encoded as base64.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DistributionCertificate {
    /// Base64-encoded content of the p12 file.
    pub cert_p12_base64: String,
    pub cert_password: String,
}

/// Android keystore container format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum KeystoreType {
    Jks,
    Pkcs12,
}

impl KeystoreType {
    pub fn as_str(&self) -> &'static str {
        match self {
            KeystoreType::Jks => "jks",
            KeystoreType::Pkcs12 => "pkcs12",
        }
    }
}

impl std::str::FromStr for KeystoreType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "jks" => Ok(KeystoreType::Jks),
            "pkcs12" => Ok(KeystoreType::Pkcs12),
            _ => Err(format!("Unknown keystore type: {}", s)),
        }
    }
}

impl std::fmt::Display for KeystoreType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
