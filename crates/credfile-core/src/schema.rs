//! Shape validation for the parsed `credentials.json` document.
//!
//! The descriptor format is more tolerant than strict deserialization:
//! unknown keys are dropped, JSON numbers and booleans are accepted where a
//! string is required, and validation continues past the first problem so
//! the error lists every violation in one pass.

use serde_json::{Map, Value};

use crate::error::{CredentialsError, Result};
use crate::models::{
    AndroidSection, CredentialsDocument, DistributionCertificateConfig, ExperimentalSection,
    IosSection, KeystoreConfig,
};

/// Validates a parsed JSON value against the descriptor shape.
///
/// Returns the typed document with unknown keys stripped, or a
/// [`CredentialsError::SchemaValidation`] listing every violation found.
pub fn validate_document(raw: &Value) -> Result<CredentialsDocument> {
    let Some(root) = raw.as_object() else {
        return Err(CredentialsError::SchemaValidation(vec![
            "the document root must be a JSON object".to_string(),
        ]));
    };

    let mut violations = Vec::new();

    let android = section(root, "android").and_then(|v| validate_android(v, &mut violations));
    let ios = section(root, "ios").and_then(|v| validate_ios(v, &mut violations));
    let experimental =
        section(root, "experimental").and_then(|v| validate_experimental(v, &mut violations));

    if !violations.is_empty() {
        return Err(CredentialsError::SchemaValidation(violations));
    }

    Ok(CredentialsDocument {
        android,
        ios,
        experimental,
    })
}

/// Looks up an optional section, treating an explicit `null` as absent.
fn section<'a>(root: &'a Map<String, Value>, key: &str) -> Option<&'a Value> {
    root.get(key).filter(|v| !v.is_null())
}

fn validate_android(value: &Value, violations: &mut Vec<String>) -> Option<AndroidSection> {
    let map = require_object(value, "android", violations)?;
    let keystore = match map.get("keystore") {
        Some(v) => require_object(v, "android.keystore", violations)?,
        None => {
            violations.push(missing("android.keystore"));
            return None;
        }
    };

    let keystore_path = require_string(keystore, "keystorePath", "android.keystore", violations);
    let keystore_password =
        require_string(keystore, "keystorePassword", "android.keystore", violations);
    let key_alias = require_string(keystore, "keyAlias", "android.keystore", violations);
    let key_password = require_string(keystore, "keyPassword", "android.keystore", violations);

    Some(AndroidSection {
        keystore: KeystoreConfig {
            keystore_path: keystore_path?,
            keystore_password: keystore_password?,
            key_alias: key_alias?,
            key_password: key_password?,
        },
    })
}

fn validate_ios(value: &Value, violations: &mut Vec<String>) -> Option<IosSection> {
    let map = require_object(value, "ios", violations)?;

    let provisioning_profile_path =
        require_string(map, "provisioningProfilePath", "ios", violations);

    let certificate = match map.get("distributionCertificate") {
        Some(v) => require_object(v, "ios.distributionCertificate", violations),
        None => {
            violations.push(missing("ios.distributionCertificate"));
            None
        }
    };
    let certificate = certificate.map(|cert| {
        let path = require_string(cert, "path", "ios.distributionCertificate", violations);
        let password = require_string(cert, "password", "ios.distributionCertificate", violations);
        (path, password)
    });

    let (path, password) = certificate?;
    Some(IosSection {
        provisioning_profile_path: provisioning_profile_path?,
        distribution_certificate: DistributionCertificateConfig {
            path: path?,
            password: password?,
        },
    })
}

fn validate_experimental(
    value: &Value,
    violations: &mut Vec<String>,
) -> Option<ExperimentalSection> {
    let map = require_object(value, "experimental", violations)?;
    let npm_token = match map.get("npmToken").filter(|v| !v.is_null()) {
        Some(v) => match coerce_string(v) {
            Some(token) => Some(token),
            None => {
                violations.push(not_a_string("experimental.npmToken"));
                return None;
            }
        },
        None => None,
    };
    Some(ExperimentalSection { npm_token })
}

fn require_object<'a>(
    value: &'a Value,
    path: &str,
    violations: &mut Vec<String>,
) -> Option<&'a Map<String, Value>> {
    match value.as_object() {
        Some(map) => Some(map),
        None => {
            violations.push(format!("field \"{}\" must be an object", path));
            None
        }
    }
}

fn require_string(
    map: &Map<String, Value>,
    key: &str,
    parent: &str,
    violations: &mut Vec<String>,
) -> Option<String> {
    match map.get(key) {
        Some(value) => match coerce_string(value) {
            Some(s) => Some(s),
            None => {
                violations.push(not_a_string(&format!("{}.{}", parent, key)));
                None
            }
        },
        None => {
            violations.push(missing(&format!("{}.{}", parent, key)));
            None
        }
    }
}

/// Accepts strings as-is and coerces scalars to their string rendering.
fn coerce_string(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        _ => None,
    }
}

fn missing(path: &str) -> String {
    format!("missing required field \"{}\"", path)
}

fn not_a_string(path: &str) -> String {
    format!("field \"{}\" must be a string", path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn android_doc() -> Value {
        json!({
            "android": {
                "keystore": {
                    "keystorePath": "keystore.jks",
                    "keystorePassword": "pw1",
                    "keyAlias": "release",
                    "keyPassword": "pw2"
                }
            }
        })
    }

    fn violations(raw: &Value) -> Vec<String> {
        match validate_document(raw) {
            Err(CredentialsError::SchemaValidation(violations)) => violations,
            other => panic!("expected schema validation error, got {:?}", other),
        }
    }

    #[test]
    fn test_validate_minimal_android_document() {
        let document = validate_document(&android_doc()).unwrap();
        let keystore = document.android.unwrap().keystore;
        assert_eq!(keystore.keystore_path, "keystore.jks");
        assert_eq!(keystore.key_alias, "release");
        assert!(document.ios.is_none());
        assert!(document.experimental.is_none());
    }

    #[test]
    fn test_validate_full_document() {
        let raw = json!({
            "android": {
                "keystore": {
                    "keystorePath": "keystore.jks",
                    "keystorePassword": "pw1",
                    "keyAlias": "release",
                    "keyPassword": "pw2"
                }
            },
            "ios": {
                "provisioningProfilePath": "profile.mobileprovision",
                "distributionCertificate": {
                    "path": "cert.p12",
                    "password": "certpw"
                }
            },
            "experimental": {
                "npmToken": "abc"
            }
        });

        let document = validate_document(&raw).unwrap();
        let ios = document.ios.unwrap();
        assert_eq!(ios.provisioning_profile_path, "profile.mobileprovision");
        assert_eq!(ios.distribution_certificate.path, "cert.p12");
        assert_eq!(
            document.experimental.unwrap().npm_token.as_deref(),
            Some("abc")
        );
    }

    #[test]
    fn test_empty_document_is_valid() {
        let document = validate_document(&json!({})).unwrap();
        assert_eq!(document, CredentialsDocument::default());
    }

    #[test]
    fn test_missing_key_alias_is_reported_by_name() {
        let mut raw = android_doc();
        raw["android"]["keystore"]
            .as_object_mut()
            .unwrap()
            .remove("keyAlias");

        let violations = violations(&raw);
        assert_eq!(violations.len(), 1);
        assert!(violations[0].contains("android.keystore.keyAlias"));
    }

    #[test]
    fn test_all_violations_are_collected() {
        let raw = json!({
            "android": {
                "keystore": {
                    "keystorePath": "keystore.jks"
                }
            },
            "ios": {
                "distributionCertificate": {
                    "path": "cert.p12"
                }
            }
        });

        let violations = violations(&raw);
        let message = violations.join("; ");
        assert!(message.contains("android.keystore.keystorePassword"));
        assert!(message.contains("android.keystore.keyAlias"));
        assert!(message.contains("android.keystore.keyPassword"));
        assert!(message.contains("ios.provisioningProfilePath"));
        assert!(message.contains("ios.distributionCertificate.password"));
        assert_eq!(violations.len(), 5);
    }

    #[test]
    fn test_numeric_password_is_coerced() {
        let mut raw = android_doc();
        raw["android"]["keystore"]["keystorePassword"] = json!(1234);

        let document = validate_document(&raw).unwrap();
        assert_eq!(
            document.android.unwrap().keystore.keystore_password,
            "1234"
        );
    }

    #[test]
    fn test_object_where_string_required_is_rejected() {
        let mut raw = android_doc();
        raw["android"]["keystore"]["keystorePassword"] = json!({ "value": "pw1" });

        let violations = violations(&raw);
        assert!(violations[0].contains("android.keystore.keystorePassword"));
        assert!(violations[0].contains("must be a string"));
    }

    #[test]
    fn test_unknown_keys_are_stripped() {
        let mut raw = android_doc();
        raw.as_object_mut()
            .unwrap()
            .insert("web".to_string(), json!({ "token": "t" }));
        raw["android"]["keystore"]
            .as_object_mut()
            .unwrap()
            .insert("keystoreType".to_string(), json!("jks"));

        let document = validate_document(&raw).unwrap();
        let rendered = serde_json::to_value(&document).unwrap();
        assert!(rendered.get("web").is_none());
        assert!(rendered["android"]["keystore"].get("keystoreType").is_none());
    }

    #[test]
    fn test_non_object_root_is_rejected() {
        let violations = violations(&json!([1, 2, 3]));
        assert!(violations[0].contains("root"));
    }

    #[test]
    fn test_null_section_is_treated_as_absent() {
        let raw = json!({ "android": null });
        let document = validate_document(&raw).unwrap();
        assert!(document.android.is_none());
    }

    #[test]
    fn test_ios_requires_distribution_certificate() {
        let raw = json!({
            "ios": {
                "provisioningProfilePath": "profile.mobileprovision"
            }
        });

        let violations = violations(&raw);
        assert_eq!(violations.len(), 1);
        assert!(violations[0].contains("ios.distributionCertificate"));
    }

    #[test]
    fn test_empty_npm_token_is_kept_as_empty() {
        let raw = json!({ "experimental": { "npmToken": "" } });
        let document = validate_document(&raw).unwrap();
        assert_eq!(
            document.experimental.unwrap().npm_token.as_deref(),
            Some("")
        );
    }
}
