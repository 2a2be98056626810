//! Package manifest loading.

use crate::error::{UnpubError, UnpubResult};
use serde::Deserialize;
use std::path::Path;

//--------------------------------------------------------------------------------------------------
// Types
//--------------------------------------------------------------------------------------------------

/// The package identity read from a `package.json` manifest.
///
/// Read once at startup and never mutated. Fields beyond `name` and `version`
/// are ignored.
#[derive(Debug, Clone, Deserialize)]
pub struct PackageManifest {
    /// Machine-readable package name.
    pub name: String,

    /// Published version to address on the registry.
    pub version: String,
}

//--------------------------------------------------------------------------------------------------
// Methods
//--------------------------------------------------------------------------------------------------

impl PackageManifest {
    /// Load and validate a manifest from `path`.
    ///
    /// A usable package identity is a startup precondition for any registry
    /// action, so every failure here is fatal and typed: missing file,
    /// unparseable JSON, missing fields, or a non-semver version.
    pub fn load(path: &Path) -> UnpubResult<Self> {
        if !path.exists() {
            return Err(UnpubError::ManifestNotFound(path.to_path_buf()));
        }

        let content = std::fs::read_to_string(path)?;
        let manifest: PackageManifest = serde_json::from_str(&content)
            .map_err(|e| UnpubError::InvalidManifest(format!("{}: {}", path.display(), e)))?;

        if manifest.name.is_empty() {
            return Err(UnpubError::InvalidManifest(format!(
                "{}: name must not be empty",
                path.display()
            )));
        }

        if semver::Version::parse(&manifest.version).is_err() {
            return Err(UnpubError::InvalidManifest(format!(
                "{}: version '{}' is not valid semver (expected format: x.y.z)",
                path.display(),
                manifest.version
            )));
        }

        tracing::debug!(name = %manifest.name, version = %manifest.version, "loaded manifest");

        Ok(manifest)
    }

    /// The `name@version` registry address for this package.
    pub fn registry_ref(&self) -> String {
        format!("{}@{}", self.name, self.version)
    }
}

//--------------------------------------------------------------------------------------------------
// Tests
//--------------------------------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_load_valid_manifest() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("package.json");
        std::fs::write(&path, r#"{ "name": "foo", "version": "1.2.3" }"#).unwrap();

        let manifest = PackageManifest::load(&path).unwrap();
        assert_eq!(manifest.name, "foo");
        assert_eq!(manifest.version, "1.2.3");
        assert_eq!(manifest.registry_ref(), "foo@1.2.3");
    }

    #[test]
    fn test_extra_fields_ignored() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("package.json");
        std::fs::write(
            &path,
            r#"{ "name": "foo", "version": "1.2.3", "private": false, "scripts": {} }"#,
        )
        .unwrap();

        assert!(PackageManifest::load(&path).is_ok());
    }

    #[test]
    fn test_missing_manifest() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("package.json");

        let err = PackageManifest::load(&path).unwrap_err();
        assert!(matches!(err, UnpubError::ManifestNotFound(_)));
    }

    #[test]
    fn test_invalid_json() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("package.json");
        std::fs::write(&path, "{ invalid json }").unwrap();

        let err = PackageManifest::load(&path).unwrap_err();
        assert!(matches!(err, UnpubError::InvalidManifest(_)));
    }

    #[test]
    fn test_missing_fields() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("package.json");
        std::fs::write(&path, r#"{ "name": "foo" }"#).unwrap();

        let err = PackageManifest::load(&path).unwrap_err();
        assert!(matches!(err, UnpubError::InvalidManifest(_)));
    }

    #[test]
    fn test_non_semver_version() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("package.json");
        std::fs::write(&path, r#"{ "name": "foo", "version": "next" }"#).unwrap();

        let err = PackageManifest::load(&path).unwrap_err();
        assert!(matches!(err, UnpubError::InvalidManifest(_)));
    }
}
