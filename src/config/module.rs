//! Module configuration records and the manifest files that list them.
//!
//! A manifest is a list of `{name, path, type}` entries. YAML and JSON
//! manifests may be either a bare list or a document with a `modules` key;
//! TOML manifests use `[[modules]]` tables.
//!
//! ```yaml
//! modules:
//!   - name: web
//!     path: ./web
//!     type: nodejs
//!   - name: api
//!     path: ./api
//!     type: mvn
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::types::{resolve, ModuleType};

/// Errors raised while loading a module manifest
#[derive(Debug, Error)]
pub enum ManifestError {
    #[error("Failed to read manifest {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Unsupported manifest format for {0}. Expected .yml, .yaml, .json or .toml")]
    UnsupportedFormat(PathBuf),

    #[error("Failed to parse {format} manifest: {message}")]
    Parse {
        format: ManifestFormat,
        message: String,
    },
}

/// One analyzable unit as written in a configuration file.
///
/// `raw_type` is kept verbatim; it is only interpreted by [`resolve`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModuleConfig {
    pub name: String,
    pub path: String,
    #[serde(rename = "type")]
    pub raw_type: String,
}

impl ModuleConfig {
    pub fn new(
        name: impl Into<String>,
        path: impl Into<String>,
        raw_type: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            path: path.into(),
            raw_type: raw_type.into(),
        }
    }

    /// Canonical module type for this record, if its type is a known alias.
    pub fn module_type(&self) -> Option<ModuleType> {
        resolve(&self.raw_type)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ManifestFormat {
    Yaml,
    Json,
    Toml,
}

impl ManifestFormat {
    pub fn from_path(path: &Path) -> Result<Self, ManifestError> {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some("yml") | Some("yaml") => Ok(Self::Yaml),
            Some("json") => Ok(Self::Json),
            Some("toml") => Ok(Self::Toml),
            _ => Err(ManifestError::UnsupportedFormat(path.to_path_buf())),
        }
    }
}

impl fmt::Display for ManifestFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Yaml => write!(f, "YAML"),
            Self::Json => write!(f, "JSON"),
            Self::Toml => write!(f, "TOML"),
        }
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum ManifestDocument {
    List(Vec<ModuleConfig>),
    Document {
        #[serde(default)]
        modules: Vec<ModuleConfig>,
    },
}

impl From<ManifestDocument> for ModuleManifest {
    fn from(doc: ManifestDocument) -> Self {
        match doc {
            ManifestDocument::List(modules) | ManifestDocument::Document { modules } => {
                Self { modules }
            }
        }
    }
}

/// Ordered list of module records loaded from a file.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModuleManifest {
    #[serde(default)]
    pub modules: Vec<ModuleConfig>,
}

impl ModuleManifest {
    /// Loads a manifest, choosing the parser from the file extension.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, ManifestError> {
        let path = path.as_ref();
        let format = ManifestFormat::from_path(path)?;
        let content = fs::read_to_string(path).map_err(|source| ManifestError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_str_with_format(&content, format)
    }

    pub fn from_str_with_format(content: &str, format: ManifestFormat) -> Result<Self, ManifestError> {
        let parse_err = |message: String| ManifestError::Parse { format, message };

        match format {
            ManifestFormat::Yaml => serde_yaml::from_str::<ManifestDocument>(content)
                .map(Into::into)
                .map_err(|e| parse_err(e.to_string())),
            ManifestFormat::Json => serde_json::from_str::<ManifestDocument>(content)
                .map(Into::into)
                .map_err(|e| parse_err(e.to_string())),
            ManifestFormat::Toml => {
                toml::from_str::<ModuleManifest>(content).map_err(|e| parse_err(e.to_string()))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_module_config_resolves_raw_type() {
        let module = ModuleConfig::new("api", "./api", "mvn");
        assert_eq!(module.module_type(), Some(ModuleType::Maven));

        let module = ModuleConfig::new("api", "./api", "Maven");
        assert_eq!(module.module_type(), None);
    }

    #[test]
    fn test_yaml_document() {
        let yaml = r#"
modules:
  - name: web
    path: ./web
    type: nodejs
  - name: api
    path: ./api
    type: mvn
"#;
        let manifest = ModuleManifest::from_str_with_format(yaml, ManifestFormat::Yaml).unwrap();
        assert_eq!(manifest.modules.len(), 2);
        assert_eq!(manifest.modules[0], ModuleConfig::new("web", "./web", "nodejs"));
        assert_eq!(manifest.modules[1].raw_type, "mvn");
    }

    #[test]
    fn test_yaml_bare_list() {
        let yaml = "- name: lib\n  path: vendor/lib.tar\n  type: vendoredarchives\n";
        let manifest = ModuleManifest::from_str_with_format(yaml, ManifestFormat::Yaml).unwrap();
        assert_eq!(manifest.modules.len(), 1);
        assert_eq!(manifest.modules[0].module_type(), Some(ModuleType::VendoredArchives));
    }

    #[test]
    fn test_json_document() {
        let json = r#"{"modules": [{"name": "site", "path": ".", "type": "bower"}]}"#;
        let manifest = ModuleManifest::from_str_with_format(json, ManifestFormat::Json).unwrap();
        assert_eq!(manifest.modules, vec![ModuleConfig::new("site", ".", "bower")]);
    }

    #[test]
    fn test_toml_tables() {
        let toml = r#"
[[modules]]
name = "svc"
path = "cmd/svc"
type = "go"
"#;
        let manifest = ModuleManifest::from_str_with_format(toml, ManifestFormat::Toml).unwrap();
        assert_eq!(manifest.modules[0].module_type(), Some(ModuleType::Golang));
    }

    #[test]
    fn test_empty_fields_are_not_validated() {
        let json = r#"[{"name": "", "path": "", "type": ""}]"#;
        let manifest = ModuleManifest::from_str_with_format(json, ManifestFormat::Json).unwrap();
        assert_eq!(manifest.modules[0].module_type(), None);
    }

    #[test]
    fn test_missing_field_is_parse_error() {
        let json = r#"[{"name": "x", "path": "."}]"#;
        let err = ModuleManifest::from_str_with_format(json, ManifestFormat::Json).unwrap_err();
        assert!(matches!(err, ManifestError::Parse { format: ManifestFormat::Json, .. }));
    }

    #[test]
    fn test_from_path_uses_extension() {
        let mut file = tempfile::Builder::new().suffix(".yml").tempfile().unwrap();
        writeln!(file, "- {{name: app, path: ., type: gem}}").unwrap();

        let manifest = ModuleManifest::from_path(file.path()).unwrap();
        assert_eq!(manifest.modules[0].module_type(), Some(ModuleType::Ruby));
    }

    #[test]
    fn test_unsupported_extension() {
        let file = NamedTempFile::new().unwrap();
        let err = ModuleManifest::from_path(file.path()).unwrap_err();
        assert!(matches!(err, ManifestError::UnsupportedFormat(_)));
    }

    #[test]
    fn test_missing_file() {
        let err = ModuleManifest::from_path("/nonexistent/modules.yml").unwrap_err();
        assert!(matches!(err, ManifestError::Io { .. }));
    }
}
