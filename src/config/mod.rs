//! Configuration: module records read from manifests, and the tool's own
//! runtime settings.

pub mod module;
pub mod settings;

pub use module::{ManifestError, ManifestFormat, ModuleConfig, ModuleManifest};
pub use settings::{ConfigError, ConfigOverrides, ModuleTypesConfig};
