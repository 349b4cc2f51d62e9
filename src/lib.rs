//! module-types - module type classification for dependency analysis
//!
//! Build-tool configuration entries name a module, a path and a free-text
//! `type` ("mvn", "gem", "commonjspackage", ...). This crate maps that text
//! onto a closed set of canonical [`ModuleType`]s so the right ecosystem
//! analyzer can be picked for each module.
//!
//! # Example
//!
//! ```
//! use module_types::{Classifier, ModuleConfig, ModuleType, UnknownTypePolicy};
//!
//! let modules = vec![
//!     ModuleConfig::new("web", "./web", "commonjspackage"),
//!     ModuleConfig::new("api", "./api", "mvn"),
//!     ModuleConfig::new("docs", "./docs", "hugo"),
//! ];
//!
//! let report = Classifier::new(UnknownTypePolicy::Skip)
//!     .classify_all(&modules)
//!     .unwrap();
//!
//! assert_eq!(report.modules[0].module_type, ModuleType::Nodejs);
//! assert_eq!(report.modules[1].module_type, ModuleType::Maven);
//! assert_eq!(report.skipped[0].name, "docs");
//! ```
//!
//! # Project Structure
//!
//! - [`types`]: canonical module types and the alias resolver
//! - [`config`]: module records, manifests and runtime settings
//! - [`classify`]: attaching types to records and handling unknown ones
//! - [`cli`]: command-line interface

pub mod classify;
pub mod cli;
pub mod config;
pub mod types;
pub mod util;

pub use classify::{ClassificationReport, ClassifiedModule, Classifier, ClassifyError, UnknownTypePolicy};
pub use config::{
    ConfigError, ConfigOverrides, ManifestError, ModuleConfig, ModuleManifest, ModuleTypesConfig,
};
pub use types::{resolve, ModuleType, UnknownModuleType};
pub use util::{init_logging, LoggingConfig};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name
pub const NAME: &str = env!("CARGO_PKG_NAME");
