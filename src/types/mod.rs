//! Canonical module types and the alias resolver.
//!
//! [`ModuleType`] is the closed set of build ecosystems downstream analyzers
//! know about. [`resolve`] maps the free-text `type` of a module
//! configuration onto it.
//!
//! # Example
//!
//! ```
//! use module_types::types::{resolve, ModuleType};
//!
//! assert_eq!(resolve("mvn"), Some(ModuleType::Maven));
//! assert_eq!(resolve("npm"), None);
//! assert_eq!(ModuleType::all().len(), 9);
//! ```

#[macro_use]
pub mod id_enum_macro;

pub mod module_type;
pub mod resolver;

pub use module_type::{ModuleType, UnknownModuleType};
pub use resolver::{aliases, aliases_for, init, resolve};
