//! Maps free-text module type tokens onto [`ModuleType`].
//!
//! Matching is exact and case-sensitive: no trimming, no case folding. A token
//! that is not in the alias table resolves to `None`, which callers must
//! handle themselves; nothing here logs or fails.
//!
//! The index is built from the constant alias table at most once. Binaries
//! call [`init`] at startup so it exists before any lookup; a library caller
//! that skips it gets the same table built on first use, under the cell's
//! one-time initialization.

use std::collections::HashMap;

use once_cell::sync::Lazy;

use super::ModuleType;

static ALIAS_INDEX: Lazy<HashMap<&'static str, ModuleType>> =
    Lazy::new(|| ModuleType::ALIASES.iter().copied().collect());

/// Builds the alias index now instead of on the first lookup.
pub fn init() {
    Lazy::force(&ALIAS_INDEX);
}

/// Resolves a raw `type` token to its canonical module type.
pub fn resolve(token: &str) -> Option<ModuleType> {
    ALIAS_INDEX.get(token).copied()
}

/// The full alias table, in declaration order.
pub fn aliases() -> &'static [(&'static str, ModuleType)] {
    ModuleType::ALIASES
}

/// Aliases that resolve to `module_type`.
pub fn aliases_for(module_type: ModuleType) -> impl Iterator<Item = &'static str> {
    ModuleType::ALIASES
        .iter()
        .filter(move |(_, ty)| *ty == module_type)
        .map(|(alias, _)| *alias)
}
