//! Alias resolution against the public API

use module_types::types::{aliases, resolve};
use module_types::ModuleType;
use std::collections::HashSet;
use yare::parameterized;

#[parameterized(
    nodejs = { "nodejs", ModuleType::Nodejs },
    commonjspackage = { "commonjspackage", ModuleType::Nodejs },
    go = { "go", ModuleType::Golang },
    gopackage = { "gopackage", ModuleType::Golang },
    golang = { "golang", ModuleType::Golang },
    bundler = { "bundler", ModuleType::Ruby },
    gem = { "gem", ModuleType::Ruby },
    rubygems = { "rubygems", ModuleType::Ruby },
    ruby = { "ruby", ModuleType::Ruby },
    maven = { "maven", ModuleType::Maven },
    mvn = { "mvn", ModuleType::Maven },
    sbt = { "sbt", ModuleType::SBT },
    sbtpackage = { "sbtpackage", ModuleType::SBT },
    scala = { "scala", ModuleType::SBT },
    vendoredarchives = { "vendoredarchives", ModuleType::VendoredArchives },
    gradle = { "gradle", ModuleType::Gradle },
    bower = { "bower", ModuleType::Bower },
    composer = { "composer", ModuleType::Composer },
)]
fn test_known_alias(token: &str, expected: ModuleType) {
    assert_eq!(resolve(token), Some(expected));
}

#[parameterized(
    empty = { "" },
    capitalized = { "Nodejs" },
    upper = { "MAVEN" },
    npm = { "npm" },
    yarn = { "yarn" },
    padded = { " gem" },
    trailing_newline = { "gradle\n" },
    cargo = { "cargo" },
)]
fn test_unknown_token(token: &str) {
    assert_eq!(resolve(token), None);
}

#[test]
fn test_resolve_is_deterministic() {
    for token in ["go", "npm", "", "scala", "Gem"] {
        let first = resolve(token);
        for _ in 0..10 {
            assert_eq!(resolve(token), first);
        }
    }
}

#[test]
fn test_resolved_types_are_registered() {
    let registry: HashSet<_> = ModuleType::all().iter().copied().collect();
    assert_eq!(registry.len(), 9);

    for (alias, _) in aliases() {
        let resolved = resolve(alias).expect("registered alias resolves");
        assert!(registry.contains(&resolved));
    }
}

#[test]
fn test_enumeration_is_stable() {
    let first: Vec<_> = ModuleType::all().to_vec();
    let second: Vec<_> = ModuleType::all().to_vec();
    assert_eq!(first, second);
    assert_eq!(first.first(), Some(&ModuleType::Bower));
    assert_eq!(first.last(), Some(&ModuleType::VendoredArchives));
}

#[test]
fn test_concurrent_resolution() {
    let handles: Vec<_> = (0..8)
        .map(|_| {
            std::thread::spawn(|| {
                aliases()
                    .iter()
                    .map(|(alias, _)| resolve(alias))
                    .collect::<Vec<_>>()
            })
        })
        .collect();

    let expected: Vec<_> = aliases().iter().map(|(_, ty)| Some(*ty)).collect();
    for handle in handles {
        assert_eq!(handle.join().unwrap(), expected);
    }
}
