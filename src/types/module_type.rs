use thiserror::Error;

/// Returned when a string is not one of the canonical module type names.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Unknown module type: {0}. Valid options: {}", canonical_name_list())]
pub struct UnknownModuleType(pub String);

fn canonical_name_list() -> String {
    ModuleType::all()
        .iter()
        .map(ModuleType::as_str)
        .collect::<Vec<_>>()
        .join(", ")
}

crate::define_module_types! {
    /// Build ecosystem a configured module is analyzed as.
    ///
    /// The first five are single tools. `Ruby`, `Nodejs` and `Golang` each
    /// cover a family of tools that are analyzed the same way, and
    /// `VendoredArchives` covers pre-built archives checked into a project.
    ModuleType {
        Bower => "bower" : "Bower", "bower.io components"
            | "bower",
        Composer => "composer" : "Composer", "getcomposer.org packages"
            | "composer",
        Maven => "maven" : "Maven", "maven.apache.org projects"
            | "maven" | "mvn",
        SBT => "sbt" : "SBT", "scala-sbt.org builds"
            | "sbt" | "sbtpackage" | "scala",
        Gradle => "gradle" : "Gradle", "gradle.org builds"
            | "gradle",
        Ruby => "ruby" : "Ruby", "Bundler projects (bundler.io)"
            | "ruby" | "bundler" | "gem" | "rubygems",
        Nodejs => "nodejs" : "Node.js", "npm (npmjs.org) and Yarn (yarnpkg.com) packages"
            | "nodejs" | "commonjspackage",
        Golang => "golang" : "Go", "dep, glide, godep, govendor, vndr and manual GOPATH vendoring"
            | "golang" | "go" | "gopackage",
        VendoredArchives => "vendoredarchives" : "Vendored archives", "archive formats (.tar, .rpm, .zip, ...)"
            | "vendoredarchives",
    }
}

impl ModuleType {
    /// Resolves a raw configuration token to a module type.
    ///
    /// See [`crate::types::resolve`].
    pub fn from_alias(token: &str) -> Option<Self> {
        super::resolver::resolve(token)
    }
}
