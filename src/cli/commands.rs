use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

use tracing::Level;

use crate::classify::UnknownTypePolicy;
use crate::config::ConfigOverrides;
use crate::util::logging::parse_level_or_default;

/// Classify build-tool module configurations into canonical module types
#[derive(Parser, Debug)]
#[command(
    name = "module-types",
    about = "Classify build-tool module configurations into canonical module types",
    version,
    long_about = "module-types maps the free-text `type` of module configuration entries \
                  (tool names, ecosystem names, abbreviations) onto the fixed set of module \
                  types the dependency analyzers understand."
)]
pub struct CliArgs {
    #[command(subcommand)]
    pub command: Commands,

    #[arg(long, global = true, value_name = "LEVEL", help = "Set logging level")]
    pub log_level: Option<String>,

    #[arg(short = 'v', long, global = true, help = "Enable debug logging")]
    pub verbose: bool,

    #[arg(
        short = 'q',
        long,
        global = true,
        conflicts_with = "verbose",
        help = "Quiet mode - suppress non-error output"
    )]
    pub quiet: bool,
}

impl CliArgs {
    /// Command-line values that take precedence over `MODULE_TYPES_*`.
    ///
    /// Commands that never classify pin the unknown type policy to its
    /// default, so `MODULE_TYPES_UNKNOWN_POLICY` is not consulted for them.
    pub fn config_overrides(&self) -> ConfigOverrides {
        let log_level = if let Some(level_str) = &self.log_level {
            Some(parse_level_or_default(level_str))
        } else if self.verbose {
            Some(Level::DEBUG)
        } else if self.quiet {
            Some(Level::ERROR)
        } else {
            None
        };

        let unknown_policy = match &self.command {
            Commands::Classify(classify_args) => classify_args.on_unknown,
            Commands::Config(_) => None,
            Commands::Types(_) | Commands::Resolve(_) => Some(UnknownTypePolicy::default()),
        };

        ConfigOverrides {
            log_level,
            log_json: None,
            unknown_policy,
        }
    }
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    #[command(
        about = "List supported module types and their aliases",
        long_about = "Lists every canonical module type in a fixed order, with the aliases \
                      that resolve to it.\n\n\
                      Examples:\n  \
                      module-types types\n  \
                      module-types types --format json"
    )]
    Types(TypesArgs),

    #[command(
        about = "Resolve type tokens to canonical module types",
        long_about = "Resolves each token by exact, case-sensitive match against the alias \
                      table. Exits with status 1 if any token is unknown.\n\n\
                      Examples:\n  \
                      module-types resolve mvn\n  \
                      module-types resolve gem commonjspackage --format yaml"
    )]
    Resolve(ResolveArgs),

    #[command(
        about = "Classify every module in a manifest file",
        long_about = "Loads a YAML, JSON or TOML manifest of {name, path, type} entries and \
                      attaches a canonical module type to each.\n\n\
                      Examples:\n  \
                      module-types classify modules.yml\n  \
                      module-types classify modules.json --on-unknown fail --format json"
    )]
    Classify(ClassifyArgs),

    #[command(about = "Show the effective configuration")]
    Config(ConfigArgs),
}

#[derive(Parser, Debug, Clone)]
pub struct TypesArgs {
    #[arg(short = 'f', long, value_enum, default_value = "human", help = "Output format")]
    pub format: OutputFormatArg,
}

#[derive(Parser, Debug, Clone)]
pub struct ResolveArgs {
    #[arg(value_name = "TOKEN", required = true, help = "Raw module type tokens")]
    pub tokens: Vec<String>,

    #[arg(short = 'f', long, value_enum, default_value = "human", help = "Output format")]
    pub format: OutputFormatArg,
}

#[derive(Parser, Debug, Clone)]
pub struct ClassifyArgs {
    #[arg(value_name = "MANIFEST", help = "Manifest file (.yml, .yaml, .json or .toml)")]
    pub manifest: PathBuf,

    #[arg(
        long,
        value_enum,
        value_name = "POLICY",
        help = "How to treat modules with an unknown type (default: MODULE_TYPES_UNKNOWN_POLICY or warn)"
    )]
    pub on_unknown: Option<UnknownTypePolicy>,

    #[arg(short = 'f', long, value_enum, default_value = "human", help = "Output format")]
    pub format: OutputFormatArg,
}

#[derive(Parser, Debug, Clone)]
pub struct ConfigArgs {
    #[arg(short = 'f', long, value_enum, default_value = "human", help = "Output format")]
    pub format: OutputFormatArg,
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormatArg {
    Json,
    Yaml,
    Human,
}

impl From<OutputFormatArg> for super::output::OutputFormat {
    fn from(arg: OutputFormatArg) -> Self {
        match arg {
            OutputFormatArg::Json => super::output::OutputFormat::Json,
            OutputFormatArg::Yaml => super::output::OutputFormat::Yaml,
            OutputFormatArg::Human => super::output::OutputFormat::Human,
        }
    }
}
