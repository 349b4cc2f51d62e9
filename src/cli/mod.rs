pub mod commands;
pub mod handlers;
pub mod output;

pub use commands::{
    ClassifyArgs, CliArgs, Commands, ConfigArgs, ResolveArgs, TypesArgs,
};
pub use output::{OutputFormat, OutputFormatter, Resolution, TypeInfo};
