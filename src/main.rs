use module_types::cli::commands::{CliArgs, Commands};
use module_types::cli::handlers::{handle_classify, handle_config, handle_resolve, handle_types};
use module_types::config::ModuleTypesConfig;
use module_types::types::resolver;
use module_types::util::logging::init_logging;
use module_types::VERSION;

use clap::Parser;
use tracing::debug;

fn main() {
    let args = CliArgs::parse();

    let config = match ModuleTypesConfig::load(&args.config_overrides()) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(2);
        }
    };

    init_logging(config.logging_config());
    resolver::init();

    debug!("module-types v{} starting", VERSION);
    debug!("Arguments: {:?}", args);

    let exit_code = match &args.command {
        Commands::Types(types_args) => handle_types(types_args),
        Commands::Resolve(resolve_args) => handle_resolve(resolve_args),
        Commands::Classify(classify_args) => handle_classify(classify_args, &config),
        Commands::Config(config_args) => handle_config(config_args, &config),
    };

    std::process::exit(exit_code);
}
