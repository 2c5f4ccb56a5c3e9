use devops_bootstrap::cli::commands::{CliArgs, Commands};
use devops_bootstrap::cli::handlers::{handle_catalog, handle_compile, handle_validate};
use devops_bootstrap::util::{init_logging, LoggingConfig};
use devops_bootstrap::{BootstrapConfig, VERSION};

use clap::Parser;
use std::process;
use tracing::{debug, error};

fn main() {
    let args = CliArgs::parse();
    init_logging(LoggingConfig::from_cli(
        args.log_level.as_deref(),
        args.verbose,
        args.quiet,
    ));

    debug!("devops-bootstrap v{} starting", VERSION);
    debug!("Arguments: {:?}", args);

    let config = match BootstrapConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            error!("Configuration error: {}", e);
            eprintln!("\nPlease check your DEVOPS_BOOTSTRAP_* environment variables.");
            process::exit(1);
        }
    };
    debug!("{}", config);

    let exit_code = match &args.command {
        Commands::Validate(validate_args) => handle_validate(validate_args),
        Commands::Compile(compile_args) => handle_compile(compile_args, &config, args.quiet),
        Commands::Catalog(catalog_args) => handle_catalog(catalog_args),
    };

    process::exit(exit_code);
}
