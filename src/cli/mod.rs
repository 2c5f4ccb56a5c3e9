pub mod commands;
pub mod handlers;
pub mod output;

pub use commands::{CatalogArgs, CliArgs, Commands, CompileArgs, OutputFormatArg, ValidateArgs};
pub use output::{OutputFormat, OutputFormatter};
