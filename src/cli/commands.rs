use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// Compiles DevOps project selections into configuration and CI documents
#[derive(Parser, Debug)]
#[command(
    name = "devops-bootstrap",
    about = "Compiles DevOps project selections into configuration and CI documents",
    version,
    author,
    long_about = "devops-bootstrap validates a project selection (language, frameworks, \
                  infrastructure, pipeline stages, ...) and compiles it into a project \
                  configuration document plus, when Docker is selected, a GitLab CI pipeline."
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
        help = "Quiet mode - only log errors"
    )]
    pub quiet: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    #[command(
        about = "Check a selection file for missing required fields",
        long_about = "Loads a selection file and reports the first missing required field.\n\n\
                      Examples:\n  \
                      devops-bootstrap validate answers.yaml"
    )]
    Validate(ValidateArgs),

    #[command(
        about = "Compile a selection file into project documents",
        long_about = "Validates a selection file and produces the project configuration \
                      document and, when the container build tool is selected, a GitLab CI \
                      pipeline manifest.\n\n\
                      Examples:\n  \
                      devops-bootstrap compile answers.yaml\n  \
                      devops-bootstrap compile answers.json --format json\n  \
                      devops-bootstrap compile answers.yaml --output-dir ./out"
    )]
    Compile(CompileArgs),

    #[command(
        about = "List the options offered by the form",
        long_about = "Prints the option lists of the form, or the frameworks, versions and \
                      dependency managers of one language.\n\n\
                      Examples:\n  \
                      devops-bootstrap catalog\n  \
                      devops-bootstrap catalog --language python"
    )]
    Catalog(CatalogArgs),
}

#[derive(Parser, Debug, Clone)]
pub struct ValidateArgs {
    #[arg(value_name = "INPUT", help = "Selection file (.yaml, .yml or .json)")]
    pub input: PathBuf,
}

#[derive(Parser, Debug, Clone)]
pub struct CompileArgs {
    #[arg(value_name = "INPUT", help = "Selection file (.yaml, .yml or .json)")]
    pub input: PathBuf,

    #[arg(
        short = 'f',
        long,
        value_enum,
        default_value = "yaml",
        help = "Output format"
    )]
    pub format: OutputFormatArg,

    #[arg(
        short = 'o',
        long,
        value_name = "DIR",
        help = "Write the documents into DIR instead of stdout"
    )]
    pub output_dir: Option<PathBuf>,

    #[arg(long, help = "Omit the comment header of the pipeline manifest")]
    pub no_header: bool,
}

#[derive(Parser, Debug, Clone)]
pub struct CatalogArgs {
    #[arg(
        short = 'l',
        long,
        value_name = "NAME",
        help = "Show the options of one language"
    )]
    pub language: Option<String>,

    #[arg(
        short = 'f',
        long,
        value_enum,
        default_value = "human",
        help = "Output format"
    )]
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
