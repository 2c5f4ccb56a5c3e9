//! Command handlers. Each returns the process exit code.

use anyhow::{Context, Result};
use chrono::Utc;
use std::fs;
use std::path::Path;
use tracing::{debug, error, info, warn};

use super::commands::{CatalogArgs, CompileArgs, ValidateArgs};
use super::output::{OutputFormat, OutputFormatter};
use crate::catalog::{LanguageId, OptionCatalog};
use crate::compiler::{CompiledDocuments, DocumentCompiler};
use crate::config::BootstrapConfig;
use crate::error::BootstrapError;
use crate::selection::load_selection;
use crate::validation::Validator;

pub fn handle_validate(args: &ValidateArgs) -> i32 {
    let record = match load_selection(&args.input) {
        Ok(record) => record,
        Err(e) => {
            error!("{}", e);
            return 1;
        }
    };

    match Validator::new().validate(&record) {
        Ok(()) => {
            for warning in OptionCatalog::shared().consistency_warnings(&record) {
                warn!("{}", warning);
            }
            println!("OK");
            0
        }
        Err(e) => {
            eprintln!("{}", e);
            1
        }
    }
}

pub fn handle_compile(args: &CompileArgs, config: &BootstrapConfig, quiet: bool) -> i32 {
    match run_compile(args, config, quiet) {
        Ok(()) => 0,
        Err(e) => {
            // Validation messages are user-facing; print them as-is
            match e.downcast_ref::<BootstrapError>() {
                Some(BootstrapError::Validation(validation)) => eprintln!("{}", validation),
                _ => error!("{:#}", e),
            }
            1
        }
    }
}

fn run_compile(args: &CompileArgs, config: &BootstrapConfig, quiet: bool) -> Result<()> {
    let record = load_selection(&args.input)?;
    debug!("Loaded selection for project '{}'", record.project.name);

    let catalog = OptionCatalog::shared();
    for warning in catalog.consistency_warnings(&record) {
        warn!("{}", warning);
    }

    let valid = Validator::new()
        .accept(record)
        .map_err(BootstrapError::from)?;

    let compiler = DocumentCompiler::new(catalog).with_container_tool(&config.container_tool);
    let documents = compiler.compile(&valid, Utc::now());

    let format: OutputFormat = args.format.into();
    let pipeline_header = config.pipeline_header && !args.no_header;

    match args.output_dir {
        Some(ref dir) => write_documents(dir, &documents, format, pipeline_header, config, quiet),
        None => {
            let formatter = OutputFormatter::new(format).with_pipeline_header(pipeline_header);
            println!("{}", formatter.format_documents(&documents)?);
            Ok(())
        }
    }
}

fn write_documents(
    dir: &Path,
    documents: &CompiledDocuments,
    format: OutputFormat,
    pipeline_header: bool,
    config: &BootstrapConfig,
    quiet: bool,
) -> Result<()> {
    fs::create_dir_all(dir)
        .with_context(|| format!("Failed to create output directory {}", dir.display()))?;

    // Files always carry data; the human summary is for the terminal only
    let format = match format {
        OutputFormat::Human => OutputFormat::Yaml,
        other => other,
    };
    let formatter = OutputFormatter::new(format).with_pipeline_header(pipeline_header);

    let config_path = config.config_path(dir, format.is_json());
    let config_output = formatter.format_config(&documents.config)?;
    fs::write(&config_path, config_output)
        .with_context(|| format!("Failed to write {}", config_path.display()))?;
    info!("Wrote {}", config_path.display());
    if !quiet {
        println!("Configuration written to: {}", config_path.display());
    }

    match documents.pipeline {
        Some(ref manifest) => {
            let pipeline_path = config.pipeline_path(dir);
            let pipeline_output = formatter.format_pipeline(manifest, &documents.config)?;
            fs::write(&pipeline_path, pipeline_output)
                .with_context(|| format!("Failed to write {}", pipeline_path.display()))?;
            info!("Wrote {}", pipeline_path.display());
            if !quiet {
                println!("Pipeline written to: {}", pipeline_path.display());
            }
        }
        None => info!(
            "{} not selected, no pipeline manifest written",
            config.container_tool
        ),
    }

    Ok(())
}

pub fn handle_catalog(args: &CatalogArgs) -> i32 {
    let catalog = OptionCatalog::shared();
    let formatter = OutputFormatter::new(args.format.into());

    let output = match args.language {
        Some(ref name) => {
            let language = LanguageId::parse(name);
            match catalog.language_options(&language) {
                Some(options) => formatter.format_language(&options),
                None => {
                    let known: Vec<String> = catalog
                        .languages()
                        .iter()
                        .map(|l| l.name().to_string())
                        .collect();
                    error!(
                        "Unknown language '{}'. Known languages: {}",
                        name.trim(),
                        known.join(", ")
                    );
                    return 1;
                }
            }
        }
        None => formatter.format_catalog(&catalog.form_choices()),
    };

    match output {
        Ok(output) => {
            println!("{}", output);
            0
        }
        Err(e) => {
            error!("Failed to format catalog output: {:#}", e);
            1
        }
    }
}
