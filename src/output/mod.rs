pub mod schema;

pub use schema::{
    format_timestamp, ConfigDocument, Job, JobEnvironment, PipelineManifest, ProjectSection,
    TechnologySection, VersionEntry,
};
