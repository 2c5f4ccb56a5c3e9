//! Job templates for the generated GitLab CI manifest

use crate::catalog::TestTemplate;
use crate::output::{Job, JobEnvironment};

pub const BUILD_IMAGE: &str = "docker:latest";
pub const DIND_SERVICE: &str = "docker:dind";
pub const BUILD_SCRIPT: &str = "docker build -t $PROJECT_NAME:$CI_COMMIT_SHORT_SHA .";
pub const LINT_SCRIPT: &str = "echo 'Lint running...'";
pub const DEPLOY_DEV_SCRIPT: &str = "echo 'Deploying to development...'";
pub const DEPLOY_DEV_ENVIRONMENT: &str = "development";

pub const STAGE_BUILD: &str = "build";
pub const STAGE_TEST: &str = "test";
pub const STAGE_LINT: &str = "lint";
pub const STAGE_DEPLOY_DEV: &str = "deploy-dev";

/// Stages that have a job template
pub const TEMPLATED_STAGES: &[&str] = &[STAGE_BUILD, STAGE_TEST, STAGE_LINT, STAGE_DEPLOY_DEV];

/// Always emitted, whether or not `build` is among the selected stages
pub fn build_job() -> Job {
    Job {
        stage: STAGE_BUILD.to_string(),
        image: Some(BUILD_IMAGE.to_string()),
        services: vec![DIND_SERVICE.to_string()],
        script: vec![BUILD_SCRIPT.to_string()],
        environment: None,
    }
}

pub fn test_job(template: &TestTemplate, version: &str) -> Job {
    Job {
        stage: STAGE_TEST.to_string(),
        image: Some(template.image_for(version)),
        services: Vec::new(),
        script: template.script.clone(),
        environment: None,
    }
}

pub fn lint_job() -> Job {
    Job {
        stage: STAGE_LINT.to_string(),
        image: None,
        services: Vec::new(),
        script: vec![LINT_SCRIPT.to_string()],
        environment: None,
    }
}

pub fn deploy_dev_job() -> Job {
    Job {
        stage: STAGE_DEPLOY_DEV.to_string(),
        image: None,
        services: Vec::new(),
        script: vec![DEPLOY_DEV_SCRIPT.to_string()],
        environment: Some(JobEnvironment {
            name: DEPLOY_DEV_ENVIRONMENT.to_string(),
        }),
    }
}
