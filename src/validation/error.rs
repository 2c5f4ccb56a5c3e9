use thiserror::Error;

/// First required field found missing, in the validator's fixed check order.
///
/// Messages are the user-facing strings shown by the form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Error)]
pub enum ValidationError {
    #[error("Por favor, preencha o nome do projeto.")]
    MissingProjectName,

    #[error("Por favor, selecione a linguagem de programação.")]
    MissingLanguage,

    #[error("Por favor, selecione pelo menos um framework.")]
    MissingFrameworks,

    #[error("Por favor, selecione pelo menos um tipo de projeto.")]
    MissingProjectType,

    #[error("Por favor, selecione pelo menos um banco de dados.")]
    MissingDatabases,

    #[error("Por favor, selecione o gerenciador de dependências.")]
    MissingDependencyManager,

    #[error("Por favor, selecione pelo menos uma ferramenta de infraestrutura.")]
    MissingInfrastructure,

    #[error("Por favor, selecione pelo menos uma ferramenta de monitoramento.")]
    MissingMonitoring,

    #[error("Por favor, selecione pelo menos um estágio do pipeline.")]
    MissingStages,

    #[error("Por favor, selecione pelo menos uma ferramenta de testes.")]
    MissingTesting,

    #[error("Por favor, selecione pelo menos uma ferramenta de qualidade de código.")]
    MissingCodeQuality,

    #[error("Por favor, selecione pelo menos uma ferramenta de segurança.")]
    MissingSecurity,
}

impl ValidationError {
    /// Dotted path of the offending field
    pub fn field(&self) -> &'static str {
        match self {
            ValidationError::MissingProjectName => "project.name",
            ValidationError::MissingLanguage => "technology.language",
            ValidationError::MissingFrameworks => "technology.frameworks",
            ValidationError::MissingProjectType => "technology.project_type",
            ValidationError::MissingDatabases => "technology.databases",
            ValidationError::MissingDependencyManager => "dependencies.manager",
            ValidationError::MissingInfrastructure => "dependencies.infrastructure",
            ValidationError::MissingMonitoring => "dependencies.monitoring",
            ValidationError::MissingStages => "pipeline.stages",
            ValidationError::MissingTesting => "pipeline.testing",
            ValidationError::MissingCodeQuality => "pipeline.code_quality",
            ValidationError::MissingSecurity => "pipeline.security",
        }
    }
}
