// Configuration Errors
// Failure taxonomy for the bootstrap layer

use thiserror::Error;

use crate::services::Translator;

/// Errors raised while resolving resources or bootstrapping configuration.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// A bundled resource is missing from the installation.
    #[error("Couldn't find {0}. Please try reinstalling the application.")]
    ResourceMissing(String),

    #[error("Environment variable {0} is not set")]
    MissingEnvVar(&'static str),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Settings error: {0}")]
    Settings(String),

    #[error("Catalog error: {0}")]
    Catalog(String),

    #[error("Logger error: {0}")]
    Logger(String),
}

impl ConfigError {
    /// Render the user-facing message for this error in the active language.
    ///
    /// Only missing-resource errors are shown to the user directly; everything
    /// else keeps its plain English message for the log.
    pub fn localized(&self, translator: &Translator) -> String {
        match self {
            ConfigError::ResourceMissing(name) => translator
                .tr("Couldn't find {missing_resource}. Please try reinstalling the application.")
                .replace("{missing_resource}", name),
            other => other.to_string(),
        }
    }
}
