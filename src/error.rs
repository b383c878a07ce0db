use std::process::ExitStatus;
use thiserror::Error;

use crate::constants::exit_codes;

#[derive(Error, Debug)]
pub enum Error {
    #[error("IO error: {0}.")]
    IoError(#[from] std::io::Error),

    #[error("Failed to parse YAML file '{path}'. Original error: {source}")]
    YamlError {
        path: String,
        #[source]
        source: serde_yaml::Error,
    },

    #[error("Config error: {0}.")]
    ConfigError(String),

    #[error("Failed to render. Original error: {0}")]
    TemplateError(#[from] minijinja::Error),

    #[error("Locale '{code}' is not available for date formatting.")]
    LocaleError { code: String },

    #[error("No compiled translation catalog for locale '{code}' under '{search_dir}'.")]
    TranslationError { code: String, search_dir: String },

    #[error("Failed to parse translation catalog '{path}'. Original error: {source}")]
    CatalogError {
        path: String,
        #[source]
        source: gettext::Error,
    },

    /// When an external tool has executed but finished with an error.
    #[error("'{program}' exited with status: {status}")]
    ToolError { program: String, status: ExitStatus },

    #[error("Cannot serve: a '{build}' build produces no HTML output.")]
    ServeError { build: String },
}

/// Convenience type alias for Results with Error as the error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Default error handler that prints the error and exits the program.
///
/// # Behavior
/// Prints the error message to stderr and exits with status code 1
pub fn default_error_handler(err: Error) {
    eprintln!("{}", err);
    std::process::exit(exit_codes::FAILURE);
}
