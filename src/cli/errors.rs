use thiserror::Error;

/// Application-specific errors for the CLI
#[derive(Debug, Error)]
pub enum AppError {
    #[error("SQL did not parse")]
    ParseFailed,

    #[error(transparent)]
    Pipeline(#[from] pgparse::Error),
}
