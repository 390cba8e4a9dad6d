use thiserror::Error;

#[derive(Debug, Error)]
pub enum ThemeError {
    #[error("invalid theme: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("theme overrides must be an object, got {0}")]
    InvalidOverride(&'static str),
}
