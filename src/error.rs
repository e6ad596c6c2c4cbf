use thiserror::Error;

/// Errors produced by the list pipeline.
///
/// Building a record from scan data never fails; these cover the
/// caller-controlled inputs (sort selectors, settings) and file access.
#[derive(Error, Debug)]
pub enum NetlistError {
    #[error("Invalid sort field: {0}")]
    InvalidSortField(String),

    #[error("Invalid scan document: {0}")]
    InvalidScan(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("Other error: {0}")]
    Other(String),
}

pub type Result<T> = std::result::Result<T, NetlistError>;
