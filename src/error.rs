use std::path::PathBuf;
use thiserror::Error;

pub type SiteResult<T> = Result<T, SiteError>;

#[derive(Error, Debug)]
pub enum SiteError {
    #[error("article not found: {0}")]
    NotFound(String),

    #[error("malformed slug: {0:?}")]
    MalformedSlug(String),

    #[error("invalid front matter in {slug}: {source}")]
    FrontMatter {
        slug: String,
        #[source]
        source: serde_yaml::Error,
    },

    #[error("failed to parse config {path}: {source}")]
    Config {
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Json(#[from] serde_json::Error),
}
