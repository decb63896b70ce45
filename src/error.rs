use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum KapitelError {
    #[error("Chapter manifest not found: {path}")]
    ManifestNotFound { path: PathBuf },

    #[error("Invalid chapter manifest: {message}")]
    ManifestInvalid { message: String },

    #[error("Frontmatter parse error in {path}: {source}")]
    Frontmatter {
        path: PathBuf,
        source: serde_yaml_ng::Error,
    },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, KapitelError>;
