//! CLI error types.

use menugen_config::ConfigError;
use menugen_renderer::TagSyntaxError;
use menugen_storage::StorageError;

/// CLI error type.
#[derive(Debug, thiserror::Error)]
pub(crate) enum CliError {
    #[error("{0}")]
    Config(#[from] ConfigError),

    #[error("{0}")]
    Storage(#[from] StorageError),

    #[error("{0}")]
    Tag(#[from] TagSyntaxError),

    #[error("{0}")]
    Io(#[from] std::io::Error),

    #[error("{0}")]
    Json(#[from] serde_json::Error),
}
