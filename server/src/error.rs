//! Startup errors for the server binary.

use crate::config::ConfigError;

#[derive(Debug, thiserror::Error)]
pub enum ServerError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// `[workspace.metadata.leptos]` / `LEPTOS_*` settings are missing or malformed.
    #[error("leptos configuration: {0}")]
    Leptos(String),

    #[error("io: {0}")]
    Io(#[from] std::io::Error),
}
