// src/infra/errors.rs — Error types for praktikum

use thiserror::Error;

#[derive(Error, Debug)]
pub enum PraktikumError {
    // User errors
    #[error("Demo '{id}' not found. Run `praktikum list` to see what is available.")]
    DemoNotFound { id: String },

    // Infra
    #[error("Background task failed: {0}")]
    Task(#[from] tokio::task::JoinError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}
