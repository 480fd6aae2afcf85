// src/errors.rs

//! Crate-wide error aliases and helpers.

use thiserror::Error;

use crate::alloc::Rejection;

#[derive(Error, Debug)]
pub enum IrrischedError {
    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Already exists: {0}")]
    AlreadyExists(String),

    #[error("Proposal rejected: {0}")]
    Rejected(#[from] Rejection),

    #[error("TOML parsing error: {0}")]
    TomlError(#[from] toml::de::Error),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl IrrischedError {
    /// The allocator rejection behind this error, if a commit was refused.
    pub fn rejection(&self) -> Option<&Rejection> {
        match self {
            IrrischedError::Rejected(rejection) => Some(rejection),
            _ => None,
        }
    }
}

pub type Result<T> = std::result::Result<T, IrrischedError>;
