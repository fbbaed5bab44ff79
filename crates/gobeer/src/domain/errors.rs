//! Domain Errors
//!
//! Error types for domain operations, and their classification into the
//! closed set of kinds that cross the service boundary.

use thiserror::Error;

/// Domain layer errors
#[derive(Debug, Error)]
pub enum DomainError {
    #[error("invalid beer ID")]
    InvalidId,

    #[error("beer not found")]
    NotFound,

    #[error("beer already exists")]
    AlreadyExists,

    #[error("Repository error: {0}")]
    Repository(String),

    #[error("Notification error: {0}")]
    Notification(String),

    /// Another error annotated with the operation and identifiers involved
    #[error("{context}: {source}")]
    Context {
        context: String,
        source: Box<DomainError>,
    },
}

/// Externally visible classification of a [`DomainError`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    InvalidId,
    NotFound,
    AlreadyExists,
    Unclassified,
}

impl DomainError {
    /// Wrap this error with context, keeping its kind.
    pub fn context<C: Into<String>>(self, context: C) -> Self {
        Self::Context {
            context: context.into(),
            source: Box::new(self),
        }
    }

    /// Classify the error, looking through any context layers.
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::InvalidId => ErrorKind::InvalidId,
            Self::NotFound => ErrorKind::NotFound,
            Self::AlreadyExists => ErrorKind::AlreadyExists,
            Self::Repository(_) | Self::Notification(_) => ErrorKind::Unclassified,
            Self::Context { source, .. } => source.kind(),
        }
    }

    /// The innermost error, with all context layers removed
    pub fn root(&self) -> &DomainError {
        match self {
            Self::Context { source, .. } => source.root(),
            other => other,
        }
    }
}
