//! Error types for the roster core.
//!
//! # Design
//! `ValidationError` is recovered locally and never reaches the network
//! layer. `NetworkError` covers everything between building a request and
//! parsing its response. `RosterError` is what view-model transitions return.
//! `NotFound` keeps its own variant because a delete answered with 404 is
//! treated as already done.

use thiserror::Error;

use crate::types::StudentId;

/// A candidate record failed a field rule. The display text is the
/// user-facing message.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Full name should contain only letters and spaces.")]
    FullName,

    #[error("Date of Birth must be in YYYY-MM-DD format.")]
    DobFormat,

    #[error("Date of Birth cannot be a future date.")]
    DobInFuture,

    #[error("GPA must be a number between 0.0 and 4.0.")]
    Gpa,
}

/// Errors returned by `RosterClient` parse methods and by transports.
#[derive(Debug, Error)]
pub enum NetworkError {
    /// The server returned 404.
    #[error("resource not found")]
    NotFound,

    /// The server returned a non-2xx status other than 404.
    #[error("HTTP {status}: {body}")]
    HttpStatus { status: u16, body: String },

    /// The request never produced a response.
    #[error("transport failed: {0}")]
    Transport(String),

    /// The response body could not be deserialized into the expected type.
    #[error("deserialization failed: {0}")]
    Deserialization(String),

    /// The request payload could not be serialized to JSON.
    #[error("serialization failed: {0}")]
    Serialization(String),
}

/// Errors returned by `RosterViewModel` transitions.
#[derive(Debug, Error)]
pub enum RosterError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    Network(#[from] NetworkError),

    #[error("no student with id {0} in the roster")]
    UnknownStudent(StudentId),

    #[error("no edit in progress")]
    NoEditInProgress,
}

/// Errors raised while loading `RosterConfig`.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid base URL {value:?}: {reason}")]
    InvalidBaseUrl { value: String, reason: String },

    #[error("invalid reconcile policy {0:?}, expected \"strict\" or \"lenient\"")]
    InvalidReconcilePolicy(String),
}
