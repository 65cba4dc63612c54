//! Client core for the student roster service.
//!
//! # Overview
//! Validates candidate student records, talks to the roster REST API, and
//! keeps an in-memory view-model that a presentation layer renders and
//! drives.
//!
//! # Design
//! - `RosterClient` is stateless and sans-IO: `build_*` produces an
//!   `HttpRequest`, `parse_*` consumes an `HttpResponse`.
//! - `Transport` executes the round-trip. `ReqwestTransport` is the real
//!   one; tests script their own.
//! - `RosterService` pairs the two into async `list`/`create`/`update`/
//!   `delete`.
//! - `RosterViewModel` owns the roster state and runs validation before any
//!   network call.
//! - DTOs are defined independently from the mock-server crate; integration
//!   tests catch schema drift.

pub mod client;
pub mod config;
pub mod error;
pub mod http;
pub mod service;
pub mod types;
pub mod validate;
pub mod view_model;

pub use client::RosterClient;
pub use config::{ReconcilePolicy, RosterConfig};
pub use error::{ConfigError, NetworkError, RosterError, ValidationError};
pub use http::{HttpMethod, HttpRequest, HttpResponse, ReqwestTransport, Transport};
pub use service::RosterService;
pub use types::{StudentDraft, StudentId, StudentRecord};
pub use validate::{validate, validate_on};
pub use view_model::{EditSession, RosterViewModel};
