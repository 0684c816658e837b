//! Error handling for the wizard rules engine.

pub mod domain;

pub use domain::{DomainError, ValidationKind};
