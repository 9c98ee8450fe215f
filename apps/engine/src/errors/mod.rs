//! Error handling for the Truco engine.

pub mod domain;

pub use domain::{DomainError, ValidationKind};
