//! # QrPass Core
//!
//! Core business logic and domain layer for the QrPass backend.
//! This crate contains the access token entity, the token store port with its
//! in-memory implementation, the issuance and verification services, and the
//! error types that form the foundation of the application architecture.

pub mod domain;
pub mod errors;
pub mod repositories;
pub mod services;

// Re-export commonly used types for convenience
pub use domain::*;
pub use errors::*;
pub use repositories::*;
pub use services::*;
