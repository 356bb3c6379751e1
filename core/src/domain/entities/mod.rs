//! Domain entities representing core business objects.

pub mod access_token;

pub use access_token::{TokenMutation, TokenRecord, TokenStatus, DEFAULT_PURPOSE};
