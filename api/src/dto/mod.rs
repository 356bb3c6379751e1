pub mod error;
pub mod token;

pub use error::{ErrorResponse, ErrorResponseExt};
pub use token::{IssueTokenBody, IssueTokenResponse, VerifyQuery, VerifyTokenResponse};
