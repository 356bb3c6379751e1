//! Access token issuance service module
//!
//! Creates token records and delivers them to the holder as a QR image plus
//! an SMS carrying the verification link.

pub mod config;
pub mod service;
pub mod traits;
pub mod types;


pub use config::IssuanceConfig;
pub use service::IssuanceService;
pub use traits::{QrRendererTrait, SmsServiceTrait};
pub use types::{IssueTokenRequest, IssuedToken};
