//! Verification service module for QR token redemption
//!
//! This module provides the token verification state machine:
//! - Lazy expiry detection on scan
//! - Single-use consumption semantics
//! - Reachability gate and event submission to the external event log
//! - Per-token serialization of concurrent scans

mod locks;
mod service;
mod traits;
mod types;


pub use locks::{TokenLockGuard, TokenLocks};
pub use service::VerificationService;
pub use traits::EventLogTrait;
pub use types::VerificationReceipt;
