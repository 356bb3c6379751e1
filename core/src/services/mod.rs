//! Business services containing domain logic and use cases.

pub mod issuance;
pub mod reaper;
pub mod verification;

// Re-export commonly used types
pub use issuance::{
    IssuanceConfig, IssuanceService, IssueTokenRequest, IssuedToken, QrRendererTrait,
    SmsServiceTrait,
};
pub use reaper::{ExpiredTokenReaper, ReapResult, ReaperConfig};
pub use verification::{EventLogTrait, TokenLocks, VerificationReceipt, VerificationService};
