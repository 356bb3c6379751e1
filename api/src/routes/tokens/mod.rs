//! Access token route handlers
//!
//! - `POST /api/v1/tokens` issues a token and delivers it
//! - `GET /verify?token=...` redeems a scanned token

pub mod issue;
pub mod verify;

pub use issue::issue_token;
pub use verify::verify_token;

use std::sync::Arc;

use qp_core::repositories::TokenStore;
use qp_core::services::issuance::{IssuanceService, QrRendererTrait, SmsServiceTrait};
use qp_core::services::verification::{EventLogTrait, VerificationService};

/// Application state that holds shared services
///
/// Both services share one token store.
pub struct AppState<S, M, Q, E>
where
    S: TokenStore,
    M: SmsServiceTrait,
    Q: QrRendererTrait,
    E: EventLogTrait,
{
    pub store: Arc<S>,
    pub issuance_service: Arc<IssuanceService<S, M, Q>>,
    pub verification_service: Arc<VerificationService<S, E>>,
}
