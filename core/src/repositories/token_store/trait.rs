//! Token store trait defining the interface for access token persistence.

use async_trait::async_trait;
use chrono::{DateTime, Utc};

use crate::domain::entities::access_token::{TokenMutation, TokenRecord};
use crate::errors::DomainError;

/// Keyed storage for issued access tokens
///
/// The store is the sole owner of every `TokenRecord`; callers only ever see
/// clones. Implementations must apply `mark` atomically with respect to their
/// other operations. Serializing whole verification sequences is the caller's
/// job (see `TokenLocks`).
#[async_trait]
pub trait TokenStore: Send + Sync {
    /// Insert a newly issued record
    ///
    /// # Returns
    /// * `Ok(())` - Record stored
    /// * `Err(DomainError)` - A record with the same token already exists, or
    ///   the backend failed
    async fn put(&self, record: TokenRecord) -> Result<(), DomainError>;

    /// Look up a record by token value
    ///
    /// # Returns
    /// * `Ok(Some(TokenRecord))` - Snapshot of the stored record
    /// * `Ok(None)` - Unknown token
    async fn get(&self, token: &str) -> Result<Option<TokenRecord>, DomainError>;

    /// Apply `mutation` to the stored record in place
    ///
    /// # Returns
    /// * `Ok(Some(TokenRecord))` - The record after the mutation
    /// * `Ok(None)` - Unknown token
    async fn mark(
        &self,
        token: &str,
        mutation: TokenMutation,
    ) -> Result<Option<TokenRecord>, DomainError>;

    /// Remove records whose validity window closed before `cutoff`
    ///
    /// # Returns
    /// * `Ok(usize)` - Number of records removed
    async fn purge_expired(&self, cutoff: DateTime<Utc>) -> Result<usize, DomainError>;

    /// Number of records currently held
    async fn len(&self) -> Result<usize, DomainError>;

    /// Whether the store holds no records
    async fn is_empty(&self) -> Result<bool, DomainError> {
        Ok(self.len().await? == 0)
    }
}
