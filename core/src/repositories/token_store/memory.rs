//! Volatile in-process token store.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::domain::entities::access_token::{TokenMutation, TokenRecord};
use crate::errors::DomainError;

use super::r#trait::TokenStore;

/// A thread-safe in-memory store for access tokens.
///
/// Entries live until the process exits unless the reaper purges them.
#[derive(Default, Clone)]
pub struct InMemoryTokenStore {
    records: Arc<RwLock<HashMap<String, TokenRecord>>>,
}

impl InMemoryTokenStore {
    /// Creates a new, empty store.
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl TokenStore for InMemoryTokenStore {
    async fn put(&self, record: TokenRecord) -> Result<(), DomainError> {
        let mut records = self.records.write().await;

        if records.contains_key(&record.token) {
            return Err(DomainError::Internal {
                message: "Token already exists".to_string(),
            });
        }

        records.insert(record.token.clone(), record);
        Ok(())
    }

    async fn get(&self, token: &str) -> Result<Option<TokenRecord>, DomainError> {
        let records = self.records.read().await;
        Ok(records.get(token).cloned())
    }

    async fn mark(
        &self,
        token: &str,
        mutation: TokenMutation,
    ) -> Result<Option<TokenRecord>, DomainError> {
        let mut records = self.records.write().await;

        Ok(records.get_mut(token).map(|record| {
            if !record.apply(mutation) {
                tracing::debug!(
                    status = %record.status,
                    ?mutation,
                    "Ignored mutation on terminal token"
                );
            }
            record.clone()
        }))
    }

    async fn purge_expired(&self, cutoff: DateTime<Utc>) -> Result<usize, DomainError> {
        let mut records = self.records.write().await;
        let initial_count = records.len();

        records.retain(|_, record| record.expires_at >= cutoff);

        Ok(initial_count - records.len())
    }

    async fn len(&self) -> Result<usize, DomainError> {
        Ok(self.records.read().await.len())
    }
}
