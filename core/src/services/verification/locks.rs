//! Per-token mutual exclusion for verification sequences

use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use tokio::sync::{Mutex as AsyncMutex, OwnedMutexGuard};

type LockMap = HashMap<String, Arc<AsyncMutex<()>>>;

/// Hands out one async lock per token value.
///
/// Holding the guard across the whole read-check-commit sequence is what
/// makes a token redeemable at most once. Scans of different tokens never
/// contend. Entries are dropped once no holder or waiter remains.
#[derive(Default, Clone)]
pub struct TokenLocks {
    inner: Arc<Mutex<LockMap>>,
}

impl TokenLocks {
    /// Creates an empty lock table
    pub fn new() -> Self {
        Self::default()
    }

    /// Waits until `token` is free and returns the guard for it
    pub async fn acquire(&self, token: &str) -> TokenLockGuard {
        let lock = {
            let mut map = lock_map(&self.inner);
            Arc::clone(
                map.entry(token.to_string())
                    .or_insert_with(|| Arc::new(AsyncMutex::new(()))),
            )
        };

        let guard = lock.lock_owned().await;

        TokenLockGuard {
            token: token.to_string(),
            table: Arc::clone(&self.inner),
            guard: Some(guard),
        }
    }

    /// Number of tokens with a live holder or waiter
    pub fn active(&self) -> usize {
        lock_map(&self.inner).len()
    }
}

/// Exclusive access to one token until dropped
pub struct TokenLockGuard {
    token: String,
    table: Arc<Mutex<LockMap>>,
    guard: Option<OwnedMutexGuard<()>>,
}

impl Drop for TokenLockGuard {
    fn drop(&mut self) {
        // Release first so the strong count below only sees the table and waiters
        drop(self.guard.take());

        let mut map = lock_map(&self.table);
        if map
            .get(&self.token)
            .is_some_and(|lock| Arc::strong_count(lock) == 1)
        {
            map.remove(&self.token);
        }
    }
}

// The table holds no invariants a panicking holder could break.
fn lock_map(table: &Mutex<LockMap>) -> MutexGuard<'_, LockMap> {
    table.lock().unwrap_or_else(PoisonError::into_inner)
}
