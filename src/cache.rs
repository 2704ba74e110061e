//! In-memory caching using moka
//!
//! Payment sessions live only here. Nothing is persisted, so the TTL is what
//! eventually drops sessions a visitor walked away from.

use moka::future::Cache;
use moka::ops::compute::{CompResult, Op};
use serde::Serialize;
use std::time::Duration;
use tracing::info;
use uuid::Uuid;

use crate::payment::PaymentSession;

/// Application cache holding payment sessions and idempotency keys
#[derive(Clone)]
pub struct AppCache {
    /// Payment sessions (session id -> session)
    pub payment_sessions: Cache<Uuid, PaymentSession>,
    /// Idempotency keys (client key -> session id)
    pub idempotency_keys: Cache<String, Uuid>,
}

impl AppCache {
    /// Create a new cache instance; both maps share the session TTL
    pub fn new(session_ttl: Duration) -> Self {
        Self {
            // Sessions: 10k entries, idle sessions expire with the TTL
            payment_sessions: Cache::builder()
                .max_capacity(10_000)
                .time_to_live(session_ttl)
                .build(),

            // Keys expire with the sessions they point to
            idempotency_keys: Cache::builder()
                .max_capacity(10_000)
                .time_to_live(session_ttl)
                .build(),
        }
    }

    /// Get cache statistics for monitoring
    pub fn stats(&self) -> CacheStats {
        CacheStats {
            payment_sessions_size: self.payment_sessions.entry_count(),
            idempotency_keys_size: self.idempotency_keys.entry_count(),
        }
    }

    pub async fn session(&self, id: Uuid) -> Option<PaymentSession> {
        let session = self.payment_sessions.get(&id).await;
        tracing::debug!(
            "Cache {} for payment session: {}",
            if session.is_some() { "HIT" } else { "MISS" },
            id
        );
        session
    }

    pub async fn store_session(&self, session: PaymentSession) {
        self.payment_sessions.insert(session.id, session).await;
    }

    /// Session previously created under `key`, if it is still alive
    pub async fn session_for_key(&self, key: &str) -> Option<PaymentSession> {
        let id = self.idempotency_keys.get(key).await?;
        self.session(id).await
    }

    /// Write back a session only while it is still cached.
    ///
    /// Returns false when the session was abandoned in the meantime; it then
    /// stays gone.
    pub async fn update_session(&self, session: PaymentSession) -> bool {
        let result = self
            .payment_sessions
            .entry(session.id)
            .and_compute_with(|existing| {
                let op = match existing {
                    Some(_) => Op::Put(session),
                    None => Op::Nop,
                };
                std::future::ready(op)
            })
            .await;
        matches!(result, CompResult::ReplacedWith(_))
    }

    /// Atomically bind `key` to `id` unless another session already holds it.
    ///
    /// Returns the id of the earlier session when the key was taken.
    pub async fn claim_key(&self, key: String, id: Uuid) -> Option<Uuid> {
        let entry = self.idempotency_keys.entry(key).or_insert(id).await;
        if entry.is_fresh() {
            None
        } else {
            Some(entry.into_value())
        }
    }

    /// Remove a session; returns whether it existed
    pub async fn abandon_session(&self, id: Uuid) -> bool {
        let existed = self.payment_sessions.remove(&id).await.is_some();
        if existed {
            info!("Payment session {} abandoned", id);
        }
        existed
    }
}

impl Default for AppCache {
    fn default() -> Self {
        Self::new(Duration::from_secs(30 * 60))
    }
}

/// Cache statistics for monitoring endpoint
#[derive(Debug, Clone, Serialize)]
pub struct CacheStats {
    pub payment_sessions_size: u64,
    pub idempotency_keys_size: u64,
}
