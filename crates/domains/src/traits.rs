//! # Core Traits (Ports)
//!
//! Any adapter must implement these traits to be wired into the binary.

use async_trait::async_trait;
use chrono::{DateTime, Utc};

use crate::models::{Message, NewMessage};

/// Data persistence contract for messages.
///
/// The store exclusively owns record storage and identity assignment; every
/// other component operates on messages by value or by insertion request.
#[cfg_attr(any(test, feature = "testing"), mockall::automock)]
#[async_trait]
pub trait MessageRepo: Send + Sync {
    /// Persists a message, assigning its id. Returns the stored record.
    async fn insert(&self, new: NewMessage) -> anyhow::Result<Message>;

    /// Up to `limit` messages with `expires_at > now`, most recent first.
    async fn latest(&self, limit: i64, now: DateTime<Utc>) -> anyhow::Result<Vec<Message>>;

    /// One non-expired message picked uniformly at random among those whose
    /// origin differs from `sender_ip`. `None` when no candidate qualifies.
    async fn random_excluding(
        &self,
        sender_ip: &str,
        now: DateTime<Utc>,
    ) -> anyhow::Result<Option<Message>>;

    /// `created_at` of the most recent message from this exact origin,
    /// expired or not. Older history is irrelevant to the cooldown.
    async fn last_created_at(&self, sender_ip: &str) -> anyhow::Result<Option<DateTime<Utc>>>;

    /// Deletes every message with `expires_at <= now`. Returns the count.
    async fn delete_expired(&self, now: DateTime<Utc>) -> anyhow::Result<u64>;

    /// Every stored message, stale ones included, most recent first.
    async fn export_all(&self) -> anyhow::Result<Vec<Message>>;
}

/// Content moderation contract: a black-box binary verdict on a piece of text.
#[cfg_attr(any(test, feature = "testing"), mockall::automock)]
#[async_trait]
pub trait ContentClassifier: Send + Sync {
    /// `true` when the classification service deems the text abusive/unsafe.
    /// Errors are surfaced, never swallowed: the caller decides the fail
    /// policy.
    async fn is_flagged(&self, text: &str) -> anyhow::Result<bool>;
}
