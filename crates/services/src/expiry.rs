//! # Expiry
//!
//! Every accepted message lives for a fixed ten hours; expired rows are
//! purged before each ordinary read. Admin export is the only view allowed
//! to observe stale-but-undeleted rows.

use chrono::{DateTime, Duration, Utc};
use domains::{MessageRepo, Result};

/// Fixed message time-to-live. Not configurable per message.
pub const MESSAGE_TTL_SECS: i64 = 10 * 60 * 60;

pub fn message_ttl() -> Duration {
    Duration::seconds(MESSAGE_TTL_SECS)
}

/// Deletes every message with `expires_at <= now`. Idempotent; safe to call
/// before every read.
pub async fn purge_expired(repo: &dyn MessageRepo, now: DateTime<Utc>) -> Result<u64> {
    let deleted = repo.delete_expired(now).await?;
    if deleted > 0 {
        tracing::debug!(deleted, "purged expired messages");
    }
    Ok(deleted)
}
