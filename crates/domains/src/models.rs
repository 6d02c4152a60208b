//! # Domain Models
//!
//! These structs represent the core entities of Driftboard.
//! We use UUID v7 for time-ordered, globally unique identification.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// The display name a message falls back to when the sender leaves it blank.
/// Exempt from the name character-set rule.
pub const ANONYMOUS_NAME: &str = "Anonymous";

/// A stored board message. Immutable after insertion; its lifecycle is
/// create → (become stale) → delete.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Message {
    pub id: Uuid,
    pub text: String,
    pub sender_name: String,
    /// Origin network address. Used for cooldown enforcement and random-pick
    /// exclusion only; never serialized to non-admin callers.
    pub sender_ip: String,
    pub created_at: DateTime<Utc>,
    /// Always `created_at` + the fixed message TTL.
    pub expires_at: DateTime<Utc>,
}

impl Message {
    /// Whole seconds until this message expires, clamped at zero.
    pub fn expires_in_seconds(&self, now: DateTime<Utc>) -> i64 {
        (self.expires_at - now).num_seconds().max(0)
    }
}

/// An insertion request for a message that has already cleared the admission
/// pipeline. The store assigns the id; both timestamps are stored verbatim.
#[derive(Debug, Clone)]
pub struct NewMessage {
    pub text: String,
    pub sender_name: String,
    pub sender_ip: String,
    pub created_at: DateTime<Utc>,
    pub expires_at: DateTime<Utc>,
}
