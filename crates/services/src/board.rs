//! # Board Service
//!
//! Composition root for the message pipeline. A send request runs
//! Validator → Cooldown → Moderation Gate → insert, strictly in that order;
//! an insert is only issued once every prior stage has passed. Read paths
//! purge expired rows first so stale messages are never served.

use std::sync::Arc;

use chrono::Utc;
use domains::{BoardError, Message, MessageRepo, NewMessage, Result};

use crate::{admin, cooldown, expiry, moderation::ModerationGate, validator};

/// Ordinary retrieval returns at most this many messages.
pub const LATEST_WINDOW: i64 = 50;

/// A message as seen by ordinary (non-admin) callers. The origin address is
/// deliberately absent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VisibleMessage {
    pub text: String,
    pub sender_name: String,
    pub expires_in_seconds: i64,
}

impl VisibleMessage {
    fn from_message(message: Message, now: chrono::DateTime<Utc>) -> Self {
        Self {
            expires_in_seconds: message.expires_in_seconds(now),
            text: message.text,
            sender_name: message.sender_name,
        }
    }
}

pub struct BoardService {
    repo: Arc<dyn MessageRepo>,
    moderation: ModerationGate,
    admin_secret: String,
}

impl BoardService {
    pub fn new(repo: Arc<dyn MessageRepo>, moderation: ModerationGate, admin_secret: String) -> Self {
        Self {
            repo,
            moderation,
            admin_secret,
        }
    }

    /// Runs the full admission pipeline and stores the message with its
    /// computed expiry on success.
    pub async fn post_message(
        &self,
        text: Option<&str>,
        raw_sender_name: Option<&str>,
        sender_ip: Option<&str>,
    ) -> Result<()> {
        let submission = validator::validate(text, raw_sender_name, sender_ip)?;

        let now = Utc::now();
        cooldown::check_cooldown(self.repo.as_ref(), &submission.sender_ip, now).await?;

        self.moderation
            .screen(&submission.text, &submission.sender_name)
            .await?;

        let stored = self
            .repo
            .insert(NewMessage {
                text: submission.text,
                sender_name: submission.sender_name,
                sender_ip: submission.sender_ip,
                created_at: now,
                expires_at: now + expiry::message_ttl(),
            })
            .await?;

        tracing::info!(id = %stored.id, "message accepted");
        Ok(())
    }

    /// Up to [`LATEST_WINDOW`] non-expired messages, most recent first, with
    /// their remaining lifetime computed at response time.
    pub async fn latest(&self) -> Result<Vec<VisibleMessage>> {
        let now = Utc::now();
        expiry::purge_expired(self.repo.as_ref(), now).await?;
        let messages = self.repo.latest(LATEST_WINDOW, now).await?;
        Ok(messages
            .into_iter()
            .map(|m| VisibleMessage::from_message(m, now))
            .collect())
    }

    /// One non-expired message picked uniformly at random among those not
    /// posted from `sender_ip`. `None` when nothing qualifies.
    pub async fn random_excluding(&self, sender_ip: &str) -> Result<Option<VisibleMessage>> {
        let now = Utc::now();
        expiry::purge_expired(self.repo.as_ref(), now).await?;
        let picked = self.repo.random_excluding(sender_ip, now).await?;
        Ok(picked.map(|m| VisibleMessage::from_message(m, now)))
    }

    /// Privileged dump of every stored record, stale rows included. Gated by
    /// the shared admin secret; no purge side effect.
    pub async fn export_all(&self, secret: &str) -> Result<Vec<Message>> {
        if !admin::secrets_match(secret, &self.admin_secret) {
            return Err(BoardError::Forbidden);
        }
        Ok(self.repo.export_all().await?)
    }
}
