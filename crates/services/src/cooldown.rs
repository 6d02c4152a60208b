//! # Cooldown
//!
//! Per-origin rate limiting: one accepted message per minute, keyed on the
//! exact origin string (no prefix or subnet matching).

use chrono::{DateTime, Utc};
use domains::{BoardError, MessageRepo, Result};

/// Minimum interval between two accepted sends from the same origin.
pub const COOLDOWN_SECS: i64 = 60;

/// Rejects the send when the origin's most recent accepted message is less
/// than [`COOLDOWN_SECS`] old. Only the single most recent record matters.
///
/// Advisory only: a concurrent send from the same origin can pass this check
/// before the other insert commits. Tolerated for ephemeral, low-stakes data.
pub async fn check_cooldown(
    repo: &dyn MessageRepo,
    sender_ip: &str,
    now: DateTime<Utc>,
) -> Result<()> {
    if let Some(last) = repo.last_created_at(sender_ip).await? {
        let elapsed = (now - last).num_seconds();
        if elapsed < COOLDOWN_SECS {
            return Err(BoardError::CooldownActive {
                retry_after_secs: COOLDOWN_SECS - elapsed,
            });
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;
    use domains::MockMessageRepo;

    fn repo_with_last_send(ago_secs: i64, now: DateTime<Utc>) -> MockMessageRepo {
        let mut repo = MockMessageRepo::new();
        let last = now - Duration::seconds(ago_secs);
        repo.expect_last_created_at()
            .returning(move |_| Ok(Some(last)));
        repo
    }

    #[tokio::test]
    async fn first_send_from_an_origin_is_allowed() {
        let mut repo = MockMessageRepo::new();
        repo.expect_last_created_at().returning(|_| Ok(None));
        assert!(check_cooldown(&repo, "1.2.3.4", Utc::now()).await.is_ok());
    }

    #[tokio::test]
    async fn send_within_the_window_is_rejected_with_remaining_time() {
        let now = Utc::now();
        let repo = repo_with_last_send(30, now);
        match check_cooldown(&repo, "1.2.3.4", now).await {
            Err(BoardError::CooldownActive { retry_after_secs }) => {
                assert_eq!(retry_after_secs, 30);
            }
            other => panic!("expected cooldown rejection, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn send_after_the_window_is_allowed() {
        let now = Utc::now();
        let repo = repo_with_last_send(61, now);
        assert!(check_cooldown(&repo, "1.2.3.4", now).await.is_ok());
    }

    #[tokio::test]
    async fn boundary_is_exclusive_at_exactly_sixty_seconds() {
        let now = Utc::now();
        let repo = repo_with_last_send(COOLDOWN_SECS, now);
        assert!(check_cooldown(&repo, "1.2.3.4", now).await.is_ok());
    }
}
