//! # Moderation Gate
//!
//! Screens submissions through the external content classifier. The message
//! text and the (possibly defaulted) sender name are classified
//! independently; either verdict rejects the whole submission.

use std::sync::Arc;

use domains::{BoardError, ContentClassifier, Result};

pub struct ModerationGate {
    classifier: Arc<dyn ContentClassifier>,
    /// When set, classifier failures accept the submission instead of
    /// surfacing a server error. Off by default: an unreachable classifier
    /// must not silently wave content through.
    fail_open: bool,
}

impl ModerationGate {
    pub fn new(classifier: Arc<dyn ContentClassifier>, fail_open: bool) -> Self {
        Self {
            classifier,
            fail_open,
        }
    }

    /// Passes iff neither the text nor the sender name is flagged.
    pub async fn screen(&self, text: &str, sender_name: &str) -> Result<()> {
        for piece in [text, sender_name] {
            match self.classifier.is_flagged(piece).await {
                Ok(true) => return Err(BoardError::ModerationRejected),
                Ok(false) => {}
                Err(err) if self.fail_open => {
                    tracing::warn!(
                        error = %err,
                        "classifier unavailable, accepting submission (fail-open override)"
                    );
                    return Ok(());
                }
                Err(err) => {
                    return Err(BoardError::Internal(
                        err.context("content classification failed"),
                    ))
                }
            }
        }
        Ok(())
    }
}
