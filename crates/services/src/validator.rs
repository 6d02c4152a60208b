//! # Validator
//!
//! Pure admission checks on message text and display name. No side effects,
//! no I/O; the first pipeline stage on every send.

use domains::{BoardError, Result, ANONYMOUS_NAME};

/// Maximum message length, counted in characters.
pub const MAX_TEXT_CHARS: usize = 300;
/// Maximum display-name length, counted in characters.
pub const MAX_NAME_CHARS: usize = 16;

/// A submission that has passed validation: text within bounds, name resolved
/// to either a well-formed display name or the `Anonymous` sentinel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidSubmission {
    pub text: String,
    pub sender_name: String,
    pub sender_ip: String,
}

/// Validates a raw send request.
///
/// The name is trimmed first; a blank name becomes `Anonymous`, which is
/// exempt from the character-set rule. Everything else must be 1-16
/// characters of `[A-Za-z0-9 ]`.
pub fn validate(
    text: Option<&str>,
    raw_sender_name: Option<&str>,
    sender_ip: Option<&str>,
) -> Result<ValidSubmission> {
    let text = match text {
        Some(t) if !t.is_empty() => t,
        _ => return Err(BoardError::MissingTextOrIp),
    };
    let sender_ip = match sender_ip {
        Some(ip) if !ip.is_empty() => ip,
        _ => return Err(BoardError::MissingTextOrIp),
    };

    if text.chars().count() > MAX_TEXT_CHARS {
        return Err(BoardError::MessageTooLong);
    }

    let trimmed = raw_sender_name.map(str::trim).unwrap_or("");
    let sender_name = if trimmed.is_empty() {
        ANONYMOUS_NAME.to_string()
    } else {
        if trimmed != ANONYMOUS_NAME && !is_well_formed_name(trimmed) {
            return Err(BoardError::InvalidUsername);
        }
        trimmed.to_string()
    };

    Ok(ValidSubmission {
        text: text.to_string(),
        sender_name,
        sender_ip: sender_ip.to_string(),
    })
}

/// `^[A-Za-z0-9 ]{1,16}$`
fn is_well_formed_name(name: &str) -> bool {
    name.chars().count() <= MAX_NAME_CHARS
        && name.chars().all(|c| c.is_ascii_alphanumeric() || c == ' ')
}
