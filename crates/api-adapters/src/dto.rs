//! Wire shapes for the JSON API. Field names are part of the public
//! contract; the non-admin shapes deliberately have no place to put an
//! origin address.

use chrono::{DateTime, Utc};
use domains::Message;
use serde::{Deserialize, Serialize};
use services::VisibleMessage;
use uuid::Uuid;

#[derive(Debug, Deserialize)]
pub struct SendMessageRequest {
    pub text: Option<String>,
    pub sender: Option<String>,
    /// Origin address, supplied by the transport layer in front of us.
    pub ip: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct RandomQuery {
    pub ip: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct AdminQuery {
    pub secret: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct LatestMessageDto {
    pub text: String,
    pub sender: String,
    pub expires_in_seconds: i64,
}

impl From<VisibleMessage> for LatestMessageDto {
    fn from(m: VisibleMessage) -> Self {
        Self {
            text: m.text,
            sender: m.sender_name,
            expires_in_seconds: m.expires_in_seconds,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct RandomMessageDto {
    pub text: String,
    pub sender: String,
}

impl From<VisibleMessage> for RandomMessageDto {
    fn from(m: VisibleMessage) -> Self {
        Self {
            text: m.text,
            sender: m.sender_name,
        }
    }
}

/// The one shape that carries every stored field, origin included. Admin
/// export only.
#[derive(Debug, Serialize)]
pub struct AdminMessageDto {
    pub id: Uuid,
    pub text: String,
    pub sender_name: String,
    pub sender_ip: String,
    pub created_at: DateTime<Utc>,
    pub expires_at: DateTime<Utc>,
}

impl From<Message> for AdminMessageDto {
    fn from(m: Message) -> Self {
        Self {
            id: m.id,
            text: m.text,
            sender_name: m.sender_name,
            sender_ip: m.sender_ip,
            created_at: m.created_at,
            expires_at: m.expires_at,
        }
    }
}
