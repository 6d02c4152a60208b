//! driftboard/crates/services/src/lib.rs
//!
//! The message admission and lifecycle pipeline: validation, cooldown,
//! moderation, expiry, retrieval, and the admin export gate.

pub mod admin;
pub mod board;
pub mod cooldown;
pub mod expiry;
pub mod moderation;
pub mod validator;

pub use board::{BoardService, VisibleMessage, LATEST_WINDOW};
pub use moderation::ModerationGate;
