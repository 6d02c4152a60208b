//! driftboard/crates/domains/src/lib.rs
//!
//! The central domain types and interface definitions for Driftboard.

pub mod error;
pub mod models;
pub mod traits;

// Re-exporting for easier access in other crates
pub use error::*;
pub use models::*;
pub use traits::*;

#[cfg(test)]
mod tests {
    use super::models::*;
    use chrono::{Duration, Utc};
    use uuid::Uuid;

    #[test]
    fn expires_in_counts_down_and_clamps_at_zero() {
        let created = Utc::now();
        let msg = Message {
            id: Uuid::now_v7(),
            text: "Hello Rust!".to_string(),
            sender_name: ANONYMOUS_NAME.to_string(),
            sender_ip: "1.2.3.4".to_string(),
            created_at: created,
            expires_at: created + Duration::hours(10),
        };

        let half_way = created + Duration::hours(5);
        assert_eq!(msg.expires_in_seconds(half_way), 5 * 60 * 60);

        let past = created + Duration::hours(11);
        assert_eq!(msg.expires_in_seconds(past), 0);
    }
}
