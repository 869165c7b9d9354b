//! Chat message type.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use findkaro_core::UserId;

/// One message in a two-party chat thread. Immutable once appended.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChatMessage {
    /// Who sent the message.
    pub sender_id: UserId,
    /// Sender display name at send time.
    pub sender_name: String,
    /// Message body.
    pub text: String,
    /// When the message was sent.
    pub sent_at: DateTime<Utc>,
}

impl ChatMessage {
    /// Build a message stamped with the current time.
    #[must_use]
    pub fn new(sender_id: UserId, sender_name: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            sender_id,
            sender_name: sender_name.into(),
            text: text.into(),
            sent_at: Utc::now(),
        }
    }
}
