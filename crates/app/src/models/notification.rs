//! Notification type.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use findkaro_core::NotificationId;

/// Kind of notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum NotificationKind {
    LowStock,
    OutOfStock,
    Expiring,
    NewRequest,
}

/// An append-only notification record.
///
/// Stored under the `notification_list` key; nothing in the core workflows
/// consumes these beyond storage.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Notification {
    /// Unique notification ID.
    pub id: NotificationId,
    /// What kind of event this records.
    #[serde(rename = "type")]
    pub kind: NotificationKind,
    /// Human-readable message.
    pub message: String,
    /// When the notification was recorded.
    pub timestamp: DateTime<Utc>,
    /// Whether the notification has been read.
    pub read: bool,
}
