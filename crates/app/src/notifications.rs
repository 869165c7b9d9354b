//! Append-only notification log.
//!
//! Workflow events (a store submitting for verification, stock running low)
//! append here; the log is read back for display and an unread count.
//! Written through to the `notification_list` key on every append.

use chrono::Utc;
use uuid::Uuid;

use findkaro_core::NotificationId;

use crate::models::{Notification, NotificationKind};
use crate::store::{Persistence, StoreKey};

/// The notification log.
#[derive(Debug)]
pub struct NotificationLog {
    persistence: Persistence,
    items: Vec<Notification>,
}

impl NotificationLog {
    /// Hydrate the log from persistence.
    #[must_use]
    pub fn new(persistence: Persistence) -> Self {
        let items = persistence
            .load_json(StoreKey::NotificationList)
            .unwrap_or_default();
        Self { persistence, items }
    }

    /// Append a notification, newest last.
    pub fn push(&mut self, kind: NotificationKind, message: impl Into<String>) {
        self.items.push(Notification {
            id: NotificationId::new(Uuid::new_v4().to_string()),
            kind,
            message: message.into(),
            timestamp: Utc::now(),
            read: false,
        });
        self.persistence
            .save_json(StoreKey::NotificationList, &self.items);
    }

    /// All notifications, oldest first.
    #[must_use]
    pub fn all(&self) -> &[Notification] {
        &self.items
    }

    /// How many notifications are unread.
    #[must_use]
    pub fn unread_count(&self) -> usize {
        self.items.iter().filter(|n| !n.read).count()
    }

    /// Mark every notification read.
    pub fn mark_all_read(&mut self) {
        for item in &mut self.items {
            item.read = true;
        }
        self.persistence
            .save_json(StoreKey::NotificationList, &self.items);
    }
}
