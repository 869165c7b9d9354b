//! Direct messaging between shoppers and merchants.
//!
//! Conversations are keyed by the canonical pair of participant IDs
//! ([`ThreadKey`]), so either side addressing the other lands in the same
//! thread. Messages are append-only; every send writes the whole thread map
//! through to the `chat_threads` key.

use std::collections::BTreeMap;

use findkaro_core::{ThreadKey, UserId};

use crate::models::ChatMessage;
use crate::store::{Persistence, StoreKey};

/// Summary of one conversation for the inbox view.
#[derive(Debug, Clone)]
pub struct InboxEntry {
    /// The conversation key.
    pub key: ThreadKey,
    /// The most recent message.
    pub latest: ChatMessage,
    /// Total messages in the thread.
    pub message_count: usize,
}

/// All chat threads.
#[derive(Debug)]
pub struct ChatStore {
    persistence: Persistence,
    threads: BTreeMap<ThreadKey, Vec<ChatMessage>>,
}

impl ChatStore {
    /// Hydrate threads from persistence.
    #[must_use]
    pub fn new(persistence: Persistence) -> Self {
        let threads = persistence
            .load_json(StoreKey::ChatThreads)
            .unwrap_or_default();
        Self {
            persistence,
            threads,
        }
    }

    /// Append a message from `sender` to `recipient`, creating the thread
    /// on first contact.
    pub fn send(&mut self, sender: &UserId, sender_name: &str, recipient: &UserId, text: &str) {
        let key = ThreadKey::between(sender, recipient);
        let message = ChatMessage::new(sender.clone(), sender_name, text);
        self.threads.entry(key).or_default().push(message);
        self.persistence.save_json(StoreKey::ChatThreads, &self.threads);
    }

    /// The messages in one thread, oldest first. Empty for unknown keys.
    #[must_use]
    pub fn thread(&self, key: &ThreadKey) -> &[ChatMessage] {
        self.threads.get(key).map_or(&[], Vec::as_slice)
    }

    /// Every conversation a user participates in, with its latest message.
    #[must_use]
    pub fn inbox(&self, user: &UserId) -> Vec<InboxEntry> {
        self.threads
            .iter()
            .filter(|(key, _)| key.involves(user))
            .filter_map(|(key, messages)| {
                messages.last().map(|latest| InboxEntry {
                    key: key.clone(),
                    latest: latest.clone(),
                    message_count: messages.len(),
                })
            })
            .collect()
    }
}
