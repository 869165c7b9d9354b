//! Domain model types.
//!
//! These are the persisted shapes: serde field names are camelCase and form
//! a compatibility surface with existing data files.

pub mod chat;
pub mod identity;
pub mod notification;
pub mod product;
pub mod store;

pub use chat::ChatMessage;
pub use identity::{Identity, LocalProfile};
pub use notification::{Notification, NotificationKind};
pub use product::Product;
pub use store::{NewStore, Store};
