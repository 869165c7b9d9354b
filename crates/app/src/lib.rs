//! FindKaro application services.
//!
//! This crate implements the non-visual core of the FindKaro storefront
//! directory: shoppers browse approved stores and their live inventory,
//! merchants manage a shelf and walk the approval/payment workflow, and an
//! admin reviews stores.
//!
//! # Architecture
//!
//! - State lives in memory and is written through to a local JSON key-value
//!   store on every mutation ([`store`]). Reads happen once at startup per
//!   key; missing or malformed data is treated as "no data", never as a
//!   fatal error.
//! - Authentication consults an optional remote identity service
//!   ([`identity`]). Every remote failure degrades to a deterministic local
//!   fallback identity; nothing on that path is fatal.
//! - Services are wired once into an [`state::App`] container and passed
//!   explicitly to callers - there is no ambient global state.

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod catalog;
pub mod chat;
pub mod config;
pub mod error;
pub mod identity;
pub mod models;
pub mod notifications;
pub mod onboarding;
pub mod registry;
pub mod session;
pub mod state;
pub mod store;

pub use config::AppConfig;
pub use error::{AppError, Result};
pub use state::App;
