//! FindKaro Core - Shared types library.
//!
//! This crate provides common types used across all FindKaro components:
//! - `app` - Application services (session, registry, chat, persistence)
//! - `cli` - Command-line surface driving the application
//!
//! # Architecture
//!
//! The core crate contains only types and pure logic - no I/O, no HTTP
//! clients, no persistence. This keeps it lightweight and allows it to be
//! used anywhere.
//!
//! # Modules
//!
//! - [`types`] - Newtype wrappers for type-safe IDs and emails, the closed
//!   role/status enums, the store approval state machine, the plan catalog,
//!   and chat thread addressing.

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod types;

pub use types::*;
