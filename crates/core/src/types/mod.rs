//! Core types for FindKaro.
//!
//! This module provides type-safe wrappers for common domain concepts.

pub mod approval;
pub mod email;
pub mod id;
pub mod plan;
pub mod role;
pub mod status;
pub mod thread;

pub use approval::{ApprovalStatus, ReviewDecision, TransitionError};
pub use email::{Email, EmailError};
pub use id::*;
pub use plan::{Plan, PlanTier};
pub use role::Role;
pub use status::StockStatus;
pub use thread::ThreadKey;
