//! Store approval workflow.
//!
//! A merchant-created store moves through a small state machine before its
//! catalog becomes visible to shoppers:
//!
//! ```text
//! PendingPayment --submit_verification--> PendingApproval --approve--> Approved
//!                                                         \--reject--> Rejected
//! ```
//!
//! Stores created on the free tier skip both pending states and are created
//! `Approved` directly: the free tier is self-service, paid tiers require a
//! manual payment confirmation and an admin review. `Approved` and `Rejected`
//! are terminal; there is no reopen transition from `Rejected`.

use serde::{Deserialize, Serialize};

use crate::types::plan::PlanTier;

/// A store's position in the approval workflow.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ApprovalStatus {
    /// Created on a paid tier; waiting for the merchant to confirm payment.
    PendingPayment,
    /// Payment submitted; waiting for an admin review.
    PendingApproval,
    /// Operational: visible to shoppers, shelf manageable. Terminal.
    Approved,
    /// Declined by an admin. Terminal for the review cycle.
    Rejected,
}

/// Outcome of an admin review.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReviewDecision {
    Approve,
    Reject,
}

/// An input arrived in a state that does not accept it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum TransitionError {
    /// `submit_verification` is only valid from `PendingPayment`.
    #[error("cannot submit verification from {0}")]
    NotAwaitingPayment(ApprovalStatus),
    /// Admin review is only valid from `PendingApproval`.
    #[error("cannot review a store in {0}")]
    NotAwaitingReview(ApprovalStatus),
}

impl ApprovalStatus {
    /// Initial status for a store created on the given plan.
    ///
    /// The free tier is auto-approved; every paid tier starts by awaiting
    /// payment confirmation.
    #[must_use]
    pub const fn initial_for(plan: PlanTier) -> Self {
        match plan {
            PlanTier::Free => Self::Approved,
            PlanTier::Basic | PlanTier::Pro | PlanTier::Elite => Self::PendingPayment,
        }
    }

    /// Merchant confirms payment and submits the store for review.
    ///
    /// # Errors
    ///
    /// Returns [`TransitionError::NotAwaitingPayment`] unless the store is in
    /// `PendingPayment`. In particular this can never reach `Approved`
    /// directly.
    pub const fn submit_verification(self) -> Result<Self, TransitionError> {
        match self {
            Self::PendingPayment => Ok(Self::PendingApproval),
            Self::PendingApproval | Self::Approved | Self::Rejected => {
                Err(TransitionError::NotAwaitingPayment(self))
            }
        }
    }

    /// Admin resolves a pending review.
    ///
    /// # Errors
    ///
    /// Returns [`TransitionError::NotAwaitingReview`] unless the store is in
    /// `PendingApproval`. Terminal states never loop back.
    pub const fn review(self, decision: ReviewDecision) -> Result<Self, TransitionError> {
        match self {
            Self::PendingApproval => Ok(match decision {
                ReviewDecision::Approve => Self::Approved,
                ReviewDecision::Reject => Self::Rejected,
            }),
            Self::PendingPayment | Self::Approved | Self::Rejected => {
                Err(TransitionError::NotAwaitingReview(self))
            }
        }
    }

    /// Whether the store may expose its catalog to shoppers and let its
    /// owner manage the live shelf.
    #[must_use]
    pub const fn is_operational(self) -> bool {
        matches!(self, Self::Approved)
    }
}

impl std::fmt::Display for ApprovalStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::PendingPayment => write!(f, "pending payment"),
            Self::PendingApproval => write!(f, "pending approval"),
            Self::Approved => write!(f, "approved"),
            Self::Rejected => write!(f, "rejected"),
        }
    }
}
