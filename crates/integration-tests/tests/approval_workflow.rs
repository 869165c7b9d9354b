//! The paid-plan approval workflow: payment confirmation, admin review,
//! terminal states.

#![allow(clippy::unwrap_used)]

use findkaro_core::{ApprovalStatus, PlanTier, ReviewDecision};
use findkaro_integration_tests::{merchant_form, offline_app};

#[tokio::test]
async fn test_payment_then_approval_makes_store_visible() {
    let (mut app, _) = offline_app();
    let store = app
        .finalize_merchant_onboarding(merchant_form(
            "owner@example.com",
            "Madina Mart",
            "Clifton",
            PlanTier::Basic,
        ))
        .await
        .unwrap();

    app.submit_verification(&store.id).unwrap();
    let pending = app.registry.store(&store.id).unwrap();
    assert_eq!(pending.approval_status, ApprovalStatus::PendingApproval);
    // Still hidden while under review.
    assert!(app.registry.search_stores("").is_empty());

    app.review_store(&store.id, ReviewDecision::Approve).unwrap();
    assert_eq!(app.registry.search_stores("").len(), 1);
}

#[tokio::test]
async fn test_rejected_store_is_terminal() {
    let (mut app, _) = offline_app();
    let store = app
        .finalize_merchant_onboarding(merchant_form(
            "owner@example.com",
            "Madina Mart",
            "Clifton",
            PlanTier::Basic,
        ))
        .await
        .unwrap();

    app.submit_verification(&store.id).unwrap();
    app.review_store(&store.id, ReviewDecision::Reject).unwrap();

    assert!(app.registry.search_stores("").is_empty());
    assert!(app.submit_verification(&store.id).is_err());
    assert!(app.review_store(&store.id, ReviewDecision::Approve).is_err());
}

#[tokio::test]
async fn test_submission_never_skips_review() {
    let (mut app, _) = offline_app();
    let store = app
        .finalize_merchant_onboarding(merchant_form(
            "owner@example.com",
            "Madina Mart",
            "Clifton",
            PlanTier::Elite,
        ))
        .await
        .unwrap();

    app.submit_verification(&store.id).unwrap();
    let status = app.registry.store(&store.id).unwrap().approval_status;
    assert_ne!(status, ApprovalStatus::Approved);

    // A second submission is not a path to approval either.
    assert!(app.submit_verification(&store.id).is_err());
}

#[tokio::test]
async fn test_submission_is_recorded_for_the_admin() {
    let (mut app, _) = offline_app();
    let store = app
        .finalize_merchant_onboarding(merchant_form(
            "owner@example.com",
            "Madina Mart",
            "Clifton",
            PlanTier::Basic,
        ))
        .await
        .unwrap();

    app.submit_verification(&store.id).unwrap();

    assert_eq!(app.notifications.unread_count(), 1);
    assert!(app.notifications.all()[0].message.contains("Madina Mart"));

    let stats = app.registry.admin_stats();
    assert_eq!(stats.total, 1);
    assert_eq!(stats.pending, 1);
    assert_eq!(stats.approved, 0);
}

#[tokio::test]
async fn test_workflow_survives_restart_between_steps() {
    let (mut app, persistence) = offline_app();
    let store = app
        .finalize_merchant_onboarding(merchant_form(
            "owner@example.com",
            "Madina Mart",
            "Clifton",
            PlanTier::Basic,
        ))
        .await
        .unwrap();
    app.submit_verification(&store.id).unwrap();

    let mut reopened = findkaro_integration_tests::reopen(persistence);
    reopened
        .review_store(&store.id, ReviewDecision::Approve)
        .unwrap();
    assert_eq!(
        reopened.registry.store(&store.id).unwrap().approval_status,
        ApprovalStatus::Approved
    );
}
