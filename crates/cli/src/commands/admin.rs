//! Admin review commands.

use findkaro_core::{ApprovalStatus, ReviewDecision, StoreId};

use super::{CliApp, CliResult};

/// List stores, optionally restricted to one approval status.
pub fn list(app: &CliApp, status: Option<&str>) -> CliResult {
    let stores = match status {
        Some(status) => app.registry.stores_by_status(parse_status(status)?),
        None => {
            let mut all = app.registry.stores_by_status(ApprovalStatus::PendingApproval);
            all.extend(app.registry.stores_by_status(ApprovalStatus::PendingPayment));
            all.extend(app.registry.stores_by_status(ApprovalStatus::Approved));
            all.extend(app.registry.stores_by_status(ApprovalStatus::Rejected));
            all
        }
    };
    if stores.is_empty() {
        println!("No stores");
        return Ok(());
    }
    for store in stores {
        println!(
            "{}  {}  {} ({}, {})  plan {}",
            store.id, store.approval_status, store.name, store.area, store.city, store.plan
        );
    }
    Ok(())
}

/// Approve or reject a store awaiting review.
pub fn review(app: &mut CliApp, store_id: &StoreId, decision: &str) -> CliResult {
    let decision = match decision {
        "approve" => ReviewDecision::Approve,
        "reject" => ReviewDecision::Reject,
        other => return Err(format!("invalid decision {other}; expected approve or reject").into()),
    };
    app.review_store(store_id, decision)?;
    let store = app.registry.store(store_id).ok_or("store not found")?;
    println!("{} is now {}", store.name, store.approval_status);
    Ok(())
}

/// Show admin dashboard counters.
pub fn stats(app: &CliApp) -> CliResult {
    let stats = app.registry.admin_stats();
    println!("Stores:   {}", stats.total);
    println!("Pending:  {}", stats.pending);
    println!("Approved: {}", stats.approved);
    Ok(())
}

/// List the notification log.
pub fn notifications(app: &CliApp) -> CliResult {
    let items = app.notifications.all();
    if items.is_empty() {
        println!("No notifications");
        return Ok(());
    }
    for item in items {
        println!(
            "{}  {:?}  {}",
            item.timestamp.format("%Y-%m-%d %H:%M"),
            item.kind,
            item.message
        );
    }
    println!();
    println!("{} unread", app.notifications.unread_count());
    Ok(())
}

fn parse_status(s: &str) -> Result<ApprovalStatus, Box<dyn std::error::Error>> {
    match s {
        "pending-payment" => Ok(ApprovalStatus::PendingPayment),
        "pending-approval" => Ok(ApprovalStatus::PendingApproval),
        "approved" => Ok(ApprovalStatus::Approved),
        "rejected" => Ok(ApprovalStatus::Rejected),
        _ => Err(format!(
            "invalid status {s}; expected pending-payment, pending-approval, approved or rejected"
        )
        .into()),
    }
}
