//! Paid-plan activation commands.

use super::{CliApp, CliResult, own_store};

/// Show what is owed to activate the store's plan.
pub fn notice(app: &CliApp) -> CliResult {
    let store_id = own_store(app)?;
    match app.activation_notice(&store_id) {
        Some(notice) => {
            println!("{} is awaiting payment", notice.store_name);
            println!(
                "Plan: {} (PKR {}/month)",
                notice.plan_name, notice.monthly_price
            );
            println!("Send payment to {} then run `findkaro billing submit`", notice.payment_id);
        }
        None => println!("No payment due"),
    }
    Ok(())
}

/// Declare the payment was made, moving the store to admin review.
pub fn submit(app: &mut CliApp) -> CliResult {
    let store_id = own_store(app)?;
    app.submit_verification(&store_id)?;
    println!("Submitted for review; an admin will approve or reject your store");
    Ok(())
}
