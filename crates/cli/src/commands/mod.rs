//! Command implementations.

pub mod admin;
pub mod auth;
pub mod billing;
pub mod chat;
pub mod shelf;
pub mod stores;

use findkaro_app::identity::RemoteIdentity;
use findkaro_core::StoreId;

/// The wired application as the CLI sees it.
pub type CliApp = findkaro_app::App<RemoteIdentity>;

/// Result type shared by all commands.
pub type CliResult = Result<(), Box<dyn std::error::Error>>;

/// The store attached to the current session, for merchant commands.
fn own_store(app: &CliApp) -> Result<StoreId, Box<dyn std::error::Error>> {
    app.current()?
        .store_id
        .ok_or_else(|| "no store attached to this account; run `findkaro signup merchant`".into())
}
