//! FindKaro CLI - local storefront directory.
//!
//! # Usage
//!
//! ```bash
//! # Create a shopper account and browse
//! findkaro signup shopper -e ayesha@example.com -p 1234
//! findkaro stores search clifton
//!
//! # Open a store (paid plans need payment + admin approval)
//! findkaro signup merchant -e owner@example.com -p 1234 \
//!     --name "Madina Mart" --city Karachi --area Clifton \
//!     --address "Shop 4, Block 2" --plan pro
//! findkaro billing submit
//!
//! # Review as admin
//! findkaro admin list --status pending-approval
//! findkaro admin review store_u_abc approve
//! ```
//!
//! Configuration comes from the environment (`FINDKARO_DATA_DIR`,
//! `FINDKARO_IDENTITY_URL`, `FINDKARO_ADMIN_EMAIL`/`_PASSCODE`); a `.env`
//! file is honoured.

#![cfg_attr(not(test), forbid(unsafe_code))]
#![allow(clippy::print_stdout)]

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use findkaro_app::{App, AppConfig};

mod commands;

#[derive(Parser)]
#[command(name = "findkaro")]
#[command(author, version, about = "FindKaro local storefront directory")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Log in with email and PIN
    Login {
        /// Account email
        #[arg(short, long)]
        email: String,

        /// Account PIN
        #[arg(short, long)]
        pin: String,
    },
    /// End the current session
    Logout,
    /// Show the current session
    Whoami,
    /// Create an account
    Signup {
        #[command(subcommand)]
        kind: SignupKind,
    },
    /// Browse the store directory
    Stores {
        #[command(subcommand)]
        action: StoresAction,
    },
    /// Manage your store's shelf
    Shelf {
        #[command(subcommand)]
        action: ShelfAction,
    },
    /// Paid-plan activation
    Billing {
        #[command(subcommand)]
        action: BillingAction,
    },
    /// Review stores (admin)
    Admin {
        #[command(subcommand)]
        action: AdminAction,
    },
    /// Message shoppers and merchants
    Chat {
        #[command(subcommand)]
        action: ChatAction,
    },
}

#[derive(Subcommand)]
enum SignupKind {
    /// Create a shopper account
    Shopper {
        /// Account email
        #[arg(short, long)]
        email: String,

        /// Account PIN
        #[arg(short, long)]
        pin: String,
    },
    /// Create a merchant account and its store
    Merchant {
        /// Account email
        #[arg(short, long)]
        email: String,

        /// Account PIN
        #[arg(short, long)]
        pin: String,

        /// Business name
        #[arg(long)]
        name: String,

        /// Store type
        #[arg(long, default_value = "Grocery")]
        store_type: String,

        /// City (must be a known city)
        #[arg(long)]
        city: String,

        /// Area within the city
        #[arg(long)]
        area: String,

        /// Street address
        #[arg(long)]
        address: String,

        /// Plan tier (`free`, `basic`, `pro`, `elite`)
        #[arg(long, default_value = "free")]
        plan: String,

        /// Contact phone (generated when omitted)
        #[arg(long)]
        phone: Option<String>,
    },
}

#[derive(Subcommand)]
enum StoresAction {
    /// Search approved stores by name or area
    Search {
        /// Search query; empty lists all approved stores
        #[arg(default_value = "")]
        query: String,
    },
    /// Show one store and its live inventory
    Show {
        /// Store ID
        store_id: String,

        /// Filter products by name
        #[arg(short, long, default_value = "")]
        query: String,
    },
}

#[derive(Subcommand)]
enum ShelfAction {
    /// List your shelf
    List {
        /// Filter by product name
        #[arg(short, long)]
        keyword: Option<String>,

        /// Filter by category
        #[arg(short, long)]
        category: Option<String>,

        /// Minimum quantity
        #[arg(long, default_value_t = 0)]
        min_qty: u32,

        /// Maximum quantity
        #[arg(long, default_value_t = u32::MAX)]
        max_qty: u32,
    },
    /// Add an item from the verified library
    Add {
        /// Exact library item name
        item: String,
    },
    /// List the verified item library
    Library,
    /// Flip a product between live and hidden
    Toggle {
        /// Product ID
        product_id: String,
    },
    /// Set a product's quantity
    Quantity {
        /// Product ID
        product_id: String,

        /// New quantity
        qty: u32,
    },
    /// Set a product's stock status label
    Status {
        /// Product ID
        product_id: String,

        /// One of in-stock, low-stock, short-supply, arriving-soon, not-available
        status: String,
    },
    /// Show shelf counters
    Stats,
}

#[derive(Subcommand)]
enum BillingAction {
    /// Show what is owed to activate your plan
    Notice,
    /// Declare the plan payment was made
    Submit,
}

#[derive(Subcommand)]
enum AdminAction {
    /// List stores, optionally by status
    List {
        /// One of pending-payment, pending-approval, approved, rejected
        #[arg(short, long)]
        status: Option<String>,
    },
    /// Approve or reject a store awaiting review
    Review {
        /// Store ID
        store_id: String,

        /// `approve` or `reject`
        decision: String,
    },
    /// Show dashboard counters
    Stats,
    /// List the notification log
    Notifications,
}

#[derive(Subcommand)]
enum ChatAction {
    /// Send a message to another user
    Send {
        /// Recipient user ID
        recipient: String,

        /// Message text
        text: String,
    },
    /// List your conversations
    Inbox,
    /// Show the conversation with one user
    Show {
        /// The other participant's user ID
        user_id: String,
    },
}

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("findkaro_app=info,findkaro_cli=info")),
        )
        .init();

    let cli = Cli::parse();

    if let Err(e) = run(cli).await {
        tracing::error!("Command failed: {e}");
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> commands::CliResult {
    let config = AppConfig::from_env()?;
    let mut app = App::from_config(config)?;

    match cli.command {
        Commands::Login { email, pin } => commands::auth::login(&mut app, &email, &pin).await?,
        Commands::Logout => commands::auth::logout(&mut app).await?,
        Commands::Whoami => commands::auth::whoami(&app)?,
        Commands::Signup { kind } => match kind {
            SignupKind::Shopper { email, pin } => {
                commands::auth::signup_shopper(&mut app, &email, &pin).await?;
            }
            SignupKind::Merchant {
                email,
                pin,
                name,
                store_type,
                city,
                area,
                address,
                plan,
                phone,
            } => {
                let plan = plan.parse()?;
                commands::auth::signup_merchant(
                    &mut app,
                    &email,
                    &pin,
                    &name,
                    &store_type,
                    &city,
                    &area,
                    &address,
                    plan,
                    phone.as_deref(),
                )
                .await?;
            }
        },
        Commands::Stores { action } => match action {
            StoresAction::Search { query } => commands::stores::search(&app, &query)?,
            StoresAction::Show { store_id, query } => {
                commands::stores::show(&app, &store_id.into(), &query)?;
            }
        },
        Commands::Shelf { action } => match action {
            ShelfAction::List {
                keyword,
                category,
                min_qty,
                max_qty,
            } => commands::shelf::list(&app, keyword, category, min_qty, max_qty)?,
            ShelfAction::Add { item } => commands::shelf::add(&mut app, &item)?,
            ShelfAction::Library => commands::shelf::library(&app)?,
            ShelfAction::Toggle { product_id } => {
                commands::shelf::toggle(&mut app, &product_id.into())?;
            }
            ShelfAction::Quantity { product_id, qty } => {
                commands::shelf::quantity(&mut app, &product_id.into(), qty)?;
            }
            ShelfAction::Status { product_id, status } => {
                commands::shelf::status(&mut app, &product_id.into(), &status)?;
            }
            ShelfAction::Stats => commands::shelf::stats(&app)?,
        },
        Commands::Billing { action } => match action {
            BillingAction::Notice => commands::billing::notice(&app)?,
            BillingAction::Submit => commands::billing::submit(&mut app)?,
        },
        Commands::Admin { action } => match action {
            AdminAction::List { status } => commands::admin::list(&app, status.as_deref())?,
            AdminAction::Review { store_id, decision } => {
                commands::admin::review(&mut app, &store_id.into(), &decision)?;
            }
            AdminAction::Stats => commands::admin::stats(&app)?,
            AdminAction::Notifications => commands::admin::notifications(&app)?,
        },
        Commands::Chat { action } => match action {
            ChatAction::Send { recipient, text } => {
                commands::chat::send(&mut app, &recipient.into(), &text)?;
            }
            ChatAction::Inbox => commands::chat::inbox(&app)?,
            ChatAction::Show { user_id } => commands::chat::show(&app, &user_id.into())?,
        },
    }
    Ok(())
}
