//! Sitesmith CLI - compose website drafts and submit them for generation.
//!
//! # Usage
//!
//! ```bash
//! # Create an account (or sign in)
//! sitesmith register -n "Ann" -e a@x.com -p secret
//! sitesmith login -e a@x.com -p secret
//!
//! # Compose a draft (state lives in sitesmith-draft.json)
//! sitesmith draft new
//! sitesmith draft set business_name "Tidepool Ceramics"
//! sitesmith draft set colors.primary "#0EA5E9"
//! sitesmith draft logo ./logo.png
//! sitesmith draft product add --name Mug --description "350ml" --price 24.50
//! sitesmith draft submit
//!
//! # Manage generated websites
//! sitesmith list
//! sitesmith preview <id>
//! sitesmith delete <id>
//! ```
//!
//! # Environment Variables
//!
//! - `SITESMITH_API_BASE` - Backend API base URL (required)
//! - `SITESMITH_TOKEN_FILE` - Credential location (optional)

#![cfg_attr(not(test), forbid(unsafe_code))]

use std::path::PathBuf;

use clap::{Parser, Subcommand};

mod commands;

#[derive(Parser)]
#[command(name = "sitesmith")]
#[command(author, version, about = "Sitesmith command-line client")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Create an account and sign in
    Register {
        /// Display name
        #[arg(short, long)]
        name: String,

        /// Email address
        #[arg(short, long)]
        email: String,

        /// Password
        #[arg(short, long)]
        password: String,
    },
    /// Sign in with an existing account
    Login {
        /// Email address
        #[arg(short, long)]
        email: String,

        /// Password
        #[arg(short, long)]
        password: String,
    },
    /// Sign out and forget the stored credential
    Logout,
    /// Show the signed-in identity
    Whoami,
    /// List generated websites
    List,
    /// Delete a website
    Delete {
        /// Website id
        id: String,
    },
    /// Print the out-of-band preview URL for a website
    Preview {
        /// Website id
        id: String,
    },
    /// Compose the website draft
    Draft {
        /// Draft state file
        #[arg(short, long, default_value = "sitesmith-draft.json")]
        file: PathBuf,

        #[command(subcommand)]
        action: DraftAction,
    },
}

#[derive(Subcommand)]
enum DraftAction {
    /// Start a fresh draft
    New,
    /// Print the current draft
    Show,
    /// Set a field by dotted path (e.g. `business_name`, `colors.primary`)
    Set {
        /// Field path
        path: String,
        /// New value
        value: String,
    },
    /// Encode and attach the logo image
    Logo {
        /// Image file
        path: PathBuf,
    },
    /// Encode and attach the hero image
    Hero {
        /// Image file
        path: PathBuf,
    },
    /// Manage the product catalog
    Product {
        #[command(subcommand)]
        action: ProductAction,
    },
    /// Validate the draft and submit it for generation
    Submit,
}

#[derive(Subcommand)]
enum ProductAction {
    /// Add a product
    Add {
        /// Product name
        #[arg(long)]
        name: String,

        /// Product description
        #[arg(long)]
        description: String,

        /// Price (non-negative decimal)
        #[arg(long)]
        price: String,

        /// Optional product image file
        #[arg(long)]
        image: Option<PathBuf>,
    },
    /// Remove a product by its position (zero-based)
    Remove {
        /// Product index
        index: usize,
    },
}

#[tokio::main]
async fn main() {
    // Initialize tracing
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();

    let result: Result<(), Box<dyn std::error::Error>> = run(cli).await;

    if let Err(e) = result {
        tracing::error!("Command failed: {e}");
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    match cli.command {
        Commands::Register {
            name,
            email,
            password,
        } => commands::auth::register(&name, &email, &password).await?,
        Commands::Login { email, password } => commands::auth::login(&email, &password).await?,
        Commands::Logout => commands::auth::logout()?,
        Commands::Whoami => commands::auth::whoami().await?,
        Commands::List => commands::sites::list().await?,
        Commands::Delete { id } => commands::sites::delete(&id).await?,
        Commands::Preview { id } => commands::sites::preview(&id).await?,
        Commands::Draft { file, action } => match action {
            DraftAction::New => commands::draft::new(&file)?,
            DraftAction::Show => commands::draft::show(&file)?,
            DraftAction::Set { path, value } => commands::draft::set(&file, &path, &value)?,
            DraftAction::Logo { path } => commands::draft::logo(&file, &path).await?,
            DraftAction::Hero { path } => commands::draft::hero(&file, &path).await?,
            DraftAction::Product { action } => match action {
                ProductAction::Add {
                    name,
                    description,
                    price,
                    image,
                } => {
                    commands::draft::product_add(&file, &name, &description, &price, image.as_deref())
                        .await?;
                }
                ProductAction::Remove { index } => {
                    commands::draft::product_remove(&file, index)?;
                }
            },
            DraftAction::Submit => commands::draft::submit(&file).await?,
        },
    }
    Ok(())
}
