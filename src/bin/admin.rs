//! CLI administration tool for the catalog.
//!
//! Manages items and checks the database directly, without going through
//! the HTTP API.
//!
//! # Usage
//!
//! ```bash
//! # List all items
//! cargo run --bin admin -- items list
//!
//! # Add an item (prompts for missing values)
//! cargo run --bin admin -- items add --name "Potion" --price 9.50
//!
//! # Remove an item
//! cargo run --bin admin -- items remove 3f0c4e0a-8a57-4c4e-9d43-5f8f7a1b2c3d
//!
//! # Check database connection / apply migrations
//! cargo run --bin admin -- db check
//! cargo run --bin admin -- db migrate
//! ```
//!
//! # Environment Variables
//!
//! - `DATABASE_URL` or `DB_*` components (required, must be a PostgreSQL URL)

use catalog::api::dto::items::CreateItemDto;
use catalog::application::services::ItemService;
use catalog::config;
use catalog::infrastructure::persistence::PgItemsRepository;
use catalog::server::connect_pool;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::*;
use dialoguer::{Confirm, Input};
use rust_decimal::Decimal;
use sqlx::PgPool;
use std::sync::Arc;
use uuid::Uuid;
use validator::Validate;

/// CLI tool for managing the catalog.
#[derive(Parser)]
#[command(name = "admin")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Manage items
    Items {
        #[command(subcommand)]
        action: ItemAction,
    },

    /// Database operations
    Db {
        #[command(subcommand)]
        action: DbAction,
    },
}

#[derive(Subcommand)]
enum ItemAction {
    /// List all items
    List,

    /// Add a new item
    Add {
        /// Item name
        #[arg(short, long)]
        name: Option<String>,

        /// Item price (1-1000)
        #[arg(short, long)]
        price: Option<Decimal>,

        /// Skip confirmation prompt
        #[arg(short = 'y', long)]
        yes: bool,
    },

    /// Remove an item by id
    Remove {
        id: Uuid,

        /// Skip confirmation prompt
        #[arg(short = 'y', long)]
        yes: bool,
    },
}

#[derive(Subcommand)]
enum DbAction {
    /// Check database connection
    Check,

    /// Apply pending migrations
    Migrate,
}

type PgItemService = ItemService<PgItemsRepository>;

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let config = config::load_from_env()?;
    let pool = connect_pool(&config).await?;

    match cli.command {
        Commands::Items { action } => {
            let service = ItemService::new(Arc::new(PgItemsRepository::new(Arc::new(pool))));
            handle_item_action(action, &service).await?
        }
        Commands::Db { action } => handle_db_action(action, &pool).await?,
    }

    Ok(())
}

async fn handle_item_action(action: ItemAction, service: &PgItemService) -> Result<()> {
    match action {
        ItemAction::List => list_items(service).await,
        ItemAction::Add { name, price, yes } => add_item(service, name, price, yes).await,
        ItemAction::Remove { id, yes } => remove_item(service, id, yes).await,
    }
}

/// Prints all items as a table.
///
/// ```text
/// 📋 Items
///
///   ID                                    Name                      Price      Created
///   ──────────────────────────────────────────────────────────────────────────────────────────
///   3f0c4e0a-8a57-4c4e-9d43-5f8f7a1b2c3d  Potion                    9.50       2026-01-15 10:30
/// ```
async fn list_items(service: &PgItemService) -> Result<()> {
    println!("{}", "📋 Items".bright_blue().bold());
    println!();

    let items = service
        .get_items()
        .await
        .map_err(|e| anyhow::anyhow!("Failed to list items: {}", e))?;

    if items.is_empty() {
        println!("{}", "  No items found".yellow());
        println!();
        println!(
            "  Add one with: {} admin items add",
            "cargo run --bin".bright_cyan()
        );
        return Ok(());
    }

    println!(
        "  {:<37} {:<25} {:<10} {}",
        "ID".bright_white().bold(),
        "Name".bright_white().bold(),
        "Price".bright_white().bold(),
        "Created".bright_white().bold()
    );
    println!("  {}", "─".repeat(90).bright_black());

    for item in &items {
        println!(
            "  {:<37} {:<25} {:<10} {}",
            item.id.to_string().bright_black(),
            item.name.cyan(),
            item.price.to_string().bright_green(),
            item.created_date
                .format("%Y-%m-%d %H:%M")
                .to_string()
                .bright_black()
        );
    }

    println!();
    println!("  Total: {}", items.len().to_string().bright_white().bold());
    println!();

    Ok(())
}

/// Creates an item, prompting for name and price when not given.
async fn add_item(
    service: &PgItemService,
    name: Option<String>,
    price: Option<Decimal>,
    skip_confirm: bool,
) -> Result<()> {
    println!("{}", "➕ Add Item".bright_blue().bold());
    println!();

    let name = match name {
        Some(n) => n,
        None => Input::new().with_prompt("Name").interact_text()?,
    };

    let price = match price {
        Some(p) => p,
        None => Input::<Decimal>::new()
            .with_prompt("Price (1-1000)")
            .interact_text()?,
    };

    let dto = CreateItemDto { name, price };
    dto.validate().context("Invalid item")?;

    println!("  Name:  {}", dto.name.cyan());
    println!("  Price: {}", dto.price.to_string().bright_green());
    println!();

    if !skip_confirm {
        let confirmed = Confirm::new()
            .with_prompt("Create this item?")
            .default(true)
            .interact()?;

        if !confirmed {
            println!("{}", "❌ Cancelled".red());
            return Ok(());
        }
    }

    let item = service
        .create_item(dto)
        .await
        .map_err(|e| anyhow::anyhow!("Failed to create item: {}", e))?;

    println!();
    println!("{}", "✅ Item created".green().bold());
    println!("  ID: {}", item.id.to_string().bright_yellow());
    println!();

    Ok(())
}

/// Deletes an item after confirmation (default: No).
async fn remove_item(service: &PgItemService, id: Uuid, skip_confirm: bool) -> Result<()> {
    println!("{}", "🗑  Remove Item".bright_blue().bold());
    println!();

    let item = service
        .get_item(id)
        .await
        .map_err(|e| anyhow::anyhow!("{}: {}", e, id))?;

    println!("  Item:  {}", item.name.cyan());
    println!("  Price: {}", item.price.to_string().bright_green());
    println!();

    if !skip_confirm {
        let confirmed = Confirm::new()
            .with_prompt("Remove this item?")
            .default(false)
            .interact()?;

        if !confirmed {
            println!("{}", "❌ Cancelled".red());
            return Ok(());
        }
    }

    service
        .delete_item(id)
        .await
        .map_err(|e| anyhow::anyhow!("Failed to remove item: {}", e))?;

    println!("{}", "✅ Item removed".green().bold());
    println!();

    Ok(())
}

async fn handle_db_action(action: DbAction, pool: &PgPool) -> Result<()> {
    match action {
        DbAction::Check => {
            println!("{}", "🔍 Checking database connection...".bright_blue());

            let items: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM items")
                .fetch_one(pool)
                .await
                .context("Database reachable but items table is missing; run `db migrate`")?;

            println!("{}", "✅ Database connection OK".green().bold());
            println!("  Items: {}", items.to_string().bright_green().bold());
        }
        DbAction::Migrate => {
            println!("{}", "🛠  Applying migrations...".bright_blue());

            sqlx::migrate!("./migrations")
                .run(pool)
                .await
                .context("Failed to apply migrations")?;

            println!("{}", "✅ Migrations applied".green().bold());
        }
    }

    Ok(())
}
