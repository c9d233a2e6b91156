//! CLI administration tool for redirect-rules.
//!
//! Manages the credential store and shows statistics without going through
//! the HTTP API. There is no signup endpoint; users are created here.
//! Pending migrations are applied before `user` and `stats` commands, so a
//! fresh database can be seeded before the server has ever started.
//!
//! # Usage
//!
//! ```bash
//! # Create a user (prompts for anything not given)
//! cargo run --bin admin -- user create
//!
//! # List users
//! cargo run --bin admin -- user list
//!
//! # Change a password, by username or id
//! cargo run --bin admin -- user set-password alice
//!
//! # View statistics
//! cargo run --bin admin -- stats
//!
//! # Check database connection
//! cargo run --bin admin -- db check
//! ```
//!
//! # Environment Variables
//!
//! - `DATABASE_URL`, or `DB_HOST`/`DB_PORT`/`DB_USER`/`DB_PASSWORD`/`DB_NAME`

use redirect_rules::application::services::UserService;
use redirect_rules::config::Config;
use redirect_rules::infrastructure::persistence::PgUserRepository;
use redirect_rules::server;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::*;
use dialoguer::{Confirm, Input, Password};
use sqlx::PgPool;
use std::sync::Arc;

/// CLI tool for managing redirect-rules.
#[derive(Parser)]
#[command(name = "admin")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

/// Top-level command groups.
#[derive(Subcommand)]
enum Commands {
    /// Manage users
    User {
        #[command(subcommand)]
        action: UserAction,
    },

    /// Show statistics
    Stats,

    /// Database operations
    Db {
        #[command(subcommand)]
        action: DbAction,
    },
}

/// User management subcommands.
#[derive(Subcommand)]
enum UserAction {
    /// Create a new user
    Create {
        #[arg(short, long)]
        username: Option<String>,

        /// Password (prompted with hidden input if omitted)
        #[arg(short, long)]
        password: Option<String>,

        /// Skip confirmation prompt
        #[arg(short = 'y', long)]
        yes: bool,
    },

    /// List all users
    List,

    /// Set a user's password
    SetPassword {
        /// Username or numeric ID
        username_or_id: String,

        #[arg(short, long)]
        password: Option<String>,
    },
}

/// Database operation subcommands.
#[derive(Subcommand)]
enum DbAction {
    /// Check database connection
    Check,

    /// Show database info
    Info,
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let database_url = Config::load_database_url().context("Database is not configured")?;

    let pool = PgPool::connect(&database_url)
        .await
        .context("Failed to connect to database")?;

    // `db` commands only inspect; everything else needs the schema.
    if !matches!(cli.command, Commands::Db { .. }) {
        server::migrate(&pool).await?;
    }

    match cli.command {
        Commands::User { action } => handle_user_action(action, &pool).await?,
        Commands::Stats => handle_stats(&pool).await?,
        Commands::Db { action } => handle_db_action(action, &pool).await?,
    }

    Ok(())
}

/// Dispatches user management commands.
async fn handle_user_action(action: UserAction, pool: &PgPool) -> Result<()> {
    let repo = Arc::new(PgUserRepository::new(Arc::new(pool.clone())));
    let service = UserService::new(repo);

    match action {
        UserAction::Create {
            username,
            password,
            yes,
        } => create_user(&service, username, password, yes).await?,
        UserAction::List => list_users(&service).await?,
        UserAction::SetPassword {
            username_or_id,
            password,
        } => set_password(&service, username_or_id, password).await?,
    }

    Ok(())
}

/// Creates a user with interactive prompts.
///
/// Only the bcrypt hash is stored.
async fn create_user(
    service: &UserService<PgUserRepository>,
    username: Option<String>,
    password: Option<String>,
    skip_confirm: bool,
) -> Result<()> {
    println!("{}", "👤 Create User".bright_blue().bold());
    println!();

    let username = match username {
        Some(u) => u,
        None => Input::new().with_prompt("Username").interact_text()?,
    };

    let password = match password {
        Some(p) => {
            println!("{}", "⚠️  Using password from command line".yellow());
            p
        }
        None => prompt_password()?,
    };

    println!();
    println!("  Username: {}", username.cyan());
    println!();

    if !skip_confirm {
        let confirmed = Confirm::new()
            .with_prompt("Create this user?")
            .default(true)
            .interact()?;

        if !confirmed {
            println!("{}", "❌ Cancelled".red());
            return Ok(());
        }
    }

    let user = service
        .create_user(&username, &password)
        .await
        .map_err(|e| anyhow::anyhow!("Failed to create user: {}", e))?;

    println!();
    println!(
        "{} (id {})",
        "✅ User created successfully!".green().bold(),
        user.id.to_string().bright_white()
    );
    println!();
    println!("{}", "Retrieve a token with:".bright_white());
    println!(
        "  curl -X POST -H 'Content-Type: application/json' \\\n    -d '{{\"username\": \"{}\", \"password\": \"...\"}}' \\\n    http://localhost:3000/retrieve-token/",
        user.username.bright_yellow()
    );
    println!();

    Ok(())
}

/// Lists all users.
///
/// # Output Format
///
/// ```text
/// 📋 Users
///
///   ID  Username                       Created
///   ─────────────────────────────────────────────────────────
///   1   alice                          2025-01-15 10:30
/// ```
async fn list_users(service: &UserService<PgUserRepository>) -> Result<()> {
    println!("{}", "📋 Users".bright_blue().bold());
    println!();

    let users = service
        .list_users()
        .await
        .map_err(|e| anyhow::anyhow!("Failed to list users: {}", e))?;

    if users.is_empty() {
        println!("{}", "  No users found".yellow());
        println!();
        println!(
            "  Create one with: {} admin user create",
            "cargo run --bin".bright_cyan()
        );
        return Ok(());
    }

    println!(
        "  {:<3} {:<30} {:<20}",
        "ID".bright_white().bold(),
        "Username".bright_white().bold(),
        "Created".bright_white().bold()
    );
    println!("  {}", "─".repeat(57).bright_black());

    for user in &users {
        println!(
            "  {:<3} {:<30} {}",
            user.id.to_string().bright_black(),
            user.username.cyan(),
            user.created_at
                .format("%Y-%m-%d %H:%M")
                .to_string()
                .bright_black()
        );
    }

    println!();
    println!("  Total: {}", users.len().to_string().bright_white().bold());
    println!();

    Ok(())
}

/// Replaces a user's password after looking them up by username or id.
async fn set_password(
    service: &UserService<PgUserRepository>,
    username_or_id: String,
    password: Option<String>,
) -> Result<()> {
    println!("{}", "🔒 Set Password".bright_blue().bold());
    println!();

    let user = service
        .find(&username_or_id)
        .await
        .map_err(|e| anyhow::anyhow!("Database error: {}", e))?
        .context("User not found")?;

    println!("  User: {}", user.username.cyan());
    println!("  ID:   {}", user.id.to_string().bright_black());
    println!();

    let password = match password {
        Some(p) => p,
        None => prompt_password()?,
    };

    service
        .set_password(user.id, &password)
        .await
        .map_err(|e| anyhow::anyhow!("Failed to set password: {}", e))?;

    println!("{}", "✅ Password updated".green().bold());
    println!();

    Ok(())
}

fn prompt_password() -> Result<String> {
    Ok(Password::new()
        .with_prompt("Password")
        .with_confirmation("Confirm password", "Passwords do not match")
        .interact()?)
}

/// Displays system statistics.
///
/// Shows:
/// - Number of users
/// - Number of redirect rules
/// - Number of private rules
async fn handle_stats(pool: &PgPool) -> Result<()> {
    println!("{}", "📊 Statistics".bright_blue().bold());
    println!();

    let users_count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM users")
        .fetch_one(pool)
        .await?;

    let rules_count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM redirect_rules")
        .fetch_one(pool)
        .await?;

    let private_count: i64 =
        sqlx::query_scalar("SELECT COUNT(*) FROM redirect_rules WHERE is_private")
            .fetch_one(pool)
            .await?;

    println!(
        "  Users:          {}",
        users_count.to_string().bright_green().bold()
    );
    println!(
        "  Redirect rules: {}",
        rules_count.to_string().bright_green().bold()
    );
    println!(
        "  Private rules:  {}",
        private_count.to_string().bright_green().bold()
    );
    println!();

    Ok(())
}

/// Handles database diagnostic commands.
async fn handle_db_action(action: DbAction, pool: &PgPool) -> Result<()> {
    match action {
        DbAction::Check => {
            println!("{}", "🔍 Checking database connection...".bright_blue());

            sqlx::query("SELECT 1").fetch_one(pool).await?;

            println!("{}", "✅ Database connection OK".green().bold());
        }
        DbAction::Info => {
            println!("{}", "ℹ️  Database Information".bright_blue().bold());
            println!();

            let version: String = sqlx::query_scalar("SELECT version()")
                .fetch_one(pool)
                .await?;

            let applied: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM _sqlx_migrations")
                .fetch_one(pool)
                .await
                .unwrap_or(0);

            println!("  PostgreSQL: {}", version.bright_white());
            println!("  Migrations: {}", applied.to_string().bright_white());
            println!();
        }
    }

    Ok(())
}
