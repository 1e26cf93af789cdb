//! CLI administration tool for metrics-aggregator.
//!
//! Provides commands for inspecting the aggregated catalog and performing
//! database operations without requiring HTTP API access.
//!
//! # Usage
//!
//! ```bash
//! # View aggregate counts
//! cargo run --bin admin -- stats
//!
//! # List registered projects
//! cargo run --bin admin -- project list
//!
//! # Delete a project and all of its data
//! cargo run --bin admin -- project delete old-project
//!
//! # Check database connection
//! cargo run --bin admin -- db check
//! ```
//!
//! # Environment Variables
//!
//! - `DATABASE_URL` (required): PostgreSQL connection string
//!
//! # Features
//!
//! - **Catalog Inspection**: Project listing and aggregate counts
//! - **Project Removal**: Cascade-delete a project with confirmation
//! - **Database Tools**: Connection checks and info queries
//! - **Colored Output**: Terminal-friendly formatting using `colored` crate

use metrics_aggregator::domain::repositories::ProjectRepository;
use metrics_aggregator::infrastructure::persistence::PgProjectRepository;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::*;
use dialoguer::Confirm;
use sqlx::PgPool;
use std::sync::Arc;

/// CLI tool for managing metrics-aggregator.
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
    /// Manage projects
    Project {
        #[command(subcommand)]
        action: ProjectAction,
    },

    /// Show aggregate counts
    Stats,

    /// Database operations
    Db {
        #[command(subcommand)]
        action: DbAction,
    },
}

/// Project management subcommands.
#[derive(Subcommand)]
enum ProjectAction {
    /// List all registered projects
    List,

    /// Delete a project with all of its repositories and commits
    Delete {
        /// Project name to delete
        name: String,

        /// Skip confirmation prompt
        #[arg(short = 'y', long)]
        yes: bool,
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
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let database_url = std::env::var("DATABASE_URL").context("DATABASE_URL must be set")?;

    let pool = PgPool::connect(&database_url)
        .await
        .context("Failed to connect to database")?;

    match cli.command {
        Commands::Project { action } => handle_project_action(action, &pool).await?,
        Commands::Stats => handle_stats(&pool).await?,
        Commands::Db { action } => handle_db_action(action, &pool).await?,
    }

    Ok(())
}

/// Dispatches project management commands.
async fn handle_project_action(action: ProjectAction, pool: &PgPool) -> Result<()> {
    let repo = Arc::new(PgProjectRepository::new(Arc::new(pool.clone())));

    match action {
        ProjectAction::List => {
            list_projects(repo).await?;
        }
        ProjectAction::Delete { name, yes } => {
            delete_project(repo, name, yes).await?;
        }
    }

    Ok(())
}

/// Lists all registered projects.
///
/// # Output Format
///
/// ```text
/// 📋 Projects
///
///   Name                           Created              Description
///   ───────────────────────────────────────────────────────────────
///   billing                        2024-01-15 10:30     Billing stack
/// ```
async fn list_projects(repo: Arc<PgProjectRepository>) -> Result<()> {
    println!("{}", "📋 Projects".bright_blue().bold());
    println!();

    let projects = repo
        .list()
        .await
        .map_err(|e| anyhow::anyhow!("Failed to list projects: {}", e))?;

    if projects.is_empty() {
        println!("{}", "  No projects found".yellow());
        println!();
        println!("  Collector agents register projects via POST /api/projects");
        return Ok(());
    }

    println!(
        "  {:<30} {:<20} {}",
        "Name".bright_white().bold(),
        "Created".bright_white().bold(),
        "Description".bright_white().bold()
    );
    println!("  {}", "─".repeat(75).bright_black());

    for project in &projects {
        println!(
            "  {:<30} {:<20} {}",
            project.name.cyan(),
            project
                .created_at
                .format("%Y-%m-%d %H:%M")
                .to_string()
                .bright_black(),
            project.description.as_deref().unwrap_or("-").bright_black()
        );
    }

    println!();
    println!(
        "  Total: {}",
        projects.len().to_string().bright_white().bold()
    );
    println!();

    Ok(())
}

/// Deletes a project by name with confirmation prompt.
///
/// All repositories, commits, and author links of the project are removed
/// by cascade.
async fn delete_project(repo: Arc<PgProjectRepository>, name: String, skip_confirm: bool) -> Result<()> {
    println!("{}", "🗑  Delete Project".bright_blue().bold());
    println!();

    let project = repo
        .find_by_name(&name)
        .await
        .map_err(|e| anyhow::anyhow!("Database error: {}", e))?
        .context("Project not found")?;

    println!("  Project: {}", project.name.cyan());
    println!("  ID:      {}", project.id.to_string().bright_black());
    println!();
    println!(
        "{}",
        "⚠️  This removes the project with ALL repositories and commits."
            .red()
            .bold()
    );
    println!();

    if !skip_confirm {
        let confirmed = Confirm::new()
            .with_prompt("Delete this project?")
            .default(false)
            .interact()?;

        if !confirmed {
            println!("{}", "❌ Cancelled".red());
            return Ok(());
        }
    }

    repo.delete_by_name(&name)
        .await
        .map_err(|e| anyhow::anyhow!("Failed to delete project: {}", e))?;

    println!();
    println!("{}", "✅ Project deleted".green().bold());
    println!();

    Ok(())
}

/// Displays aggregate counts.
///
/// Shows:
/// - Number of projects and repositories
/// - Number of developers and commits
async fn handle_stats(pool: &PgPool) -> Result<()> {
    println!("{}", "📊 Statistics".bright_blue().bold());
    println!();

    let projects_count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM projects")
        .fetch_one(pool)
        .await?;

    let repos_count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM repositories")
        .fetch_one(pool)
        .await?;

    let developers_count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM developers")
        .fetch_one(pool)
        .await?;

    let commits_count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM commits")
        .fetch_one(pool)
        .await?;

    println!(
        "  Projects:     {}",
        projects_count.to_string().bright_green().bold()
    );
    println!(
        "  Repositories: {}",
        repos_count.to_string().bright_green().bold()
    );
    println!(
        "  Developers:   {}",
        developers_count.to_string().bright_green().bold()
    );
    println!(
        "  Commits:      {}",
        commits_count.to_string().bright_green().bold()
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

            println!("  PostgreSQL: {}", version.bright_white());
            println!();
        }
    }

    Ok(())
}
