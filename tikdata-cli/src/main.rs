use anyhow::{Context, Result};
use clap::Parser;
use std::path::PathBuf;

use tikdata_cli::{init_tracing, numbered};
use tikdata_db::config::Settings;
use tikdata_db::Provisioner;
use tikdata_types::{JournalMode, ProvisionReport};

/// Number of table names listed before the rest are summarised
const TABLE_LISTING_LIMIT: usize = 10;

/// TikTok export database creator
///
/// Builds an empty SQLite database with the full export schema (tables,
/// indexes, validation triggers and reporting views), verifies it and hands
/// the file over for download.
#[derive(Parser, Debug)]
#[command(name = "tikdata-provision")]
#[command(about = "Create an empty TikTok export database", long_about = None)]
struct Args {
    /// Path of the database file to create (replaced if it exists)
    #[arg(short, long)]
    database: Option<PathBuf>,

    /// Directory the finished file is copied into
    #[arg(short, long)]
    export_dir: Option<PathBuf>,

    /// SQLite journal mode written into the file (WAL, DELETE, ...)
    #[arg(short, long, value_parser = parse_journal_mode)]
    journal_mode: Option<JournalMode>,

    /// Print the report as JSON instead of the text summary
    #[arg(long)]
    json: bool,
}

fn parse_journal_mode(value: &str) -> Result<JournalMode, String> {
    JournalMode::parse(value).ok_or_else(|| format!("unsupported journal mode '{}'", value))
}

fn display_report(report: &ProvisionReport) {
    println!();
    println!("Database created successfully!");
    println!("Number of tables created: {}", report.inventory.tables.len());

    println!();
    println!("First {} tables created:", TABLE_LISTING_LIMIT);
    for line in numbered(report.inventory.tables.iter().take(TABLE_LISTING_LIMIT)) {
        println!("{}", line);
    }
    if report.inventory.tables.len() > TABLE_LISTING_LIMIT {
        println!(
            "  ... and {} more tables",
            report.inventory.tables.len() - TABLE_LISTING_LIMIT
        );
    }

    println!();
    println!("Views created ({} total):", report.inventory.views.len());
    for line in numbered(&report.inventory.views) {
        println!("{}", line);
    }

    println!();
    println!("Triggers created ({} total):", report.inventory.triggers.len());
    for line in numbered(&report.inventory.triggers) {
        println!("{}", line);
    }

    println!();
    println!("Indexes created: {} total", report.inventory.index_count);

    println!();
    println!(
        "Database file size: {} bytes ({:.2} KB)",
        report.file_size_bytes,
        report.file_size_kb()
    );

    println!();
    println!("Testing database functionality...");
    match &report.smoke_test.error {
        None => {
            println!("  Test user inserted. Total users: {}", report.smoke_test.user_count);
            println!("  vw_active_users returns: {} rows", report.smoke_test.active_users);
        }
        Some(e) => println!("  Test error (but database was created): {}", e),
    }

    if !report.execution.is_clean() {
        println!();
        println!(
            "Statements failed: {} of {}",
            report.execution.failures.len(),
            report.execution.attempted()
        );
        for failure in &report.execution.failures {
            println!("  {}. {} ({})", failure.index, failure.preview, failure.message);
        }
    }

    if !report.missing.is_empty() {
        println!();
        println!("Missing schema objects: {}", report.missing.len());
        for object in &report.missing {
            println!("  - {}", object);
        }
    }

    println!();
    match &report.exported_to {
        Some(path) => println!("Database exported to {}", path),
        None => println!("Database ready for download at {}", report.database),
    }
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_tracing(args.json);

    let settings = Settings::new().context("Failed to load settings")?;
    let mut options = settings
        .provision_options()
        .context("Invalid settings")?;
    if let Some(database) = args.database {
        options.database = database;
    }
    if let Some(dir) = args.export_dir {
        options.export_dir = Some(dir);
    }
    if let Some(mode) = args.journal_mode {
        options.journal_mode = mode;
    }
    tracing::debug!("Provision options: {:?}", options);

    if !args.json {
        println!("{}", "=".repeat(60));
        println!("TikTok Export Database Creator");
        println!("{}", "=".repeat(60));
    }

    let report = Provisioner::new(options)
        .run()
        .context("Failed to create database")?;

    if args.json {
        println!(
            "{}",
            serde_json::to_string_pretty(&report).context("Failed to serialize report")?
        );
    } else {
        display_report(&report);
        println!();
        println!("{}", "=".repeat(60));
        if report.execution.is_clean() && report.missing.is_empty() {
            println!("SUCCESS: Database created");
        } else {
            println!("Database created with errors - see the log above");
        }
        println!("{}", "=".repeat(60));
    }

    Ok(())
}
