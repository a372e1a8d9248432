use anyhow::{Context, Result};
use clap::Parser;
use rusqlite::Connection;

use tikdata_db::inspect::{check_index_exists, check_table_exists, count_records, get_table_columns};
use tikdata_db::schema::catalog::{index_names, TABLE_NAMES, VIEW_NAMES};

/// Database Schema Inspector
///
/// Reports which export tables, views and indexes a database contains and
/// how many rows each table holds.
#[derive(Parser, Debug)]
#[command(name = "inspect-db")]
#[command(about = "Inspect a TikTok export database schema", long_about = None)]
struct Args {
    /// Path to the SQLite database file
    #[arg(short, long, default_value = "./tikData.db", env = "TIKDATA_DATABASE_PATH")]
    database: String,
}

fn main() -> Result<()> {
    let args = Args::parse();

    println!("TikTok Export Database Inspector");
    println!("================================");
    println!();
    println!("Database: {}", args.database);
    println!();

    if !std::path::Path::new(&args.database).exists() {
        println!("❌ Database file not found: {}", args.database);
        return Ok(());
    }

    let conn = Connection::open(&args.database).context("Failed to open database connection")?;

    println!("✓ Database file exists and is accessible");
    println!();

    println!("Checking for required tables:");
    println!("-----------------------------");

    let mut missing_tables = Vec::new();
    for table_name in TABLE_NAMES {
        if check_table_exists(&conn, table_name)? {
            println!("  ✓ {}", table_name);
        } else {
            println!("  ❌ {} (MISSING)", table_name);
            missing_tables.push(table_name);
        }
    }

    println!();
    println!("Validation Log Details:");
    println!("-----------------------");

    for table_name in ["date_validation_log", "data_validation_log"] {
        if !check_table_exists(&conn, table_name)? {
            continue;
        }
        println!();
        println!("Table: {}", table_name);
        println!("Columns:");
        for col in get_table_columns(&conn, table_name)? {
            let pk_marker = if col.pk { " (PRIMARY KEY)" } else { "" };
            let null_marker = if col.not_null { " NOT NULL" } else { "" };
            println!("  - {} : {}{}{}", col.name, col.type_name, null_marker, pk_marker);
        }
    }

    println!();
    println!("Checking for views:");
    println!("-------------------");

    for view_name in VIEW_NAMES {
        let exists: bool = conn.query_row(
            "SELECT COUNT(*) FROM sqlite_master WHERE type='view' AND name=?",
            [view_name],
            |row| row.get::<_, i32>(0).map(|count| count > 0),
        )?;
        if exists {
            println!("  ✓ {}", view_name);
        } else {
            println!("  ❌ {} (MISSING)", view_name);
        }
    }

    println!();
    println!("Checking for indexes:");
    println!("---------------------");

    let expected_indexes = index_names();
    let mut missing_indexes = 0;
    for index_name in &expected_indexes {
        if !check_index_exists(&conn, index_name)? {
            println!("  ❌ {} (MISSING)", index_name);
            missing_indexes += 1;
        }
    }
    println!(
        "  ✓ {} of {} indexes present",
        expected_indexes.len() - missing_indexes,
        expected_indexes.len()
    );

    println!();
    println!("Record Counts:");
    println!("--------------");

    for table_name in TABLE_NAMES {
        if check_table_exists(&conn, table_name)? {
            let count = count_records(&conn, table_name)?;
            println!("  {} : {} records", table_name, count);
        }
    }

    println!();
    println!("Summary:");
    println!("--------");

    if missing_tables.is_empty() {
        println!("✓ All required tables exist");
        println!("✓ Database schema is ready for import");
    } else {
        println!("❌ {} required tables are missing", missing_tables.len());
        println!("⚠️  Database schema needs to be provisioned");
        println!();
        println!("Run tikdata-provision to create a fresh database.");
    }

    Ok(())
}
