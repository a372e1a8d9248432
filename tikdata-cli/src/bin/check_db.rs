// Quick diagnostic of the validation logs in an export database
use anyhow::{Context, Result};
use clap::Parser;

use tikdata_db::inspect::{
    count_records, data_validation_report, date_validation_report, user_data_quality,
};
use tikdata_db::Database;

#[derive(Parser, Debug)]
#[command(name = "check-db")]
#[command(about = "Summarise validation issues recorded in an export database", long_about = None)]
struct Args {
    /// Path to the SQLite database file
    #[arg(short, long, default_value = "./tikData.db", env = "TIKDATA_DATABASE_PATH")]
    database: String,

    /// Rows shown per report
    #[arg(short, long, default_value_t = 10)]
    limit: usize,
}

fn sample(values: Option<&str>) -> String {
    match values {
        Some(v) if v.chars().count() > 60 => format!("{}...", v.chars().take(60).collect::<String>()),
        Some(v) => v.to_string(),
        None => String::new(),
    }
}

fn main() -> Result<()> {
    let args = Args::parse();

    if !std::path::Path::new(&args.database).exists() {
        anyhow::bail!("Database file not found: {}", args.database);
    }
    let db = Database::open(&args.database).context("Failed to open database")?;
    let conn = db.connection();

    println!("=== Validation Diagnostic ===\n");

    let users = count_records(conn, "users")?;
    let date_issues = count_records(conn, "date_validation_log")?;
    let data_issues = count_records(conn, "data_validation_log")?;
    println!("Users: {}", users);
    println!("Date validation issues: {}", date_issues);
    println!("Data validation issues: {}", data_issues);

    println!("\n=== Data validation report ===");
    let data_rows = data_validation_report(conn)?;
    if data_rows.is_empty() {
        println!("  No data validation issues");
    }
    for (i, row) in data_rows.iter().take(args.limit).enumerate() {
        println!(
            "  {}. {}.{} [{}] user {} ({}): {} issue(s) {}",
            i + 1,
            row.table_name,
            row.column_name,
            row.issue_type.as_deref().unwrap_or("-"),
            row.user_id,
            row.username,
            row.count,
            sample(row.sample_values.as_deref())
        );
    }

    println!("\n=== Date validation report ===");
    let date_rows = date_validation_report(conn)?;
    if date_rows.is_empty() {
        println!("  No date validation issues");
    }
    for (i, row) in date_rows.iter().take(args.limit).enumerate() {
        println!(
            "  {}. {}.{} user {} ({}): {} invalid value(s) {}",
            i + 1,
            row.table_name,
            row.column_name,
            row.user_id,
            row.username,
            row.count,
            sample(row.sample_values.as_deref())
        );
    }

    println!("\n=== Data quality per user ===");
    for (i, row) in user_data_quality(conn)?.iter().take(args.limit).enumerate() {
        println!(
            "  {}. {} (user {}): {} issue(s) - {}",
            i + 1,
            row.username,
            row.user_id,
            row.total_issues,
            row.data_quality.as_str()
        );
    }

    Ok(())
}
