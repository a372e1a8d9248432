//! Schema script for the export database: pragmas, tables, indexes,
//! validation triggers and reporting views.

pub mod catalog;
pub mod tables;
pub mod triggers;
pub mod views;

use tikdata_types::JournalMode;

pub use tables::{INDEXES, TABLES};
pub use triggers::{date_triggers_sql, DateColumn, DATE_COLUMNS, USER_TRIGGERS};
pub use views::VIEWS;

const HEADER: &str = "-- TikTok export database schema\n-- Multi-user activity history with validation triggers and reporting views\n";

/// Connection pragmas that open the schema script
pub fn pragmas(journal_mode: JournalMode) -> String {
    format!(
        "PRAGMA foreign_keys = ON;
PRAGMA journal_mode = {};
PRAGMA synchronous = NORMAL;
PRAGMA cache_size = -2000;
PRAGMA temp_store = MEMORY;
",
        journal_mode.as_str()
    )
}

/// The complete script, in execution order
pub fn schema_sql(journal_mode: JournalMode) -> String {
    [
        HEADER.to_string(),
        pragmas(journal_mode),
        TABLES.to_string(),
        INDEXES.to_string(),
        date_triggers_sql(),
        USER_TRIGGERS.to_string(),
        VIEWS.to_string(),
    ]
    .join("\n")
}
