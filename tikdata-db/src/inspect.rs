//! Read-only queries over an existing export database, used by the
//! inspection tools.

use anyhow::{Context, Result};
use rusqlite::Connection;

use tikdata_types::{ColumnInfo, DataQuality, UserDataQuality, ValidationReportRow};

pub fn check_table_exists(conn: &Connection, table_name: &str) -> Result<bool> {
    let count: i32 = conn.query_row(
        "SELECT COUNT(*) FROM sqlite_master WHERE type='table' AND name=?",
        [table_name],
        |row| row.get(0),
    )?;
    Ok(count > 0)
}

pub fn check_index_exists(conn: &Connection, index_name: &str) -> Result<bool> {
    let count: i32 = conn.query_row(
        "SELECT COUNT(*) FROM sqlite_master WHERE type='index' AND name=?",
        [index_name],
        |row| row.get(0),
    )?;
    Ok(count > 0)
}

/// Quote an identifier for interpolation into PRAGMA or FROM clauses
fn quote_identifier(name: &str) -> String {
    format!("\"{}\"", name.replace('"', "\"\""))
}

pub fn get_table_columns(conn: &Connection, table_name: &str) -> Result<Vec<ColumnInfo>> {
    let mut stmt = conn.prepare(&format!("PRAGMA table_info({})", quote_identifier(table_name)))?;

    let columns = stmt
        .query_map([], |row| {
            Ok(ColumnInfo {
                name: row.get(1)?,
                type_name: row.get(2)?,
                not_null: row.get::<_, i32>(3)? != 0,
                pk: row.get::<_, i32>(5)? != 0,
            })
        })?
        .collect::<Result<Vec<_>, _>>()
        .with_context(|| format!("Failed to read columns of {}", table_name))?;

    Ok(columns)
}

pub fn count_records(conn: &Connection, table_name: &str) -> Result<i64> {
    let count: i64 = conn
        .query_row(
            &format!("SELECT COUNT(*) FROM {}", quote_identifier(table_name)),
            [],
            |row| row.get(0),
        )
        .with_context(|| format!("Failed to count rows in {}", table_name))?;
    Ok(count)
}

/// Rows of `vw_user_data_quality`, worst first
pub fn user_data_quality(conn: &Connection) -> Result<Vec<UserDataQuality>> {
    let mut stmt = conn.prepare(
        "SELECT user_id, username, date_validation_issues, data_validation_issues,
                total_issues, data_quality
         FROM vw_user_data_quality",
    )?;

    let rows = stmt
        .query_map([], |row| {
            let total_issues: i64 = row.get(4)?;
            let grade: String = row.get(5)?;
            Ok(UserDataQuality {
                user_id: row.get(0)?,
                username: row.get(1)?,
                date_validation_issues: row.get(2)?,
                data_validation_issues: row.get(3)?,
                total_issues,
                data_quality: DataQuality::parse(&grade)
                    .unwrap_or_else(|| DataQuality::from_issue_count(total_issues)),
            })
        })?
        .collect::<Result<Vec<_>, _>>()
        .context("Failed to read vw_user_data_quality")?;

    Ok(rows)
}

/// Rows of `vw_data_validation_report`
pub fn data_validation_report(conn: &Connection) -> Result<Vec<ValidationReportRow>> {
    let mut stmt = conn.prepare(
        "SELECT table_name, user_id, username, column_name, issue_type, issue_count, sample_values
         FROM vw_data_validation_report",
    )?;

    let rows = stmt
        .query_map([], |row| {
            Ok(ValidationReportRow {
                table_name: row.get(0)?,
                user_id: row.get(1)?,
                username: row.get(2)?,
                column_name: row.get(3)?,
                issue_type: row.get(4)?,
                count: row.get(5)?,
                sample_values: row.get(6)?,
            })
        })?
        .collect::<Result<Vec<_>, _>>()
        .context("Failed to read vw_data_validation_report")?;

    Ok(rows)
}

/// Rows of `vw_date_validation_report`
pub fn date_validation_report(conn: &Connection) -> Result<Vec<ValidationReportRow>> {
    let mut stmt = conn.prepare(
        "SELECT table_name, user_id, username, column_name, invalid_count, sample_values
         FROM vw_date_validation_report",
    )?;

    let rows = stmt
        .query_map([], |row| {
            Ok(ValidationReportRow {
                table_name: row.get(0)?,
                user_id: row.get(1)?,
                username: row.get(2)?,
                column_name: row.get(3)?,
                issue_type: None,
                count: row.get(4)?,
                sample_values: row.get(5)?,
            })
        })?
        .collect::<Result<Vec<_>, _>>()
        .context("Failed to read vw_date_validation_report")?;

    Ok(rows)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Database;
    use tikdata_types::JournalMode;

    fn seeded() -> Database {
        let db = Database::in_memory().expect("Failed to create database");
        assert!(db.initialize(JournalMode::Memory).is_clean());
        db.connection()
            .execute_batch(
                "INSERT INTO users (user_id, username, email) VALUES (1, 'ab', 'not-an-email');
                 INSERT INTO users (user_id, username) VALUES (2, 'clean_user');
                 INSERT INTO posts (user_id, post_date) VALUES (2, 'yesterday');",
            )
            .expect("Failed to seed rows");
        db
    }

    #[test]
    fn test_table_and_index_checks() {
        let db = seeded();
        let conn = db.connection();

        assert!(check_table_exists(conn, "users").expect("query"));
        assert!(!check_table_exists(conn, "hashtags").expect("query"));
        assert!(check_index_exists(conn, "idx_users_username").expect("query"));
        assert!(!check_index_exists(conn, "idx_missing").expect("query"));
    }

    #[test]
    fn test_columns_and_counts() {
        let db = seeded();
        let conn = db.connection();

        let columns = get_table_columns(conn, "data_validation_log").expect("columns");
        let log_id = columns.iter().find(|c| c.name == "log_id").expect("log_id column");
        assert!(log_id.pk);
        assert!(columns.iter().any(|c| c.name == "issue_type" && !c.not_null));

        assert_eq!(count_records(conn, "users").expect("count"), 2);
        assert_eq!(count_records(conn, "posts").expect("count"), 1);
    }

    #[test]
    fn test_quality_grades_follow_issue_counts() {
        let db = seeded();
        let rows = user_data_quality(db.connection()).expect("quality rows");

        let first = rows.iter().find(|r| r.user_id == 1).expect("user 1");
        assert_eq!(first.data_validation_issues, 2);
        assert_eq!(first.data_quality, DataQuality::Good);

        let second = rows.iter().find(|r| r.user_id == 2).expect("user 2");
        assert_eq!(second.date_validation_issues, 1);
        assert_eq!(second.total_issues, 1);
    }

    #[test]
    fn test_validation_reports() {
        let db = seeded();
        let data = data_validation_report(db.connection()).expect("data report");
        let issue_types: Vec<_> = data.iter().filter_map(|r| r.issue_type.clone()).collect();
        assert!(issue_types.contains(&"length_validation".to_string()));
        assert!(issue_types.contains(&"format_validation".to_string()));

        let dates = date_validation_report(db.connection()).expect("date report");
        assert_eq!(dates.len(), 1);
        assert_eq!(dates[0].table_name, "posts");
        assert_eq!(dates[0].sample_values.as_deref(), Some("yesterday"));
    }
}
