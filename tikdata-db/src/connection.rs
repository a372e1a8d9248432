use rusqlite::{Connection, Result};
use std::path::Path;

use tikdata_types::{ExecutionSummary, JournalMode, SchemaInventory, SmokeTestResult, StatementFailure};

use crate::schema::schema_sql;
use crate::statements::{preview, split_statements};

/// SQLite in-memory database identifier
const MEMORY_DB_PATH: &str = ":memory:";

/// Statements past this position are only previewed when they define a
/// trigger or view
const VERBOSE_STATEMENT_LIMIT: usize = 10;

/// Whether `path` names SQLite's in-memory database, ignoring case and
/// surrounding whitespace
pub fn is_memory_path(path: &Path) -> bool {
    path.to_string_lossy().trim().eq_ignore_ascii_case(MEMORY_DB_PATH)
}

/// Single-connection database wrapper
pub struct Database {
    conn: Connection,
}

impl Database {
    /// Open (or create) the database at `path` with foreign keys enforced
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let conn = Self::open_connection(path.as_ref())?;
        conn.pragma_update(None, "foreign_keys", "ON")?;
        Ok(Self { conn })
    }

    /// Open a file or memory connection based on path
    ///
    /// # Arguments
    /// * `path` - Database file path or ":memory:" for in-memory database
    fn open_connection(path: &Path) -> Result<Connection> {
        if is_memory_path(path) {
            Connection::open_in_memory()
        } else {
            Connection::open(path)
        }
    }

    /// Create an in-memory database (useful for testing)
    pub fn in_memory() -> Result<Self> {
        Self::open(MEMORY_DB_PATH)
    }

    pub fn connection(&self) -> &Connection {
        &self.conn
    }

    /// Run the full schema script
    pub fn initialize(&self, journal_mode: JournalMode) -> ExecutionSummary {
        self.execute_script(&schema_sql(journal_mode))
    }

    /// Execute `sql` one statement at a time.
    ///
    /// A failing statement is logged and recorded, then execution moves on
    /// to the next one. Nothing is rolled back.
    pub fn execute_script(&self, sql: &str) -> ExecutionSummary {
        let mut summary = ExecutionSummary::default();

        for (position, statement) in split_statements(sql).iter().enumerate() {
            let index = position + 1;
            if index <= VERBOSE_STATEMENT_LIMIT
                || statement.contains("TRIGGER")
                || statement.contains("VIEW")
            {
                tracing::info!("Executing: {}", preview(statement, 50));
            }

            // execute_batch tolerates statements that return rows, like PRAGMA journal_mode
            match self.conn.execute_batch(statement) {
                Ok(()) => summary.executed += 1,
                Err(e) => {
                    let failure = StatementFailure {
                        index,
                        message: e.to_string(),
                        preview: preview(statement, 100),
                    };
                    tracing::error!("Error in command {}: {}", index, failure.message);
                    tracing::error!("Command: {}", failure.preview);
                    summary.failures.push(failure);
                }
            }
        }

        summary
    }

    /// Names of every schema object, grouped by kind and sorted
    pub fn inventory(&self) -> Result<SchemaInventory> {
        let index_count: i64 = self.conn.query_row(
            "SELECT COUNT(*) FROM sqlite_master WHERE type='index' AND name NOT LIKE 'sqlite_%'",
            [],
            |row| row.get(0),
        )?;

        Ok(SchemaInventory {
            tables: self.object_names("table")?,
            views: self.object_names("view")?,
            triggers: self.object_names("trigger")?,
            index_count: index_count as usize,
        })
    }

    fn object_names(&self, kind: &str) -> Result<Vec<String>> {
        let mut stmt = self
            .conn
            .prepare("SELECT name FROM sqlite_master WHERE type = ?1 ORDER BY name")?;
        let names = stmt
            .query_map([kind], |row| row.get(0))?
            .collect::<Result<Vec<String>, _>>()?;
        Ok(names)
    }

    /// Whether an object of `kind` named `name` exists
    pub fn has_object(&self, kind: &str, name: &str) -> Result<bool> {
        let count: i64 = self.conn.query_row(
            "SELECT COUNT(*) FROM sqlite_master WHERE type = ?1 AND name = ?2",
            [kind, name],
            |row| row.get(0),
        )?;
        Ok(count > 0)
    }

    /// Move WAL content into the main file so its size reflects the schema
    pub fn checkpoint(&self) -> Result<()> {
        self.conn
            .query_row("PRAGMA wal_checkpoint(TRUNCATE)", [], |_| Ok(()))
    }

    /// Insert a throwaway user and read it back through a view.
    ///
    /// Runs in a transaction that is always rolled back, so the database is
    /// left exactly as provisioned.
    pub fn smoke_test(&mut self) -> SmokeTestResult {
        let tx = match self.conn.transaction() {
            Ok(tx) => tx,
            Err(e) => {
                return SmokeTestResult {
                    error: Some(e.to_string()),
                    ..Default::default()
                }
            }
        };

        let outcome = (|| -> Result<(i64, i64)> {
            tx.execute(
                "INSERT INTO users (user_id, username, display_name) VALUES (1, 'test_user', 'Test User')",
                [],
            )?;
            let user_count = tx.query_row("SELECT COUNT(*) FROM users", [], |row| row.get(0))?;
            let active_users =
                tx.query_row("SELECT COUNT(*) FROM vw_active_users", [], |row| row.get(0))?;
            Ok((user_count, active_users))
        })();

        if let Err(e) = tx.rollback() {
            tracing::warn!("Failed to roll back smoke test: {}", e);
        }

        match outcome {
            Ok((user_count, active_users)) => SmokeTestResult {
                user_count,
                active_users,
                error: None,
            },
            Err(e) => SmokeTestResult {
                error: Some(e.to_string()),
                ..Default::default()
            },
        }
    }

    /// Close the connection, surfacing any error SQLite reports
    pub fn close(self) -> Result<()> {
        self.conn.close().map_err(|(_, e)| e)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::catalog::{TABLE_NAMES, VIEW_NAMES};

    fn initialized() -> Database {
        let db = Database::in_memory().expect("Failed to create database");
        let summary = db.initialize(JournalMode::Memory);
        assert!(summary.is_clean(), "schema failures: {:?}", summary.failures);
        db
    }

    #[test]
    fn test_database_creation() {
        let db = initialized();
        let inventory = db.inventory().expect("Failed to read inventory");

        for table in TABLE_NAMES {
            assert!(inventory.tables.contains(&table.to_string()), "missing table {}", table);
        }
        for view in VIEW_NAMES {
            assert!(inventory.views.contains(&view.to_string()), "missing view {}", view);
        }
        assert_eq!(inventory.index_count, 41);
    }

    #[test]
    fn test_memory_database_detection() {
        let memory_paths = [":memory:", " :memory: ", ":MEMORY:", " :Memory: "];

        for path in &memory_paths {
            let db = Database::open(path).expect("Failed to create memory database");
            assert!(db.initialize(JournalMode::Memory).is_clean());
        }
    }

    #[test]
    fn test_failed_statement_does_not_stop_execution() {
        let db = Database::in_memory().expect("Failed to create database");
        let summary = db.execute_script(
            "CREATE TABLE first (id INTEGER);
             CREAT TABLE broken (id INTEGER);
             INSERT INTO missing VALUES (1);
             CREATE TABLE second (id INTEGER);",
        );

        assert_eq!(summary.executed, 2);
        assert_eq!(summary.failures.len(), 2);
        assert_eq!(summary.failures[0].index, 2);
        assert_eq!(summary.failures[1].index, 3);
        assert!(summary.failures[1].message.contains("no such table"));
        assert!(db.has_object("table", "second").expect("query sqlite_master"));
    }

    #[test]
    fn test_initialize_twice_is_harmless() {
        let db = initialized();
        let again = db.initialize(JournalMode::Memory);
        assert!(again.is_clean());
    }

    #[test]
    fn test_smoke_test_leaves_no_rows() {
        let mut db = initialized();
        let result = db.smoke_test();

        assert!(result.passed(), "smoke test error: {:?}", result.error);
        assert_eq!(result.user_count, 1);
        assert_eq!(result.active_users, 1);

        let users: i64 = db
            .connection()
            .query_row("SELECT COUNT(*) FROM users", [], |row| row.get(0))
            .expect("Failed to count users");
        assert_eq!(users, 0);
    }

    #[test]
    fn test_smoke_test_reports_missing_schema() {
        let mut db = Database::in_memory().expect("Failed to create database");
        let result = db.smoke_test();
        assert!(!result.passed());
        assert!(result.error.unwrap_or_default().contains("no such table"));
    }
}
