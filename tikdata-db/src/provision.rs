use chrono::Utc;
use std::ffi::OsString;
use std::fs;
use std::path::{Path, PathBuf};

use tikdata_types::{JournalMode, ObjectKind, ProvisionReport, SchemaInventory};

use crate::connection::{is_memory_path, Database};
use crate::error::{ProvisionError, ProvisionResult};
use crate::export;
use crate::schema::catalog::expected_objects;

/// What to provision and where to hand it over
#[derive(Debug, Clone)]
pub struct ProvisionOptions {
    pub database: PathBuf,
    pub journal_mode: JournalMode,
    pub export_dir: Option<PathBuf>,
}

impl Default for ProvisionOptions {
    fn default() -> Self {
        Self {
            database: PathBuf::from("tikData.db"),
            journal_mode: JournalMode::default(),
            export_dir: None,
        }
    }
}

/// Creates a fresh export database: schema, verification, smoke test, export
pub struct Provisioner {
    options: ProvisionOptions,
}

impl Provisioner {
    pub fn new(options: ProvisionOptions) -> Self {
        Self { options }
    }

    pub fn run(&self) -> ProvisionResult<ProvisionReport> {
        let path = self.options.database.as_path();
        let in_memory = is_memory_path(path);
        tracing::info!("Creating database: {}", path.display());

        let removed_existing = !in_memory && remove_existing(path)?;

        let mut db = Database::open(path).map_err(|source| ProvisionError::Open {
            path: path.to_path_buf(),
            source,
        })?;

        tracing::info!("Executing schema...");
        let execution = db.initialize(self.options.journal_mode);
        if execution.is_clean() {
            tracing::info!("Executed {} statements", execution.executed);
        } else {
            tracing::warn!(
                "{} of {} statements failed",
                execution.failures.len(),
                execution.attempted()
            );
        }

        let inventory = db.inventory().map_err(ProvisionError::Inventory)?;
        let missing = missing_objects(&db, &inventory)?;
        for object in &missing {
            tracing::warn!("Expected schema object not created: {}", object);
        }

        if let Err(e) = db.checkpoint() {
            tracing::warn!("WAL checkpoint failed: {}", e);
        }

        tracing::info!("Testing database functionality...");
        let smoke_test = db.smoke_test();
        match &smoke_test.error {
            None => tracing::info!(
                "Test user inserted. Total users: {}, vw_active_users returns: {} rows",
                smoke_test.user_count,
                smoke_test.active_users
            ),
            Some(e) => tracing::warn!("Test error (but database was created): {}", e),
        }

        db.close()?;

        let file_size_bytes = if in_memory {
            0
        } else {
            fs::metadata(path)
                .map_err(|source| ProvisionError::Metadata {
                    path: path.to_path_buf(),
                    source,
                })?
                .len()
        };

        let exported_to = match (&self.options.export_dir, in_memory) {
            (Some(dir), false) => Some(export::deliver(path, dir)?.display().to_string()),
            _ => None,
        };

        Ok(ProvisionReport {
            database: path.display().to_string(),
            journal_mode: self.options.journal_mode,
            generated_at: Utc::now(),
            removed_existing,
            execution,
            inventory,
            missing,
            file_size_bytes,
            smoke_test,
            exported_to,
        })
    }
}

fn sibling(path: &Path, suffix: &str) -> PathBuf {
    let mut name = OsString::from(path.as_os_str());
    name.push(suffix);
    PathBuf::from(name)
}

/// Delete a previous database and its WAL files. Returns whether the main
/// file existed.
fn remove_existing(path: &Path) -> ProvisionResult<bool> {
    let existed = path.exists();

    for file in [path.to_path_buf(), sibling(path, "-wal"), sibling(path, "-shm")] {
        if file.exists() {
            fs::remove_file(&file).map_err(|source| ProvisionError::RemoveExisting {
                path: file.clone(),
                source,
            })?;
            tracing::info!("Removed existing {}", file.display());
        }
    }

    Ok(existed)
}

/// Expected objects absent from the database, as `kind:name`
fn missing_objects(db: &Database, inventory: &SchemaInventory) -> ProvisionResult<Vec<String>> {
    let mut missing = Vec::new();

    for (kind, name) in expected_objects() {
        let present = match kind {
            ObjectKind::Table => inventory.tables.contains(&name),
            ObjectKind::View => inventory.views.contains(&name),
            ObjectKind::Trigger => inventory.triggers.contains(&name),
            ObjectKind::Index => db
                .has_object(kind.as_str(), &name)
                .map_err(ProvisionError::Inventory)?,
        };
        if !present {
            missing.push(format!("{}:{}", kind.as_str(), name));
        }
    }

    Ok(missing)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn options_in(dir: &TempDir) -> ProvisionOptions {
        ProvisionOptions {
            database: dir.path().join("tikData.db"),
            journal_mode: JournalMode::Wal,
            export_dir: None,
        }
    }

    #[test]
    fn test_run_creates_complete_database() {
        let temp = TempDir::new().expect("Failed to create temp dir");
        let report = Provisioner::new(options_in(&temp))
            .run()
            .expect("Provisioning failed");

        assert!(report.execution.is_clean(), "{:?}", report.execution.failures);
        assert!(report.missing.is_empty(), "missing: {:?}", report.missing);
        assert!(!report.removed_existing);
        assert_eq!(report.inventory.views.len(), 12);
        assert_eq!(report.inventory.index_count, 41);
        assert!(report.file_size_bytes > 0);
        assert!(report.smoke_test.passed());
        assert_eq!(report.smoke_test.user_count, 1);
        assert!(report.exported_to.is_none());
    }

    #[test]
    fn test_run_replaces_existing_file() {
        let temp = TempDir::new().expect("Failed to create temp dir");
        let options = options_in(&temp);
        fs::write(&options.database, b"not a database").expect("Failed to write stale file");
        fs::write(sibling(&options.database, "-wal"), b"stale wal").expect("write wal");

        let report = Provisioner::new(options.clone()).run().expect("Provisioning failed");
        assert!(report.removed_existing);
        assert!(report.execution.is_clean());

        // A second run starts again from an empty file
        let again = Provisioner::new(options).run().expect("Second run failed");
        assert!(again.removed_existing);
        assert!(again.missing.is_empty());
    }

    #[test]
    fn test_run_exports_to_directory() {
        let temp = TempDir::new().expect("Failed to create temp dir");
        let mut options = options_in(&temp);
        let downloads = temp.path().join("downloads");
        options.export_dir = Some(downloads.clone());

        let report = Provisioner::new(options).run().expect("Provisioning failed");
        let exported = downloads.join("tikData.db");

        assert_eq!(report.exported_to, Some(exported.display().to_string()));
        let db = Database::open(&exported).expect("open exported copy");
        assert!(db.has_object("table", "users").expect("query sqlite_master"));
    }

    #[test]
    fn test_run_in_memory_skips_file_steps() {
        let options = ProvisionOptions {
            database: PathBuf::from(":memory:"),
            journal_mode: JournalMode::Memory,
            export_dir: Some(PathBuf::from("/nonexistent/never-created")),
        };
        let report = Provisioner::new(options).run().expect("Provisioning failed");

        assert_eq!(report.file_size_bytes, 0);
        assert!(report.exported_to.is_none());
        assert!(!report.removed_existing);
    }

    #[test]
    fn test_sibling_paths() {
        let path = Path::new("/data/tikData.db");
        assert_eq!(sibling(path, "-wal"), PathBuf::from("/data/tikData.db-wal"));
        assert_eq!(sibling(path, "-shm"), PathBuf::from("/data/tikData.db-shm"));
    }
}
