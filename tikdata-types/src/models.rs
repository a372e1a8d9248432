use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::enums::{DataQuality, JournalMode};

// Custom serde module for DateTime to ensure RFC3339 string format
mod datetime_format {
    use chrono::{DateTime, Utc};
    use serde::{self, Deserialize, Deserializer, Serializer};

    pub fn serialize<S>(date: &DateTime<Utc>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&date.to_rfc3339())
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<DateTime<Utc>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse::<DateTime<Utc>>().map_err(serde::de::Error::custom)
    }
}

/// A schema statement that SQLite rejected
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatementFailure {
    /// 1-based position of the statement in the script
    pub index: usize,
    pub message: String,
    /// Leading characters of the statement text
    pub preview: String,
}

/// Outcome of executing a schema script statement by statement
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExecutionSummary {
    pub executed: usize,
    pub failures: Vec<StatementFailure>,
}

impl ExecutionSummary {
    pub fn attempted(&self) -> usize {
        self.executed + self.failures.len()
    }

    pub fn is_clean(&self) -> bool {
        self.failures.is_empty()
    }
}

/// Objects found in `sqlite_master` after provisioning
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SchemaInventory {
    pub tables: Vec<String>,
    pub views: Vec<String>,
    pub triggers: Vec<String>,
    /// Explicit indexes only; `sqlite_autoindex_*` entries are excluded
    pub index_count: usize,
}

/// Result of the insert-and-query check run against a fresh database
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SmokeTestResult {
    pub user_count: i64,
    pub active_users: i64,
    #[serde(default)]
    pub error: Option<String>,
}

impl SmokeTestResult {
    pub fn passed(&self) -> bool {
        self.error.is_none()
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProvisionReport {
    pub database: String,
    pub journal_mode: JournalMode,
    #[serde(with = "datetime_format")]
    pub generated_at: DateTime<Utc>,
    #[serde(default)]
    pub removed_existing: bool,
    pub execution: ExecutionSummary,
    pub inventory: SchemaInventory,
    /// Expected objects absent from the inventory, as `kind:name`
    #[serde(default)]
    pub missing: Vec<String>,
    pub file_size_bytes: u64,
    pub smoke_test: SmokeTestResult,
    #[serde(default)]
    pub exported_to: Option<String>,
}

impl ProvisionReport {
    pub fn file_size_kb(&self) -> f64 {
        self.file_size_bytes as f64 / 1024.0
    }
}

/// One row of `PRAGMA table_info`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColumnInfo {
    pub name: String,
    pub type_name: String,
    pub not_null: bool,
    pub pk: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserDataQuality {
    pub user_id: i64,
    pub username: String,
    pub date_validation_issues: i64,
    pub data_validation_issues: i64,
    pub total_issues: i64,
    pub data_quality: DataQuality,
}

/// Aggregated row of either validation report view
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationReportRow {
    pub table_name: String,
    pub user_id: i64,
    pub username: String,
    pub column_name: String,
    /// `None` for the date report, which has no issue type column
    #[serde(default)]
    pub issue_type: Option<String>,
    pub count: i64,
    #[serde(default)]
    pub sample_values: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_execution_summary_counts() {
        let summary = ExecutionSummary {
            executed: 4,
            failures: vec![StatementFailure {
                index: 2,
                message: "near \"CREAT\": syntax error".to_string(),
                preview: "CREAT TABLE".to_string(),
            }],
        };
        assert_eq!(summary.attempted(), 5);
        assert!(!summary.is_clean());
        assert!(ExecutionSummary::default().is_clean());
    }

    #[test]
    fn test_report_serializes_timestamp_as_rfc3339() {
        let report = ProvisionReport {
            database: "tikData.db".to_string(),
            journal_mode: JournalMode::Wal,
            generated_at: "2024-05-01T12:00:00Z".parse().expect("valid timestamp"),
            removed_existing: false,
            execution: ExecutionSummary::default(),
            inventory: SchemaInventory::default(),
            missing: Vec::new(),
            file_size_bytes: 2048,
            smoke_test: SmokeTestResult::default(),
            exported_to: None,
        };

        let json = serde_json::to_value(&report).expect("serialize report");
        assert_eq!(json["generated_at"], "2024-05-01T12:00:00+00:00");
        assert_eq!(json["journal_mode"], "WAL");
        assert_eq!(report.file_size_kb(), 2.0);

        let back: ProvisionReport = serde_json::from_value(json).expect("deserialize report");
        assert_eq!(back.generated_at, report.generated_at);
    }
}
